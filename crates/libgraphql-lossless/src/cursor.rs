use crate::TreeBuildError;

/// Byte offset of the first source byte the tree builder has not consumed
/// yet.
///
/// The offset only ever moves forward.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    offset: usize,
}

impl Cursor {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the cursor to `offset`. Staying in place is allowed; moving
    /// backwards is a [`TreeBuildError::CursorRegression`].
    pub fn advance_to(&mut self, offset: usize) -> Result<(), TreeBuildError> {
        if offset < self.offset {
            return Err(TreeBuildError::CursorRegression {
                from: self.offset,
                to: offset,
            });
        }
        self.offset = offset;
        Ok(())
    }
}
