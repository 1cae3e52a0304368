/// A position in source text, with dual column tracking.
///
/// **All values are 0-based.** `col_utf8` counts characters on the current
/// line; `col_utf16` counts UTF-16 code units (what LSP clients expect) and
/// is `None` when a token source cannot compute it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: Option<usize>,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: Option<usize>,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// The position of the first byte of a document.
    pub fn origin() -> Self {
        Self::new(0, 0, Some(0), 0)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character column within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit column within the current line,
    /// if the token source tracked it.
    pub fn col_utf16(&self) -> Option<usize> {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from the start of the document.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
