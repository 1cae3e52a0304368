/// Compact byte-offset span attached to every concrete parse tree
/// production.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// source text. Both offsets are 0-based and always fall on token
/// boundaries (and therefore on `char` boundaries).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ByteSpan {
    /// Byte offset of the first byte of the production (inclusive).
    pub start: u32,
    /// Byte offset one past the last byte of the production (exclusive).
    pub end: u32,
}

impl ByteSpan {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Builds a span from `usize` offsets as produced by `str` indexing.
    pub fn from_offsets(start: usize, end: usize) -> Self {
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// The start offset, usable for slicing the source text.
    pub fn start_offset(&self) -> usize {
        self.start as usize
    }

    /// The end offset, usable for slicing the source text.
    pub fn end_offset(&self) -> usize {
        self.end as usize
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the slice of `source` covered by this span, or `None` if the
    /// span does not lie within `source`.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start_offset()..self.end_offset())
    }
}
