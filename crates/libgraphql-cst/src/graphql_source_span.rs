use crate::ByteSpan;
use crate::SourcePosition;
use std::path::PathBuf;

/// A span of source text with line/column information, used for
/// diagnostics.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// Concrete parse tree productions carry the cheaper [`ByteSpan`]; this type
/// is reserved for tokens and errors where humans need line numbers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
    /// The file the span points into, if known.
    pub file_path: Option<PathBuf>,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: None,
        }
    }

    pub fn with_file(
        start: SourcePosition,
        end: SourcePosition,
        file_path: PathBuf,
    ) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: Some(file_path),
        }
    }

    /// A zero-width span located at `position`.
    pub fn empty_at(
        position: SourcePosition,
        file_path: Option<PathBuf>,
    ) -> Self {
        Self {
            start_inclusive: position.clone(),
            end_exclusive: position,
            file_path,
        }
    }

    /// Drops line/column and path information, keeping byte offsets.
    pub fn byte_span(&self) -> ByteSpan {
        ByteSpan::from_offsets(
            self.start_inclusive.byte_offset(),
            self.end_exclusive.byte_offset(),
        )
    }

    /// The file name used when rendering diagnostics.
    pub(crate) fn display_file_name(&self) -> String {
        self.file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }
}
