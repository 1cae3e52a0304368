use crate::GraphQLSourceSpan;
use smallvec::SmallVec;

/// How an error note is rendered (`= note:`, `= help:`, `= spec:`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLErrorNoteKind {
    /// Context about the error, e.g. where a delimiter was opened.
    General,

    /// An actionable suggestion, e.g. "did you mean `FIELD`?".
    Help,

    /// A link into the GraphQL specification.
    Spec,
}

impl GraphQLErrorNoteKind {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            GraphQLErrorNoteKind::General => "note",
            GraphQLErrorNoteKind::Help => "help",
            GraphQLErrorNoteKind::Spec => "spec",
        }
    }
}

/// An additional note attached to a lexer or parser error.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,
    /// Optional related location, rendered with its own snippet.
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    pub fn general_with_span(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Spec,
            message: url.into(),
            span: None,
        }
    }
}

/// Most errors carry zero to two notes, so these stay inline.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
