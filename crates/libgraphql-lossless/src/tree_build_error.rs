use libgraphql_cst::GraphQLStringParsingError;

/// A mismatch between the concrete parse tree and the source text it was
/// supposedly parsed from.
///
/// These never describe a problem with the GraphQL document itself; syntax
/// errors are reported by the grammar before building starts.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TreeBuildError {
    /// Fixed punctuation or a keyword was not the next significant text.
    #[error("expected `{expected}` at byte offset {offset}")]
    MissingToken {
        expected: String,
        offset: usize,
    },

    /// Something tried to move the cursor backwards.
    #[error("cursor regression from byte offset {from} to {to}")]
    CursorRegression {
        from: usize,
        to: usize,
    },

    /// A span reached past the end of the source, or split a character.
    #[error(
        "span {start}..{end} is out of bounds for a source of {source_len} \
        bytes"
    )]
    SpanOutOfBounds {
        start: usize,
        end: usize,
        source_len: usize,
    },

    #[error("unknown directive location: `{name}`")]
    UnknownDirectiveLocation {
        name: String,
    },

    #[error("unknown operation type: `{keyword}`")]
    UnknownOperationType {
        keyword: String,
    },

    #[error("invalid string literal at byte offset {offset}: {error}")]
    InvalidString {
        offset: usize,
        #[source]
        error: GraphQLStringParsingError,
    },
}
