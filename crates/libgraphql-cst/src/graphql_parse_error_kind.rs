use crate::GraphQLStringParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// Variants carry only what a tool needs to branch on. The human-readable
/// explanation lives in the owning `GraphQLParseError`'s message and notes.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended in the middle of a production.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer produced an error token. Its message and notes are copied
    /// onto the parse error.
    #[error("lexer error")]
    LexerError,

    /// A `{`, `[` or `(` was never closed.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A construct that must contain at least one item was empty.
    ///
    /// ```text
    /// query { user { } }
    ///              ^^^ selection set cannot be empty
    /// ```
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// A single-line string literal contained an invalid escape sequence.
    #[error("invalid string literal")]
    InvalidString(GraphQLStringParsingError),

    /// A name that has special meaning in this position (`on` as a fragment
    /// name, `true`/`false`/`null` as an enum value).
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
    },

    /// Invalid syntax without a dedicated variant; see the message.
    #[error("invalid syntax")]
    InvalidSyntax,
}
