use crate::GraphQLErrorNotes;
use std::borrow::Cow;

/// The kind of a GraphQL token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`) store only the
/// raw source text, borrowed from the input.
///
/// Negative numbers like `-123` are lexed as single tokens (e.g.
/// `IntValue("-123")`), matching the grammar for `IntValue`/`FloatValue`.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// A GraphQL name/identifier.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal (e.g. `"-123"`, `"0"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal (e.g. `"-1.23e-4"`).
    FloatValue(Cow<'src, str>),

    /// Raw source text of a string literal, including quotes.
    StringValue(Cow<'src, str>),

    // =========================================================================
    // Boolean and null
    // =========================================================================
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// The `null` literal.
    Null,

    /// End of input.
    Eof,

    /// A lexer error. The parser converts the first one it meets into a
    /// `GraphQLParseError`.
    Error {
        message: String,
        error_notes: GraphQLErrorNotes,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    #[inline]
    pub fn int_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::IntValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn float_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::FloatValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn string_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::StringValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn error(message: impl Into<String>, error_notes: GraphQLErrorNotes) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns the string representation of this token if it is a
    /// punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Ampersand => Some("&"),
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Error { .. } => None,
        }
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        matches!(self, GraphQLTokenKind::Error { .. })
    }

    /// Short human-readable rendering used in "found X" messages.
    pub fn describe(&self) -> String {
        if let Some(punct) = self.as_punctuator_str() {
            return format!("`{punct}`");
        }
        match self {
            GraphQLTokenKind::Name(name) => format!("`{name}`"),
            GraphQLTokenKind::IntValue(raw)
            | GraphQLTokenKind::FloatValue(raw)
            | GraphQLTokenKind::StringValue(raw) => format!("`{raw}`"),
            GraphQLTokenKind::True => "`true`".to_string(),
            GraphQLTokenKind::False => "`false`".to_string(),
            GraphQLTokenKind::Null => "`null`".to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            GraphQLTokenKind::Error { message, .. } => message.clone(),
            _ => "token".to_string(),
        }
    }
}
