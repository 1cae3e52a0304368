use crate::token::GraphQLTokenKind;
use crate::GraphQLSourceSpan;

/// A GraphQL token with its source location.
///
/// Ignored tokens (whitespace, commas, comments, BOM) are never emitted.
/// Consumers that need the text between tokens slice the source using the
/// byte offsets carried by `span`.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    /// The kind of token (including `Error` for lexer errors).
    pub kind: GraphQLTokenKind<'src>,

    /// The source location of this token.
    pub span: GraphQLSourceSpan,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(kind: GraphQLTokenKind<'src>, span: GraphQLSourceSpan) -> Self {
        Self { kind, span }
    }
}
