use crate::token::GraphQLToken;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// [`GraphQLToken`]).
///
/// Lexers are responsible for:
/// - Skipping ignored tokens (whitespace, commas, comments, BOM)
/// - Emitting [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error)
///   for lexer errors
/// - Emitting a final [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof)
///   token
///
/// All lookahead and buffering is handled by
/// [`GraphQLTokenStream`](crate::GraphQLTokenStream).
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
