//! A GraphQL lexer and recursive-descent grammar that produces a concrete
//! parse tree.
//!
//! Every production in [`cst`] carries the [`ByteSpan`] of the source text
//! it was parsed from, which is what lossless tooling needs in order to
//! recover the whitespace and comments between productions.

mod byte_span;
pub mod cst;
mod graphql_cst_parser;
mod graphql_error_note;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_source_span;
mod graphql_string_value;
mod graphql_token_stream;
mod source_position;
pub mod token;
pub mod token_source;

pub use byte_span::ByteSpan;
pub use graphql_cst_parser::GraphQLCstParser;
pub use graphql_cst_parser::DIRECTIVE_LOCATIONS;
pub use graphql_cst_parser::MAX_RECURSION_DEPTH;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNoteKind;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_value::cook_single_line_string;
pub use graphql_string_value::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use source_position::SourcePosition;

/// Parses `source` into a concrete parse tree.
pub fn parse(source: &str) -> Result<cst::Document<'_>, GraphQLParseError> {
    GraphQLCstParser::new(source).parse_document()
}

#[cfg(test)]
mod tests;
