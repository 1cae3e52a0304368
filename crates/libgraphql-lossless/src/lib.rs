//! A format-preserving GraphQL parser and printer.
//!
//! [`parse`] turns GraphQL text into a lossless [`tree::Document`] whose
//! nodes keep every byte of whitespace, every comment and every separator
//! of the original text. [`print`] turns such a tree back into text. For
//! any valid document `print(&parse(s)?) == s`, with two documented
//! exceptions: single-line strings are re-escaped canonically, and the
//! inside of an empty `{ }`/`[ ]`/`( )` body prints without its whitespace.

mod cursor;
mod graphql_lossless_error;
mod parse_input;
mod printer;
pub mod tree;
mod tree_build_error;
mod tree_builder;

pub use cursor::Cursor;
pub use graphql_lossless_error::GraphQLLosslessError;
pub use parse_input::ParseInput;
pub use printer::print;
pub use printer::GraphQLPrint;
pub use tree_build_error::TreeBuildError;
pub use tree_builder::TreeBuilder;

use libgraphql_cst::GraphQLCstParser;

/// Parses `source` into a lossless tree.
pub fn parse(source: &str) -> Result<tree::Document, GraphQLLosslessError> {
    parse_source(ParseInput::new(source))
}

/// Parses the text described by `input` into a lossless tree.
///
/// Syntax errors are reported before any tree building starts.
pub fn parse_source(
    input: ParseInput<'_>,
) -> Result<tree::Document, GraphQLLosslessError> {
    log::debug!(
        "parsing {} bytes from {}",
        input.source.len(),
        input.path().map_or("<input>".into(), |path| path.display().to_string()),
    );

    let concrete = match input.path() {
        Some(path) => {
            GraphQLCstParser::with_file_path(input.source, path).parse_document()?
        },
        None => GraphQLCstParser::new(input.source).parse_document()?,
    };
    let document = TreeBuilder::new(input.source).build(
        &concrete,
        input.path.clone().unwrap_or_default(),
        input.charset.clone(),
    )?;

    log::debug!(
        "built lossless tree with {} definitions",
        document.definitions.len(),
    );
    Ok(document)
}

#[cfg(test)]
mod tests;
