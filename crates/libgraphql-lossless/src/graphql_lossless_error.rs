use crate::TreeBuildError;
use libgraphql_cst::GraphQLParseError;

/// Error returned by [`parse`](crate::parse) and
/// [`parse_source`](crate::parse_source).
#[derive(Clone, Debug, thiserror::Error)]
pub enum GraphQLLosslessError {
    /// The text is not a syntactically valid GraphQL document.
    #[error(transparent)]
    Parse(#[from] GraphQLParseError),

    /// The concrete parse tree did not line up with its source text.
    #[error("failed to build lossless tree: {0}")]
    Build(#[from] TreeBuildError),
}
