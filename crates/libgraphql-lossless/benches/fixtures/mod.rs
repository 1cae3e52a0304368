pub const SCHEMA: &str = include_str!("schema.graphql");
pub const QUERY: &str = include_str!("query.graphql");

pub mod generated;
