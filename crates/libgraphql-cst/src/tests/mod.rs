mod graphql_cst_parser_tests;
mod graphql_string_value_tests;
