use crate::tree;
use crate::tree::Definition;

pub(super) fn parse_ok(source: &str) -> tree::Document {
    match crate::parse(source) {
        Ok(document) => document,
        Err(error) => panic!("unexpected error for {source:?}: {error}"),
    }
}

/// Asserts that printing the parsed `source` reproduces it exactly.
pub(super) fn assert_round_trip(source: &str) {
    let printed = crate::print(&parse_ok(source));
    assert_eq!(printed, source);
}

pub(super) fn only_operation(document: &tree::Document) -> &tree::OperationDefinition {
    assert_eq!(document.definitions.len(), 1);
    match &document.definitions[0] {
        Definition::Operation(op) => op,
        other => panic!("expected operation, found {other:?}"),
    }
}

pub(super) fn only_type_definition(document: &tree::Document) -> &tree::TypeDefinition {
    assert_eq!(document.definitions.len(), 1);
    match &document.definitions[0] {
        Definition::Type(def) => def,
        other => panic!("expected type definition, found {other:?}"),
    }
}

pub(super) fn field(selection: &tree::Selection) -> &tree::Field {
    match selection {
        tree::Selection::Field(field) => field,
        other => panic!("expected field, found {other:?}"),
    }
}
