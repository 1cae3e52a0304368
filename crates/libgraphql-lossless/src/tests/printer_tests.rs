//! Tests for the printer: byte-exact round trips, the documented
//! normalizations, and printing of edited trees.

use crate::tests::utils::assert_round_trip;
use crate::tests::utils::field;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_ok;
use crate::tree::Definition;
use crate::tree::Marker;
use crate::tree::Markers;
use crate::tree::NodeId;
use crate::tree::Selection;
use crate::tree::Space;
use crate::tree::StringValue;
use crate::tree::TypeDefinition;
use std::sync::Arc;

const SCHEMA_FIXTURE: &str = include_str!("../../benches/fixtures/schema.graphql");
const QUERY_FIXTURE: &str = include_str!("../../benches/fixtures/query.graphql");

// =============================================================================
// Round trips
// =============================================================================

/// Every type-system construct round-trips.
#[test]
fn schema_fixture_round_trips() {
    assert_round_trip(SCHEMA_FIXTURE);
}

/// Every executable construct round-trips.
#[test]
fn query_fixture_round_trips() {
    assert_round_trip(QUERY_FIXTURE);
}

/// Odd but valid spacing: whitespace and comments between every token.
#[test]
fn trivia_between_every_token() {
    assert_round_trip(
        "query # c\n Q ( $ # c\n a : [ Int ! ] ! = [ 1 , 2 ] ) @ d ( x : 1 ) {\n\
         al # c\n : f ( x : $a ) , ... F ... on T { x } }\n",
    );
    assert_round_trip(
        "type\tT implements\r\n& A\r\n& B @ d { f ( a : Int = 1 ) : [ T ! ] ! }",
    );
}

/// Carriage returns, byte-order marks and commas in unusual places.
#[test]
fn unusual_whitespace() {
    assert_round_trip("\u{FEFF}{ a }");
    assert_round_trip("{\r\n  a,,,\r\n  b\r\n}\r\n");
    assert_round_trip(",,{a},,");
}

/// Arguments, union members and leading comments print back exactly.
#[test]
fn arguments_unions_and_comments_round_trip() {
    assert_round_trip(r#"query { user(id: "1", name: "a") { id } }"#);
    assert_round_trip("union R = A | B | C");
    assert_round_trip("# hi\ntype User { id: ID }");
    assert_round_trip("query { a(x: 1,y: 2) }");
}

/// Canonically escaped strings and block strings are unchanged.
#[test]
fn strings_round_trip() {
    assert_round_trip(r#"{ a(s: "quote \" backslash \\ tab \t nl \n") }"#);
    assert_round_trip("{ a(s: \"\"\"\n  block \\\"\"\" with \"quotes\"\n\"\"\") }");
    assert_round_trip("{ a(s: \"ünïcödé 🎉\") }");
}

// =============================================================================
// Normalizations
// =============================================================================

/// The inside of an empty body is not kept; it prints as `{}`.
#[test]
fn empty_body_prints_canonically() {
    let document = parse_ok("type T implements A&B {\n}");
    assert_eq!(crate::print(&document), "type T implements A&B {}");

    let document = parse_ok("enum E { }\ninput I {\n\n}");
    assert_eq!(crate::print(&document), "enum E {}\ninput I {}");
}

/// Non-canonical escapes print in their canonical form.
#[test]
fn string_escapes_print_canonically() {
    let document = parse_ok(r#"{ a(s: "\u0041\/\u{1F389}\b") }"#);
    assert_eq!(crate::print(&document), "{ a(s: \"A/🎉\\b\") }");
}

/// Printing is idempotent once normalized.
#[test]
fn printing_is_idempotent() {
    let once = crate::print(&parse_ok("enum E {\n}\n{ a(s: \"\\u0041\") }"));
    let twice = crate::print(&parse_ok(&once));
    assert_eq!(once, twice);
}

// =============================================================================
// Edited trees
// =============================================================================

/// Replacing a name keeps all surrounding formatting.
#[test]
fn renamed_field() {
    let mut document = parse_ok("{\n  old # keep me\n}");
    let Definition::Operation(op) = &mut document.definitions[0] else {
        panic!("expected operation");
    };
    let Selection::Field(f) = &mut op.selection_set.selections[0].element else {
        panic!("expected field");
    };
    f.name = f.name.clone().with_value("new");
    assert_eq!(crate::print(&document), "{\n  new # keep me\n}");
}

/// `with_prefix` replaces only the leading formatting of a node.
#[test]
fn replaced_prefix() {
    let document = parse_ok("# old\nscalar S");
    let definitions = document
        .definitions
        .iter()
        .cloned()
        .map(|def| def.with_prefix(Space::whitespace("\n")))
        .collect();
    let document = document.with_definitions(definitions);
    assert_eq!(crate::print(&document), "\nscalar S");
}

/// Node-level printing includes the node's own prefix.
#[test]
fn node_to_source() {
    let document = parse_ok("query  { a  b(x: 1) }");
    let op = only_operation(&document);
    let b = field(&op.selection_set.selections[1].element);
    assert_eq!(b.to_source(), "b(x: 1)");
    assert_eq!(op.selection_set.selections[0].after.to_source(), "  ");
    assert_eq!(op.selection_set.to_source(), "  { a  b(x: 1) }");
}

/// A shorthand query's selection set starts the document, so it has no
/// prefix of its own.
#[test]
fn shorthand_selection_set_to_source() {
    let document = parse_ok("{ a  b(x: 1) }");
    let op = only_operation(&document);
    assert!(op.selection_set.prefix.is_empty());
    assert_eq!(op.selection_set.to_source(), "{ a  b(x: 1) }");
}

/// Replacing the space after a list element changes only that separator.
#[test]
fn replaced_separator() {
    let mut document = parse_ok("{ a, b }");
    let Definition::Operation(op) = &mut document.definitions[0] else {
        panic!("expected operation");
    };
    let first = op.selection_set.selections[0].clone();
    op.selection_set.selections[0] = first.with_after(Space::whitespace("\n  "));
    assert_eq!(crate::print(&document), "{ a\n  b }");
}

/// `with_eof` replaces the trailing text of a document.
#[test]
fn replaced_eof() {
    let document = parse_ok("{ a }\n# end\n");
    assert_eq!(document.eof.comments.len(), 1);
    let document = document.with_eof(Space::whitespace("\n"));
    assert_eq!(crate::print(&document), "{ a }\n");
}

/// Swapping argument values keeps the separators where they were.
#[test]
fn swapped_arguments() {
    let mut document = parse_ok("{ a(x: 1,  y: 2) }");
    let Definition::Operation(op) = &mut document.definitions[0] else {
        panic!("expected operation");
    };
    let Selection::Field(f) = &mut op.selection_set.selections[0].element else {
        panic!("expected field");
    };
    let Some(arguments) = f.arguments.take() else {
        panic!("expected arguments");
    };
    let [x, y] = [&arguments.elements[0], &arguments.elements[1]];
    let swapped = vec![
        x.clone().with_element(y.element.clone()),
        y.clone().with_element(x.element.clone()),
    ];
    f.arguments = Some(arguments.with_elements(swapped));
    assert_eq!(crate::print(&document), "{ a(y: 2,  x: 1) }");
}

/// `with_before` on a left-padded value moves the space around its `:`.
#[test]
fn replaced_space_before_colon() {
    let mut document = parse_ok("{ a(x: 1) }");
    let Definition::Operation(op) = &mut document.definitions[0] else {
        panic!("expected operation");
    };
    let Selection::Field(f) = &mut op.selection_set.selections[0].element else {
        panic!("expected field");
    };
    let Some(arguments) = f.arguments.as_mut() else {
        panic!("expected arguments");
    };
    let argument = &mut arguments.elements[0].element;
    argument.value = argument.value.clone().with_before(Space::whitespace(" "));
    assert_eq!(crate::print(&document), "{ a(x : 1) }");
}

#[derive(Debug)]
struct Reviewed;

impl Marker for Reviewed {
    fn name(&self) -> &str {
        "reviewed"
    }
}

/// Markers ride along on a node without affecting its text.
#[test]
fn markers_do_not_print() {
    let document = parse_ok("  scalar S");
    let markers = Markers::empty().with_marker(Arc::new(Reviewed));
    let definition = document.definitions[0].clone().with_markers(markers);

    assert!(definition.markers().find("reviewed").is_some());
    assert!(definition.markers().find("other").is_none());
    assert_eq!(definition.markers().len(), 1);
    assert_eq!(definition.to_source(), "  scalar S");
}

/// Built-from-scratch strings are escaped.
#[test]
fn new_string_value_is_escaped() {
    let value = StringValue {
        id: NodeId::random(),
        prefix: Space::whitespace(" "),
        markers: Markers::empty(),
        value: "say \"hi\"\n\u{1}".to_string(),
        block: false,
    };
    assert_eq!(value.to_source(), " \"say \\\"hi\\\"\\n\\u0001\"");
}

/// Type definitions print through the enum as well as directly.
#[test]
fn type_definition_enum_printing() {
    let document = parse_ok("  union U = | A");
    let Definition::Type(definition) = &document.definitions[0] else {
        panic!("expected type definition");
    };
    assert!(matches!(definition, TypeDefinition::Union(_)));
    assert_eq!(definition.keyword(), "union");
    assert_eq!(definition.to_source(), "  union U = | A");
}
