//! Tests for `GraphQLCstParser` on well-formed documents.

use crate::cst;
use crate::parse;
use crate::ByteSpan;
use crate::MAX_RECURSION_DEPTH;

fn parse_ok(source: &str) -> cst::Document<'_> {
    match parse(source) {
        Ok(document) => document,
        Err(error) => panic!("unexpected parse error: {}", error.format_detailed(Some(source))),
    }
}

fn first_operation<'a>(document: &'a cst::Document<'a>) -> &'a cst::OperationDefinition<'a> {
    match &document.definitions[0] {
        cst::Definition::Operation(op) => op,
        other => panic!("expected operation, found {other:?}"),
    }
}

fn first_field<'a>(selection_set: &'a cst::SelectionSet<'a>) -> &'a cst::Field<'a> {
    match &selection_set.selections[0] {
        cst::Selection::Field(field) => field,
        other => panic!("expected field, found {other:?}"),
    }
}

// =============================================================================
// Documents
// =============================================================================

/// Empty and whitespace-only documents parse to zero definitions; the
/// document span still covers the whole text.
#[test]
fn empty_document() {
    let document = parse_ok("  # only a comment\n");
    assert!(document.definitions.is_empty());
    assert_eq!(document.span, ByteSpan::new(0, 19));
}

/// Executable and type-system definitions may be mixed.
#[test]
fn mixed_document() {
    let document = parse_ok("type Query { a: Int } query { a } fragment F on Query { a }");
    assert_eq!(document.definitions.len(), 3);
    assert!(matches!(document.definitions[0], cst::Definition::Type(_)));
    assert!(matches!(document.definitions[1], cst::Definition::Operation(_)));
    assert!(matches!(document.definitions[2], cst::Definition::Fragment(_)));
}

// =============================================================================
// Spans
// =============================================================================

/// Spans run from the first significant token to the last, excluding
/// surrounding whitespace and comments.
#[test]
fn spans_exclude_surrounding_trivia() {
    let source = "  query Q { a }  # trailing\n";
    let document = parse_ok(source);
    let op = first_operation(&document);
    assert_eq!(op.span.slice(source), Some("query Q { a }"));
    assert_eq!(op.selection_set.span.slice(source), Some("{ a }"));
    let name = op.name.as_ref().map(|n| &*n.value);
    assert_eq!(name, Some("Q"));
}

#[test]
fn field_with_alias_arguments_and_directives() {
    let source = "{ smallPic: profilePic(size: 64, crop: $c) @include(if: true) }";
    let document = parse_ok(source);
    let field = first_field(&first_operation(&document).selection_set);

    let alias = field.alias.as_ref().map(|a| a.span.slice(source));
    assert_eq!(alias, Some(Some("smallPic:")));
    assert_eq!(field.name.value, "profilePic");
    let arguments = field.arguments.as_ref().map(|a| a.arguments.len());
    assert_eq!(arguments, Some(2));
    assert_eq!(field.directives.len(), 1);
    assert_eq!(field.directives[0].span.slice(source), Some("@include(if: true)"));
    assert_eq!(field.to_source(source), &source[2..source.len() - 2]);
}

#[test]
fn variable_definitions_with_default_and_directives() {
    let source = "query($id: [ID!]! = [\"1\"] @deprecated) { a }";
    let document = parse_ok(source);
    let op = first_operation(&document);
    let Some(var_defs) = &op.variable_definitions else {
        panic!("expected variable definitions");
    };
    let def = &var_defs.definitions[0];
    assert_eq!(def.variable.span.slice(source), Some("$id"));
    assert_eq!(def.type_.span().slice(source), Some("[ID!]!"));
    assert!(matches!(def.type_, cst::Type::NonNull { .. }));
    let default_value = def.default_value.as_ref().map(|d| d.span.slice(source));
    assert_eq!(default_value, Some(Some("= [\"1\"]")));
    assert_eq!(def.directives.len(), 1);
}

#[test]
fn fragment_spreads_and_inline_fragments() {
    let source = "{ ...F @skip(if: false) ... on User { id } ... @defer { name } }";
    let document = parse_ok(source);
    let selections = &first_operation(&document).selection_set.selections;
    assert!(matches!(selections[0], cst::Selection::FragmentSpread(_)));
    let cst::Selection::InlineFragment(typed) = &selections[1] else {
        panic!("expected inline fragment");
    };
    let condition = typed.type_condition.as_ref().map(|c| c.span.slice(source));
    assert_eq!(condition, Some(Some("on User")));
    let cst::Selection::InlineFragment(untyped) = &selections[2] else {
        panic!("expected inline fragment");
    };
    assert!(untyped.type_condition.is_none());
    assert_eq!(untyped.directives.len(), 1);
}

#[test]
fn every_value_kind() {
    let source = "{ f(a: $v, b: 1, c: -1.5e3, d: \"s\", e: \"\"\"b\"\"\", g: true, h: null, i: RED, j: [1 2], k: {x: 1}) }";
    let document = parse_ok(source);
    let field = first_field(&first_operation(&document).selection_set);
    let Some(arguments) = &field.arguments else {
        panic!("expected arguments");
    };
    let values: Vec<_> = arguments.arguments.iter().map(|a| &a.value).collect();
    assert!(matches!(values[0], cst::Value::Variable(_)));
    assert!(matches!(values[1], cst::Value::Int(v) if v.raw == "1"));
    assert!(matches!(values[2], cst::Value::Float(v) if v.raw == "-1.5e3"));
    assert!(matches!(values[3], cst::Value::String(v) if !v.block && v.interior() == "s"));
    assert!(matches!(values[4], cst::Value::String(v) if v.block && v.interior() == "b"));
    assert!(matches!(values[5], cst::Value::Boolean(v) if v.value));
    assert!(matches!(values[6], cst::Value::Null(_)));
    assert!(matches!(values[7], cst::Value::Enum(v) if v.name.value == "RED"));
    assert!(matches!(values[8], cst::Value::List(v) if v.values.len() == 2));
    assert!(matches!(values[9], cst::Value::Object(v) if v.fields.len() == 1));
}

/// `true`, `false` and `null` are ordinary names outside value positions.
#[test]
fn keyword_literals_as_field_names() {
    let document = parse_ok("{ true false null }");
    let selections = &first_operation(&document).selection_set.selections;
    assert_eq!(selections.len(), 3);
}

// =============================================================================
// Type system
// =============================================================================

#[test]
fn object_type_with_description_and_implements() {
    let source = "\"\"\"Doc\"\"\" type User implements & Node & Entity @key { id: ID! \"arg doc\" f(x: Int = 1): String }";
    let document = parse_ok(source);
    let cst::Definition::Type(cst::TypeDefinition::Object(object)) = &document.definitions[0] else {
        panic!("expected object type");
    };
    assert_eq!(object.span.start, 0);
    assert!(object.description.as_ref().is_some_and(|d| d.block));

    // Right-recursive: the outermost link holds the last interface.
    let Some(implements) = &object.implements_interfaces else {
        panic!("expected implements");
    };
    assert_eq!(implements.named_type.name.value, "Entity");
    let Some(rest) = &implements.rest else {
        panic!("expected a second link");
    };
    assert_eq!(rest.named_type.name.value, "Node");
    assert!(rest.rest.is_none());
    assert_eq!(implements.span.slice(source), Some("implements & Node & Entity"));

    let fields = object.fields.as_ref().map(|f| f.definitions.len());
    assert_eq!(fields, Some(2));
}

#[test]
fn union_members_are_right_recursive() {
    let source = "union U = | A | B | C";
    let document = parse_ok(source);
    let cst::Definition::Type(cst::TypeDefinition::Union(union_def)) = &document.definitions[0] else {
        panic!("expected union");
    };
    let Some(members) = &union_def.member_types else {
        panic!("expected members");
    };
    assert_eq!(members.named_type.name.value, "C");
    assert_eq!(members.span.slice(source), Some("= | A | B | C"));
}

#[test]
fn directive_definition() {
    let source = "directive @cache(ttl: Int) repeatable on FIELD_DEFINITION | OBJECT";
    let document = parse_ok(source);
    let cst::Definition::Directive(directive) = &document.definitions[0] else {
        panic!("expected directive definition");
    };
    assert_eq!(directive.name.value, "cache");
    assert_eq!(directive.repeatable.and_then(|r| r.slice(source)), Some("repeatable"));
    assert_eq!(directive.locations.location.value, "OBJECT");
    assert_eq!(directive.span.slice(source), Some(source));
}

#[test]
fn schema_definition_and_extensions() {
    let source = "schema { query: Q mutation: M } extend schema @a extend type Q { b: Int } extend union U = X";
    let document = parse_ok(source);
    assert_eq!(document.definitions.len(), 4);
    let cst::Definition::Schema(schema) = &document.definitions[0] else {
        panic!("expected schema");
    };
    let roots = schema.root_operation_types.as_ref().map(|r| r.definitions.len());
    assert_eq!(roots, Some(2));
    let cst::Definition::TypeExtension(ext) = &document.definitions[2] else {
        panic!("expected type extension");
    };
    assert_eq!(ext.span.slice(source), Some("extend type Q { b: Int }"));
    assert_eq!(ext.definition.span().slice(source), Some("type Q { b: Int }"));
}

/// Type-system bodies may be empty braces.
#[test]
fn empty_bodies_are_allowed() {
    let document = parse_ok("type A {} enum E {} input I {}");
    assert_eq!(document.definitions.len(), 3);
}

#[test]
fn enum_and_input_object() {
    let source = "enum Color { \"red\" RED @x GREEN } input P { a: Int = 1 @d b: [String] }";
    let document = parse_ok(source);
    let cst::Definition::Type(cst::TypeDefinition::Enum(enum_def)) = &document.definitions[0] else {
        panic!("expected enum");
    };
    let values = enum_def.values.as_ref().map(|v| v.definitions.len());
    assert_eq!(values, Some(2));
    let cst::Definition::Type(cst::TypeDefinition::InputObject(input)) = &document.definitions[1] else {
        panic!("expected input object");
    };
    let fields = input.fields.as_ref().map(|f| f.definitions.len());
    assert_eq!(fields, Some(2));
}

// =============================================================================
// Nesting limit
// =============================================================================

/// Lists nested as deep as the limit allows parse on the default test
/// thread's stack.
#[test]
fn list_values_nested_to_limit() {
    let depth = MAX_RECURSION_DEPTH - 2;
    let source = format!("{{ a(x: {}1{}) }}", "[".repeat(depth), "]".repeat(depth));
    let document = parse_ok(&source);
    assert_eq!(document.definitions.len(), 1);
}

/// Objects nested as deep as the limit allows parse too.
#[test]
fn object_values_nested_to_limit() {
    let depth = MAX_RECURSION_DEPTH - 2;
    let source = format!("{{ a(x: {}1{}) }}", "{ k: ".repeat(depth), " }".repeat(depth));
    let document = parse_ok(&source);
    assert_eq!(document.definitions.len(), 1);
}

/// Selection sets nested exactly `MAX_RECURSION_DEPTH` deep parse.
#[test]
fn selection_sets_nested_to_limit() {
    let depth = MAX_RECURSION_DEPTH;
    let source = format!("{}b{}", "{ a ".repeat(depth), " }".repeat(depth));
    let document = parse_ok(&source);
    assert_eq!(document.definitions.len(), 1);
}
