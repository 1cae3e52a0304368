//! Tests for `TreeBuilder`: the structure and paddings of built trees.

use crate::parse_source;
use crate::tests::utils::assert_round_trip;
use crate::tests::utils::field;
use crate::tests::utils::only_operation;
use crate::tests::utils::only_type_definition;
use crate::tests::utils::parse_ok;
use crate::tree::Comment;
use crate::tree::Definition;
use crate::tree::DirectiveLocationKind;
use crate::tree::OperationType;
use crate::tree::Space;
use crate::tree::Type;
use crate::tree::TypeDefinition;
use crate::tree::Value;
use crate::GraphQLLosslessError;
use crate::ParseInput;
use crate::TreeBuildError;
use crate::TreeBuilder;
use libgraphql_cst::GraphQLParseErrorKind;

fn ws(whitespace: &str) -> Space {
    Space::whitespace(whitespace)
}

// =============================================================================
// Operations
// =============================================================================

/// An explicit `query` with one field and two arguments keeps the comma
/// and space between the arguments on the first argument's padding.
#[test]
fn query_with_arguments() {
    let source = r#"query { user(id: "1", name: "a") { id } }"#;
    let document = parse_ok(source);
    let op = only_operation(&document);
    assert_eq!(op.operation_type, Some(OperationType::Query));
    assert!(op.name.is_none());
    assert_eq!(op.selection_set.prefix, ws(" "));

    assert_eq!(op.selection_set.selections.len(), 1);
    let user = field(&op.selection_set.selections[0].element);
    assert_eq!(user.name.value, "user");
    assert_eq!(user.prefix, ws(" "));

    let arguments = user.arguments.as_ref().unwrap();
    assert_eq!(arguments.len(), 2);
    assert_eq!(arguments.elements[0].element.name.value, "id");
    assert_eq!(arguments.elements[0].after, ws(", "));
    assert_eq!(arguments.elements[1].element.name.value, "name");
    assert_eq!(arguments.elements[1].after, Space::empty());
    assert_eq!(arguments.elements[1].element.value.before, Space::empty());
    assert_eq!(arguments.elements[1].element.value.element.prefix(), &ws(" "));

    assert_round_trip(source);
}

/// A comma with no following space survives as the argument's padding.
#[test]
fn comma_without_space() {
    let source = "query { a(x: 1,y: 2) }";
    let document = parse_ok(source);
    let a = field(&only_operation(&document).selection_set.selections[0].element);
    let arguments = a.arguments.as_ref().unwrap();
    assert_eq!(arguments.elements[0].after, ws(","));
    assert_eq!(arguments.elements[1].element.prefix, Space::empty());
    assert_round_trip(source);
}

/// The query shorthand has no operation type and no space before `{`
/// beyond the operation's own prefix.
#[test]
fn query_shorthand() {
    let document = parse_ok("\n{ a }");
    let op = only_operation(&document);
    assert!(op.operation_type.is_none());
    assert_eq!(op.prefix, ws("\n"));
    assert_eq!(op.selection_set.prefix, Space::empty());
}

/// Aliases pad the space before the colon; the name holds the space after.
#[test]
fn field_alias() {
    let document = parse_ok("{ short :  long }");
    let f = field(&only_operation(&document).selection_set.selections[0].element);
    let alias = f.alias.as_ref().unwrap();
    assert_eq!(alias.element.value, "short");
    assert_eq!(alias.after, ws(" "));
    assert_eq!(f.name.prefix, ws("  "));
    assert_eq!(f.response_key(), "short");
}

/// Variable definitions keep their type wrappers, default values and
/// directives in order.
#[test]
fn variable_definitions() {
    let source = "query Q($a : [Int!]! = [1, 2] @d, $b: String) { f(x: $a) }";
    let document = parse_ok(source);
    let op = only_operation(&document);
    assert_eq!(op.name.as_ref().unwrap().value, "Q");

    let definitions = op.variable_definitions.as_ref().unwrap();
    assert_eq!(definitions.before, Space::empty());
    let a = &definitions.elements[0].element;
    assert_eq!(a.variable.name.value, "a");
    assert_eq!(a.type_.before, ws(" "));
    assert_eq!(definitions.elements[0].after, ws(", "));

    let Type::NonNull(outer) = &a.type_.element else {
        panic!("expected non-null type");
    };
    let Type::List(list) = outer.type_.element.as_ref() else {
        panic!("expected list type");
    };
    assert!(matches!(list.type_.element.as_ref(), Type::NonNull(_)));
    assert_eq!(a.type_.element.innermost_named_type().name.value, "Int");

    let default_value = a.default_value.as_ref().unwrap();
    assert_eq!(default_value.before, ws(" "));
    let Value::List(list_value) = &default_value.element else {
        panic!("expected list value");
    };
    assert_eq!(list_value.values.len(), 2);
    assert_eq!(list_value.values[0].after, ws(", "));
    assert_eq!(a.directives.len(), 1);

    assert_round_trip(source);
}

/// Fragment spreads, inline fragments and fragment definitions.
#[test]
fn fragments() {
    let source = "{ ...F @d ... on T { a } ... @skip(if: true) { b } }\n\
                  fragment F on T { c }";
    let document = parse_ok(source);
    assert_eq!(document.definitions.len(), 2);

    let Definition::Fragment(fragment) = &document.definitions[1] else {
        panic!("expected fragment definition");
    };
    assert_eq!(fragment.prefix, ws("\n"));
    assert_eq!(fragment.name.value, "F");
    assert_eq!(fragment.type_condition.prefix, ws(" "));
    assert_eq!(fragment.type_condition.named_type.name.value, "T");

    assert_round_trip(source);
}

// =============================================================================
// Values
// =============================================================================

/// Numbers keep their exact spelling.
#[test]
fn number_spelling_is_kept() {
    let source = "{ a(f: 1.0e10, g: -0.5E-3, i: -0) }";
    let document = parse_ok(source);
    let a = field(&only_operation(&document).selection_set.selections[0].element);
    let arguments = a.arguments.as_ref().unwrap();
    let Value::Float(f) = &arguments.elements[0].element.value.element else {
        panic!("expected float");
    };
    assert_eq!(f.raw, "1.0e10");
    let Value::Int(i) = &arguments.elements[2].element.value.element else {
        panic!("expected int");
    };
    assert_eq!(i.raw, "-0");
    assert_round_trip(source);
}

/// Single-line strings are decoded; block strings keep their raw interior.
#[test]
fn string_values() {
    let source = r#"{ a(s: "x\tyA", b: """ raw \n """) }"#;
    let document = parse_ok(source);
    let a = field(&only_operation(&document).selection_set.selections[0].element);
    let arguments = a.arguments.as_ref().unwrap();

    let Value::String(s) = &arguments.elements[0].element.value.element else {
        panic!("expected string");
    };
    assert_eq!(s.value, "x\tyA");
    assert!(!s.block);

    let Value::String(b) = &arguments.elements[1].element.value.element else {
        panic!("expected string");
    };
    assert_eq!(b.value, r" raw \n ");
    assert!(b.block);
}

/// Object values pad each field, and nested values keep their own
/// prefixes.
#[test]
fn object_values() {
    let source = "{ a(o: { x: 1 ,y: [ true null ENUM ] }) }";
    let document = parse_ok(source);
    let a = field(&only_operation(&document).selection_set.selections[0].element);
    let arguments = a.arguments.as_ref().unwrap();
    let Value::Object(object) = &arguments.elements[0].element.value.element else {
        panic!("expected object");
    };
    assert_eq!(object.fields.len(), 2);
    assert_eq!(object.fields[0].element.prefix, ws(" "));
    assert_eq!(object.fields[0].after, ws(" ,"));
    assert_eq!(object.fields[1].after, ws(" "));

    let Value::List(list) = &object.fields[1].element.value.element else {
        panic!("expected list");
    };
    assert!(matches!(list.values[0].element, Value::Boolean(_)));
    assert!(matches!(list.values[1].element, Value::Null(_)));
    let Value::Enum(enum_value) = &list.values[2].element else {
        panic!("expected enum value");
    };
    assert_eq!(enum_value.name.value, "ENUM");
    assert_eq!(list.values[2].after, ws(" "));

    assert_round_trip(source);
}

// =============================================================================
// Comments and end of file
// =============================================================================

/// A leading comment's newline is part of the comment's suffix, not of
/// the following definition's whitespace.
#[test]
fn leading_comment_suffix() {
    let document = parse_ok("# hi\ntype User { id: ID }");
    let definition = only_type_definition(&document);
    let prefix = definition.prefix();
    assert_eq!(prefix.whitespace, "");
    assert_eq!(
        prefix.comments,
        vec![Comment {
            text: " hi".to_string(),
            suffix: "\n".to_string(),
        }],
    );
}

/// Whatever follows the last definition ends up in `eof`.
#[test]
fn trailing_text_is_eof() {
    let document = parse_ok("{ a }\n\n# end\n");
    assert_eq!(document.eof.whitespace, "\n\n");
    assert_eq!(document.eof.comments.len(), 1);
    assert_eq!(document.eof.comments[0].text, " end");
}

/// A document without definitions keeps all of its text in `eof`.
#[test]
fn empty_document() {
    let document = parse_ok("  # nothing here\n");
    assert!(document.definitions.is_empty());
    assert_eq!(document.eof.whitespace, "  ");
    assert_round_trip("  # nothing here\n");
}

/// Comments inside lists attach to the padding they appear in.
#[test]
fn comment_inside_arguments() {
    let source = "{ a(x: 1 # first\n  y: 2) }";
    let document = parse_ok(source);
    let a = field(&only_operation(&document).selection_set.selections[0].element);
    let after = &a.arguments.as_ref().unwrap().elements[0].after;
    assert_eq!(after.whitespace, " ");
    assert_eq!(after.comments[0].text, " first");
    assert_eq!(after.comments[0].suffix, "\n  ");
    assert_round_trip(source);
}

// =============================================================================
// Type system
// =============================================================================

/// Union members are padded with the `|` separators between them.
#[test]
fn union_members() {
    let source = "union R = A | B | C";
    let document = parse_ok(source);
    let TypeDefinition::Union(union) = only_type_definition(&document) else {
        panic!("expected union");
    };
    let members = union.member_types.as_ref().unwrap();
    assert_eq!(members.before, ws(" "));
    assert_eq!(members.len(), 3);
    let names: Vec<_> = members.iter().map(|m| m.name.value.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert_eq!(members.elements[0].after, ws(" | "));
    assert_eq!(members.elements[1].after, ws(" | "));
    assert_eq!(members.elements[2].after, Space::empty());
    assert_round_trip(source);
}

/// A leading `|` is folded into the first member's prefix.
#[test]
fn union_leading_separator() {
    let source = "union R =\n  | A\n  | B";
    let document = parse_ok(source);
    let TypeDefinition::Union(union) = only_type_definition(&document) else {
        panic!("expected union");
    };
    let members = union.member_types.as_ref().unwrap();
    assert_eq!(members.elements[0].element.prefix, ws("\n  | "));
    assert_eq!(members.elements[0].after, ws("\n  | "));
    assert_round_trip(source);
}

/// Implemented interfaces keep the exact spacing around `&`.
#[test]
fn implements_interfaces() {
    let document = parse_ok("type T implements A&B {\n}");
    let TypeDefinition::Object(object) = only_type_definition(&document) else {
        panic!("expected object type");
    };
    let interfaces = object.implements_interfaces.as_ref().unwrap();
    assert_eq!(interfaces.before, ws(" "));
    assert_eq!(interfaces.elements[0].element.name.value, "A");
    assert_eq!(interfaces.elements[0].element.prefix, ws(" "));
    assert_eq!(interfaces.elements[0].after, ws("&"));
    assert_eq!(interfaces.elements[1].element.name.value, "B");
    assert_eq!(interfaces.elements[1].element.prefix, Space::empty());
    assert!(object.fields.as_ref().unwrap().is_empty());
}

/// A description's padding runs up to the keyword or name it describes.
#[test]
fn descriptions() {
    let source = "\"\"\"doc\"\"\"\ntype T {\n  \"f doc\" f(\"a doc\" a: Int): Int\n}";
    let document = parse_ok(source);
    let TypeDefinition::Object(object) = only_type_definition(&document) else {
        panic!("expected object type");
    };
    let description = object.description.as_ref().unwrap();
    assert_eq!(description.element.value, "doc");
    assert!(description.element.block);
    assert_eq!(description.after, ws("\n"));
    assert_eq!(object.name.prefix, ws(" "));

    let f = &object.fields.as_ref().unwrap().elements[0].element;
    assert_eq!(f.prefix, ws("\n  "));
    let f_description = f.description.as_ref().unwrap();
    assert_eq!(f_description.element.value, "f doc");
    assert_eq!(f_description.after, ws(" "));
    assert_eq!(f.name.prefix, Space::empty());

    let a = &f.arguments.as_ref().unwrap().elements[0].element;
    assert_eq!(a.description.as_ref().unwrap().element.value, "a doc");

    assert_round_trip(source);
}

/// Enum and input object bodies.
#[test]
fn enums_and_inputs() {
    let source = "enum E { A, B @deprecated }\ninput I { a: Int = 1 @d, b: [E] }";
    let document = parse_ok(source);
    let Definition::Type(TypeDefinition::Enum(enum_type)) = &document.definitions[0] else {
        panic!("expected enum");
    };
    let values = enum_type.values.as_ref().unwrap();
    assert_eq!(values.elements[0].after, ws(", "));
    assert_eq!(values.elements[1].element.directives.len(), 1);

    let Definition::Type(TypeDefinition::InputObject(input)) = &document.definitions[1] else {
        panic!("expected input object");
    };
    let fields = input.fields.as_ref().unwrap();
    assert_eq!(fields.len(), 2);
    assert!(fields.elements[0].element.default_value.is_some());

    assert_round_trip(source);
}

/// Directive definitions record the space before `@`, `repeatable` and
/// `on`, and their locations in source order.
#[test]
fn directive_definition() {
    let source = "directive  @d(a: Int) repeatable on FIELD | QUERY";
    let document = parse_ok(source);
    let Definition::Directive(directive) = &document.definitions[0] else {
        panic!("expected directive definition");
    };
    assert_eq!(directive.name.before, ws("  "));
    assert_eq!(directive.name.element.value, "d");
    assert!(directive.is_repeatable());
    assert_eq!(directive.repeatable, Some(ws(" ")));
    assert_eq!(directive.locations.before, ws(" "));
    let locations: Vec<_> = directive.locations.iter().map(|l| l.location).collect();
    assert_eq!(locations, [DirectiveLocationKind::Field, DirectiveLocationKind::Query]);
    assert_round_trip(source);
}

/// Eight of the nineteen locations belong to executable documents.
#[test]
fn directive_location_kinds() {
    let executable = DirectiveLocationKind::ALL
        .iter()
        .filter(|kind| kind.is_executable())
        .count();
    assert_eq!(executable, 8);
    assert!(!DirectiveLocationKind::FieldDefinition.is_executable());
    assert_eq!(
        DirectiveLocationKind::from_name("INPUT_FIELD_DEFINITION"),
        Some(DirectiveLocationKind::InputFieldDefinition),
    );
    assert_eq!(DirectiveLocationKind::from_name("FEILD"), None);
}

/// Schema definitions and extensions.
#[test]
fn schema_and_extensions() {
    let source = "schema { query: Q mutation : M }\n\
                  extend schema @d\n\
                  extend  type T @d";
    let document = parse_ok(source);

    let Definition::Schema(schema) = &document.definitions[0] else {
        panic!("expected schema definition");
    };
    let root_types = schema.root_operation_types.as_ref().unwrap();
    assert_eq!(root_types.len(), 2);
    assert_eq!(root_types.elements[1].element.operation_type, OperationType::Mutation);
    assert_eq!(root_types.elements[1].element.named_type.before, ws(" "));

    let Definition::SchemaExtension(extension) = &document.definitions[1] else {
        panic!("expected schema extension");
    };
    assert_eq!(extension.prefix, ws("\n"));
    assert_eq!(extension.definition.prefix, ws(" "));

    let Definition::TypeExtension(type_extension) = &document.definitions[2] else {
        panic!("expected type extension");
    };
    assert_eq!(type_extension.definition.prefix(), &ws("  "));
    assert_eq!(type_extension.definition.name().value, "T");

    assert_round_trip(source);
}

// =============================================================================
// Document API
// =============================================================================

/// Executable and type-system definitions can be listed separately.
#[test]
fn definition_kinds() {
    let document = parse_ok("type A { a: Int } { a } fragment F on A { a } scalar S");
    assert_eq!(document.executable_definitions().count(), 2);
    assert_eq!(document.type_system_definitions().count(), 2);
}

/// The source path and charset given to `parse_source` are kept on the
/// document.
#[test]
fn parse_source_metadata() {
    let input = ParseInput::new("{ a }")
        .with_path("queries/a.graphql")
        .with_charset("utf-8");
    let document = parse_source(input).unwrap();
    assert_eq!(document.source_path.to_str(), Some("queries/a.graphql"));
    assert_eq!(document.charset.as_deref(), Some("utf-8"));
}

/// Node ids are distinct per node and shared by clones.
#[test]
fn node_ids() {
    let document = parse_ok("{ a b }");
    let op = only_operation(&document);
    let a = &op.selection_set.selections[0].element;
    let b = &op.selection_set.selections[1].element;
    assert_ne!(a.id(), b.id());
    assert_eq!(a.clone().id(), a.id());
    assert_eq!(a.id().as_uuid().get_version_num(), 4);
    assert!(a.markers().is_empty());
}

// =============================================================================
// Cursor
// =============================================================================

/// The cursor ends exactly at the end of the source, and the definitions
/// plus the end-of-file space account for every byte in order.
#[test]
fn cursor_finishes_at_end_of_source() {
    let sources = [
        "",
        "   \n",
        "# only a comment",
        "\u{FEFF}{ a }",
        "{ a } # trailing comment without newline",
        "type T { f: Int },,\r\n",
        "query Q { a }\n\nfragment F on T { b } # end",
        "\"\"\"doc\"\"\" scalar S @d(x: [1, {k: \"v\"}])",
    ];
    for source in sources {
        let concrete = libgraphql_cst::parse(source).unwrap();
        let mut builder = TreeBuilder::new(source);
        let document = builder
            .build_document(&concrete, "cursor.graphql".into(), None)
            .unwrap();
        assert_eq!(builder.cursor().offset(), source.len(), "{source:?}");

        let mut covered = String::new();
        for definition in &document.definitions {
            covered.push_str(&definition.to_source());
        }
        covered.push_str(&document.eof.to_source());
        assert_eq!(covered, source);
    }
}

/// Building a second time from the same builder cannot move the cursor
/// back to the start.
#[test]
fn rebuilding_is_cursor_regression() {
    let source = "{ a }";
    let concrete = libgraphql_cst::parse(source).unwrap();
    let mut builder = TreeBuilder::new(source);
    builder
        .build_document(&concrete, "first.graphql".into(), None)
        .unwrap();
    let error = builder
        .build_document(&concrete, "second.graphql".into(), None)
        .unwrap_err();
    assert_eq!(error, TreeBuildError::CursorRegression { from: 5, to: 0 });
}

/// Values and selection sets nested as deeply as the grammar accepts build
/// and round-trip on the default test thread.
#[test]
fn deep_nesting_round_trips() {
    let depth = libgraphql_cst::MAX_RECURSION_DEPTH - 2;
    assert_round_trip(&format!(
        "{{ a(x: {}1{}) }}",
        "[ ".repeat(depth),
        " ]".repeat(depth),
    ));
    let depth = libgraphql_cst::MAX_RECURSION_DEPTH;
    assert_round_trip(&format!("{}b{}", "{ a ".repeat(depth), " }".repeat(depth)));
}

// =============================================================================
// Errors
// =============================================================================

/// Syntax errors come from the grammar, before building starts.
#[test]
fn syntax_error_is_parse_error() {
    let error = crate::parse("type T { a: }").unwrap_err();
    let GraphQLLosslessError::Parse(parse_error) = error else {
        panic!("expected a parse error, got {error:?}");
    };
    assert!(matches!(
        parse_error.kind(),
        GraphQLParseErrorKind::UnexpectedToken { .. },
    ));
}

/// A path given to `parse_source` shows up in syntax error locations.
#[test]
fn syntax_error_location_uses_path() {
    let input = ParseInput::new("{ a(: 1) }").with_path("broken.graphql");
    let error = parse_source(input).unwrap_err();
    assert!(
        error.to_string().starts_with("broken.graphql:1:5: error:"),
        "unexpected message: {error}",
    );
}

/// Building against text other than what was parsed is reported, not
/// papered over.
#[test]
fn mismatched_source_is_build_error() {
    let concrete = libgraphql_cst::parse("query { a }").unwrap();
    let error = TreeBuilder::new("query { b }")
        .build(&concrete, "mismatch.graphql", None)
        .unwrap_err();
    assert_eq!(
        error,
        TreeBuildError::MissingToken {
            expected: "a".to_string(),
            offset: 8,
        },
    );
}

/// A concrete tree whose spans run past the text is out of bounds.
#[test]
fn short_source_is_build_error() {
    let concrete = libgraphql_cst::parse("query { a }").unwrap();
    let error = TreeBuilder::new("query").build(&concrete, "", None).unwrap_err();
    assert_eq!(
        error,
        TreeBuildError::SpanOutOfBounds {
            start: 5,
            end: 6,
            source_len: 5,
        },
    );
}
