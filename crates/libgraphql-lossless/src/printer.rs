use crate::tree::Argument;
use crate::tree::BooleanValue;
use crate::tree::Container;
use crate::tree::Definition;
use crate::tree::Description;
use crate::tree::Directive;
use crate::tree::DirectiveDefinition;
use crate::tree::DirectiveLocation;
use crate::tree::Document;
use crate::tree::EnumTypeDefinition;
use crate::tree::EnumValue;
use crate::tree::EnumValueDefinition;
use crate::tree::Field;
use crate::tree::FieldDefinition;
use crate::tree::FloatValue;
use crate::tree::FragmentDefinition;
use crate::tree::FragmentSpread;
use crate::tree::InlineFragment;
use crate::tree::InputObjectTypeDefinition;
use crate::tree::InputValueDefinition;
use crate::tree::IntValue;
use crate::tree::InterfaceTypeDefinition;
use crate::tree::LeftPadded;
use crate::tree::ListType;
use crate::tree::ListValue;
use crate::tree::Name;
use crate::tree::NamedType;
use crate::tree::NonNullType;
use crate::tree::NullValue;
use crate::tree::ObjectField;
use crate::tree::ObjectTypeDefinition;
use crate::tree::ObjectValue;
use crate::tree::OperationDefinition;
use crate::tree::RightPadded;
use crate::tree::RootOperationTypeDefinition;
use crate::tree::ScalarTypeDefinition;
use crate::tree::SchemaDefinition;
use crate::tree::SchemaExtension;
use crate::tree::Selection;
use crate::tree::SelectionSet;
use crate::tree::Space;
use crate::tree::StringValue;
use crate::tree::Type;
use crate::tree::TypeCondition;
use crate::tree::TypeDefinition;
use crate::tree::TypeExtension;
use crate::tree::UnionTypeDefinition;
use crate::tree::Value;
use crate::tree::Variable;
use crate::tree::VariableDefinition;
use inherent::inherent;

/// Trait implemented by everything the printer can turn back into GraphQL
/// text.
///
/// Nodes implement it via `#[inherent] impl GraphQLPrint`, so the methods
/// are callable without importing the trait.
pub trait GraphQLPrint {
    /// Appends this node's text, prefix included, to `sink`.
    fn append_source(&self, sink: &mut String);

    fn to_source(&self) -> String {
        let mut sink = String::new();
        self.append_source(&mut sink);
        sink
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn print_padded<T: GraphQLPrint>(sink: &mut String, elements: &[RightPadded<T>]) {
    for padded in elements {
        padded.element.append_source(sink);
        padded.after.append_to(sink);
    }
}

/// Prints `before`, `open`, the elements and `close`. An empty container
/// prints as `open` immediately followed by `close`.
fn print_container<T: GraphQLPrint>(
    sink: &mut String,
    container: &Container<T>,
    open: &str,
    close: &str,
) {
    container.before.append_to(sink);
    sink.push_str(open);
    print_padded(sink, &container.elements);
    sink.push_str(close);
}

fn print_left_padded<T: GraphQLPrint>(
    sink: &mut String,
    padded: &LeftPadded<T>,
    punctuation: &str,
) {
    padded.before.append_to(sink);
    sink.push_str(punctuation);
    padded.element.append_source(sink);
}

fn print_optional<T: GraphQLPrint>(sink: &mut String, node: &Option<T>) {
    if let Some(node) = node {
        node.append_source(sink);
    }
}

fn print_directives(sink: &mut String, directives: &[Directive]) {
    for directive in directives {
        directive.append_source(sink);
    }
}

/// Prints a description (if any) followed by `keyword`. Without a
/// description the keyword directly follows the owner's prefix.
fn print_keyword_description(
    sink: &mut String,
    description: &Option<Description>,
    keyword: &str,
) {
    if let Some(description) = description {
        description.element.append_source(sink);
        description.after.append_to(sink);
    }
    sink.push_str(keyword);
}

fn print_name_description(sink: &mut String, description: &Option<Description>) {
    if let Some(description) = description {
        description.element.append_source(sink);
        description.after.append_to(sink);
    }
}

/// Escapes decoded single-line string content for printing between `"`
/// quotes.
fn push_escaped(sink: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '"' => sink.push_str("\\\""),
            '\\' => sink.push_str("\\\\"),
            '\n' => sink.push_str("\\n"),
            '\r' => sink.push_str("\\r"),
            '\t' => sink.push_str("\\t"),
            '\u{0008}' => sink.push_str("\\b"),
            '\u{000C}' => sink.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                sink.push_str(&format!("\\u{:04X}", c as u32));
            },
            c => sink.push(c),
        }
    }
}

// =============================================================================
// Document and definitions
// =============================================================================

#[inherent]
impl GraphQLPrint for Document {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        for definition in &self.definitions {
            definition.append_source(sink);
        }
        self.eof.append_to(sink);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for Definition {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Definition::Operation(def) => def.append_source(sink),
            Definition::Fragment(def) => def.append_source(sink),
            Definition::Schema(def) => def.append_source(sink),
            Definition::SchemaExtension(ext) => ext.append_source(sink),
            Definition::Directive(def) => def.append_source(sink),
            Definition::Type(def) => def.append_source(sink),
            Definition::TypeExtension(ext) => ext.append_source(sink),
        }
    }

    pub fn to_source(&self) -> String;
}

// =============================================================================
// Operations and fragments
// =============================================================================

#[inherent]
impl GraphQLPrint for OperationDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        if let Some(operation_type) = self.operation_type {
            sink.push_str(operation_type.as_str());
        }
        print_optional(sink, &self.name);
        if let Some(variable_definitions) = &self.variable_definitions {
            print_container(sink, variable_definitions, "(", ")");
        }
        print_directives(sink, &self.directives);
        self.selection_set.append_source(sink);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for VariableDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        self.variable.append_source(sink);
        print_left_padded(sink, &self.type_, ":");
        if let Some(default_value) = &self.default_value {
            print_left_padded(sink, default_value, "=");
        }
        print_directives(sink, &self.directives);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for SelectionSet {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push('{');
        print_padded(sink, &self.selections);
        sink.push('}');
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for Selection {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Selection::Field(field) => field.append_source(sink),
            Selection::FragmentSpread(spread) => spread.append_source(sink),
            Selection::InlineFragment(fragment) => fragment.append_source(sink),
        }
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for Field {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        if let Some(alias) = &self.alias {
            alias.element.append_source(sink);
            alias.after.append_to(sink);
            sink.push(':');
        }
        self.name.append_source(sink);
        if let Some(arguments) = &self.arguments {
            print_container(sink, arguments, "(", ")");
        }
        print_directives(sink, &self.directives);
        print_optional(sink, &self.selection_set);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for Argument {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        self.name.append_source(sink);
        print_left_padded(sink, &self.value, ":");
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for FragmentSpread {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push_str("...");
        self.name.append_source(sink);
        print_directives(sink, &self.directives);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for InlineFragment {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push_str("...");
        print_optional(sink, &self.type_condition);
        print_directives(sink, &self.directives);
        self.selection_set.append_source(sink);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for TypeCondition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push_str("on");
        self.named_type.append_source(sink);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for FragmentDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push_str("fragment");
        self.name.append_source(sink);
        self.type_condition.append_source(sink);
        print_directives(sink, &self.directives);
        self.selection_set.append_source(sink);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for Directive {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push('@');
        self.name.append_source(sink);
        if let Some(arguments) = &self.arguments {
            print_container(sink, arguments, "(", ")");
        }
    }

    pub fn to_source(&self) -> String;
}

// =============================================================================
// Values and names
// =============================================================================

#[inherent]
impl GraphQLPrint for Name {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push_str(&self.value);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for Variable {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push('$');
        self.name.append_source(sink);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for Value {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Value::Variable(value) => value.append_source(sink),
            Value::Int(value) => value.append_source(sink),
            Value::Float(value) => value.append_source(sink),
            Value::String(value) => value.append_source(sink),
            Value::Boolean(value) => value.append_source(sink),
            Value::Null(value) => value.append_source(sink),
            Value::Enum(value) => value.append_source(sink),
            Value::List(value) => value.append_source(sink),
            Value::Object(value) => value.append_source(sink),
        }
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for IntValue {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push_str(&self.raw);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for FloatValue {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push_str(&self.raw);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for StringValue {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        if self.block {
            sink.push_str("\"\"\"");
            sink.push_str(&self.value);
            sink.push_str("\"\"\"");
        } else {
            sink.push('"');
            push_escaped(sink, &self.value);
            sink.push('"');
        }
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for BooleanValue {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push_str(if self.value { "true" } else { "false" });
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for NullValue {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push_str("null");
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for EnumValue {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        self.name.append_source(sink);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for ListValue {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push('[');
        print_padded(sink, &self.values);
        sink.push(']');
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for ObjectValue {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push('{');
        print_padded(sink, &self.fields);
        sink.push('}');
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for ObjectField {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        self.name.append_source(sink);
        print_left_padded(sink, &self.value, ":");
    }

    pub fn to_source(&self) -> String;
}

// =============================================================================
// Types
// =============================================================================

#[inherent]
impl GraphQLPrint for Type {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Type::Named(named) => named.append_source(sink),
            Type::List(list) => list.append_source(sink),
            Type::NonNull(non_null) => non_null.append_source(sink),
        }
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for NamedType {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        self.name.append_source(sink);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for ListType {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push('[');
        self.type_.element.append_source(sink);
        self.type_.after.append_to(sink);
        sink.push(']');
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for NonNullType {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        self.type_.element.append_source(sink);
        self.type_.after.append_to(sink);
        sink.push('!');
    }

    pub fn to_source(&self) -> String;
}

// =============================================================================
// Schema definitions and extensions
// =============================================================================

#[inherent]
impl GraphQLPrint for SchemaDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        print_keyword_description(sink, &self.description, "schema");
        print_directives(sink, &self.directives);
        if let Some(root_operation_types) = &self.root_operation_types {
            print_container(sink, root_operation_types, "{", "}");
        }
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for RootOperationTypeDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push_str(self.operation_type.as_str());
        print_left_padded(sink, &self.named_type, ":");
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for SchemaExtension {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push_str("extend");
        self.definition.append_source(sink);
    }

    pub fn to_source(&self) -> String;
}

// =============================================================================
// Type definitions and extensions
// =============================================================================

#[inherent]
impl GraphQLPrint for TypeDefinition {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            TypeDefinition::Scalar(def) => def.append_source(sink),
            TypeDefinition::Object(def) => def.append_source(sink),
            TypeDefinition::Interface(def) => def.append_source(sink),
            TypeDefinition::Union(def) => def.append_source(sink),
            TypeDefinition::Enum(def) => def.append_source(sink),
            TypeDefinition::InputObject(def) => def.append_source(sink),
        }
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for TypeExtension {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push_str("extend");
        self.definition.append_source(sink);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for ScalarTypeDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        print_keyword_description(sink, &self.description, "scalar");
        self.name.append_source(sink);
        print_directives(sink, &self.directives);
    }

    pub fn to_source(&self) -> String;
}

/// `&`/`|` separators are folded into the paddings, so only the
/// introducing keyword is printed here.
fn print_separated<T: GraphQLPrint>(
    sink: &mut String,
    container: &Container<T>,
    keyword: &str,
) {
    container.before.append_to(sink);
    sink.push_str(keyword);
    print_padded(sink, &container.elements);
}

#[inherent]
impl GraphQLPrint for ObjectTypeDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        print_keyword_description(sink, &self.description, "type");
        self.name.append_source(sink);
        if let Some(interfaces) = &self.implements_interfaces {
            print_separated(sink, interfaces, "implements");
        }
        print_directives(sink, &self.directives);
        if let Some(fields) = &self.fields {
            print_container(sink, fields, "{", "}");
        }
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for InterfaceTypeDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        print_keyword_description(sink, &self.description, "interface");
        self.name.append_source(sink);
        if let Some(interfaces) = &self.implements_interfaces {
            print_separated(sink, interfaces, "implements");
        }
        print_directives(sink, &self.directives);
        if let Some(fields) = &self.fields {
            print_container(sink, fields, "{", "}");
        }
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for UnionTypeDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        print_keyword_description(sink, &self.description, "union");
        self.name.append_source(sink);
        print_directives(sink, &self.directives);
        if let Some(member_types) = &self.member_types {
            print_separated(sink, member_types, "=");
        }
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for EnumTypeDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        print_keyword_description(sink, &self.description, "enum");
        self.name.append_source(sink);
        print_directives(sink, &self.directives);
        if let Some(values) = &self.values {
            print_container(sink, values, "{", "}");
        }
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for InputObjectTypeDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        print_keyword_description(sink, &self.description, "input");
        self.name.append_source(sink);
        print_directives(sink, &self.directives);
        if let Some(fields) = &self.fields {
            print_container(sink, fields, "{", "}");
        }
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for FieldDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        print_name_description(sink, &self.description);
        self.name.append_source(sink);
        if let Some(arguments) = &self.arguments {
            print_container(sink, arguments, "(", ")");
        }
        print_left_padded(sink, &self.type_, ":");
        print_directives(sink, &self.directives);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for InputValueDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        print_name_description(sink, &self.description);
        self.name.append_source(sink);
        print_left_padded(sink, &self.type_, ":");
        if let Some(default_value) = &self.default_value {
            print_left_padded(sink, default_value, "=");
        }
        print_directives(sink, &self.directives);
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for EnumValueDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        print_name_description(sink, &self.description);
        self.name.append_source(sink);
        print_directives(sink, &self.directives);
    }

    pub fn to_source(&self) -> String;
}

// =============================================================================
// Directive definitions
// =============================================================================

#[inherent]
impl GraphQLPrint for DirectiveDefinition {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        print_keyword_description(sink, &self.description, "directive");
        print_left_padded(sink, &self.name, "@");
        if let Some(arguments) = &self.arguments {
            print_container(sink, arguments, "(", ")");
        }
        if let Some(before_repeatable) = &self.repeatable {
            before_repeatable.append_to(sink);
            sink.push_str("repeatable");
        }
        print_separated(sink, &self.locations, "on");
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for DirectiveLocation {
    pub fn append_source(&self, sink: &mut String) {
        self.prefix.append_to(sink);
        sink.push_str(self.location.as_str());
    }

    pub fn to_source(&self) -> String;
}

#[inherent]
impl GraphQLPrint for Space {
    pub fn append_source(&self, sink: &mut String) {
        self.append_to(sink);
    }

    pub fn to_source(&self) -> String;
}

/// Prints a lossless tree back to GraphQL text.
pub fn print(document: &Document) -> String {
    let mut sink = String::new();
    document.append_source(&mut sink);
    log::debug!(
        "printed {} definitions into {} bytes",
        document.definitions.len(),
        sink.len(),
    );
    sink
}
