use crate::tree::graphql_node::impl_graphql_node;
use crate::tree::graphql_node::impl_graphql_node_for_enum;
use crate::tree::Container;
use crate::tree::Directive;
use crate::tree::DirectiveLocationKind;
use crate::tree::LeftPadded;
use crate::tree::Markers;
use crate::tree::Name;
use crate::tree::NamedType;
use crate::tree::NodeId;
use crate::tree::OperationType;
use crate::tree::RightPadded;
use crate::tree::Space;
use crate::tree::StringValue;
use crate::tree::Type;
use crate::tree::Value;

/// A description string. `after` is the space up to the keyword or name it
/// describes.
pub type Description = RightPadded<StringValue>;

// =============================================================================
// Schema
// =============================================================================

/// `schema { … }`, or the body of `extend schema`.
///
/// When a description is present the prefix is the space before it and the
/// description's `after` is the space before `schema`.
#[derive(Clone, Debug)]
pub struct SchemaDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub description: Option<Description>,
    pub directives: Vec<Directive>,
    pub root_operation_types: Option<Container<RootOperationTypeDefinition>>,
}

/// `query: Query`. `named_type.before` is the space before `:`.
#[derive(Clone, Debug)]
pub struct RootOperationTypeDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub operation_type: OperationType,
    pub named_type: LeftPadded<NamedType>,
}

/// `extend schema …`. The prefix is the space before `extend`; the wrapped
/// definition's prefix is the space between `extend` and `schema`.
#[derive(Clone, Debug)]
pub struct SchemaExtension {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub definition: SchemaDefinition,
}

// =============================================================================
// Type definitions
// =============================================================================

#[derive(Clone, Debug)]
pub enum TypeDefinition {
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
}

impl TypeDefinition {
    pub fn name(&self) -> &Name {
        match self {
            TypeDefinition::Scalar(def) => &def.name,
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
            TypeDefinition::Union(def) => &def.name,
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::InputObject(def) => &def.name,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            TypeDefinition::Scalar(_) => "scalar",
            TypeDefinition::Object(_) => "type",
            TypeDefinition::Interface(_) => "interface",
            TypeDefinition::Union(_) => "union",
            TypeDefinition::Enum(_) => "enum",
            TypeDefinition::InputObject(_) => "input",
        }
    }
}

/// `extend <type definition>`, laid out like [`SchemaExtension`].
#[derive(Clone, Debug)]
pub struct TypeExtension {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub definition: TypeDefinition,
}

#[derive(Clone, Debug)]
pub struct ScalarTypeDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub description: Option<Description>,
    pub name: Name,
    pub directives: Vec<Directive>,
}

/// `type Name implements A & B @dir { … }`.
///
/// `implements_interfaces.before` is the space before `implements`. The
/// `&` separators, including an optional leading one, are folded into the
/// interfaces' paddings.
#[derive(Clone, Debug)]
pub struct ObjectTypeDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub description: Option<Description>,
    pub name: Name,
    pub implements_interfaces: Option<Container<NamedType>>,
    pub directives: Vec<Directive>,
    pub fields: Option<Container<FieldDefinition>>,
}

#[derive(Clone, Debug)]
pub struct InterfaceTypeDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub description: Option<Description>,
    pub name: Name,
    pub implements_interfaces: Option<Container<NamedType>>,
    pub directives: Vec<Directive>,
    pub fields: Option<Container<FieldDefinition>>,
}

/// `union Name @dir = A | B`.
///
/// `member_types.before` is the space before `=`. The `|` separators,
/// including an optional leading one, are folded into the members'
/// paddings.
#[derive(Clone, Debug)]
pub struct UnionTypeDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub description: Option<Description>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub member_types: Option<Container<NamedType>>,
}

#[derive(Clone, Debug)]
pub struct EnumTypeDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub description: Option<Description>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub values: Option<Container<EnumValueDefinition>>,
}

#[derive(Clone, Debug)]
pub struct InputObjectTypeDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub description: Option<Description>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Option<Container<InputValueDefinition>>,
}

// =============================================================================
// Fields, arguments and enum values
// =============================================================================

/// When a description is present its `after` is the space before the name,
/// and the name's prefix is empty.
#[derive(Clone, Debug)]
pub struct FieldDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub description: Option<Description>,
    pub name: Name,
    pub arguments: Option<Container<InputValueDefinition>>,
    pub type_: LeftPadded<Type>,
    pub directives: Vec<Directive>,
}

/// An argument definition or an input object field.
#[derive(Clone, Debug)]
pub struct InputValueDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub description: Option<Description>,
    pub name: Name,
    pub type_: LeftPadded<Type>,
    pub default_value: Option<LeftPadded<Value>>,
    pub directives: Vec<Directive>,
}

#[derive(Clone, Debug)]
pub struct EnumValueDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub description: Option<Description>,
    pub name: Name,
    pub directives: Vec<Directive>,
}

// =============================================================================
// Directive definitions
// =============================================================================

/// `directive @name(args) repeatable on A | B`.
///
/// `name.before` is the space before `@`, `repeatable` is the space before
/// that keyword, and `locations.before` is the space before `on`.
#[derive(Clone, Debug)]
pub struct DirectiveDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub description: Option<Description>,
    pub name: LeftPadded<Name>,
    pub arguments: Option<Container<InputValueDefinition>>,
    pub repeatable: Option<Space>,
    pub locations: Container<DirectiveLocation>,
}

impl DirectiveDefinition {
    pub fn is_repeatable(&self) -> bool {
        self.repeatable.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct DirectiveLocation {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub location: DirectiveLocationKind,
}

impl_graphql_node!(
    SchemaDefinition,
    RootOperationTypeDefinition,
    SchemaExtension,
    TypeExtension,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    EnumValueDefinition,
    DirectiveDefinition,
    DirectiveLocation,
);

impl_graphql_node_for_enum!(TypeDefinition {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
});
