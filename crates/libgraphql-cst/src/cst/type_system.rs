use crate::cst::cst_node::impl_cst_node;
use crate::cst::CstNode;
use crate::cst::DefaultValue;
use crate::cst::Directive;
use crate::cst::Name;
use crate::cst::NamedType;
use crate::cst::OperationType;
use crate::cst::StringValue;
use crate::cst::Type;
use crate::ByteSpan;
use inherent::inherent;

// =============================================================================
// Schema
// =============================================================================

/// `schema @directives { query: Query ... }`. When parsed as the body of a
/// [`SchemaExtension`] the root operation types may be absent.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub root_operation_types: Option<RootOperationTypes<'src>>,
    pub span: ByteSpan,
}

/// `{ query: Query ... }`. The span covers both braces.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypes<'src> {
    pub definitions: Vec<RootOperationTypeDefinition<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition<'src> {
    pub operation_type: OperationType,
    pub named_type: NamedType<'src>,
    pub span: ByteSpan,
}

/// `extend schema ...`. The span starts at `extend`.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension<'src> {
    pub definition: SchemaDefinition<'src>,
    pub span: ByteSpan,
}

// =============================================================================
// Types
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition<'src> {
    Scalar(ScalarTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
}

#[inherent]
impl CstNode for TypeDefinition<'_> {
    pub fn span(&self) -> ByteSpan {
        match self {
            TypeDefinition::Scalar(def) => def.span,
            TypeDefinition::Object(def) => def.span,
            TypeDefinition::Interface(def) => def.span,
            TypeDefinition::Union(def) => def.span,
            TypeDefinition::Enum(def) => def.span,
            TypeDefinition::InputObject(def) => def.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

/// `extend <type definition>`. The span starts at `extend`; the wrapped
/// definition never carries a description.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeExtension<'src> {
    pub definition: TypeDefinition<'src>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub implements_interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Option<FieldsDefinition<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub implements_interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Option<FieldsDefinition<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub member_types: Option<UnionMemberTypes<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub values: Option<EnumValuesDefinition<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Option<InputFieldsDefinition<'src>>,
    pub span: ByteSpan,
}

// =============================================================================
// Right-recursive lists
// =============================================================================

/// `implements A & B & C`, stored right-recursively: the outermost node
/// holds `C` and its `rest` holds `implements A & B`. Every link's span
/// starts at the `implements` keyword.
#[derive(Clone, Debug, PartialEq)]
pub struct ImplementsInterfaces<'src> {
    pub rest: Option<Box<ImplementsInterfaces<'src>>>,
    pub named_type: NamedType<'src>,
    pub span: ByteSpan,
}

/// `= A | B | C`, stored like [`ImplementsInterfaces`]. Spans start at the
/// `=`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionMemberTypes<'src> {
    pub rest: Option<Box<UnionMemberTypes<'src>>>,
    pub named_type: NamedType<'src>,
    pub span: ByteSpan,
}

/// `on A | B | C`, stored like [`ImplementsInterfaces`]. Spans start at
/// `on`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveLocations<'src> {
    pub rest: Option<Box<DirectiveLocations<'src>>>,
    pub location: Name<'src>,
    pub span: ByteSpan,
}

// =============================================================================
// Bodies
// =============================================================================

/// `{ field: Type ... }`. May be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldsDefinition<'src> {
    pub definitions: Vec<FieldDefinition<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments_definition: Option<ArgumentsDefinition<'src>>,
    pub type_: Type<'src>,
    pub directives: Vec<Directive<'src>>,
    pub span: ByteSpan,
}

/// `( arg: Type ... )` on a field or directive definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentsDefinition<'src> {
    pub definitions: Vec<InputValueDefinition<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub type_: Type<'src>,
    pub default_value: Option<DefaultValue<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub span: ByteSpan,
}

/// `{ VALUE ... }`. May be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValuesDefinition<'src> {
    pub definitions: Vec<EnumValueDefinition<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub span: ByteSpan,
}

/// `{ field: Type ... }` on an input object. May be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct InputFieldsDefinition<'src> {
    pub definitions: Vec<InputValueDefinition<'src>>,
    pub span: ByteSpan,
}

// =============================================================================
// Directives
// =============================================================================

/// `directive @name(args) repeatable on A | B`
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments_definition: Option<ArgumentsDefinition<'src>>,
    /// Location of the `repeatable` keyword, if present.
    pub repeatable: Option<ByteSpan>,
    pub locations: DirectiveLocations<'src>,
    pub span: ByteSpan,
}

impl_cst_node!(
    SchemaDefinition,
    RootOperationTypes,
    RootOperationTypeDefinition,
    SchemaExtension,
    TypeExtension,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    ImplementsInterfaces,
    UnionMemberTypes,
    DirectiveLocations,
    FieldsDefinition,
    FieldDefinition,
    ArgumentsDefinition,
    InputValueDefinition,
    EnumValuesDefinition,
    EnumValueDefinition,
    InputFieldsDefinition,
    DirectiveDefinition,
);
