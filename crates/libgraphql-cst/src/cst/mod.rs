//! Concrete parse tree for GraphQL documents.
//!
//! Every production records the [`ByteSpan`](crate::ByteSpan) of the source
//! text it was parsed from, running from its first significant token to its
//! last. Ignored tokens (whitespace, commas, comments) are not stored; the
//! text between two spans is recoverable by slicing the source.
//!
//! Lists that the grammar defines right-recursively (`implements A & B`,
//! `= A | B`, `on A | B`) keep that shape: the outermost node holds the
//! *last* item and links to the preceding ones through `rest`.

mod cst_node;
mod document;
mod executable;
mod type_system;
mod types;
mod values;

pub use cst_node::CstNode;
pub use document::Definition;
pub use document::Document;
pub use executable::Alias;
pub use executable::Argument;
pub use executable::Arguments;
pub use executable::DefaultValue;
pub use executable::Directive;
pub use executable::Field;
pub use executable::FragmentDefinition;
pub use executable::FragmentSpread;
pub use executable::InlineFragment;
pub use executable::OperationDefinition;
pub use executable::OperationKind;
pub use executable::OperationType;
pub use executable::Selection;
pub use executable::SelectionSet;
pub use executable::TypeCondition;
pub use executable::Variable;
pub use executable::VariableDefinition;
pub use executable::VariableDefinitions;
pub use type_system::ArgumentsDefinition;
pub use type_system::DirectiveDefinition;
pub use type_system::DirectiveLocations;
pub use type_system::EnumTypeDefinition;
pub use type_system::EnumValueDefinition;
pub use type_system::EnumValuesDefinition;
pub use type_system::FieldDefinition;
pub use type_system::FieldsDefinition;
pub use type_system::ImplementsInterfaces;
pub use type_system::InputFieldsDefinition;
pub use type_system::InputObjectTypeDefinition;
pub use type_system::InputValueDefinition;
pub use type_system::InterfaceTypeDefinition;
pub use type_system::ObjectTypeDefinition;
pub use type_system::RootOperationTypeDefinition;
pub use type_system::RootOperationTypes;
pub use type_system::ScalarTypeDefinition;
pub use type_system::SchemaDefinition;
pub use type_system::SchemaExtension;
pub use type_system::TypeDefinition;
pub use type_system::TypeExtension;
pub use type_system::UnionMemberTypes;
pub use type_system::UnionTypeDefinition;
pub use types::NamedType;
pub use types::Type;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::Name;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
