//! The lossless tree: typed GraphQL syntax nodes that also hold every piece
//! of whitespace, every comment and every separator of the text they were
//! built from.
//!
//! Each node carries an [`id`](NodeId), the [`Space`] before its first
//! significant character (its prefix) and opaque [`Markers`]. Trailing and
//! inter-element formatting lives in [`RightPadded`], [`LeftPadded`] and
//! [`Container`] wrappers.

mod directive_location_kind;
mod document;
mod executable;
mod graphql_node;
mod markers;
mod node_id;
mod padding;
mod space;
mod type_system;
mod types;
mod values;

pub use directive_location_kind::DirectiveLocationKind;
pub use document::Definition;
pub use document::Document;
pub use executable::Argument;
pub use executable::Directive;
pub use executable::Field;
pub use executable::FragmentDefinition;
pub use executable::FragmentSpread;
pub use executable::InlineFragment;
pub use executable::OperationDefinition;
pub use executable::OperationType;
pub use executable::Selection;
pub use executable::SelectionSet;
pub use executable::TypeCondition;
pub use executable::VariableDefinition;
pub use graphql_node::GraphQLNode;
pub use markers::Marker;
pub use markers::Markers;
pub use node_id::NodeId;
pub use padding::Container;
pub use padding::LeftPadded;
pub use padding::RightPadded;
pub use space::Comment;
pub use space::Space;
pub use type_system::Description;
pub use type_system::DirectiveDefinition;
pub use type_system::DirectiveLocation;
pub use type_system::EnumTypeDefinition;
pub use type_system::EnumValueDefinition;
pub use type_system::FieldDefinition;
pub use type_system::InputObjectTypeDefinition;
pub use type_system::InputValueDefinition;
pub use type_system::InterfaceTypeDefinition;
pub use type_system::ObjectTypeDefinition;
pub use type_system::RootOperationTypeDefinition;
pub use type_system::ScalarTypeDefinition;
pub use type_system::SchemaDefinition;
pub use type_system::SchemaExtension;
pub use type_system::TypeDefinition;
pub use type_system::TypeExtension;
pub use type_system::UnionTypeDefinition;
pub use types::ListType;
pub use types::NamedType;
pub use types::NonNullType;
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
pub use values::Variable;
