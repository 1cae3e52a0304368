use crate::tree::graphql_node::impl_graphql_node;
use crate::tree::graphql_node::impl_graphql_node_for_enum;
use crate::tree::Container;
use crate::tree::LeftPadded;
use crate::tree::Markers;
use crate::tree::Name;
use crate::tree::NamedType;
use crate::tree::NodeId;
use crate::tree::RightPadded;
use crate::tree::Space;
use crate::tree::Type;
use crate::tree::Value;
use crate::tree::Variable;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

/// A named or anonymous operation, or the `{ … }` query shorthand (in which
/// case `operation_type` is `None` and the selection set has an empty
/// prefix).
#[derive(Clone, Debug)]
pub struct OperationDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub operation_type: Option<OperationType>,
    pub name: Option<Name>,
    pub variable_definitions: Option<Container<VariableDefinition>>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

#[derive(Clone, Debug)]
pub struct VariableDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub variable: Variable,
    pub type_: LeftPadded<Type>,
    pub default_value: Option<LeftPadded<Value>>,
    pub directives: Vec<Directive>,
}

/// `{ … }`. The last selection's `after` is the space before `}`.
#[derive(Clone, Debug)]
pub struct SelectionSet {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub selections: Vec<RightPadded<Selection>>,
}

#[derive(Clone, Debug)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

/// A field selection. With an alias, `alias.after` is the space before
/// `:` and the name's prefix is the space after it.
#[derive(Clone, Debug)]
pub struct Field {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub alias: Option<RightPadded<Name>>,
    pub name: Name,
    pub arguments: Option<Container<Argument>>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
}

impl Field {
    /// The key this field appears under in a response.
    pub fn response_key(&self) -> &str {
        self.alias
            .as_ref()
            .map_or(&self.name.value, |alias| &alias.element.value)
    }
}

#[derive(Clone, Debug)]
pub struct Argument {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub name: Name,
    pub value: LeftPadded<Value>,
}

#[derive(Clone, Debug)]
pub struct FragmentSpread {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub name: Name,
    pub directives: Vec<Directive>,
}

#[derive(Clone, Debug)]
pub struct InlineFragment {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub type_condition: Option<TypeCondition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

/// `on Type`. The prefix is the space before `on`.
#[derive(Clone, Debug)]
pub struct TypeCondition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub named_type: NamedType,
}

#[derive(Clone, Debug)]
pub struct FragmentDefinition {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub name: Name,
    pub type_condition: TypeCondition,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

/// `@name(args)`. The prefix is the space before `@`.
#[derive(Clone, Debug)]
pub struct Directive {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub name: Name,
    pub arguments: Option<Container<Argument>>,
}

impl_graphql_node!(
    OperationDefinition,
    VariableDefinition,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    TypeCondition,
    FragmentDefinition,
    Directive,
);

impl_graphql_node_for_enum!(Selection {
    Field,
    FragmentSpread,
    InlineFragment,
});
