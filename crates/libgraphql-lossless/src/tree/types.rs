use crate::tree::graphql_node::impl_graphql_node;
use crate::tree::graphql_node::impl_graphql_node_for_enum;
use crate::tree::Markers;
use crate::tree::Name;
use crate::tree::NodeId;
use crate::tree::RightPadded;
use crate::tree::Space;

/// A type reference: `Name`, `[Type]` or `Type!`.
#[derive(Clone, Debug)]
pub enum Type {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}

impl Type {
    /// The named type at the core of any list/non-null wrapping.
    pub fn innermost_named_type(&self) -> &NamedType {
        match self {
            Type::Named(named) => named,
            Type::List(list) => list.type_.element.innermost_named_type(),
            Type::NonNull(non_null) => {
                non_null.type_.element.innermost_named_type()
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct NamedType {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub name: Name,
}

/// `[Type]`. `type_.after` is the space before `]`.
#[derive(Clone, Debug)]
pub struct ListType {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub type_: RightPadded<Box<Type>>,
}

/// `Type!`. `type_.after` is the space before `!`.
#[derive(Clone, Debug)]
pub struct NonNullType {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub type_: RightPadded<Box<Type>>,
}

impl_graphql_node!(NamedType, ListType, NonNullType);

impl_graphql_node_for_enum!(Type { Named, List, NonNull });
