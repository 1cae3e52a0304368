use crate::tree::Markers;
use crate::tree::NodeId;
use crate::tree::Space;

/// Trait implemented by every lossless tree node and every closed sum type
/// of nodes.
///
/// Struct nodes implement it via `#[inherent] impl GraphQLNode`, so the
/// methods are callable without importing the trait. Enums delegate to
/// their active variant.
pub trait GraphQLNode: Sized {
    fn id(&self) -> NodeId;

    /// Everything before this node's first significant character.
    fn prefix(&self) -> &Space;

    fn markers(&self) -> &Markers;

    fn with_prefix(self, prefix: Space) -> Self;

    fn with_markers(self, markers: Markers) -> Self;
}

/// Implements [`GraphQLNode`] for structs with `id`, `prefix` and `markers`
/// fields.
macro_rules! impl_graphql_node {
    ($($node:ident),+ $(,)?) => {
        $(
            #[inherent::inherent]
            impl $crate::tree::GraphQLNode for $node {
                pub fn id(&self) -> $crate::tree::NodeId {
                    self.id
                }

                pub fn prefix(&self) -> &$crate::tree::Space {
                    &self.prefix
                }

                pub fn markers(&self) -> &$crate::tree::Markers {
                    &self.markers
                }

                pub fn with_prefix(self, prefix: $crate::tree::Space) -> Self {
                    Self { prefix, ..self }
                }

                pub fn with_markers(
                    self,
                    markers: $crate::tree::Markers,
                ) -> Self {
                    Self { markers, ..self }
                }
            }
        )+
    };
}

/// Implements [`GraphQLNode`] for an enum whose variants each wrap one node.
macro_rules! impl_graphql_node_for_enum {
    ($enum:ident { $($variant:ident),+ $(,)? }) => {
        #[inherent::inherent]
        impl $crate::tree::GraphQLNode for $enum {
            pub fn id(&self) -> $crate::tree::NodeId {
                match self {
                    $( $enum::$variant(node) => node.id(), )+
                }
            }

            pub fn prefix(&self) -> &$crate::tree::Space {
                match self {
                    $( $enum::$variant(node) => node.prefix(), )+
                }
            }

            pub fn markers(&self) -> &$crate::tree::Markers {
                match self {
                    $( $enum::$variant(node) => node.markers(), )+
                }
            }

            pub fn with_prefix(self, prefix: $crate::tree::Space) -> Self {
                match self {
                    $( $enum::$variant(node) => {
                        $enum::$variant(node.with_prefix(prefix))
                    }, )+
                }
            }

            pub fn with_markers(self, markers: $crate::tree::Markers) -> Self {
                match self {
                    $( $enum::$variant(node) => {
                        $enum::$variant(node.with_markers(markers))
                    }, )+
                }
            }
        }
    };
}

pub(crate) use impl_graphql_node;
pub(crate) use impl_graphql_node_for_enum;
