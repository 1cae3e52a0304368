use crate::tree::graphql_node::impl_graphql_node;
use crate::tree::graphql_node::impl_graphql_node_for_enum;
use crate::tree::DirectiveDefinition;
use crate::tree::FragmentDefinition;
use crate::tree::Markers;
use crate::tree::NodeId;
use crate::tree::OperationDefinition;
use crate::tree::SchemaDefinition;
use crate::tree::SchemaExtension;
use crate::tree::Space;
use crate::tree::TypeDefinition;
use crate::tree::TypeExtension;
use std::path::PathBuf;

/// Root of a lossless tree.
///
/// The first definition's prefix holds any leading whitespace and comments;
/// `eof` holds everything after the last definition. A document with no
/// definitions keeps its whole text in `eof`.
#[derive(Clone, Debug)]
pub struct Document {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,

    /// Where the text came from. Used for identity and diagnostics only.
    pub source_path: PathBuf,

    /// The character set the text was declared to be in, if any.
    pub charset: Option<String>,

    pub definitions: Vec<Definition>,
    pub eof: Space,
}

impl Document {
    /// Operations and fragments, in source order.
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| def.is_executable())
    }

    /// Schema, type and directive definitions and extensions, in source
    /// order.
    pub fn type_system_definitions(
        &self,
    ) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| !def.is_executable())
    }

    pub fn with_definitions(self, definitions: Vec<Definition>) -> Self {
        Self {
            definitions,
            ..self
        }
    }

    pub fn with_eof(self, eof: Space) -> Self {
        Self { eof, ..self }
    }
}

#[derive(Clone, Debug)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    Schema(SchemaDefinition),
    SchemaExtension(SchemaExtension),
    Directive(DirectiveDefinition),
    Type(TypeDefinition),
    TypeExtension(TypeExtension),
}

impl Definition {
    pub fn is_executable(&self) -> bool {
        matches!(self, Definition::Operation(_) | Definition::Fragment(_))
    }
}

impl_graphql_node!(Document);

impl_graphql_node_for_enum!(Definition {
    Operation,
    Fragment,
    Schema,
    SchemaExtension,
    Directive,
    Type,
    TypeExtension,
});
