use crate::cst::cst_node::impl_cst_node;
use crate::cst::CstNode;
use crate::cst::DirectiveDefinition;
use crate::cst::FragmentDefinition;
use crate::cst::OperationDefinition;
use crate::cst::SchemaDefinition;
use crate::cst::SchemaExtension;
use crate::cst::TypeDefinition;
use crate::cst::TypeExtension;
use crate::ByteSpan;
use inherent::inherent;

/// A parsed GraphQL document. Executable and type-system definitions may be
/// freely mixed.
///
/// The span covers the whole source text, leading and trailing ignored
/// tokens included.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
    Schema(SchemaDefinition<'src>),
    Type(TypeDefinition<'src>),
    Directive(DirectiveDefinition<'src>),
    SchemaExtension(SchemaExtension<'src>),
    TypeExtension(TypeExtension<'src>),
}

#[inherent]
impl CstNode for Definition<'_> {
    pub fn span(&self) -> ByteSpan {
        match self {
            Definition::Operation(def) => def.span,
            Definition::Fragment(def) => def.span,
            Definition::Schema(def) => def.span,
            Definition::Type(def) => def.span(),
            Definition::Directive(def) => def.span,
            Definition::SchemaExtension(ext) => ext.span,
            Definition::TypeExtension(ext) => ext.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

impl_cst_node!(Document);
