use crate::cst::cst_node::impl_cst_node;
use crate::cst::CstNode;
use crate::cst::Name;
use crate::ByteSpan;
use inherent::inherent;

/// A type reference: `Name`, `[Type]` or `Type!`.
#[derive(Clone, Debug, PartialEq)]
pub enum Type<'src> {
    Named(NamedType<'src>),
    /// `[inner]`; the span covers both brackets.
    List {
        inner: Box<Type<'src>>,
        span: ByteSpan,
    },
    /// `inner!`; the span ends after the `!`.
    NonNull {
        inner: Box<Type<'src>>,
        span: ByteSpan,
    },
}

#[inherent]
impl CstNode for Type<'_> {
    pub fn span(&self) -> ByteSpan {
        match self {
            Type::Named(named) => named.span,
            Type::List { span, .. } | Type::NonNull { span, .. } => *span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedType<'src> {
    pub name: Name<'src>,
    pub span: ByteSpan,
}

impl_cst_node!(NamedType);
