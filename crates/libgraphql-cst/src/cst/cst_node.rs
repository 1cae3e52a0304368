use crate::ByteSpan;

/// Trait implemented by every concrete parse tree production.
///
/// Struct productions implement it via `#[inherent] impl CstNode`, so the
/// methods are callable without importing the trait. Enum productions
/// delegate to their active variant.
pub trait CstNode {
    /// The byte range of source text this production was parsed from.
    fn span(&self) -> ByteSpan;

    /// Appends the exact source text of this production to `sink`.
    ///
    /// `source` must be the text the production was parsed from.
    fn append_source(&self, sink: &mut String, source: &str) {
        if let Some(text) = self.span().slice(source) {
            sink.push_str(text);
        }
    }

    /// Convenience wrapper around [`append_source`](CstNode::append_source).
    fn to_source(&self, source: &str) -> String {
        let mut s = String::new();
        self.append_source(&mut s, source);
        s
    }
}

/// Implements [`CstNode`] for structs that carry a `span: ByteSpan` field.
macro_rules! impl_cst_node {
    ($($node:ident),+ $(,)?) => {
        $(
            #[inherent::inherent]
            impl $crate::cst::CstNode for $node<'_> {
                pub fn span(&self) -> $crate::ByteSpan {
                    self.span
                }

                pub fn append_source(&self, sink: &mut String, source: &str);

                pub fn to_source(&self, source: &str) -> String;
            }
        )+
    };
}

pub(crate) use impl_cst_node;
