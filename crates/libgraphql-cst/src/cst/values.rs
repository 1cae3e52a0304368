use crate::cst::cst_node::impl_cst_node;
use crate::cst::CstNode;
use crate::cst::Variable;
use crate::ByteSpan;
use inherent::inherent;
use std::borrow::Cow;

/// A GraphQL name, borrowed from the source where possible.
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
    pub span: ByteSpan,
}

/// An input value literal (or a variable reference).
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Variable(Variable<'src>),
    Int(IntValue<'src>),
    Float(FloatValue<'src>),
    String(StringValue<'src>),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue<'src>),
    List(ListValue<'src>),
    Object(ObjectValue<'src>),
}

#[inherent]
impl CstNode for Value<'_> {
    pub fn span(&self) -> ByteSpan {
        match self {
            Value::Variable(v) => v.span,
            Value::Int(v) => v.span,
            Value::Float(v) => v.span,
            Value::String(v) => v.span,
            Value::Boolean(v) => v.span,
            Value::Null(v) => v.span,
            Value::Enum(v) => v.span,
            Value::List(v) => v.span,
            Value::Object(v) => v.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

/// The raw text of an integer literal, sign included.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue<'src> {
    pub raw: Cow<'src, str>,
    pub span: ByteSpan,
}

/// The raw text of a float literal, sign and exponent included.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue<'src> {
    pub raw: Cow<'src, str>,
    pub span: ByteSpan,
}

/// A string literal exactly as written, quotes included.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    pub raw: Cow<'src, str>,
    /// `true` for `"""`-delimited block strings.
    pub block: bool,
    pub span: ByteSpan,
}

impl StringValue<'_> {
    /// The text between the delimiters, escapes left untouched.
    pub fn interior(&self) -> &str {
        let delimiter_len = if self.block { 3 } else { 1 };
        self.raw
            .get(delimiter_len..self.raw.len().saturating_sub(delimiter_len))
            .unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub span: ByteSpan,
}

#[inherent]
impl CstNode for BooleanValue {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub span: ByteSpan,
}

#[inherent]
impl CstNode for NullValue {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub name: Name<'src>,
    pub span: ByteSpan,
}

/// `[ v1 v2 ... ]`. The span covers both brackets.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub values: Vec<Value<'src>>,
    pub span: ByteSpan,
}

/// `{ f1: v1 ... }`. The span covers both braces.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub fields: Vec<ObjectField<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub span: ByteSpan,
}

impl_cst_node!(
    Name,
    IntValue,
    FloatValue,
    StringValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
);
