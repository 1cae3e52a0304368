use crate::tree::graphql_node::impl_graphql_node;
use crate::tree::graphql_node::impl_graphql_node_for_enum;
use crate::tree::LeftPadded;
use crate::tree::Markers;
use crate::tree::NodeId;
use crate::tree::RightPadded;
use crate::tree::Space;

/// A GraphQL name: field, type, argument, variable or directive name.
#[derive(Clone, Debug)]
pub struct Name {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub value: String,
}

impl Name {
    pub fn new(prefix: Space, value: impl Into<String>) -> Self {
        Self {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            value: value.into(),
        }
    }

    pub fn with_value(self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..self
        }
    }
}

/// `$name`. The name's own prefix holds any space after the `$`.
#[derive(Clone, Debug)]
pub struct Variable {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub name: Name,
}

#[derive(Clone, Debug)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

/// Integer literal, kept as written so that `-0` prints unchanged.
#[derive(Clone, Debug)]
pub struct IntValue {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub raw: String,
}

/// Float literal, kept as written so that `1.0e10` prints unchanged.
#[derive(Clone, Debug)]
pub struct FloatValue {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub raw: String,
}

/// A string literal.
///
/// For block strings `value` is the raw text between the `"""` delimiters.
/// For single-line strings `value` holds the decoded characters; the
/// printer re-escapes them, so the original choice of escapes is not kept.
#[derive(Clone, Debug)]
pub struct StringValue {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub value: String,
    pub block: bool,
}

#[derive(Clone, Debug)]
pub struct BooleanValue {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub value: bool,
}

#[derive(Clone, Debug)]
pub struct NullValue {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
}

#[derive(Clone, Debug)]
pub struct EnumValue {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub name: Name,
}

/// `[ … ]`. The last value's `after` is the space before `]`.
#[derive(Clone, Debug)]
pub struct ListValue {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub values: Vec<RightPadded<Value>>,
}

/// `{ … }`. The last field's `after` is the space before `}`.
#[derive(Clone, Debug)]
pub struct ObjectValue {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub fields: Vec<RightPadded<ObjectField>>,
}

#[derive(Clone, Debug)]
pub struct ObjectField {
    pub id: NodeId,
    pub prefix: Space,
    pub markers: Markers,
    pub name: Name,
    pub value: LeftPadded<Value>,
}

impl_graphql_node!(
    Name,
    Variable,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
);

impl_graphql_node_for_enum!(Value {
    Variable,
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
    List,
    Object,
});
