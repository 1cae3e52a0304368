use crate::cst::cst_node::impl_cst_node;
use crate::cst::CstNode;
use crate::cst::Name;
use crate::cst::NamedType;
use crate::cst::Type;
use crate::cst::Value;
use crate::ByteSpan;
use inherent::inherent;

// =============================================================================
// Operations
// =============================================================================

/// `query`, `mutation` or `subscription`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationKind::Query),
            "mutation" => Some(OperationKind::Mutation),
            "subscription" => Some(OperationKind::Subscription),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

/// The operation keyword together with its location.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationType {
    pub kind: OperationKind,
    pub span: ByteSpan,
}

#[inherent]
impl CstNode for OperationType {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

/// A named or anonymous operation. `operation_type` is `None` for the
/// `{ ... }` shorthand form.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub operation_type: Option<OperationType>,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Option<VariableDefinitions<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub span: ByteSpan,
}

/// `( $a: T ... )`. The span covers both parentheses.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinitions<'src> {
    pub definitions: Vec<VariableDefinition<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub variable: Variable<'src>,
    pub type_: Type<'src>,
    pub default_value: Option<DefaultValue<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub span: ByteSpan,
}

/// `= value`. The span starts at the `=`.
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultValue<'src> {
    pub value: Value<'src>,
    pub span: ByteSpan,
}

/// `$name`. The span starts at the `$`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<'src> {
    pub name: Name<'src>,
    pub span: ByteSpan,
}

// =============================================================================
// Selections
// =============================================================================

/// `{ selection ... }`. The span covers both braces.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

#[inherent]
impl CstNode for Selection<'_> {
    pub fn span(&self) -> ByteSpan {
        match self {
            Selection::Field(field) => field.span,
            Selection::FragmentSpread(spread) => spread.span,
            Selection::InlineFragment(fragment) => fragment.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);

    pub fn to_source(&self, source: &str) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<Alias<'src>>,
    pub name: Name<'src>,
    pub arguments: Option<Arguments<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
    pub span: ByteSpan,
}

/// `alias:`. The span ends after the colon.
#[derive(Clone, Debug, PartialEq)]
pub struct Alias<'src> {
    pub name: Name<'src>,
    pub span: ByteSpan,
}

/// `( name: value ... )`. The span covers both parentheses.
#[derive(Clone, Debug, PartialEq)]
pub struct Arguments<'src> {
    pub arguments: Vec<Argument<'src>>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub span: ByteSpan,
}

/// `...Name @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub span: ByteSpan,
}

/// `... on Type @directives { ... }`, with the type condition optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<TypeCondition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub span: ByteSpan,
}

/// `on Type`. The span starts at `on`.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCondition<'src> {
    pub named_type: NamedType<'src>,
    pub span: ByteSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub name: Name<'src>,
    pub type_condition: TypeCondition<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub span: ByteSpan,
}

/// `@name(args)`. The span starts at the `@`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'src> {
    pub name: Name<'src>,
    pub arguments: Option<Arguments<'src>>,
    pub span: ByteSpan,
}

impl_cst_node!(
    OperationDefinition,
    VariableDefinitions,
    VariableDefinition,
    DefaultValue,
    Variable,
    SelectionSet,
    Field,
    Alias,
    Arguments,
    Argument,
    FragmentSpread,
    InlineFragment,
    TypeCondition,
    FragmentDefinition,
    Directive,
);
