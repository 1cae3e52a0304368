//! Recursive descent parser producing the concrete parse tree in
//! [`crate::cst`].
//!
//! Parsing is fail-fast: the first lexer or grammar error aborts the parse
//! and is returned as a [`GraphQLParseError`]. Every production records the
//! byte span from its first token to its last.

use crate::cst;
use crate::cook_single_line_string;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::ByteSpan;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::SourcePosition;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::path::Path;

/// Errors are boxed so that every recursive frame stays small; parsing
/// nested values and selection sets recurses once per level.
type ParseOutcome<T> = Result<T, Box<GraphQLParseError>>;

/// Deepest nesting of values, selection sets and type references the parser
/// accepts. Deeper input is a parse error rather than a stack overflow, even
/// on a 2 MiB thread stack in an unoptimized build.
pub const MAX_RECURSION_DEPTH: usize = 32;

/// The directive locations recognized in `directive @d on ...`.
pub const DIRECTIVE_LOCATIONS: &[&str] = &[
    "QUERY",
    "MUTATION",
    "SUBSCRIPTION",
    "FIELD",
    "FRAGMENT_DEFINITION",
    "FRAGMENT_SPREAD",
    "INLINE_FRAGMENT",
    "VARIABLE_DEFINITION",
    "SCHEMA",
    "SCALAR",
    "OBJECT",
    "FIELD_DEFINITION",
    "ARGUMENT_DEFINITION",
    "INTERFACE",
    "UNION",
    "ENUM",
    "ENUM_VALUE",
    "INPUT_OBJECT",
    "INPUT_FIELD_DEFINITION",
];

// =============================================================================
// Delimiter tracking
// =============================================================================

/// Context in which a delimiter was opened, for unclosed-delimiter notes.
#[derive(Clone, Copy, Debug)]
enum DelimiterContext {
    SchemaDefinition,
    FieldsDefinition,
    EnumValuesDefinition,
    InputFieldsDefinition,
    SelectionSet,
    Arguments,
    VariableDefinitions,
    ArgumentsDefinition,
    ListType,
    ListValue,
    ObjectValue,
}

impl DelimiterContext {
    fn description(&self) -> &'static str {
        match self {
            DelimiterContext::SchemaDefinition => "schema definition",
            DelimiterContext::FieldsDefinition => "fields definition",
            DelimiterContext::EnumValuesDefinition => "enum values definition",
            DelimiterContext::InputFieldsDefinition => "input fields definition",
            DelimiterContext::SelectionSet => "selection set",
            DelimiterContext::Arguments => "arguments",
            DelimiterContext::VariableDefinitions => "variable definitions",
            DelimiterContext::ArgumentsDefinition => "argument definitions",
            DelimiterContext::ListType => "list type",
            DelimiterContext::ListValue => "list value",
            DelimiterContext::ObjectValue => "object value",
        }
    }
}

#[derive(Clone, Debug)]
struct OpenDelimiter {
    span: GraphQLSourceSpan,
    context: DelimiterContext,
}

/// Whether variables may appear in a value, and if not, where we are (for
/// the error message).
#[derive(Clone, Copy, Debug)]
enum ValueContext {
    Variable,
    Const(&'static str),
}

// =============================================================================
// Parser
// =============================================================================

/// Parses a GraphQL document into a [`cst::Document`].
///
/// ```
/// use libgraphql_cst::GraphQLCstParser;
///
/// let document = GraphQLCstParser::new("type Query { hello: String }")
///     .parse_document()
///     .unwrap();
/// assert_eq!(document.definitions.len(), 1);
/// ```
pub struct GraphQLCstParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// Length of the source text, used for the document span.
    source_len: usize,

    delimiter_stack: SmallVec<[OpenDelimiter; 8]>,

    /// Shared depth counter for values, selection sets and type references.
    recursion_depth: usize,

    /// End of the most recently consumed token; anchors EOF errors and the
    /// end of every production span.
    last_end_position: Option<SourcePosition>,
}

impl<'src> GraphQLCstParser<'src, StrGraphQLTokenSource<'src>> {
    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source), source.len())
    }

    /// Like [`new`](Self::new), with `path` attached to every error span.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self::from_token_source(
            StrGraphQLTokenSource::with_file_path(source, path),
            source.len(),
        )
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLCstParser<'src, TTokenSource> {
    pub fn from_token_source(token_source: TTokenSource, source_len: usize) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            source_len,
            delimiter_stack: SmallVec::new(),
            recursion_depth: 0,
            last_end_position: None,
        }
    }

    /// Parses a complete document. An empty (or all-whitespace) document is
    /// valid and has no definitions.
    pub fn parse_document(
        mut self,
    ) -> Result<cst::Document<'src>, GraphQLParseError> {
        let mut definitions = Vec::new();
        while !self.token_stream.is_at_end() {
            definitions.push(self.parse_definition().map_err(|error| *error)?);
        }
        Ok(cst::Document {
            definitions,
            span: ByteSpan::from_offsets(0, self.source_len),
        })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek_is(&mut self, kind: &GraphQLTokenKind) -> bool {
        self.token_stream.peek().is_some_and(|token| token.kind == *kind)
    }

    /// `true` only for `Name` tokens; `true`/`false`/`null` never match.
    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        self.peek_nth_is_keyword(0, keyword)
    }

    fn peek_nth_is_keyword(&mut self, n: usize, keyword: &str) -> bool {
        matches!(
            self.token_stream.peek_nth(n),
            Some(GraphQLToken { kind: GraphQLTokenKind::Name(name), .. })
                if name.as_ref() == keyword
        )
    }

    fn peek_is_name(&mut self) -> bool {
        matches!(
            self.token_stream.peek(),
            Some(GraphQLToken {
                kind: GraphQLTokenKind::Name(_)
                    | GraphQLTokenKind::True
                    | GraphQLTokenKind::False
                    | GraphQLTokenKind::Null,
                ..
            })
        )
    }

    fn peek_is_string(&mut self) -> bool {
        matches!(
            self.token_stream.peek(),
            Some(GraphQLToken { kind: GraphQLTokenKind::StringValue(_), .. })
        )
    }

    /// Byte offset where the next token starts.
    fn peek_start(&mut self) -> u32 {
        match self.token_stream.peek() {
            Some(token) => token.span.start_inclusive.byte_offset() as u32,
            None => self.last_end_offset(),
        }
    }

    fn last_end_offset(&self) -> u32 {
        self.last_end_position
            .as_ref()
            .map(|pos| pos.byte_offset() as u32)
            .unwrap_or(0)
    }

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: u32) -> ByteSpan {
        ByteSpan::new(start, self.last_end_offset())
    }

    fn eof_span(&self) -> GraphQLSourceSpan {
        let position = self
            .last_end_position
            .clone()
            .unwrap_or_else(SourcePosition::origin);
        GraphQLSourceSpan::empty_at(position, None)
    }

    fn consume_token(&mut self) -> ParseOutcome<GraphQLToken<'src>> {
        match self.token_stream.consume() {
            Some(token) => {
                self.last_end_position = Some(token.span.end_exclusive.clone());
                Ok(token)
            },
            None => Err(Box::new(GraphQLParseError::new(
                "unexpected end of input",
                self.eof_span(),
                GraphQLParseErrorKind::UnexpectedEof { expected: vec![] },
            ))),
        }
    }

    /// Builds the error for "expected one of `expected`, found <next token>".
    /// Lexer error tokens surface as their own message and notes; `Eof`
    /// inside an open delimiter becomes an unclosed-delimiter error.
    fn unexpected(&mut self, expected: &[&str]) -> Box<GraphQLParseError> {
        Box::new(self.unexpected_error(expected))
    }

    fn unexpected_error(&mut self, expected: &[&str]) -> GraphQLParseError {
        let expected_list = expected
            .iter()
            .map(|e| format!("`{e}`"))
            .collect::<Vec<_>>()
            .join(" or ");
        let expected_owned = expected.iter().map(|e| e.to_string()).collect();

        let token = match self.token_stream.peek() {
            Some(token) => token.clone(),
            None => {
                return GraphQLParseError::new(
                    format!("expected {expected_list}, found end of input"),
                    self.eof_span(),
                    GraphQLParseErrorKind::UnexpectedEof { expected: expected_owned },
                );
            },
        };

        match token.kind {
            GraphQLTokenKind::Error { message, error_notes } => {
                GraphQLParseError::from_lexer_error(message, token.span, error_notes)
            },
            GraphQLTokenKind::Eof => match self.delimiter_stack.last().cloned() {
                Some(open) => {
                    let delimiter = self.delimiter_text(open.context);
                    let mut error = GraphQLParseError::new(
                        format!("unclosed `{delimiter}`"),
                        token.span,
                        GraphQLParseErrorKind::UnclosedDelimiter {
                            delimiter: delimiter.to_string(),
                        },
                    );
                    error.add_note_with_span(
                        format!(
                            "opening `{delimiter}` in {} here",
                            open.context.description(),
                        ),
                        open.span,
                    );
                    error
                },
                None => GraphQLParseError::new(
                    format!("expected {expected_list}, found end of input"),
                    token.span,
                    GraphQLParseErrorKind::UnexpectedEof { expected: expected_owned },
                ),
            },
            other => {
                let found = other.describe();
                GraphQLParseError::new(
                    format!("expected {expected_list}, found {found}"),
                    token.span,
                    GraphQLParseErrorKind::UnexpectedToken {
                        expected: expected_owned,
                        found,
                    },
                )
            },
        }
    }

    fn delimiter_text(&self, context: DelimiterContext) -> &'static str {
        match context {
            DelimiterContext::Arguments
            | DelimiterContext::VariableDefinitions
            | DelimiterContext::ArgumentsDefinition => "(",
            DelimiterContext::ListType | DelimiterContext::ListValue => "[",
            DelimiterContext::SchemaDefinition
            | DelimiterContext::FieldsDefinition
            | DelimiterContext::EnumValuesDefinition
            | DelimiterContext::InputFieldsDefinition
            | DelimiterContext::SelectionSet
            | DelimiterContext::ObjectValue => "{",
        }
    }

    /// Consumes a punctuator of the given kind.
    fn expect(&mut self, kind: &GraphQLTokenKind) -> ParseOutcome<GraphQLToken<'src>> {
        if self.peek_is(kind) {
            return self.consume_token();
        }
        let expected = kind.as_punctuator_str().unwrap_or("token");
        Err(self.unexpected(&[expected]))
    }

    /// Consumes a `Name` token with the given text and returns its span.
    fn expect_keyword(&mut self, keyword: &str) -> ParseOutcome<ByteSpan> {
        if self.peek_is_keyword(keyword) {
            return Ok(self.consume_token()?.span.byte_span());
        }
        Err(self.unexpected(&[keyword]))
    }

    /// Consumes a name. `true`, `false` and `null` are valid names outside
    /// of value positions.
    fn expect_name(&mut self) -> ParseOutcome<cst::Name<'src>> {
        if !self.peek_is_name() {
            return Err(self.unexpected(&["name"]));
        }
        let token = self.consume_token()?;
        let value = match token.kind {
            GraphQLTokenKind::Name(name) => name,
            GraphQLTokenKind::True => Cow::Borrowed("true"),
            GraphQLTokenKind::False => Cow::Borrowed("false"),
            _ => Cow::Borrowed("null"),
        };
        Ok(cst::Name {
            value,
            span: token.span.byte_span(),
        })
    }

    fn enter_recursion(&mut self) -> ParseOutcome<()> {
        self.recursion_depth += 1;
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            let span = match self.token_stream.peek() {
                Some(token) => token.span.clone(),
                None => self.eof_span(),
            };
            self.recursion_depth -= 1;
            return Err(Box::new(GraphQLParseError::new(
                "maximum nesting depth exceeded",
                span,
                GraphQLParseErrorKind::InvalidSyntax,
            )));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    /// Parses `open item* close`. When `empty_construct` is `Some`, an empty
    /// list is rejected with that construct name. Returns the items and the
    /// span covering both delimiters.
    fn parse_delimited<T>(
        &mut self,
        open: GraphQLTokenKind<'static>,
        close: GraphQLTokenKind<'static>,
        context: DelimiterContext,
        empty_construct: Option<&'static str>,
        mut parse_item: impl FnMut(&mut Self) -> ParseOutcome<T>,
    ) -> ParseOutcome<(Vec<T>, ByteSpan)> {
        let open_token = self.expect(&open)?;
        let start = open_token.span.byte_span().start;
        self.delimiter_stack.push(OpenDelimiter {
            span: open_token.span.clone(),
            context,
        });

        if let Some(construct) = empty_construct
            && self.peek_is(&close)
        {
            let mut error = GraphQLParseError::new(
                format!("{construct} cannot be empty"),
                open_token.span,
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: construct.to_string(),
                },
            );
            error.add_help(format!("add at least one item or remove the {construct}"));
            return Err(Box::new(error));
        }

        let mut items = Vec::new();
        while !self.peek_is(&close) {
            items.push(parse_item(self)?);
        }
        self.expect(&close)?;
        self.delimiter_stack.pop();
        Ok((items, self.span_from(start)))
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> ParseOutcome<cst::Definition<'src>> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(cst::Definition::Operation(self.parse_operation_definition()?));
        }
        if self.peek_is_string() {
            let start = self.peek_start();
            let description = self.parse_string_value()?;
            return self.parse_type_system_definition(Some(description), start);
        }

        for keyword in ["query", "mutation", "subscription"] {
            if self.peek_is_keyword(keyword) {
                return Ok(cst::Definition::Operation(self.parse_operation_definition()?));
            }
        }
        if self.peek_is_keyword("fragment") {
            return Ok(cst::Definition::Fragment(self.parse_fragment_definition()?));
        }
        if self.peek_is_keyword("extend") {
            return self.parse_extension();
        }

        let start = self.peek_start();
        self.parse_type_system_definition(None, start)
    }

    fn parse_type_system_definition(
        &mut self,
        description: Option<cst::StringValue<'src>>,
        start: u32,
    ) -> ParseOutcome<cst::Definition<'src>> {
        if self.peek_is_keyword("schema") {
            let schema = self.parse_schema_definition(description, start, false)?;
            return Ok(cst::Definition::Schema(schema));
        }
        if self.peek_is_keyword("directive") {
            let directive = self.parse_directive_definition(description, start)?;
            return Ok(cst::Definition::Directive(directive));
        }
        if let Some(type_def) = self.parse_type_definition(description, start, false)? {
            return Ok(cst::Definition::Type(type_def));
        }
        Err(self.unexpected(&[
            "query",
            "mutation",
            "subscription",
            "fragment",
            "schema",
            "scalar",
            "type",
            "interface",
            "union",
            "enum",
            "input",
            "directive",
            "extend",
            "{",
        ]))
    }

    /// Parses a type definition if the next token starts one; `Ok(None)`
    /// otherwise.
    fn parse_type_definition(
        &mut self,
        description: Option<cst::StringValue<'src>>,
        start: u32,
        is_extension: bool,
    ) -> ParseOutcome<Option<cst::TypeDefinition<'src>>> {
        let type_def = if self.peek_is_keyword("scalar") {
            cst::TypeDefinition::Scalar(self.parse_scalar_type_definition(description, start)?)
        } else if self.peek_is_keyword("type") {
            cst::TypeDefinition::Object(self.parse_object_type_definition(description, start)?)
        } else if self.peek_is_keyword("interface") {
            cst::TypeDefinition::Interface(
                self.parse_interface_type_definition(description, start)?,
            )
        } else if self.peek_is_keyword("union") {
            cst::TypeDefinition::Union(self.parse_union_type_definition(description, start)?)
        } else if self.peek_is_keyword("enum") {
            cst::TypeDefinition::Enum(self.parse_enum_type_definition(description, start)?)
        } else if self.peek_is_keyword("input") {
            cst::TypeDefinition::InputObject(
                self.parse_input_object_type_definition(description, start)?,
            )
        } else {
            return Ok(None);
        };

        if is_extension && extension_is_empty(&type_def) {
            return Err(Box::new(GraphQLParseError::new(
                "type extension must add directives, interfaces, members, or fields",
                self.eof_span(),
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "type extension".to_string(),
                },
            )));
        }
        Ok(Some(type_def))
    }

    fn parse_extension(&mut self) -> ParseOutcome<cst::Definition<'src>> {
        let start = self.expect_keyword("extend")?.start;
        let inner_start = self.peek_start();

        if self.peek_is_keyword("schema") {
            let definition = self.parse_schema_definition(None, inner_start, true)?;
            if definition.directives.is_empty() && definition.root_operation_types.is_none() {
                return Err(Box::new(GraphQLParseError::new(
                    "schema extension must add directives or root operation types",
                    self.eof_span(),
                    GraphQLParseErrorKind::InvalidEmptyConstruct {
                        construct: "schema extension".to_string(),
                    },
                )));
            }
            return Ok(cst::Definition::SchemaExtension(cst::SchemaExtension {
                definition,
                span: self.span_from(start),
            }));
        }

        match self.parse_type_definition(None, inner_start, true)? {
            Some(definition) => Ok(cst::Definition::TypeExtension(cst::TypeExtension {
                definition,
                span: self.span_from(start),
            })),
            None => Err(self.unexpected(&[
                "schema",
                "scalar",
                "type",
                "interface",
                "union",
                "enum",
                "input",
            ])),
        }
    }

    // =========================================================================
    // Operations and fragments
    // =========================================================================

    fn parse_operation_definition(&mut self) -> ParseOutcome<cst::OperationDefinition<'src>> {
        let start = self.peek_start();

        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(cst::OperationDefinition {
                operation_type: None,
                name: None,
                variable_definitions: None,
                directives: Vec::new(),
                selection_set,
                span: self.span_from(start),
            });
        }

        let operation_type = self.parse_operation_type()?;
        let name = if self.peek_is_name() {
            Some(self.expect_name()?)
        } else {
            None
        };
        let variable_definitions = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            Some(self.parse_variable_definitions()?)
        } else {
            None
        };
        let directives = self.parse_directives(ValueContext::Variable)?;
        let selection_set = self.parse_selection_set()?;

        Ok(cst::OperationDefinition {
            operation_type: Some(operation_type),
            name,
            variable_definitions,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    fn parse_operation_type(&mut self) -> ParseOutcome<cst::OperationType> {
        let kind = match self.token_stream.peek() {
            Some(GraphQLToken { kind: GraphQLTokenKind::Name(name), .. }) => {
                cst::OperationKind::from_keyword(name)
            },
            _ => None,
        };
        match kind {
            Some(kind) => Ok(cst::OperationType {
                kind,
                span: self.consume_token()?.span.byte_span(),
            }),
            None => Err(self.unexpected(&["query", "mutation", "subscription"])),
        }
    }

    fn parse_variable_definitions(&mut self) -> ParseOutcome<cst::VariableDefinitions<'src>> {
        let (definitions, span) = self.parse_delimited(
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            DelimiterContext::VariableDefinitions,
            Some("variable definitions"),
            Self::parse_variable_definition,
        )?;
        Ok(cst::VariableDefinitions { definitions, span })
    }

    fn parse_variable_definition(&mut self) -> ParseOutcome<cst::VariableDefinition<'src>> {
        let start = self.peek_start();
        let variable = self.parse_variable()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let type_ = self.parse_type()?;
        let default_value = self.parse_default_value()?;
        let directives = self.parse_directives(ValueContext::Const("variable directives"))?;
        Ok(cst::VariableDefinition {
            variable,
            type_,
            default_value,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_default_value(&mut self) -> ParseOutcome<Option<cst::DefaultValue<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::Equals) {
            return Ok(None);
        }
        let start = self.consume_token()?.span.byte_span().start;
        let value = self.parse_value(ValueContext::Const("default values"))?;
        Ok(Some(cst::DefaultValue {
            value,
            span: self.span_from(start),
        }))
    }

    fn parse_variable(&mut self) -> ParseOutcome<cst::Variable<'src>> {
        let start = self.expect(&GraphQLTokenKind::Dollar)?.span.byte_span().start;
        let name = self.expect_name()?;
        Ok(cst::Variable {
            name,
            span: self.span_from(start),
        })
    }

    fn parse_fragment_definition(&mut self) -> ParseOutcome<cst::FragmentDefinition<'src>> {
        let start = self.expect_keyword("fragment")?.start;
        if self.peek_is_keyword("on") {
            let span = match self.token_stream.peek() {
                Some(token) => token.span.clone(),
                None => self.eof_span(),
            };
            let mut error = GraphQLParseError::new(
                "fragment name cannot be `on`",
                span,
                GraphQLParseErrorKind::ReservedName {
                    name: "on".to_string(),
                },
            );
            error.add_spec("https://spec.graphql.org/September2025/#FragmentName");
            return Err(Box::new(error));
        }
        let name = self.expect_name()?;
        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directives(ValueContext::Variable)?;
        let selection_set = self.parse_selection_set()?;
        Ok(cst::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    fn parse_type_condition(&mut self) -> ParseOutcome<cst::TypeCondition<'src>> {
        let start = self.expect_keyword("on")?.start;
        let named_type = self.parse_named_type()?;
        Ok(cst::TypeCondition {
            named_type,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> ParseOutcome<cst::SelectionSet<'src>> {
        self.enter_recursion()?;
        let result = self.parse_delimited(
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::CurlyBraceClose,
            DelimiterContext::SelectionSet,
            Some("selection set"),
            Self::parse_selection,
        );
        self.exit_recursion();
        let (selections, span) = result?;
        Ok(cst::SelectionSet { selections, span })
    }

    fn parse_selection(&mut self) -> ParseOutcome<cst::Selection<'src>> {
        if !self.peek_is(&GraphQLTokenKind::Ellipsis) {
            return Ok(cst::Selection::Field(self.parse_field()?));
        }

        let start = self.consume_token()?.span.byte_span().start;
        if self.peek_is_name() && !self.peek_is_keyword("on") {
            let name = self.expect_name()?;
            let directives = self.parse_directives(ValueContext::Variable)?;
            return Ok(cst::Selection::FragmentSpread(cst::FragmentSpread {
                name,
                directives,
                span: self.span_from(start),
            }));
        }

        let type_condition = if self.peek_is_keyword("on") {
            Some(self.parse_type_condition()?)
        } else {
            None
        };
        let directives = self.parse_directives(ValueContext::Variable)?;
        let selection_set = self.parse_selection_set()?;
        Ok(cst::Selection::InlineFragment(cst::InlineFragment {
            type_condition,
            directives,
            selection_set,
            span: self.span_from(start),
        }))
    }

    fn parse_field(&mut self) -> ParseOutcome<cst::Field<'src>> {
        let start = self.peek_start();
        let first_name = self.expect_name()?;

        let (alias, name) = if self.peek_is(&GraphQLTokenKind::Colon) {
            self.consume_token()?;
            let alias = cst::Alias {
                name: first_name,
                span: self.span_from(start),
            };
            (Some(alias), self.expect_name()?)
        } else {
            (None, first_name)
        };

        let arguments = self.parse_optional_arguments(ValueContext::Variable)?;
        let directives = self.parse_directives(ValueContext::Variable)?;
        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(cst::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    fn parse_optional_arguments(
        &mut self,
        context: ValueContext,
    ) -> ParseOutcome<Option<cst::Arguments<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(None);
        }
        let (arguments, span) = self.parse_delimited(
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            DelimiterContext::Arguments,
            Some("argument list"),
            |parser| parser.parse_argument(context),
        )?;
        Ok(Some(cst::Arguments { arguments, span }))
    }

    fn parse_argument(&mut self, context: ValueContext) -> ParseOutcome<cst::Argument<'src>> {
        let start = self.peek_start();
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(cst::Argument {
            name,
            value,
            span: self.span_from(start),
        })
    }

    fn parse_directives(
        &mut self,
        context: ValueContext,
    ) -> ParseOutcome<Vec<cst::Directive<'src>>> {
        let mut directives = Vec::new();
        while self.peek_is(&GraphQLTokenKind::At) {
            let start = self.consume_token()?.span.byte_span().start;
            let name = self.expect_name()?;
            let arguments = self.parse_optional_arguments(context)?;
            directives.push(cst::Directive {
                name,
                arguments,
                span: self.span_from(start),
            });
        }
        Ok(directives)
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self, context: ValueContext) -> ParseOutcome<cst::Value<'src>> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, context: ValueContext) -> ParseOutcome<cst::Value<'src>> {
        let kind = match self.token_stream.peek() {
            Some(token) => token.kind.clone(),
            None => return Err(self.unexpected(&["value"])),
        };

        match kind {
            GraphQLTokenKind::Dollar => {
                if let ValueContext::Const(location) = context {
                    let span = match self.token_stream.peek() {
                        Some(token) => token.span.clone(),
                        None => self.eof_span(),
                    };
                    return Err(Box::new(GraphQLParseError::new(
                        format!("variables are not allowed in {location}"),
                        span,
                        GraphQLParseErrorKind::InvalidSyntax,
                    )));
                }
                Ok(cst::Value::Variable(self.parse_variable()?))
            },
            GraphQLTokenKind::IntValue(raw) => Ok(cst::Value::Int(cst::IntValue {
                raw,
                span: self.consume_token()?.span.byte_span(),
            })),
            GraphQLTokenKind::FloatValue(raw) => Ok(cst::Value::Float(cst::FloatValue {
                raw,
                span: self.consume_token()?.span.byte_span(),
            })),
            GraphQLTokenKind::StringValue(_) => {
                Ok(cst::Value::String(self.parse_string_value()?))
            },
            GraphQLTokenKind::True => Ok(cst::Value::Boolean(cst::BooleanValue {
                value: true,
                span: self.consume_token()?.span.byte_span(),
            })),
            GraphQLTokenKind::False => Ok(cst::Value::Boolean(cst::BooleanValue {
                value: false,
                span: self.consume_token()?.span.byte_span(),
            })),
            GraphQLTokenKind::Null => Ok(cst::Value::Null(cst::NullValue {
                span: self.consume_token()?.span.byte_span(),
            })),
            GraphQLTokenKind::Name(_) => {
                let name = self.expect_name()?;
                let span = name.span;
                Ok(cst::Value::Enum(cst::EnumValue { name, span }))
            },
            GraphQLTokenKind::SquareBracketOpen => {
                Ok(cst::Value::List(self.parse_list_value(context)?))
            },
            GraphQLTokenKind::CurlyBraceOpen => {
                Ok(cst::Value::Object(self.parse_object_value(context)?))
            },
            _ => Err(self.unexpected(&["value"])),
        }
    }

    // List and object values live outside `parse_value_impl` so the frame
    // that recurses per nesting level stays small.
    #[inline(never)]
    fn parse_list_value(
        &mut self,
        context: ValueContext,
    ) -> ParseOutcome<cst::ListValue<'src>> {
        let (values, span) = self.parse_delimited(
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            DelimiterContext::ListValue,
            None,
            |parser| parser.parse_value(context),
        )?;
        Ok(cst::ListValue { values, span })
    }

    #[inline(never)]
    fn parse_object_value(
        &mut self,
        context: ValueContext,
    ) -> ParseOutcome<cst::ObjectValue<'src>> {
        let (fields, span) = self.parse_delimited(
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::CurlyBraceClose,
            DelimiterContext::ObjectValue,
            None,
            |parser| parser.parse_object_field(context),
        )?;
        Ok(cst::ObjectValue { fields, span })
    }

    fn parse_object_field(
        &mut self,
        context: ValueContext,
    ) -> ParseOutcome<cst::ObjectField<'src>> {
        let start = self.peek_start();
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(cst::ObjectField {
            name,
            value,
            span: self.span_from(start),
        })
    }

    /// Parses a string token. Single-line strings are cooked once to reject
    /// invalid escape sequences.
    fn parse_string_value(&mut self) -> ParseOutcome<cst::StringValue<'src>> {
        if !self.peek_is_string() {
            return Err(self.unexpected(&["string"]));
        }
        let token = self.consume_token()?;
        let GraphQLTokenKind::StringValue(raw) = token.kind else {
            return Err(Box::new(GraphQLParseError::new(
                "expected string",
                token.span,
                GraphQLParseErrorKind::InvalidSyntax,
            )));
        };

        let block = raw.starts_with("\"\"\"");
        if !block && let Err(error) = cook_single_line_string(&raw) {
            return Err(Box::new(GraphQLParseError::new(
                format!("invalid string literal: {error}"),
                token.span,
                GraphQLParseErrorKind::InvalidString(error),
            )));
        }
        Ok(cst::StringValue {
            raw,
            block,
            span: token.span.byte_span(),
        })
    }

    // =========================================================================
    // Type references
    // =========================================================================

    fn parse_type(&mut self) -> ParseOutcome<cst::Type<'src>> {
        self.enter_recursion()?;
        let result = self.parse_type_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_impl(&mut self) -> ParseOutcome<cst::Type<'src>> {
        let start = self.peek_start();
        let base = if self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            let open_token = self.consume_token()?;
            self.delimiter_stack.push(OpenDelimiter {
                span: open_token.span,
                context: DelimiterContext::ListType,
            });
            let inner = self.parse_type()?;
            self.expect(&GraphQLTokenKind::SquareBracketClose)?;
            self.delimiter_stack.pop();
            cst::Type::List {
                inner: Box::new(inner),
                span: self.span_from(start),
            }
        } else if self.peek_is_name() {
            cst::Type::Named(self.parse_named_type()?)
        } else {
            return Err(self.unexpected(&["type"]));
        };

        if self.peek_is(&GraphQLTokenKind::Bang) {
            self.consume_token()?;
            return Ok(cst::Type::NonNull {
                inner: Box::new(base),
                span: self.span_from(start),
            });
        }
        Ok(base)
    }

    fn parse_named_type(&mut self) -> ParseOutcome<cst::NamedType<'src>> {
        let name = self.expect_name()?;
        let span = name.span;
        Ok(cst::NamedType { name, span })
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn parse_optional_description(&mut self) -> ParseOutcome<Option<cst::StringValue<'src>>> {
        if self.peek_is_string() {
            Ok(Some(self.parse_string_value()?))
        } else {
            Ok(None)
        }
    }

    fn parse_schema_definition(
        &mut self,
        description: Option<cst::StringValue<'src>>,
        start: u32,
        is_extension: bool,
    ) -> ParseOutcome<cst::SchemaDefinition<'src>> {
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(ValueContext::Const("schema directives"))?;

        let root_operation_types =
            if !is_extension || self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
                let (definitions, span) = self.parse_delimited(
                    GraphQLTokenKind::CurlyBraceOpen,
                    GraphQLTokenKind::CurlyBraceClose,
                    DelimiterContext::SchemaDefinition,
                    Some("schema definition"),
                    Self::parse_root_operation_type_definition,
                )?;
                Some(cst::RootOperationTypes { definitions, span })
            } else {
                None
            };

        Ok(cst::SchemaDefinition {
            description,
            directives,
            root_operation_types,
            span: self.span_from(start),
        })
    }

    fn parse_root_operation_type_definition(
        &mut self,
    ) -> ParseOutcome<cst::RootOperationTypeDefinition<'src>> {
        let operation_type = self.parse_operation_type()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let named_type = self.parse_named_type()?;
        Ok(cst::RootOperationTypeDefinition {
            span: self.span_from(operation_type.span.start),
            operation_type,
            named_type,
        })
    }

    fn parse_scalar_type_definition(
        &mut self,
        description: Option<cst::StringValue<'src>>,
        start: u32,
    ) -> ParseOutcome<cst::ScalarTypeDefinition<'src>> {
        self.expect_keyword("scalar")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::Const("type system directives"))?;
        Ok(cst::ScalarTypeDefinition {
            description,
            name,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_object_type_definition(
        &mut self,
        description: Option<cst::StringValue<'src>>,
        start: u32,
    ) -> ParseOutcome<cst::ObjectTypeDefinition<'src>> {
        self.expect_keyword("type")?;
        let name = self.expect_name()?;
        let implements_interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ValueContext::Const("type system directives"))?;
        let fields = self.parse_optional_fields_definition()?;
        Ok(cst::ObjectTypeDefinition {
            description,
            name,
            implements_interfaces,
            directives,
            fields,
            span: self.span_from(start),
        })
    }

    fn parse_interface_type_definition(
        &mut self,
        description: Option<cst::StringValue<'src>>,
        start: u32,
    ) -> ParseOutcome<cst::InterfaceTypeDefinition<'src>> {
        self.expect_keyword("interface")?;
        let name = self.expect_name()?;
        let implements_interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ValueContext::Const("type system directives"))?;
        let fields = self.parse_optional_fields_definition()?;
        Ok(cst::InterfaceTypeDefinition {
            description,
            name,
            implements_interfaces,
            directives,
            fields,
            span: self.span_from(start),
        })
    }

    fn parse_union_type_definition(
        &mut self,
        description: Option<cst::StringValue<'src>>,
        start: u32,
    ) -> ParseOutcome<cst::UnionTypeDefinition<'src>> {
        self.expect_keyword("union")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::Const("type system directives"))?;

        let member_types = if self.peek_is(&GraphQLTokenKind::Equals) {
            let list_start = self.consume_token()?.span.byte_span().start;
            if self.peek_is(&GraphQLTokenKind::Pipe) {
                self.consume_token()?;
            }
            let mut members = cst::UnionMemberTypes {
                rest: None,
                named_type: self.parse_named_type()?,
                span: self.span_from(list_start),
            };
            while self.peek_is(&GraphQLTokenKind::Pipe) {
                self.consume_token()?;
                let named_type = self.parse_named_type()?;
                members = cst::UnionMemberTypes {
                    rest: Some(Box::new(members)),
                    named_type,
                    span: self.span_from(list_start),
                };
            }
            Some(members)
        } else {
            None
        };

        Ok(cst::UnionTypeDefinition {
            description,
            name,
            directives,
            member_types,
            span: self.span_from(start),
        })
    }

    fn parse_enum_type_definition(
        &mut self,
        description: Option<cst::StringValue<'src>>,
        start: u32,
    ) -> ParseOutcome<cst::EnumTypeDefinition<'src>> {
        self.expect_keyword("enum")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::Const("type system directives"))?;
        let values = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            let (definitions, span) = self.parse_delimited(
                GraphQLTokenKind::CurlyBraceOpen,
                GraphQLTokenKind::CurlyBraceClose,
                DelimiterContext::EnumValuesDefinition,
                None,
                Self::parse_enum_value_definition,
            )?;
            Some(cst::EnumValuesDefinition { definitions, span })
        } else {
            None
        };
        Ok(cst::EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            span: self.span_from(start),
        })
    }

    fn parse_enum_value_definition(&mut self) -> ParseOutcome<cst::EnumValueDefinition<'src>> {
        let start = self.peek_start();
        let description = self.parse_optional_description()?;

        let reserved = match self.token_stream.peek() {
            Some(token) => match token.kind {
                GraphQLTokenKind::True => Some(("true", token.span.clone())),
                GraphQLTokenKind::False => Some(("false", token.span.clone())),
                GraphQLTokenKind::Null => Some(("null", token.span.clone())),
                _ => None,
            },
            None => None,
        };
        if let Some((name, span)) = reserved {
            return Err(Box::new(GraphQLParseError::new(
                format!("enum value cannot be `{name}`"),
                span,
                GraphQLParseErrorKind::ReservedName {
                    name: name.to_string(),
                },
            )));
        }

        let name = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::Const("type system directives"))?;
        Ok(cst::EnumValueDefinition {
            description,
            name,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
        description: Option<cst::StringValue<'src>>,
        start: u32,
    ) -> ParseOutcome<cst::InputObjectTypeDefinition<'src>> {
        self.expect_keyword("input")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(ValueContext::Const("type system directives"))?;
        let fields = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            let (definitions, span) = self.parse_delimited(
                GraphQLTokenKind::CurlyBraceOpen,
                GraphQLTokenKind::CurlyBraceClose,
                DelimiterContext::InputFieldsDefinition,
                None,
                Self::parse_input_value_definition,
            )?;
            Some(cst::InputFieldsDefinition { definitions, span })
        } else {
            None
        };
        Ok(cst::InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            span: self.span_from(start),
        })
    }

    fn parse_implements_interfaces(
        &mut self,
    ) -> ParseOutcome<Option<cst::ImplementsInterfaces<'src>>> {
        if !self.peek_is_keyword("implements") {
            return Ok(None);
        }
        let list_start = self.expect_keyword("implements")?.start;
        if self.peek_is(&GraphQLTokenKind::Ampersand) {
            self.consume_token()?;
        }
        let mut interfaces = cst::ImplementsInterfaces {
            rest: None,
            named_type: self.parse_named_type()?,
            span: self.span_from(list_start),
        };
        while self.peek_is(&GraphQLTokenKind::Ampersand) {
            self.consume_token()?;
            let named_type = self.parse_named_type()?;
            interfaces = cst::ImplementsInterfaces {
                rest: Some(Box::new(interfaces)),
                named_type,
                span: self.span_from(list_start),
            };
        }
        Ok(Some(interfaces))
    }

    fn parse_optional_fields_definition(
        &mut self,
    ) -> ParseOutcome<Option<cst::FieldsDefinition<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(None);
        }
        let (definitions, span) = self.parse_delimited(
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::CurlyBraceClose,
            DelimiterContext::FieldsDefinition,
            None,
            Self::parse_field_definition,
        )?;
        Ok(Some(cst::FieldsDefinition { definitions, span }))
    }

    fn parse_field_definition(&mut self) -> ParseOutcome<cst::FieldDefinition<'src>> {
        let start = self.peek_start();
        let description = self.parse_optional_description()?;
        let name = self.expect_name()?;
        let arguments_definition = self.parse_optional_arguments_definition()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let type_ = self.parse_type()?;
        let directives = self.parse_directives(ValueContext::Const("type system directives"))?;
        Ok(cst::FieldDefinition {
            description,
            name,
            arguments_definition,
            type_,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_optional_arguments_definition(
        &mut self,
    ) -> ParseOutcome<Option<cst::ArgumentsDefinition<'src>>> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(None);
        }
        let (definitions, span) = self.parse_delimited(
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            DelimiterContext::ArgumentsDefinition,
            Some("argument definition list"),
            Self::parse_input_value_definition,
        )?;
        Ok(Some(cst::ArgumentsDefinition { definitions, span }))
    }

    fn parse_input_value_definition(&mut self) -> ParseOutcome<cst::InputValueDefinition<'src>> {
        let start = self.peek_start();
        let description = self.parse_optional_description()?;
        let name = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let type_ = self.parse_type()?;
        let default_value = self.parse_default_value()?;
        let directives = self.parse_directives(ValueContext::Const("type system directives"))?;
        Ok(cst::InputValueDefinition {
            description,
            name,
            type_,
            default_value,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_directive_definition(
        &mut self,
        description: Option<cst::StringValue<'src>>,
        start: u32,
    ) -> ParseOutcome<cst::DirectiveDefinition<'src>> {
        self.expect_keyword("directive")?;
        self.expect(&GraphQLTokenKind::At)?;
        let name = self.expect_name()?;
        let arguments_definition = self.parse_optional_arguments_definition()?;
        let repeatable = if self.peek_is_keyword("repeatable") {
            Some(self.expect_keyword("repeatable")?)
        } else {
            None
        };

        let list_start = self.expect_keyword("on")?.start;
        if self.peek_is(&GraphQLTokenKind::Pipe) {
            self.consume_token()?;
        }
        let mut locations = cst::DirectiveLocations {
            rest: None,
            location: self.parse_directive_location()?,
            span: self.span_from(list_start),
        };
        while self.peek_is(&GraphQLTokenKind::Pipe) {
            self.consume_token()?;
            let location = self.parse_directive_location()?;
            locations = cst::DirectiveLocations {
                rest: Some(Box::new(locations)),
                location,
                span: self.span_from(list_start),
            };
        }

        Ok(cst::DirectiveDefinition {
            description,
            name,
            arguments_definition,
            repeatable,
            locations,
            span: self.span_from(start),
        })
    }

    fn parse_directive_location(&mut self) -> ParseOutcome<cst::Name<'src>> {
        let diagnostic_span = match self.token_stream.peek() {
            Some(token) => token.span.clone(),
            None => self.eof_span(),
        };
        let name = self.expect_name()?;
        if DIRECTIVE_LOCATIONS.iter().any(|location| *location == name.value) {
            return Ok(name);
        }

        let mut error = GraphQLParseError::new(
            format!("unknown directive location `{}`", name.value),
            diagnostic_span,
            GraphQLParseErrorKind::InvalidSyntax,
        );
        if let Some(suggestion) = suggest_directive_location(&name.value) {
            error.add_help(format!("did you mean `{suggestion}`?"));
        }
        Err(Box::new(error))
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// An extension that adds nothing: `extend type Foo` with no interfaces,
/// directives, or body.
fn extension_is_empty(type_def: &cst::TypeDefinition<'_>) -> bool {
    match type_def {
        cst::TypeDefinition::Scalar(def) => def.directives.is_empty(),
        cst::TypeDefinition::Object(def) => {
            def.implements_interfaces.is_none()
                && def.directives.is_empty()
                && def.fields.is_none()
        },
        cst::TypeDefinition::Interface(def) => {
            def.implements_interfaces.is_none()
                && def.directives.is_empty()
                && def.fields.is_none()
        },
        cst::TypeDefinition::Union(def) => {
            def.directives.is_empty() && def.member_types.is_none()
        },
        cst::TypeDefinition::Enum(def) => def.directives.is_empty() && def.values.is_none(),
        cst::TypeDefinition::InputObject(def) => {
            def.directives.is_empty() && def.fields.is_none()
        },
    }
}

/// The closest known directive location within an edit distance of 3.
fn suggest_directive_location(input: &str) -> Option<&'static str> {
    let input_upper = input.to_uppercase();
    let mut best_match = None;
    let mut best_distance = usize::MAX;
    for &location in DIRECTIVE_LOCATIONS {
        let distance = edit_distance(&input_upper, location);
        if distance < best_distance && distance <= 3 {
            best_distance = distance;
            best_match = Some(location);
        }
    }
    best_match
}

/// Levenshtein distance.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];
    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_chars.len()]
}
