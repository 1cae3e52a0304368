use crate::tree::Argument;
use crate::tree::BooleanValue;
use crate::tree::Container;
use crate::tree::Definition;
use crate::tree::Description;
use crate::tree::Directive;
use crate::tree::DirectiveDefinition;
use crate::tree::DirectiveLocation;
use crate::tree::DirectiveLocationKind;
use crate::tree::Document;
use crate::tree::EnumTypeDefinition;
use crate::tree::EnumValue;
use crate::tree::EnumValueDefinition;
use crate::tree::Field;
use crate::tree::FieldDefinition;
use crate::tree::FloatValue;
use crate::tree::FragmentDefinition;
use crate::tree::FragmentSpread;
use crate::tree::GraphQLNode;
use crate::tree::InlineFragment;
use crate::tree::InputObjectTypeDefinition;
use crate::tree::InputValueDefinition;
use crate::tree::IntValue;
use crate::tree::InterfaceTypeDefinition;
use crate::tree::LeftPadded;
use crate::tree::ListType;
use crate::tree::ListValue;
use crate::tree::Markers;
use crate::tree::Name;
use crate::tree::NamedType;
use crate::tree::NodeId;
use crate::tree::NonNullType;
use crate::tree::NullValue;
use crate::tree::ObjectField;
use crate::tree::ObjectTypeDefinition;
use crate::tree::ObjectValue;
use crate::tree::OperationDefinition;
use crate::tree::OperationType;
use crate::tree::RightPadded;
use crate::tree::RootOperationTypeDefinition;
use crate::tree::ScalarTypeDefinition;
use crate::tree::SchemaDefinition;
use crate::tree::SchemaExtension;
use crate::tree::Selection;
use crate::tree::SelectionSet;
use crate::tree::Space;
use crate::tree::StringValue;
use crate::tree::Type;
use crate::tree::TypeCondition;
use crate::tree::TypeDefinition;
use crate::tree::TypeExtension;
use crate::tree::UnionTypeDefinition;
use crate::tree::Value;
use crate::tree::Variable;
use crate::tree::VariableDefinition;
use crate::Cursor;
use crate::TreeBuildError;
use libgraphql_cst::cook_single_line_string;
use libgraphql_cst::cst;
use libgraphql_cst::cst::CstNode;
use libgraphql_cst::ByteSpan;
use std::path::PathBuf;

type BuildOutcome<T> = Result<T, TreeBuildError>;

const BYTE_ORDER_MARK: &[u8] = "\u{FEFF}".as_bytes();

/// Builds a lossless [`Document`] from a concrete parse tree and the source
/// text it was parsed from.
///
/// The concrete tree knows where every production starts and ends but not
/// what lies between tokens. The builder walks the productions in source
/// order and recovers that text from the source through a single
/// forward-only [`Cursor`]: each gap between the cursor and the next token
/// becomes a [`Space`], and fixed punctuation and keywords are consumed as
/// they are reached. Once every definition is built, whatever remains
/// becomes the document's end-of-file space, so the cursor always finishes
/// at the end of the source.
///
/// A builder is consumed by [`build`](TreeBuilder::build) and cannot be
/// reused.
pub struct TreeBuilder<'src> {
    source: &'src str,
    cursor: Cursor,
}

impl<'src> TreeBuilder<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            cursor: Cursor::default(),
        }
    }

    pub fn build(
        mut self,
        document: &cst::Document<'_>,
        source_path: impl Into<PathBuf>,
        charset: Option<String>,
    ) -> BuildOutcome<Document> {
        self.build_document(document, source_path.into(), charset)
    }

    /// Where the next unconsumed source byte is. After a successful
    /// [`build_document`](Self::build_document) this is the source length.
    pub(crate) fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub(crate) fn build_document(
        &mut self,
        document: &cst::Document<'_>,
        source_path: PathBuf,
        charset: Option<String>,
    ) -> BuildOutcome<Document> {
        let mut definitions = Vec::with_capacity(document.definitions.len());
        for definition in &document.definitions {
            let built = self.build_definition(definition)?;
            log::trace!(
                "built definition ending at byte {} of {}",
                self.cursor.offset(),
                self.source.len(),
            );
            definitions.push(built);
        }
        let eof = self.prefix_before(self.source.len())?;

        Ok(Document {
            id: NodeId::random(),
            prefix: Space::empty(),
            markers: Markers::empty(),
            source_path,
            charset,
            definitions,
            eof,
        })
    }

    // =========================================================================
    // Cursor primitives
    // =========================================================================

    /// Returns `source[start..end]`, checking order and bounds.
    fn gap(&self, start: usize, end: usize) -> BuildOutcome<&'src str> {
        if end < start {
            return Err(TreeBuildError::CursorRegression {
                from: start,
                to: end,
            });
        }
        self.source.get(start..end).ok_or(TreeBuildError::SpanOutOfBounds {
            start,
            end,
            source_len: self.source.len(),
        })
    }

    fn span_text(&self, span: ByteSpan) -> BuildOutcome<&'src str> {
        span.slice(self.source).ok_or(TreeBuildError::SpanOutOfBounds {
            start: span.start_offset(),
            end: span.end_offset(),
            source_len: self.source.len(),
        })
    }

    /// Formats the text between the cursor and `start` (a token start) and
    /// moves the cursor to `start`.
    fn prefix_before(&mut self, start: usize) -> BuildOutcome<Space> {
        let space = Space::format(self.gap(self.cursor.offset(), start)?);
        self.cursor.advance_to(start)?;
        Ok(space)
    }

    /// Skips trivia from the cursor, requires `literal` next and moves the
    /// cursor past it. Returns the skipped trivia.
    fn source_before(&mut self, literal: &str) -> BuildOutcome<Space> {
        let from = self.cursor.offset();
        let start = self.scan_trivia(from);
        if !self.literal_at(start, literal) {
            return Err(TreeBuildError::MissingToken {
                expected: literal.to_string(),
                offset: start,
            });
        }
        let space = Space::format(self.gap(from, start)?);
        self.cursor.advance_to(start + literal.len())?;
        Ok(space)
    }

    /// Requires `literal` exactly at the cursor and moves past it.
    fn consume_literal(&mut self, literal: &str) -> BuildOutcome<()> {
        let offset = self.cursor.offset();
        if !self.literal_at(offset, literal) {
            return Err(TreeBuildError::MissingToken {
                expected: literal.to_string(),
                offset,
            });
        }
        self.cursor.advance_to(offset + literal.len())
    }

    /// Moves the cursor to `end` unless it is already there or past it.
    fn consume_through(&mut self, end: usize) -> BuildOutcome<()> {
        if end <= self.cursor.offset() {
            return Ok(());
        }
        if !self.source.is_char_boundary(end) {
            return Err(TreeBuildError::SpanOutOfBounds {
                start: self.cursor.offset(),
                end,
                source_len: self.source.len(),
            });
        }
        self.cursor.advance_to(end)
    }

    /// Consumes trivia, `separator` and trivia again, returning the whole
    /// run as one space.
    fn separator_space(&mut self, separator: &str) -> BuildOutcome<Space> {
        let from = self.cursor.offset();
        let separator_start = self.scan_trivia(from);
        if !self.literal_at(separator_start, separator) {
            return Err(TreeBuildError::MissingToken {
                expected: separator.to_string(),
                offset: separator_start,
            });
        }
        let end = self.scan_trivia(separator_start + separator.len());
        let space = Space::format(self.gap(from, end)?);
        self.cursor.advance_to(end)?;
        Ok(space)
    }

    /// Whether `literal` is the next significant text after the cursor.
    fn peek_literal(&self, literal: &str) -> bool {
        self.literal_at(self.scan_trivia(self.cursor.offset()), literal)
    }

    /// Offset of the first significant byte at or after `from`.
    fn scan_trivia(&self, from: usize) -> usize {
        let bytes = self.source.as_bytes();
        let mut offset = from;
        while offset < bytes.len() {
            match bytes[offset] {
                b' ' | b'\t' | b'\n' | b'\r' | b',' => offset += 1,
                b'#' => {
                    let rest = &bytes[offset..];
                    offset += memchr::memchr2(b'\n', b'\r', rest)
                        .unwrap_or(rest.len());
                },
                _ if bytes[offset..].starts_with(BYTE_ORDER_MARK) => {
                    offset += BYTE_ORDER_MARK.len();
                },
                _ => break,
            }
        }
        offset
    }

    /// Whether `literal` appears at `offset`. Keywords must also end at a
    /// name boundary, so `on` does not match the start of `one`.
    fn literal_at(&self, offset: usize, literal: &str) -> bool {
        let bytes = self.source.as_bytes();
        let Some(rest) = bytes.get(offset..) else {
            return false;
        };
        if !rest.starts_with(literal.as_bytes()) {
            return false;
        }
        let ends_in_name = literal.as_bytes().last().is_some_and(|b| is_name_byte(*b));
        !ends_in_name || !rest.get(literal.len()).is_some_and(|b| is_name_byte(*b))
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// Builds the items of a comma-permitting list whose opening delimiter
    /// has already been consumed, then consumes `close`.
    ///
    /// Each item's `after` is the exact gap to the next item; the last
    /// item's `after` is the gap before `close`.
    fn build_delimited<C, T>(
        &mut self,
        items: &[C],
        close: &str,
        mut build_item: impl FnMut(&mut Self, &C) -> BuildOutcome<T>,
    ) -> BuildOutcome<Vec<RightPadded<T>>>
    where
        C: CstNode,
    {
        let mut elements = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let element = build_item(self, item)?;
            let after = match items.get(index + 1) {
                Some(next) => self.prefix_before(next.span().start_offset())?,
                None => self.source_before(close)?,
            };
            elements.push(RightPadded::new(element, after));
        }
        if items.is_empty() {
            // The gap inside an empty body is not kept.
            self.source_before(close)?;
        }
        Ok(elements)
    }

    fn build_container<C, T>(
        &mut self,
        open: &str,
        items: &[C],
        close: &str,
        build_item: impl FnMut(&mut Self, &C) -> BuildOutcome<T>,
    ) -> BuildOutcome<Container<T>>
    where
        C: CstNode,
    {
        let before = self.source_before(open)?;
        let elements = self.build_delimited(items, close, build_item)?;
        Ok(Container::new(before, elements))
    }

    /// Builds a `separator`-joined list in source order.
    ///
    /// An optional leading separator is folded into the first item's prefix.
    /// Each non-last item's `after` holds the separator with the trivia on
    /// both sides of it.
    fn build_separated<C, T>(
        &mut self,
        items: &[&C],
        separator: &str,
        mut build_item: impl FnMut(&mut Self, &C) -> BuildOutcome<T>,
    ) -> BuildOutcome<Vec<RightPadded<T>>>
    where
        T: GraphQLNode,
    {
        let mut elements = Vec::with_capacity(items.len());
        for (index, &item) in items.iter().enumerate() {
            let leading = if index == 0 && self.peek_literal(separator) {
                Some(self.separator_space(separator)?)
            } else {
                None
            };
            let mut element = build_item(self, item)?;
            if let Some(leading) = leading {
                element = element.with_prefix(leading);
            }
            let after = if index + 1 < items.len() {
                self.separator_space(separator)?
            } else {
                Space::empty()
            };
            elements.push(RightPadded::new(element, after));
        }
        Ok(elements)
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn build_definition(
        &mut self,
        definition: &cst::Definition<'_>,
    ) -> BuildOutcome<Definition> {
        Ok(match definition {
            cst::Definition::Operation(def) => {
                Definition::Operation(self.build_operation_definition(def)?)
            },
            cst::Definition::Fragment(def) => {
                Definition::Fragment(self.build_fragment_definition(def)?)
            },
            cst::Definition::Schema(def) => {
                Definition::Schema(self.build_schema_definition(def)?)
            },
            cst::Definition::SchemaExtension(ext) => {
                Definition::SchemaExtension(self.build_schema_extension(ext)?)
            },
            cst::Definition::Directive(def) => {
                Definition::Directive(self.build_directive_definition(def)?)
            },
            cst::Definition::Type(def) => {
                Definition::Type(self.build_type_definition(def)?)
            },
            cst::Definition::TypeExtension(ext) => {
                Definition::TypeExtension(self.build_type_extension(ext)?)
            },
        })
    }

    // =========================================================================
    // Operations and fragments
    // =========================================================================

    fn build_operation_definition(
        &mut self,
        operation: &cst::OperationDefinition<'_>,
    ) -> BuildOutcome<OperationDefinition> {
        let prefix = self.prefix_before(operation.span.start_offset())?;
        let operation_type = operation
            .operation_type
            .as_ref()
            .map(|operation_type| self.build_operation_type(operation_type))
            .transpose()?;
        let name = operation
            .name
            .as_ref()
            .map(|name| self.build_name(name))
            .transpose()?;
        let variable_definitions = operation
            .variable_definitions
            .as_ref()
            .map(|defs| {
                self.build_container(
                    "(",
                    &defs.definitions,
                    ")",
                    Self::build_variable_definition,
                )
            })
            .transpose()?;
        let directives = self.build_directives(&operation.directives)?;
        let selection_set = self.build_selection_set(&operation.selection_set)?;
        self.consume_through(operation.span.end_offset())?;

        Ok(OperationDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            operation_type,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    /// Consumes an operation keyword that starts at the cursor.
    fn build_operation_type(
        &mut self,
        operation_type: &cst::OperationType,
    ) -> BuildOutcome<OperationType> {
        let keyword = self.span_text(operation_type.span)?;
        let kind = OperationType::from_keyword(keyword).ok_or_else(|| {
            TreeBuildError::UnknownOperationType {
                keyword: keyword.to_string(),
            }
        })?;
        self.consume_literal(keyword)?;
        Ok(kind)
    }

    fn build_variable_definition(
        &mut self,
        definition: &cst::VariableDefinition<'_>,
    ) -> BuildOutcome<VariableDefinition> {
        let prefix = self.prefix_before(definition.span.start_offset())?;
        let variable = self.build_variable(&definition.variable)?;
        let type_ = LeftPadded::new(
            self.source_before(":")?,
            self.build_type(&definition.type_)?,
        );
        let default_value = match &definition.default_value {
            Some(default_value) => Some(LeftPadded::new(
                self.source_before("=")?,
                self.build_value(&default_value.value)?,
            )),
            None => None,
        };
        let directives = self.build_directives(&definition.directives)?;
        self.consume_through(definition.span.end_offset())?;

        Ok(VariableDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            variable,
            type_,
            default_value,
            directives,
        })
    }

    fn build_variable(
        &mut self,
        variable: &cst::Variable<'_>,
    ) -> BuildOutcome<Variable> {
        let prefix = self.prefix_before(variable.span.start_offset())?;
        self.consume_literal("$")?;
        let name = self.build_name(&variable.name)?;
        self.consume_through(variable.span.end_offset())?;

        Ok(Variable {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            name,
        })
    }

    fn build_selection_set(
        &mut self,
        selection_set: &cst::SelectionSet<'_>,
    ) -> BuildOutcome<SelectionSet> {
        let prefix = self.prefix_before(selection_set.span.start_offset())?;
        self.consume_literal("{")?;
        let selections = self.build_delimited(
            &selection_set.selections,
            "}",
            Self::build_selection,
        )?;
        self.consume_through(selection_set.span.end_offset())?;

        Ok(SelectionSet {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            selections,
        })
    }

    fn build_selection(
        &mut self,
        selection: &cst::Selection<'_>,
    ) -> BuildOutcome<Selection> {
        Ok(match selection {
            cst::Selection::Field(field) => {
                Selection::Field(self.build_field(field)?)
            },
            cst::Selection::FragmentSpread(spread) => {
                Selection::FragmentSpread(self.build_fragment_spread(spread)?)
            },
            cst::Selection::InlineFragment(fragment) => {
                Selection::InlineFragment(self.build_inline_fragment(fragment)?)
            },
        })
    }

    fn build_field(&mut self, field: &cst::Field<'_>) -> BuildOutcome<Field> {
        let prefix = self.prefix_before(field.span.start_offset())?;
        let alias = match &field.alias {
            Some(alias) => {
                let name = self.build_name(&alias.name)?;
                Some(RightPadded::new(name, self.source_before(":")?))
            },
            None => None,
        };
        let name = self.build_name(&field.name)?;
        let arguments = self.build_arguments(field.arguments.as_ref())?;
        let directives = self.build_directives(&field.directives)?;
        let selection_set = field
            .selection_set
            .as_ref()
            .map(|selection_set| self.build_selection_set(selection_set))
            .transpose()?;
        self.consume_through(field.span.end_offset())?;

        Ok(Field {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    fn build_arguments(
        &mut self,
        arguments: Option<&cst::Arguments<'_>>,
    ) -> BuildOutcome<Option<Container<Argument>>> {
        arguments
            .map(|arguments| {
                self.build_container(
                    "(",
                    &arguments.arguments,
                    ")",
                    Self::build_argument,
                )
            })
            .transpose()
    }

    fn build_argument(
        &mut self,
        argument: &cst::Argument<'_>,
    ) -> BuildOutcome<Argument> {
        let prefix = self.prefix_before(argument.span.start_offset())?;
        let name = self.build_name(&argument.name)?;
        let value = LeftPadded::new(
            self.source_before(":")?,
            self.build_value(&argument.value)?,
        );
        self.consume_through(argument.span.end_offset())?;

        Ok(Argument {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            name,
            value,
        })
    }

    fn build_fragment_spread(
        &mut self,
        spread: &cst::FragmentSpread<'_>,
    ) -> BuildOutcome<FragmentSpread> {
        let prefix = self.prefix_before(spread.span.start_offset())?;
        self.consume_literal("...")?;
        let name = self.build_name(&spread.name)?;
        let directives = self.build_directives(&spread.directives)?;
        self.consume_through(spread.span.end_offset())?;

        Ok(FragmentSpread {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            name,
            directives,
        })
    }

    fn build_inline_fragment(
        &mut self,
        fragment: &cst::InlineFragment<'_>,
    ) -> BuildOutcome<InlineFragment> {
        let prefix = self.prefix_before(fragment.span.start_offset())?;
        self.consume_literal("...")?;
        let type_condition = fragment
            .type_condition
            .as_ref()
            .map(|condition| self.build_type_condition(condition))
            .transpose()?;
        let directives = self.build_directives(&fragment.directives)?;
        let selection_set = self.build_selection_set(&fragment.selection_set)?;
        self.consume_through(fragment.span.end_offset())?;

        Ok(InlineFragment {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            type_condition,
            directives,
            selection_set,
        })
    }

    fn build_type_condition(
        &mut self,
        condition: &cst::TypeCondition<'_>,
    ) -> BuildOutcome<TypeCondition> {
        let prefix = self.prefix_before(condition.span.start_offset())?;
        self.consume_literal("on")?;
        let named_type = self.build_named_type(&condition.named_type)?;
        self.consume_through(condition.span.end_offset())?;

        Ok(TypeCondition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            named_type,
        })
    }

    fn build_fragment_definition(
        &mut self,
        fragment: &cst::FragmentDefinition<'_>,
    ) -> BuildOutcome<FragmentDefinition> {
        let prefix = self.prefix_before(fragment.span.start_offset())?;
        self.consume_literal("fragment")?;
        let name = self.build_name(&fragment.name)?;
        let type_condition = self.build_type_condition(&fragment.type_condition)?;
        let directives = self.build_directives(&fragment.directives)?;
        let selection_set = self.build_selection_set(&fragment.selection_set)?;
        self.consume_through(fragment.span.end_offset())?;

        Ok(FragmentDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    fn build_directives(
        &mut self,
        directives: &[cst::Directive<'_>],
    ) -> BuildOutcome<Vec<Directive>> {
        directives
            .iter()
            .map(|directive| self.build_directive(directive))
            .collect()
    }

    fn build_directive(
        &mut self,
        directive: &cst::Directive<'_>,
    ) -> BuildOutcome<Directive> {
        let prefix = self.prefix_before(directive.span.start_offset())?;
        self.consume_literal("@")?;
        let name = self.build_name(&directive.name)?;
        let arguments = self.build_arguments(directive.arguments.as_ref())?;
        self.consume_through(directive.span.end_offset())?;

        Ok(Directive {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            name,
            arguments,
        })
    }

    // =========================================================================
    // Values and names
    // =========================================================================

    fn build_name(&mut self, name: &cst::Name<'_>) -> BuildOutcome<Name> {
        let prefix = self.prefix_before(name.span.start_offset())?;
        self.consume_literal(&name.value)?;
        Ok(Name::new(prefix, name.value.as_ref()))
    }

    fn build_value(&mut self, value: &cst::Value<'_>) -> BuildOutcome<Value> {
        let built = match value {
            cst::Value::Variable(variable) => {
                Value::Variable(self.build_variable(variable)?)
            },
            cst::Value::Int(int) => Value::Int(IntValue {
                id: NodeId::random(),
                prefix: self.prefix_before(int.span.start_offset())?,
                markers: Markers::empty(),
                raw: int.raw.to_string(),
            }),
            cst::Value::Float(float) => Value::Float(FloatValue {
                id: NodeId::random(),
                prefix: self.prefix_before(float.span.start_offset())?,
                markers: Markers::empty(),
                raw: float.raw.to_string(),
            }),
            cst::Value::String(string) => {
                Value::String(self.build_string_value(string)?)
            },
            cst::Value::Boolean(boolean) => Value::Boolean(BooleanValue {
                id: NodeId::random(),
                prefix: self.prefix_before(boolean.span.start_offset())?,
                markers: Markers::empty(),
                value: boolean.value,
            }),
            cst::Value::Null(null) => Value::Null(NullValue {
                id: NodeId::random(),
                prefix: self.prefix_before(null.span.start_offset())?,
                markers: Markers::empty(),
            }),
            cst::Value::Enum(enum_value) => Value::Enum(EnumValue {
                id: NodeId::random(),
                prefix: self.prefix_before(enum_value.span.start_offset())?,
                markers: Markers::empty(),
                name: self.build_name(&enum_value.name)?,
            }),
            cst::Value::List(list) => {
                let prefix = self.prefix_before(list.span.start_offset())?;
                self.consume_literal("[")?;
                Value::List(ListValue {
                    id: NodeId::random(),
                    prefix,
                    markers: Markers::empty(),
                    values: self.build_delimited(
                        &list.values,
                        "]",
                        Self::build_value,
                    )?,
                })
            },
            cst::Value::Object(object) => {
                let prefix = self.prefix_before(object.span.start_offset())?;
                self.consume_literal("{")?;
                Value::Object(ObjectValue {
                    id: NodeId::random(),
                    prefix,
                    markers: Markers::empty(),
                    fields: self.build_delimited(
                        &object.fields,
                        "}",
                        Self::build_object_field,
                    )?,
                })
            },
        };
        self.consume_through(value.span().end_offset())?;
        Ok(built)
    }

    fn build_object_field(
        &mut self,
        field: &cst::ObjectField<'_>,
    ) -> BuildOutcome<ObjectField> {
        let prefix = self.prefix_before(field.span.start_offset())?;
        let name = self.build_name(&field.name)?;
        let value = LeftPadded::new(
            self.source_before(":")?,
            self.build_value(&field.value)?,
        );
        self.consume_through(field.span.end_offset())?;

        Ok(ObjectField {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            name,
            value,
        })
    }

    fn build_string_value(
        &mut self,
        string: &cst::StringValue<'_>,
    ) -> BuildOutcome<StringValue> {
        let start = string.span.start_offset();
        let prefix = self.prefix_before(start)?;
        let value = if string.block {
            string.interior().to_string()
        } else {
            cook_single_line_string(&string.raw).map_err(|error| {
                TreeBuildError::InvalidString {
                    offset: start,
                    error,
                }
            })?
        };
        self.consume_through(string.span.end_offset())?;

        Ok(StringValue {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            value,
            block: string.block,
        })
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn build_type(&mut self, type_: &cst::Type<'_>) -> BuildOutcome<Type> {
        match type_ {
            cst::Type::Named(named) => {
                Ok(Type::Named(self.build_named_type(named)?))
            },
            cst::Type::List { inner, span } => {
                let prefix = self.prefix_before(span.start_offset())?;
                self.consume_literal("[")?;
                let element = self.build_type(inner)?;
                let after = self.source_before("]")?;
                self.consume_through(span.end_offset())?;
                Ok(Type::List(ListType {
                    id: NodeId::random(),
                    prefix,
                    markers: Markers::empty(),
                    type_: RightPadded::new(Box::new(element), after),
                }))
            },
            cst::Type::NonNull { inner, span } => {
                let prefix = self.prefix_before(span.start_offset())?;
                let element = self.build_type(inner)?;
                let after = self.source_before("!")?;
                self.consume_through(span.end_offset())?;
                Ok(Type::NonNull(NonNullType {
                    id: NodeId::random(),
                    prefix,
                    markers: Markers::empty(),
                    type_: RightPadded::new(Box::new(element), after),
                }))
            },
        }
    }

    fn build_named_type(
        &mut self,
        named: &cst::NamedType<'_>,
    ) -> BuildOutcome<NamedType> {
        let prefix = self.prefix_before(named.span.start_offset())?;
        let name = self.build_name(&named.name)?;
        self.consume_through(named.span.end_offset())?;

        Ok(NamedType {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            name,
        })
    }

    // =========================================================================
    // Schema definitions and extensions
    // =========================================================================

    /// Builds an optional description and consumes the `keyword` after it.
    /// The cursor must be at the definition's start.
    fn build_keyword_description(
        &mut self,
        description: Option<&cst::StringValue<'_>>,
        keyword: &str,
    ) -> BuildOutcome<Option<Description>> {
        match description {
            Some(description) => {
                let element = self.build_string_value(description)?;
                Ok(Some(RightPadded::new(element, self.source_before(keyword)?)))
            },
            None => {
                self.consume_literal(keyword)?;
                Ok(None)
            },
        }
    }

    /// Builds an optional description that is followed by a name starting
    /// at `next_start`.
    fn build_name_description(
        &mut self,
        description: Option<&cst::StringValue<'_>>,
        next_start: usize,
    ) -> BuildOutcome<Option<Description>> {
        description
            .map(|description| -> BuildOutcome<Description> {
                let element = self.build_string_value(description)?;
                Ok(RightPadded::new(element, self.prefix_before(next_start)?))
            })
            .transpose()
    }

    fn build_schema_definition(
        &mut self,
        schema: &cst::SchemaDefinition<'_>,
    ) -> BuildOutcome<SchemaDefinition> {
        let prefix = self.prefix_before(schema.span.start_offset())?;
        let description =
            self.build_keyword_description(schema.description.as_ref(), "schema")?;
        let directives = self.build_directives(&schema.directives)?;
        let root_operation_types = schema
            .root_operation_types
            .as_ref()
            .map(|root_types| {
                self.build_container(
                    "{",
                    &root_types.definitions,
                    "}",
                    Self::build_root_operation_type_definition,
                )
            })
            .transpose()?;
        self.consume_through(schema.span.end_offset())?;

        Ok(SchemaDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            description,
            directives,
            root_operation_types,
        })
    }

    fn build_root_operation_type_definition(
        &mut self,
        definition: &cst::RootOperationTypeDefinition<'_>,
    ) -> BuildOutcome<RootOperationTypeDefinition> {
        let prefix = self.prefix_before(definition.span.start_offset())?;
        let operation_type =
            self.build_operation_type(&definition.operation_type)?;
        let named_type = LeftPadded::new(
            self.source_before(":")?,
            self.build_named_type(&definition.named_type)?,
        );
        self.consume_through(definition.span.end_offset())?;

        Ok(RootOperationTypeDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            operation_type,
            named_type,
        })
    }

    fn build_schema_extension(
        &mut self,
        extension: &cst::SchemaExtension<'_>,
    ) -> BuildOutcome<SchemaExtension> {
        let prefix = self.prefix_before(extension.span.start_offset())?;
        self.consume_literal("extend")?;
        let definition = self.build_schema_definition(&extension.definition)?;
        self.consume_through(extension.span.end_offset())?;

        Ok(SchemaExtension {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            definition,
        })
    }

    // =========================================================================
    // Type definitions and extensions
    // =========================================================================

    fn build_type_extension(
        &mut self,
        extension: &cst::TypeExtension<'_>,
    ) -> BuildOutcome<TypeExtension> {
        let prefix = self.prefix_before(extension.span.start_offset())?;
        self.consume_literal("extend")?;
        let definition = self.build_type_definition(&extension.definition)?;
        self.consume_through(extension.span.end_offset())?;

        Ok(TypeExtension {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            definition,
        })
    }

    fn build_type_definition(
        &mut self,
        definition: &cst::TypeDefinition<'_>,
    ) -> BuildOutcome<TypeDefinition> {
        Ok(match definition {
            cst::TypeDefinition::Scalar(def) => {
                TypeDefinition::Scalar(self.build_scalar_type_definition(def)?)
            },
            cst::TypeDefinition::Object(def) => {
                TypeDefinition::Object(self.build_object_type_definition(def)?)
            },
            cst::TypeDefinition::Interface(def) => TypeDefinition::Interface(
                self.build_interface_type_definition(def)?,
            ),
            cst::TypeDefinition::Union(def) => {
                TypeDefinition::Union(self.build_union_type_definition(def)?)
            },
            cst::TypeDefinition::Enum(def) => {
                TypeDefinition::Enum(self.build_enum_type_definition(def)?)
            },
            cst::TypeDefinition::InputObject(def) => TypeDefinition::InputObject(
                self.build_input_object_type_definition(def)?,
            ),
        })
    }

    fn build_scalar_type_definition(
        &mut self,
        scalar: &cst::ScalarTypeDefinition<'_>,
    ) -> BuildOutcome<ScalarTypeDefinition> {
        let prefix = self.prefix_before(scalar.span.start_offset())?;
        let description =
            self.build_keyword_description(scalar.description.as_ref(), "scalar")?;
        let name = self.build_name(&scalar.name)?;
        let directives = self.build_directives(&scalar.directives)?;
        self.consume_through(scalar.span.end_offset())?;

        Ok(ScalarTypeDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            description,
            name,
            directives,
        })
    }

    fn build_object_type_definition(
        &mut self,
        object: &cst::ObjectTypeDefinition<'_>,
    ) -> BuildOutcome<ObjectTypeDefinition> {
        let prefix = self.prefix_before(object.span.start_offset())?;
        let description =
            self.build_keyword_description(object.description.as_ref(), "type")?;
        let name = self.build_name(&object.name)?;
        let implements_interfaces =
            self.build_implements_interfaces(object.implements_interfaces.as_ref())?;
        let directives = self.build_directives(&object.directives)?;
        let fields = self.build_fields_definition(object.fields.as_ref())?;
        self.consume_through(object.span.end_offset())?;

        Ok(ObjectTypeDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            description,
            name,
            implements_interfaces,
            directives,
            fields,
        })
    }

    fn build_interface_type_definition(
        &mut self,
        interface: &cst::InterfaceTypeDefinition<'_>,
    ) -> BuildOutcome<InterfaceTypeDefinition> {
        let prefix = self.prefix_before(interface.span.start_offset())?;
        let description = self
            .build_keyword_description(interface.description.as_ref(), "interface")?;
        let name = self.build_name(&interface.name)?;
        let implements_interfaces = self
            .build_implements_interfaces(interface.implements_interfaces.as_ref())?;
        let directives = self.build_directives(&interface.directives)?;
        let fields = self.build_fields_definition(interface.fields.as_ref())?;
        self.consume_through(interface.span.end_offset())?;

        Ok(InterfaceTypeDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            description,
            name,
            implements_interfaces,
            directives,
            fields,
        })
    }

    fn build_implements_interfaces(
        &mut self,
        implements: Option<&cst::ImplementsInterfaces<'_>>,
    ) -> BuildOutcome<Option<Container<NamedType>>> {
        let Some(implements) = implements else {
            return Ok(None);
        };
        let before = self.source_before("implements")?;
        let interfaces = collect_chain(implements, |link| {
            (link.rest.as_deref(), &link.named_type)
        });
        let elements =
            self.build_separated(&interfaces, "&", Self::build_named_type)?;
        self.consume_through(implements.span.end_offset())?;
        Ok(Some(Container::new(before, elements)))
    }

    fn build_fields_definition(
        &mut self,
        fields: Option<&cst::FieldsDefinition<'_>>,
    ) -> BuildOutcome<Option<Container<FieldDefinition>>> {
        fields
            .map(|fields| {
                self.build_container(
                    "{",
                    &fields.definitions,
                    "}",
                    Self::build_field_definition,
                )
            })
            .transpose()
    }

    fn build_union_type_definition(
        &mut self,
        union: &cst::UnionTypeDefinition<'_>,
    ) -> BuildOutcome<UnionTypeDefinition> {
        let prefix = self.prefix_before(union.span.start_offset())?;
        let description =
            self.build_keyword_description(union.description.as_ref(), "union")?;
        let name = self.build_name(&union.name)?;
        let directives = self.build_directives(&union.directives)?;
        let member_types = match &union.member_types {
            Some(members) => {
                let before = self.source_before("=")?;
                let named_types = collect_chain(members, |link| {
                    (link.rest.as_deref(), &link.named_type)
                });
                let elements = self.build_separated(
                    &named_types,
                    "|",
                    Self::build_named_type,
                )?;
                self.consume_through(members.span.end_offset())?;
                Some(Container::new(before, elements))
            },
            None => None,
        };
        self.consume_through(union.span.end_offset())?;

        Ok(UnionTypeDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            description,
            name,
            directives,
            member_types,
        })
    }

    fn build_enum_type_definition(
        &mut self,
        enum_type: &cst::EnumTypeDefinition<'_>,
    ) -> BuildOutcome<EnumTypeDefinition> {
        let prefix = self.prefix_before(enum_type.span.start_offset())?;
        let description =
            self.build_keyword_description(enum_type.description.as_ref(), "enum")?;
        let name = self.build_name(&enum_type.name)?;
        let directives = self.build_directives(&enum_type.directives)?;
        let values = enum_type
            .values
            .as_ref()
            .map(|values| {
                self.build_container(
                    "{",
                    &values.definitions,
                    "}",
                    Self::build_enum_value_definition,
                )
            })
            .transpose()?;
        self.consume_through(enum_type.span.end_offset())?;

        Ok(EnumTypeDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            description,
            name,
            directives,
            values,
        })
    }

    fn build_input_object_type_definition(
        &mut self,
        input: &cst::InputObjectTypeDefinition<'_>,
    ) -> BuildOutcome<InputObjectTypeDefinition> {
        let prefix = self.prefix_before(input.span.start_offset())?;
        let description =
            self.build_keyword_description(input.description.as_ref(), "input")?;
        let name = self.build_name(&input.name)?;
        let directives = self.build_directives(&input.directives)?;
        let fields = input
            .fields
            .as_ref()
            .map(|fields| {
                self.build_container(
                    "{",
                    &fields.definitions,
                    "}",
                    Self::build_input_value_definition,
                )
            })
            .transpose()?;
        self.consume_through(input.span.end_offset())?;

        Ok(InputObjectTypeDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            description,
            name,
            directives,
            fields,
        })
    }

    fn build_field_definition(
        &mut self,
        field: &cst::FieldDefinition<'_>,
    ) -> BuildOutcome<FieldDefinition> {
        let prefix = self.prefix_before(field.span.start_offset())?;
        let description = self.build_name_description(
            field.description.as_ref(),
            field.name.span.start_offset(),
        )?;
        let name = self.build_name(&field.name)?;
        let arguments =
            self.build_arguments_definition(field.arguments_definition.as_ref())?;
        let type_ = LeftPadded::new(
            self.source_before(":")?,
            self.build_type(&field.type_)?,
        );
        let directives = self.build_directives(&field.directives)?;
        self.consume_through(field.span.end_offset())?;

        Ok(FieldDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            description,
            name,
            arguments,
            type_,
            directives,
        })
    }

    fn build_arguments_definition(
        &mut self,
        arguments: Option<&cst::ArgumentsDefinition<'_>>,
    ) -> BuildOutcome<Option<Container<InputValueDefinition>>> {
        arguments
            .map(|arguments| {
                self.build_container(
                    "(",
                    &arguments.definitions,
                    ")",
                    Self::build_input_value_definition,
                )
            })
            .transpose()
    }

    fn build_input_value_definition(
        &mut self,
        input_value: &cst::InputValueDefinition<'_>,
    ) -> BuildOutcome<InputValueDefinition> {
        let prefix = self.prefix_before(input_value.span.start_offset())?;
        let description = self.build_name_description(
            input_value.description.as_ref(),
            input_value.name.span.start_offset(),
        )?;
        let name = self.build_name(&input_value.name)?;
        let type_ = LeftPadded::new(
            self.source_before(":")?,
            self.build_type(&input_value.type_)?,
        );
        let default_value = match &input_value.default_value {
            Some(default_value) => Some(LeftPadded::new(
                self.source_before("=")?,
                self.build_value(&default_value.value)?,
            )),
            None => None,
        };
        let directives = self.build_directives(&input_value.directives)?;
        self.consume_through(input_value.span.end_offset())?;

        Ok(InputValueDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            description,
            name,
            type_,
            default_value,
            directives,
        })
    }

    fn build_enum_value_definition(
        &mut self,
        enum_value: &cst::EnumValueDefinition<'_>,
    ) -> BuildOutcome<EnumValueDefinition> {
        let prefix = self.prefix_before(enum_value.span.start_offset())?;
        let description = self.build_name_description(
            enum_value.description.as_ref(),
            enum_value.name.span.start_offset(),
        )?;
        let name = self.build_name(&enum_value.name)?;
        let directives = self.build_directives(&enum_value.directives)?;
        self.consume_through(enum_value.span.end_offset())?;

        Ok(EnumValueDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            description,
            name,
            directives,
        })
    }

    // =========================================================================
    // Directive definitions
    // =========================================================================

    fn build_directive_definition(
        &mut self,
        directive: &cst::DirectiveDefinition<'_>,
    ) -> BuildOutcome<DirectiveDefinition> {
        let prefix = self.prefix_before(directive.span.start_offset())?;
        let description = self
            .build_keyword_description(directive.description.as_ref(), "directive")?;
        let name = LeftPadded::new(
            self.source_before("@")?,
            self.build_name(&directive.name)?,
        );
        let arguments =
            self.build_arguments_definition(directive.arguments_definition.as_ref())?;
        let repeatable = match directive.repeatable {
            Some(_) => Some(self.source_before("repeatable")?),
            None => None,
        };
        let before_on = self.source_before("on")?;
        let locations = collect_chain(&directive.locations, |link| {
            (link.rest.as_deref(), &link.location)
        });
        let elements = self.build_separated(
            &locations,
            "|",
            Self::build_directive_location,
        )?;
        self.consume_through(directive.span.end_offset())?;

        Ok(DirectiveDefinition {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            description,
            name,
            arguments,
            repeatable,
            locations: Container::new(before_on, elements),
        })
    }

    fn build_directive_location(
        &mut self,
        location: &cst::Name<'_>,
    ) -> BuildOutcome<DirectiveLocation> {
        let prefix = self.prefix_before(location.span.start_offset())?;
        let kind = DirectiveLocationKind::from_name(&location.value)
            .ok_or_else(|| TreeBuildError::UnknownDirectiveLocation {
                name: location.value.to_string(),
            })?;
        self.consume_literal(kind.as_str())?;

        Ok(DirectiveLocation {
            id: NodeId::random(),
            prefix,
            markers: Markers::empty(),
            location: kind,
        })
    }
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Flattens a right-recursive chain into its items in source order.
///
/// The outermost link holds the syntactically last item, so the walk
/// collects items last-to-first and then reverses them.
fn collect_chain<'c, L, I>(
    last: &'c L,
    split: impl Fn(&'c L) -> (Option<&'c L>, &'c I),
) -> Vec<&'c I> {
    let mut items = vec![];
    let mut link = Some(last);
    while let Some(current) = link {
        let (rest, item) = split(current);
        items.push(item);
        link = rest;
    }
    items.reverse();
    items
}
