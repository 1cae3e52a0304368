//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! Token values borrow directly from the source string. Positions carry both
//! UTF-8 character columns (for display) and UTF-16 code unit columns (for
//! LSP clients), plus the byte offset every concrete tree span is built
//! from.
//!
//! ```rust
//! use libgraphql_cst::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds.len(), 4); // `{`, `name`, `}`, Eof
//! ```

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use smallvec::smallvec;
use std::path::Path;

/// Lexes GraphQL tokens from a string slice. See module documentation.
pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,

    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    curr_line: usize,

    /// Counts characters, not bytes.
    curr_col_utf8: usize,

    /// Characters outside the BMP advance this by 2.
    curr_col_utf16: usize,

    /// Set after `\r` so that a following `\n` does not bump the line again.
    last_char_was_cr: bool,

    finished: bool,

    file_path: Option<&'src Path>,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
            file_path: None,
        }
    }

    /// Creates a token source whose spans carry `path` for diagnostics.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            Some(self.curr_col_utf16),
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character, updating line and column tracking.
    /// `\n`, `\r` and `\r\n` each count as one line terminator.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = self.curr_position();
        match self.file_path {
            Some(path) => GraphQLSourceSpan::with_file(start, end, path.to_path_buf()),
            None => GraphQLSourceSpan::new(start, end),
        }
    }

    fn punctuator(
        &mut self,
        start: SourcePosition,
        kind: GraphQLTokenKind<'src>,
    ) -> GraphQLToken<'src> {
        self.consume();
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn error_token(
        &self,
        start: SourcePosition,
        message: impl Into<String>,
        error_notes: GraphQLErrorNotes,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(
            GraphQLTokenKind::error(message, error_notes),
            self.make_span(start),
        )
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        self.skip_ignored();
        let start = self.curr_position();

        match self.peek_char() {
            None => GraphQLToken::new(GraphQLTokenKind::Eof, self.make_span(start)),
            Some('!') => self.punctuator(start, GraphQLTokenKind::Bang),
            Some('$') => self.punctuator(start, GraphQLTokenKind::Dollar),
            Some('&') => self.punctuator(start, GraphQLTokenKind::Ampersand),
            Some('(') => self.punctuator(start, GraphQLTokenKind::ParenOpen),
            Some(')') => self.punctuator(start, GraphQLTokenKind::ParenClose),
            Some(':') => self.punctuator(start, GraphQLTokenKind::Colon),
            Some('=') => self.punctuator(start, GraphQLTokenKind::Equals),
            Some('@') => self.punctuator(start, GraphQLTokenKind::At),
            Some('[') => self.punctuator(start, GraphQLTokenKind::SquareBracketOpen),
            Some(']') => self.punctuator(start, GraphQLTokenKind::SquareBracketClose),
            Some('{') => self.punctuator(start, GraphQLTokenKind::CurlyBraceOpen),
            Some('}') => self.punctuator(start, GraphQLTokenKind::CurlyBraceClose),
            Some('|') => self.punctuator(start, GraphQLTokenKind::Pipe),
            Some('.') => self.lex_ellipsis(start),
            Some('"') => self.lex_string(start),
            Some(c) if is_name_start(c) => self.lex_name(start),
            Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start),
            Some(c) => {
                self.consume();
                self.error_token(
                    start,
                    format!("Unexpected character {}", describe_char(c)),
                    smallvec![],
                )
            },
        }
    }

    /// Skips whitespace, line terminators, commas, the BOM and comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                '#' => self.consume_while(|c| c != '\n' && c != '\r'),
                _ => break,
            }
        }
    }

    fn lex_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("...") {
            self.consume();
            self.consume();
            self.consume();
            return GraphQLToken::new(GraphQLTokenKind::Ellipsis, self.make_span(start));
        }

        let notes: GraphQLErrorNotes = if self.remaining().starts_with("..") {
            smallvec![GraphQLErrorNote::help(
                "Add one more `.` to form the spread operator `...`"
            )]
        } else {
            smallvec![]
        };
        self.consume_while(|c| c == '.');
        self.error_token(start, "Unexpected `.`", notes)
    }

    /// Names match `/[_A-Za-z][_0-9A-Za-z]*/`. `true`, `false` and `null` get
    /// their own token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name_start = self.curr_byte_offset;
        self.consume_while(is_name_continue);
        let name = &self.source[name_start..self.curr_byte_offset];

        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };
        GraphQLToken::new(kind, self.make_span(start))
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
    ///
    /// A number may not be directly followed by a name start or `.`, so
    /// `123abc` and `1.2.3` are errors rather than two tokens.
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                    );
                }
            },
            Some(c) if c.is_ascii_digit() => {
                self.consume_while(|c| c.is_ascii_digit());
            },
            _ => return self.error_token(start, "Unexpected `-`", smallvec![]),
        }

        if self.peek_char() == Some('.')
            && self.peek_char_nth(1).is_some_and(|c| c.is_ascii_digit())
        {
            is_float = true;
            self.consume();
            self.consume_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e') | Some('E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+') | Some('-')) {
                self.consume();
            }
            if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                );
            }
            self.consume_while(|c| c.is_ascii_digit());
        }

        if self.peek_char().is_some_and(|c| c == '.' || is_name_start(c)) {
            return self.lex_number_error(
                start,
                num_start,
                "Invalid number: must not be followed by a name or `.`",
            );
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            GraphQLTokenKind::float_value_borrowed(num_text)
        } else {
            GraphQLTokenKind::int_value_borrowed(num_text)
        };
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
    ) -> GraphQLToken<'src> {
        self.consume_while(|c| {
            is_name_continue(c) || c == '.' || c == '+' || c == '-'
        });
        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        self.error_token(
            start,
            format!("{message}: `{invalid_text}`"),
            smallvec![GraphQLErrorNote::spec(
                "https://spec.graphql.org/September2025/#sec-Int-Value"
            )],
        )
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        self.consume();
        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    let span = self.make_span(start.clone());
                    return self.error_token(
                        start,
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general_with_span("String started here", span),
                            GraphQLErrorNote::help(
                                "Add a closing `\"`, or use a block string for \
                                 multi-line text"
                            ),
                        ],
                    );
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if self.peek_char().is_some_and(|c| c != '\n' && c != '\r') {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        GraphQLToken::new(
            GraphQLTokenKind::string_value_borrowed(text),
            self.make_span(start),
        )
    }

    fn lex_block_string(
        &mut self,
        start: SourcePosition,
        str_start: usize,
    ) -> GraphQLToken<'src> {
        for _ in 0..3 {
            self.consume();
        }

        loop {
            if self.remaining().starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
                continue;
            }
            if self.remaining().starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.consume();
                }
                break;
            }
            if self.consume().is_none() {
                let span = self.make_span(start.clone());
                return self.error_token(
                    start,
                    "Unterminated block string",
                    smallvec![
                        GraphQLErrorNote::general_with_span("Block string started here", span),
                        GraphQLErrorNote::help("Add closing `\"\"\"`"),
                    ],
                );
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        GraphQLToken::new(
            GraphQLTokenKind::string_value_borrowed(text),
            self.make_span(start),
        )
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

pub(crate) fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

pub(crate) fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Printable characters render in backticks; invisible ones add their code
/// point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("`{}` (U+{:04X})", ch.escape_debug(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}
