use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;

/// A parse error with location information and contextual notes.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Primary message, e.g. "expected `:`, found `String`".
    message: String,

    /// Where the error was detected. For "expected X" errors this is the
    /// token found in place of X.
    span: GraphQLSourceSpan,

    kind: GraphQLParseErrorKind,

    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Converts a lexer `Error` token into a parse error, keeping the
    /// lexer's notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        lexer_notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: GraphQLParseErrorKind::LexerError,
            notes: lexer_notes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    pub fn add_note_with_span(
        &mut self,
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) {
        self.notes.push(GraphQLErrorNote::general_with_span(message, span));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Single-line summary:
    ///
    /// ```text
    /// schema.graphql:5:12: error: expected `:`, found `String`
    /// ```
    pub fn format_oneline(&self) -> String {
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col_utf8() + 1;
        format!(
            "{}:{line}:{column}: error: {}",
            self.span.display_file_name(),
            self.message,
        )
    }

    /// Multi-line diagnostic for terminal output:
    ///
    /// ```text
    /// error: expected `:`, found `String`
    ///   --> schema.graphql:5:12
    ///    |
    ///  5 |     userName String
    ///    |              ^^^^^^
    ///    = help: ...
    /// ```
    ///
    /// Snippets are omitted when `source` is `None`.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = format!("error: {}\n", self.message);
        output.push_str(&format!(
            "  --> {}:{}:{}\n",
            self.span.display_file_name(),
            self.span.start_inclusive.line() + 1,
            self.span.start_inclusive.col_utf8() + 1,
        ));

        if let Some(src) = source
            && let Some(snippet) = format_snippet(src, &self.span, '^')
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!(
                "   = {}: {}\n",
                note.kind.label(),
                note.message,
            ));
            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = format_snippet(src, note_span, '-')
            {
                output.push_str(&snippet);
            }
        }

        output
    }
}

/// Renders the source line at `span`'s start with an underline made of
/// `marker` characters.
fn format_snippet(
    source: &str,
    span: &GraphQLSourceSpan,
    marker: char,
) -> Option<String> {
    let line_idx = span.start_inclusive.line();
    let line_content = source.lines().nth(line_idx)?;
    let display_line = line_idx + 1;
    let width = display_line.to_string().len().max(2);

    let col_start = span.start_inclusive.col_utf8();
    let underline_len =
        if span.end_exclusive.line() == line_idx
            && span.end_exclusive.col_utf8() > col_start {
            span.end_exclusive.col_utf8() - col_start
        } else {
            1
        };

    let mut output = format!("{:>width$} |\n", "");
    output.push_str(&format!("{display_line:>width$} | {line_content}\n"));
    output.push_str(&format!(
        "{:>width$} | {:>col_start$}{}\n",
        "",
        "",
        marker.to_string().repeat(underline_len),
    ));
    Some(output)
}
