/// The insignificant text between two significant tokens.
///
/// Printing `whitespace` followed by `#` + `text` + `suffix` for every
/// comment reproduces the original gap exactly. Besides spaces, tabs and
/// line terminators, "whitespace" here also covers GraphQL's insignificant
/// commas, the byte-order mark, and the `|`/`&` separators of union member
/// and implemented-interface lists.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Space {
    pub whitespace: String,
    pub comments: Vec<Comment>,
}

/// A `#` line comment together with the text that follows it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Comment {
    /// Comment body without the leading `#`. Never contains `\n` or `\r`.
    pub text: String,

    /// The line terminator ending the comment and everything after it up to
    /// the next comment or significant token.
    pub suffix: String,
}

impl Space {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A space made only of `whitespace`, with no comments.
    pub fn whitespace(whitespace: impl Into<String>) -> Self {
        Self {
            whitespace: whitespace.into(),
            comments: vec![],
        }
    }

    /// Splits a raw gap of insignificant text into whitespace and comments.
    ///
    /// `gap` must not contain significant tokens. Any `#` outside of a
    /// comment body starts a new comment.
    pub fn format(gap: &str) -> Self {
        let Some(first_hash) = memchr::memchr(b'#', gap.as_bytes()) else {
            return Self::whitespace(gap);
        };

        let mut comments = vec![];
        let mut rest = &gap[first_hash + 1..];
        loop {
            let text_end = memchr::memchr2(b'\n', b'\r', rest.as_bytes())
                .unwrap_or(rest.len());
            let text = &rest[..text_end];
            let after_text = &rest[text_end..];
            match memchr::memchr(b'#', after_text.as_bytes()) {
                Some(next_hash) => {
                    comments.push(Comment {
                        text: text.to_string(),
                        suffix: after_text[..next_hash].to_string(),
                    });
                    rest = &after_text[next_hash + 1..];
                },
                None => {
                    comments.push(Comment {
                        text: text.to_string(),
                        suffix: after_text.to_string(),
                    });
                    break;
                },
            }
        }

        Self {
            whitespace: gap[..first_hash].to_string(),
            comments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.whitespace.is_empty() && self.comments.is_empty()
    }

    /// Total byte length of the printed form.
    pub fn len(&self) -> usize {
        self.whitespace.len()
            + self.comments
                .iter()
                .map(|comment| 1 + comment.text.len() + comment.suffix.len())
                .sum::<usize>()
    }

    pub fn append_to(&self, sink: &mut String) {
        sink.push_str(&self.whitespace);
        for comment in &self.comments {
            sink.push('#');
            sink.push_str(&comment.text);
            sink.push_str(&comment.suffix);
        }
    }
}
