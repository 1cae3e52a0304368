//! Cooking (unescaping) of single-line GraphQL string literals.

use std::iter::Peekable;
use std::str::Chars;

/// Error returned when a single-line string literal cannot be cooked.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLStringParsingError {
    /// An unknown escape sequence, e.g. `\q`.
    #[error("invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// The literal is missing its surrounding quotes.
    #[error("unterminated string: missing closing quote")]
    UnterminatedString,

    /// A malformed `\u` escape or one naming an unpaired surrogate.
    #[error("invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),
}

/// Decodes the escape sequences of a single-line string literal.
///
/// `raw` is the literal exactly as it appears in source, including the
/// surrounding `"` quotes. Handles `\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`,
/// `\t`, fixed-width `\uXXXX` (combining UTF-16 surrogate pairs) and
/// variable-width `\u{X…}`.
pub fn cook_single_line_string(
    raw: &str,
) -> Result<String, GraphQLStringParsingError> {
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(GraphQLStringParsingError::UnterminatedString);
    }
    let content = &raw[1..raw.len() - 1];

    let mut cooked = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            cooked.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => cooked.push('"'),
            Some('\\') => cooked.push('\\'),
            Some('/') => cooked.push('/'),
            Some('b') => cooked.push('\u{0008}'),
            Some('f') => cooked.push('\u{000C}'),
            Some('n') => cooked.push('\n'),
            Some('r') => cooked.push('\r'),
            Some('t') => cooked.push('\t'),
            Some('u') => cooked.push(cook_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    format!("\\{other}"),
                ));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }

    Ok(cooked)
}

/// Decodes the remainder of a `\u` escape (the `\u` is already consumed).
fn cook_unicode_escape(
    chars: &mut Peekable<Chars<'_>>,
) -> Result<char, GraphQLStringParsingError> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}{c}"),
                    ));
                },
                None => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}"),
                    ));
                },
            }
        }
        return u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| GraphQLStringParsingError::InvalidUnicodeEscape(
                format!("\\u{{{hex}}}"),
            ));
    }

    let lead = read_fixed_width_hex(chars)?;
    match lead {
        0xD800..=0xDBFF => {
            // A leading surrogate must be followed by `\uDC00`-`\uDFFF`.
            let mut lookahead = chars.clone();
            if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
                let trail = read_fixed_width_hex(&mut lookahead)?;
                if (0xDC00..=0xDFFF).contains(&trail) {
                    *chars = lookahead;
                    let combined =
                        0x10000 + ((lead - 0xD800) << 10) + (trail - 0xDC00);
                    return char::from_u32(combined).ok_or_else(|| {
                        GraphQLStringParsingError::InvalidUnicodeEscape(
                            format!("\\u{lead:04X}\\u{trail:04X}"),
                        )
                    });
                }
            }
            Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                format!("\\u{lead:04X}"),
            ))
        },
        code_point => char::from_u32(code_point).ok_or_else(|| {
            GraphQLStringParsingError::InvalidUnicodeEscape(
                format!("\\u{code_point:04X}"),
            )
        }),
    }
}

fn read_fixed_width_hex(
    chars: &mut Peekable<Chars<'_>>,
) -> Result<u32, GraphQLStringParsingError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                    format!("\\u{hex}{c}"),
                ));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                    format!("\\u{hex}"),
                ));
            },
        }
    }
    u32::from_str_radix(&hex, 16).map_err(|_| {
        GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{hex}"))
    })
}
