//! Tests for single-line string cooking.

use crate::cook_single_line_string;
use crate::GraphQLStringParsingError;

#[test]
fn cooks_simple_escapes() {
    assert_eq!(
        cook_single_line_string(r#""a\"b\\c\/d\n\r\t\b\f""#),
        Ok("a\"b\\c/d\n\r\t\u{0008}\u{000C}".to_string()),
    );
}

#[test]
fn cooks_unicode_escapes() {
    assert_eq!(cook_single_line_string(r#""\u00E9""#), Ok("é".to_string()));
    assert_eq!(cook_single_line_string(r#""\u{1F389}""#), Ok("🎉".to_string()));
}

/// A leading surrogate followed by a trailing one forms a single code point.
#[test]
fn cooks_surrogate_pairs() {
    assert_eq!(
        cook_single_line_string(r#""\uD83C\uDF89""#),
        Ok("🎉".to_string()),
    );
}

#[test]
fn rejects_lone_surrogate() {
    assert!(matches!(
        cook_single_line_string(r#""\uD83C""#),
        Err(GraphQLStringParsingError::InvalidUnicodeEscape(_)),
    ));
}

#[test]
fn rejects_unknown_escape() {
    assert_eq!(
        cook_single_line_string(r#""\q""#),
        Err(GraphQLStringParsingError::InvalidEscapeSequence("\\q".to_string())),
    );
}

#[test]
fn rejects_missing_quotes() {
    assert_eq!(
        cook_single_line_string("abc"),
        Err(GraphQLStringParsingError::UnterminatedString),
    );
}
