//! Tests for `Space::format` and printing of spaces.

use crate::tree::Comment;
use crate::tree::Space;

fn comment(text: &str, suffix: &str) -> Comment {
    Comment {
        text: text.to_string(),
        suffix: suffix.to_string(),
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// An empty gap is an empty space.
#[test]
fn empty_gap() {
    let space = Space::format("");
    assert!(space.is_empty());
    assert_eq!(space, Space::empty());
}

/// Whitespace, commas and the byte-order mark all count as whitespace.
#[test]
fn whitespace_only() {
    let space = Space::format(" \t,\r\n\u{FEFF} ");
    assert_eq!(space.whitespace, " \t,\r\n\u{FEFF} ");
    assert!(space.comments.is_empty());
}

/// A comment's text stops before the line terminator, which starts its
/// suffix.
#[test]
fn comment_newline_goes_to_suffix() {
    let space = Space::format("# hi\n");
    assert_eq!(space.whitespace, "");
    assert_eq!(space.comments, vec![comment(" hi", "\n")]);
}

/// Everything up to the next comment belongs to the previous comment's
/// suffix; a `#` inside a comment body does not start a new comment.
#[test]
fn consecutive_comments() {
    let space = Space::format("  # a # b\r\n  #c\n\n  ");
    assert_eq!(space.whitespace, "  ");
    assert_eq!(
        space.comments,
        vec![comment(" a # b", "\r\n  "), comment("c", "\n\n  ")],
    );
}

/// A comment at the very end of a document has an empty suffix.
#[test]
fn comment_at_end_of_input() {
    let space = Space::format("\n# last");
    assert_eq!(space.whitespace, "\n");
    assert_eq!(space.comments, vec![comment(" last", "")]);
}

/// Folded list separators stay in the whitespace or suffix they appear in.
#[test]
fn separators_are_whitespace() {
    let space = Space::format(" # why\n | ");
    assert_eq!(space.whitespace, " ");
    assert_eq!(space.comments, vec![comment(" why", "\n | ")]);
}

// =============================================================================
// Printing
// =============================================================================

/// Printing a formatted gap reproduces it byte for byte.
#[test]
fn format_then_print_is_identity() {
    for gap in ["", "  ", "# a\n", " ,# a\r\n#b\n  # c", "\u{FEFF}#\n"] {
        let space = Space::format(gap);
        let mut printed = String::new();
        space.append_to(&mut printed);
        assert_eq!(printed, gap);
        assert_eq!(space.len(), gap.len());
    }
}
