//! Tests for the per-file checks behind `graphql round-trip`.

use crate::commands::round_trip::first_difference;
use crate::commands::round_trip::normalize_file_exts;
use crate::commands::round_trip::round_trip_source;
use crate::commands::round_trip::FileOutcome;
use std::path::Path;

// =============================================================================
// Extension filtering
// =============================================================================

/// Leading dots are dropped and empty entries ignored.
#[test]
fn file_exts_are_normalized() {
    let exts = normalize_file_exts(&[
        "graphql".to_string(),
        ".graphqls".to_string(),
        "".to_string(),
    ]);
    assert_eq!(exts.len(), 2);
    assert!(exts.contains("graphql"));
    assert!(exts.contains("graphqls"));
}

// =============================================================================
// Comparison
// =============================================================================

/// Equal text has no difference.
#[test]
fn equal_text_has_no_difference() {
    assert_eq!(first_difference("{ a }", "{ a }"), None);
}

/// The offset is the first differing byte, or the shorter length for a
/// prefix.
#[test]
fn difference_offsets() {
    assert_eq!(first_difference("{\n}", "{}"), Some(1));
    assert_eq!(first_difference("{ a }", "{ a }\n"), Some(5));
}

// =============================================================================
// Round trips
// =============================================================================

/// Commented, comma-separated input comes back unchanged.
#[test]
fn formatted_source_is_unchanged() {
    let source = "# leading\nquery Q($a: Int, $b: Int) {\n  f(a: $a, b: $b)\n}\n";
    let outcome = round_trip_source(source, Path::new("q.graphql")).unwrap();
    assert!(matches!(outcome, FileOutcome::Unchanged), "{outcome:?}");
}

/// Empty bodies print canonically, which shows up as a change.
#[test]
fn empty_body_is_reported_as_changed() {
    let source = "type T {\n}\n";
    let outcome = round_trip_source(source, Path::new("t.graphql")).unwrap();
    assert!(
        matches!(outcome, FileOutcome::Changed { offset: 8 }),
        "{outcome:?}",
    );
}

/// Syntax errors name the file.
#[test]
fn syntax_error_mentions_path() {
    let err = round_trip_source("type {", Path::new("broken.graphql"))
        .unwrap_err();
    assert!(err.to_string().contains("broken.graphql"), "{err}");
}
