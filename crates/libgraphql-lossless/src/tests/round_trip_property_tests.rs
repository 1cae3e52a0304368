//! Property tests: documents with randomly chosen whitespace, commas and
//! comments between every pair of tokens round-trip exactly.

use proptest::prelude::*;

const EXECUTABLE_TOKENS: &[&str] = &[
    "query", "Q", "(", "$", "v", ":", "[", "Int", "!", "]", "=", "[", "1",
    "2.5", "\"s\\n\"", "]", "@", "d", ")", "{", "a", ":", "b", "(", "x", ":",
    "{", "k", ":", "$", "v", "}", ")", "@", "skip", "(", "if", ":", "true",
    ")", "{", "c", "}", "...", "F", "...", "on", "T", "{", "d", "}", "}",
    "fragment", "F", "on", "T", "{", "e", "}",
];

const TYPE_SYSTEM_TOKENS: &[&str] = &[
    "\"\"\"desc\"\"\"", "type", "T", "implements", "&", "A", "&", "B", "{",
    "\"field\"", "f", "(", "a", ":", "Int", "=", "ENUM", ")", ":", "[", "T",
    "]", "!", "}", "union", "U", "=", "|", "A", "|", "B", "enum", "E", "{",
    "X", "Y", "}", "directive", "@", "d", "repeatable", "on", "FIELD", "|",
    "QUERY", "extend", "schema", "{", "query", ":", "Q", "}",
];

/// One run of insignificant text: at least one whitespace character,
/// comma or comment.
fn trivia() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![" ", "  ", "\n", "\t", ",", "\r\n", "# note\n", "#\n"]),
        1..4,
    )
    .prop_map(|parts| parts.concat())
}

/// Interleaves `tokens` with random trivia, including before the first and
/// after the last token.
fn document(tokens: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::collection::vec(trivia(), tokens.len() + 1).prop_map(move |gaps| {
        let mut source = gaps[0].clone();
        for (token, gap) in tokens.iter().zip(&gaps[1..]) {
            source.push_str(token);
            source.push_str(gap);
        }
        source
    })
}

proptest! {
    /// Executable documents print back byte for byte.
    #[test]
    fn executable_round_trip(source in document(EXECUTABLE_TOKENS)) {
        let document = crate::parse(&source).unwrap();
        prop_assert_eq!(crate::print(&document), source);
    }

    /// Type-system documents print back byte for byte.
    #[test]
    fn type_system_round_trip(source in document(TYPE_SYSTEM_TOKENS)) {
        let document = crate::parse(&source).unwrap();
        prop_assert_eq!(crate::print(&document), source);
    }

    /// Printing a reparsed printout changes nothing.
    #[test]
    fn print_is_idempotent(source in document(TYPE_SYSTEM_TOKENS)) {
        let once = crate::print(&crate::parse(&source).unwrap());
        let twice = crate::print(&crate::parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }
}
