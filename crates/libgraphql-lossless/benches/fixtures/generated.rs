use std::fmt::Write;

/// Generates a query with deeply nested selection sets.
///
/// Each level selects an `id` field (followed by a comment) and a `child`
/// field containing the next level.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 40);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}child {{").unwrap();
        writeln!(out, "{indent}  id # level {level}").unwrap();
    }
    let inner_indent = "  ".repeat(depth + 1);
    writeln!(out, "{inner_indent}name").unwrap();
    for level in (0..depth).rev() {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}}}").unwrap();
    }
    out.push_str("}\n");
    out
}

/// Generates a schema of `count` commented object types, each with a
/// description, arguments and a union of its neighbours.
pub fn commented_schema(count: usize) -> String {
    let mut out = String::with_capacity(count * 160);
    for i in 0..count {
        writeln!(out, "# Type number {i}").unwrap();
        writeln!(out, "\"\"\"\nDescription of Type{i}.\n\"\"\"").unwrap();
        writeln!(out, "type Type{i} implements Node & Named {{").unwrap();
        writeln!(out, "  id: ID! # primary key").unwrap();
        writeln!(out, "  name(locale: String = \"en\", fallback: Boolean): String").unwrap();
        writeln!(out, "  tags: [String!]!").unwrap();
        writeln!(out, "}}").unwrap();
        writeln!(out, "union Near{i} = Type{i} | Type{}\n", i + 1).unwrap();
    }
    out
}
