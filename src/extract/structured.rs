//! Structured extraction for Python via tree-sitter
//!
//! Only top-level function declarations are emitted. Nested functions and methods
//! stay inside the snippet of their enclosing declaration.

use tree_sitter::{Node, Parser, Tree};

use crate::error::{RecognizerError, Result};
use crate::extract::span_snippet;
use crate::lang::Lang;
use crate::schema::FunctionRecord;

/// Parse `source` and extract every top-level function.
///
/// # Errors
///
/// Returns `RecognizerError::ParseFailure` if the grammar cannot be loaded or the
/// source contains a syntax error. Tree-sitter recovers from errors on its own, so
/// any ERROR or MISSING node in the tree is treated as a failed parse. The grammar
/// also accepts Python 2 `print`/`exec` statements and silently absorbs a dedent
/// to an unknown level; both are rejected as well.
pub fn extract(identifier: &str, source: &str) -> Result<Vec<FunctionRecord>> {
    let tree = parse(identifier, source)?;
    let root = tree.root_node();
    let lines: Vec<&str> = source.lines().collect();

    if root.has_error() {
        let (line, column) = first_error_position(&root)
            .map(|n| (n.start_position().row + 1, n.start_position().column + 1))
            .unwrap_or((1, 1));
        return Err(RecognizerError::ParseFailure {
            message: format!(
                "{}: syntax error at line {}, column {}",
                identifier, line, column
            ),
        });
    }

    if let Some((node, problem)) = first_rejected_statement(&root, &lines) {
        let position = node.start_position();
        return Err(RecognizerError::ParseFailure {
            message: format!(
                "{}: {} at line {}, column {}",
                identifier,
                problem,
                position.row + 1,
                position.column + 1
            ),
        });
    }

    let mut records = Vec::new();

    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        if let Some(function) = top_level_function(&child) {
            records.push(build_record(&function, source, &lines));
        }
    }

    Ok(records)
}

fn parse(identifier: &str, source: &str) -> Result<Tree> {
    let language = Lang::Python
        .tree_sitter_language()
        .ok_or_else(|| RecognizerError::ParseFailure {
            message: "Python grammar unavailable".to_string(),
        })?;

    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| RecognizerError::ParseFailure {
            message: format!("Failed to set language for {}: {:?}", identifier, e),
        })?;

    parser
        .parse(source, None)
        .ok_or_else(|| RecognizerError::ParseFailure {
            message: format!("Failed to parse file: {}", identifier),
        })
}

/// The function declared by a module-level statement, unwrapping decorators
fn top_level_function<'a>(node: &Node<'a>) -> Option<Node<'a>> {
    match node.kind() {
        "function_definition" => Some(*node),
        "decorated_definition" => node
            .child_by_field_name("definition")
            .filter(|def| def.kind() == "function_definition"),
        _ => None,
    }
}

fn build_record(function: &Node, source: &str, lines: &[&str]) -> FunctionRecord {
    let name = function
        .child_by_field_name("name")
        .map(|n| get_node_text(&n, source))
        .unwrap_or_default();

    let params = function.child_by_field_name("parameters").map(|p| {
        let text = get_node_text(&p, source);
        text.trim_start_matches('(')
            .trim_end_matches(')')
            .trim()
            .to_string()
    });

    let start_line = function.start_position().row + 1;
    let end_line = last_line(function).max(start_line);

    FunctionRecord {
        name,
        start_line,
        end_line,
        snippet: span_snippet(lines, start_line, end_line),
        params,
    }
}

/// Highest 1-based line reached by any non-comment token under `node`.
///
/// Only leaves are consulted: inner nodes such as `block` stretch over trailing
/// comments, which should not extend the function.
fn last_line(node: &Node) -> usize {
    let mut max_row = node.start_position().row;
    visit_all(node, |n| {
        if n.child_count() > 0 || n.kind() == "comment" {
            return;
        }
        let start = n.start_position();
        let end = n.end_position();
        let row = if end.column == 0 && end.row > start.row {
            end.row - 1
        } else {
            end.row
        };
        max_row = max_row.max(row);
    });
    max_row + 1
}

fn first_error_position<'a>(root: &Node<'a>) -> Option<Node<'a>> {
    let mut found = None;
    visit_all(root, |n| {
        if found.is_none() && (n.is_error() || n.is_missing()) {
            found = Some(*n);
        }
    });
    found
}

/// Statements the grammar accepts but Python 3 does not
fn first_rejected_statement<'a>(
    root: &Node<'a>,
    lines: &[&str],
) -> Option<(Node<'a>, &'static str)> {
    let mut found = None;
    visit_all(root, |n| {
        if found.is_some() {
            return;
        }
        found = match n.kind() {
            "print_statement" => Some((*n, "Python 2 print statement")),
            "exec_statement" => Some((*n, "Python 2 exec statement")),
            "module" | "block" => misaligned_statement(n, lines)
                .map(|s| (s, "unindent does not match any outer indentation level")),
            "elif_clause" | "else_clause" | "except_clause" | "except_group_clause"
            | "finally_clause" => n
                .parent()
                .filter(|parent| {
                    starts_line(n, lines)
                        && n.start_position().column != parent.start_position().column
                })
                .map(|_| (*n, "unindent does not match any outer indentation level")),
            _ => None,
        };
    });
    found
}

/// First statement of a suite that does not sit at the suite's indentation.
///
/// Module statements must start at column 0. Statements sharing a line through `;`
/// are skipped, and a suite written inline after its `:` may not continue on the
/// following lines.
fn misaligned_statement<'a>(suite: &Node<'a>, lines: &[&str]) -> Option<Node<'a>> {
    let mut column = (suite.kind() == "module").then_some(0);
    let mut inline = false;

    let mut cursor = suite.walk();
    let statements = suite
        .named_children(&mut cursor)
        .filter(|n| n.kind() != "comment" && !n.is_extra());

    for (i, statement) in statements.enumerate() {
        if !starts_line(&statement, lines) {
            inline |= i == 0 && suite.kind() == "block";
            continue;
        }
        if inline {
            return Some(statement);
        }
        let at = statement.start_position().column;
        match column {
            None => column = Some(at),
            Some(expected) if expected != at => return Some(statement),
            Some(_) => {}
        }
    }
    None
}

/// Whether only whitespace precedes `node` on its first line
fn starts_line(node: &Node, lines: &[&str]) -> bool {
    let position = node.start_position();
    lines
        .get(position.row)
        .and_then(|line| line.get(..position.column))
        .map(|prefix| prefix.chars().all(char::is_whitespace))
        .unwrap_or(true)
}

fn get_node_text(node: &Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

/// Visit all nodes under `node` (iterative to avoid stack overflow)
fn visit_all<'a, F>(node: &Node<'a>, mut visitor: F)
where
    F: FnMut(&Node<'a>),
{
    let mut cursor = node.walk();
    let mut did_visit_children = false;

    loop {
        if !did_visit_children {
            visitor(&cursor.node());

            if cursor.goto_first_child() {
                continue;
            }
        }

        if cursor.goto_next_sibling() {
            did_visit_children = false;
            continue;
        }

        if !cursor.goto_parent() {
            break;
        }
        did_visit_children = true;
    }
}
