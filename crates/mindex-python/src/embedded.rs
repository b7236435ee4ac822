//! In-process symbol extraction with the tree-sitter Python grammar
//!
//! Mirrors what the interpreter's `ast` module reports for module-level
//! statements: function and class definitions (decorated or not) and plain
//! name targets of `=` assignments, including chained and parenthesized
//! ones. The grammar also accepts Python 2 `print` and `exec` statements;
//! those are rejected as syntax errors, as the interpreter does.

use mindex_parser_api::{NodeId, ParserError, ParserResult, SyntaxTree};
use std::path::Path;
use std::sync::LazyLock;

static LANGUAGE: LazyLock<tree_sitter::Language> = LazyLock::new(tree_sitter_python::language);

/// Module-level names defined by `source`, private ones included
pub fn extract(source: &str, file_path: &Path) -> ParserResult<Vec<String>> {
    let tree = SyntaxTree::parse(&LANGUAGE, source, file_path)?;
    tree.check(file_path)?;
    reject_legacy_statements(&tree, file_path)?;

    let mut names = Vec::new();
    for stmt in tree.named_children(tree.root()) {
        collect_statement(&tree, stmt, &mut names);
    }
    Ok(names)
}

const LEGACY_STATEMENTS: &[&str] = &["print_statement", "exec_statement"];

fn reject_legacy_statements(tree: &SyntaxTree, file_path: &Path) -> ParserResult<()> {
    let mut legacy = None;
    tree.walk(tree.root(), |tree, id| {
        if legacy.is_none() && LEGACY_STATEMENTS.contains(&tree.kind(id)) {
            legacy = Some(id);
        }
    });

    match legacy {
        None => Ok(()),
        Some(id) => {
            let node = tree.node(id);
            Err(ParserError::SyntaxError(
                file_path.to_path_buf(),
                node.row + 1,
                node.column + 1,
                format!("Python 2 {} is not valid Python 3", node.kind),
            ))
        }
    }
}

fn collect_statement(tree: &SyntaxTree, stmt: NodeId, names: &mut Vec<String>) {
    match tree.kind(stmt) {
        "function_definition" | "class_definition" => {
            if let Some(name) = tree.field(stmt, "name") {
                names.push(tree.text(name).to_string());
            }
        }
        "decorated_definition" => {
            if let Some(definition) = tree.field(stmt, "definition") {
                collect_statement(tree, definition, names);
            }
        }
        "expression_statement" => {
            for expr in tree.named_children(stmt) {
                if tree.kind(expr) == "assignment" {
                    collect_assignment(tree, expr, names);
                }
            }
        }
        _ => {}
    }
}

fn collect_assignment(tree: &SyntaxTree, assignment: NodeId, names: &mut Vec<String>) {
    // `x: int = 1` is an annotated assignment
    if tree.field(assignment, "type").is_some() {
        return;
    }
    if let Some(name) = tree
        .field(assignment, "left")
        .and_then(|left| plain_name(tree, left))
    {
        names.push(tree.text(name).to_string());
    }
    // `a = b = 1` nests the second target on the right
    if let Some(right) = tree
        .field(assignment, "right")
        .filter(|&r| tree.kind(r) == "assignment")
    {
        collect_assignment(tree, right, names);
    }
}

/// The identifier a target binds when it is a bare name, looking through
/// redundant parentheses; `(a,)` and `(a, b)` are tuples and bind no name
fn plain_name(tree: &SyntaxTree, target: NodeId) -> Option<NodeId> {
    match tree.kind(target) {
        "identifier" | "keyword_identifier" => Some(target),
        "parenthesized_expression" | "tuple_pattern" | "tuple" => {
            if tree.child_of_kind(target, ",").is_some() {
                return None;
            }
            let mut inner = tree.named_children(target);
            match (inner.next(), inner.next()) {
                (Some(only), None) => plain_name(tree, only),
                _ => None,
            }
        }
        _ => None,
    }
}
