//! Export extraction for JavaScript and CommonJS source code
//!
//! One grammar backs every attempt; the module and script attempts differ in
//! which constructs they accept once the tree is built.

use mindex_parser_api::{
    AnonymousDefault, ExportRecord, NodeId, ParserConfig, ParserError, ParserResult, SyntaxTree,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, instrument};

use crate::strip::strip_types;
use crate::visitor::ExportVisitor;

/// Extensions this parser accepts; anything else is outside its boundary
pub const SUPPORTED_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs"];

/// Anonymous default exports are named after the file
pub const ANONYMOUS_DEFAULT: AnonymousDefault = AnonymousDefault::CapitalizedBasename;

static LANGUAGE: LazyLock<tree_sitter::Language> = LazyLock::new(tree_sitter_javascript::language);

/// How a successfully built tree is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// ES module: import/export allowed, strict-mode rules enforced
    Module,
    /// Classic script: sloppy mode, no import/export declarations
    Script,
}

const JSX_KINDS: &[&str] = &["jsx_element", "jsx_self_closing_element", "jsx_fragment"];

const FUNCTION_SCOPES: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "function",
    "function_expression",
    "generator_function",
    "arrow_function",
    "method_definition",
];

// Reserved as binding names in strict code
const STRICT_RESERVED: &[&str] = &[
    "implements",
    "interface",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "yield",
    "let",
    "await",
];

/// Extract export records from JavaScript-family source code
#[instrument(skip(source, config), fields(file = %file_path.display()))]
pub fn extract(
    source: &str,
    file_path: &Path,
    config: &ParserConfig,
) -> ParserResult<Vec<ExportRecord>> {
    let ext = file_path
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| SUPPORTED_EXTENSIONS.contains(e))
        .ok_or_else(|| ParserError::UnsupportedExtension(file_path.to_path_buf()))?;

    if source.len() > config.max_file_size {
        return Err(ParserError::FileTooLarge(file_path.to_path_buf(), source.len()));
    }

    let tree = parse_with_fallback(source, file_path, ext)?;

    let mut visitor = ExportVisitor::new(file_path, ANONYMOUS_DEFAULT);
    tree.walk(tree.root(), |tree, id| visitor.visit(tree, id));
    Ok(visitor.finish())
}

/// Walk the ladder: module, then script, then (typed sources only) strip
/// annotations and retry as script. The last failure is returned.
pub fn parse_with_fallback(source: &str, file_path: &Path, ext: &str) -> ParserResult<SyntaxTree> {
    let allow_jsx = ext.ends_with('x');
    let tree = SyntaxTree::parse(&LANGUAGE, source, file_path)?;

    let module_err = match validate(&tree, file_path, SourceType::Module, allow_jsx) {
        Ok(()) => return Ok(tree),
        Err(e) => e,
    };
    debug!(error = %module_err, "Module parse failed, retrying as script");

    let script_err = match validate(&tree, file_path, SourceType::Script, allow_jsx) {
        Ok(()) => return Ok(tree),
        Err(e) => e,
    };

    if !matches!(ext, "ts" | "tsx") {
        return Err(script_err);
    }
    debug!(error = %script_err, "Script parse failed, retrying with types stripped");

    let stripped = strip_types(source);
    let tree = SyntaxTree::parse(&LANGUAGE, &stripped, file_path)?;
    validate(&tree, file_path, SourceType::Script, allow_jsx)?;
    Ok(tree)
}

/// Accept or reject a tree under the given source type
pub fn validate(
    tree: &SyntaxTree,
    file_path: &Path,
    source_type: SourceType,
    allow_jsx: bool,
) -> ParserResult<()> {
    tree.check(file_path)?;

    let mut violation: Option<(NodeId, &'static str)> = None;
    tree.walk(tree.root(), |tree, id| {
        if violation.is_some() {
            return;
        }
        let kind = tree.kind(id);
        if !allow_jsx && JSX_KINDS.contains(&kind) {
            violation = Some((id, "JSX syntax is not enabled for this extension"));
            return;
        }
        violation = match source_type {
            SourceType::Module => strict_violation(tree, id),
            SourceType::Script => script_violation(kind),
        }
        .map(|msg| (id, msg));
    });
    if violation.is_none() {
        violation = duplicate_binding(tree).map(|id| (id, "Identifier has already been declared"));
    }

    match violation {
        None => Ok(()),
        Some((id, message)) => {
            let node = tree.node(id);
            Err(ParserError::SyntaxError(
                file_path.to_path_buf(),
                node.row + 1,
                node.column + 1,
                message.to_string(),
            ))
        }
    }
}

fn script_violation(kind: &str) -> Option<&'static str> {
    match kind {
        "import_statement" | "export_statement" => {
            Some("'import' and 'export' may appear only in modules")
        }
        _ => None,
    }
}

fn strict_violation(tree: &SyntaxTree, id: NodeId) -> Option<&'static str> {
    match tree.kind(id) {
        "with_statement" => Some("'with' is not allowed in strict mode"),
        "return_statement"
            if !tree
                .ancestors(id)
                .any(|a| FUNCTION_SCOPES.contains(&tree.kind(a))) =>
        {
            Some("'return' outside of function")
        }
        "number" if is_legacy_octal(tree.text(id)) => {
            Some("Octal literals are not allowed in strict mode")
        }
        "escape_sequence" if is_octal_escape(tree.text(id)) => {
            Some("Octal escape sequences are not allowed in strict mode")
        }
        "unary_expression" => {
            let deletes_binding = tree
                .field(id, "operator")
                .is_some_and(|op| tree.text(op) == "delete")
                && tree
                    .field(id, "argument")
                    .is_some_and(|arg| tree.kind(arg) == "identifier");
            deletes_binding.then_some("Deleting local variable in strict mode")
        }
        "identifier" if STRICT_RESERVED.contains(&tree.text(id)) => {
            Some("Reserved word used as identifier in strict mode")
        }
        _ => None,
    }
}

fn is_legacy_octal(text: &str) -> bool {
    text.len() > 1 && text.starts_with('0') && text.bytes().all(|b| b.is_ascii_digit())
}

/// `\1` through `\7`, and `\0` followed by more digits
fn is_octal_escape(text: &str) -> bool {
    let Some(digits) = text.strip_prefix('\\') else {
        return false;
    };
    digits.starts_with(|c: char| c.is_ascii_digit()) && digits != "0"
}

/// How a program-scope declaration binds its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    /// `let`, `const`, `class`
    Lexical,
    /// `var`, `function`
    Var,
}

/// First program-scope name that a `let`, `const` or `class` declares
/// twice, or that collides with a `var` or function of the same name
fn duplicate_binding(tree: &SyntaxTree) -> Option<NodeId> {
    let mut bound: HashMap<&str, Binding> = HashMap::new();

    for stmt in tree.named_children(tree.root()) {
        let decl = if tree.kind(stmt) == "export_statement" {
            match tree.field(stmt, "declaration") {
                Some(decl) => decl,
                None => continue,
            }
        } else {
            stmt
        };

        for (name, binding) in declared_names(tree, decl) {
            match bound.get(tree.text(name)) {
                Some(&previous) if previous == Binding::Lexical || binding == Binding::Lexical => {
                    return Some(name);
                }
                _ => {
                    bound.insert(tree.text(name), binding);
                }
            }
        }
    }
    None
}

fn declared_names(tree: &SyntaxTree, decl: NodeId) -> Vec<(NodeId, Binding)> {
    let binding = match tree.kind(decl) {
        "lexical_declaration" | "class_declaration" => Binding::Lexical,
        "variable_declaration" | "function_declaration" | "generator_function_declaration" => {
            Binding::Var
        }
        _ => return Vec::new(),
    };

    match tree.kind(decl) {
        "lexical_declaration" | "variable_declaration" => tree
            .named_children(decl)
            .filter(|&d| tree.kind(d) == "variable_declarator")
            .filter_map(|d| tree.field(d, "name"))
            .filter(|&n| tree.kind(n) == "identifier")
            .map(|n| (n, binding))
            .collect(),
        _ => tree
            .field(decl, "name")
            .map(|n| vec![(n, binding)])
            .unwrap_or_default(),
    }
}
