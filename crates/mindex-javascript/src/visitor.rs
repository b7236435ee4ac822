//! Export recognition over JavaScript syntax trees

use mindex_parser_api::{AnonymousDefault, ExportRecord, NodeId, SymbolKind, SyntaxTree};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Collects export records while the walker visits every node
pub struct ExportVisitor {
    file_path: PathBuf,
    anonymous_default: AnonymousDefault,
    records: Vec<ExportRecord>,
    seen: HashSet<String>,
}

impl ExportVisitor {
    pub fn new(file_path: &Path, anonymous_default: AnonymousDefault) -> Self {
        Self {
            file_path: file_path.to_path_buf(),
            anonymous_default,
            records: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Records in discovery order, one per name
    pub fn finish(self) -> Vec<ExportRecord> {
        self.records
    }

    fn add(&mut self, record: ExportRecord) {
        if !record.name.is_empty() && self.seen.insert(record.name.clone()) {
            self.records.push(record);
        }
    }

    pub fn visit(&mut self, tree: &SyntaxTree, id: NodeId) {
        match tree.kind(id) {
            "export_statement" => self.visit_export(tree, id),
            "assignment_expression" => self.visit_assignment(tree, id),
            _ => {}
        }
    }

    fn visit_export(&mut self, tree: &SyntaxTree, id: NodeId) {
        if tree.child_of_kind(id, "default").is_some() {
            self.visit_default_export(tree, id);
            return;
        }

        if let Some(decl) = tree.field(id, "declaration") {
            self.visit_declaration(tree, decl);
        }

        // export { a, b as c }
        if let Some(clause) = tree.child_of_kind(id, "export_clause") {
            for spec in tree.named_children(clause) {
                if tree.kind(spec) != "export_specifier" {
                    continue;
                }
                let exported = tree.field(spec, "alias").or_else(|| tree.field(spec, "name"));
                if let Some(name) = exported.filter(|&n| tree.kind(n) == "identifier") {
                    self.add(ExportRecord::new(tree.text(name), SymbolKind::ReExport));
                }
            }
        }
    }

    fn visit_default_export(&mut self, tree: &SyntaxTree, id: NodeId) {
        let target = tree
            .field(id, "declaration")
            .or_else(|| tree.field(id, "value"));

        let named = target.and_then(|t| {
            let kind = callable_kind(tree.kind(t))?;
            let name = tree.field(t, "name")?;
            Some((tree.text(name).to_string(), kind))
        });

        let record = match named {
            Some((name, kind)) => ExportRecord::default_export(name, kind),
            None => ExportRecord::default_export(
                self.anonymous_default.name_for(&self.file_path),
                SymbolKind::Default,
            ),
        };
        self.add(record);
    }

    fn visit_declaration(&mut self, tree: &SyntaxTree, decl: NodeId) {
        match tree.kind(decl) {
            "lexical_declaration" | "variable_declaration" => {
                for declarator in tree.named_children(decl) {
                    if tree.kind(declarator) != "variable_declarator" {
                        continue;
                    }
                    // Destructuring patterns bind no single name
                    if let Some(name) = tree
                        .field(declarator, "name")
                        .filter(|&n| tree.kind(n) == "identifier")
                    {
                        self.add(ExportRecord::new(tree.text(name), SymbolKind::Variable));
                    }
                }
            }
            kind => {
                if let (Some(symbol), Some(name)) = (callable_kind(kind), tree.field(decl, "name")) {
                    self.add(ExportRecord::new(tree.text(name), symbol));
                }
            }
        }
    }

    /// `module.exports = { ... }` and `exports.name = ...`
    fn visit_assignment(&mut self, tree: &SyntaxTree, id: NodeId) {
        let Some(left) = tree
            .field(id, "left")
            .filter(|&l| tree.kind(l) == "member_expression")
        else {
            return;
        };
        let (Some(object), Some(property)) = (tree.field(left, "object"), tree.field(left, "property"))
        else {
            return;
        };
        if tree.kind(object) != "identifier" {
            return;
        }

        match tree.text(object) {
            "module" if tree.text(property) == "exports" => {
                let Some(right) = tree.field(id, "right").filter(|&r| tree.kind(r) == "object") else {
                    return;
                };
                for member in tree.named_children(right) {
                    if let Some(key) = object_key(tree, member) {
                        self.add(ExportRecord::new(key, SymbolKind::Unknown));
                    }
                }
            }
            "exports" if tree.kind(property) == "property_identifier" => {
                self.add(ExportRecord::new(tree.text(property), SymbolKind::Unknown));
            }
            _ => {}
        }
    }
}

/// Identifier key of an object literal member; string, computed and spread
/// members have none
fn object_key(tree: &SyntaxTree, member: NodeId) -> Option<String> {
    let key = match tree.kind(member) {
        "shorthand_property_identifier" => member,
        "pair" => tree.field(member, "key")?,
        "method_definition" => tree.field(member, "name")?,
        _ => return None,
    };
    matches!(
        tree.kind(key),
        "property_identifier" | "shorthand_property_identifier"
    )
    .then(|| tree.text(key).to_string())
}

fn callable_kind(kind: &str) -> Option<SymbolKind> {
    match kind {
        "function_declaration"
        | "generator_function_declaration"
        | "function"
        | "function_expression"
        | "generator_function" => Some(SymbolKind::Function),
        "class_declaration" | "class" => Some(SymbolKind::Class),
        _ => None,
    }
}
