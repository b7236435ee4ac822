//! Export recognition over TypeScript syntax trees

use mindex_parser_api::{
    AnonymousDefault, ExportKind, ExportRecord, NodeId, PropertySignature, RecordMetadata,
    SymbolKind, SyntaxTree,
};
use std::path::{Path, PathBuf};

use crate::types::{resolve_type, string_value, IMPLICIT_ANY};

/// Visitor that collects typed export records from module-level exports
pub struct TypeScriptVisitor {
    file_path: PathBuf,
    anonymous_default: AnonymousDefault,
    pub records: Vec<ExportRecord>,
}

impl TypeScriptVisitor {
    pub fn new(file_path: &Path, anonymous_default: AnonymousDefault) -> Self {
        Self {
            file_path: file_path.to_path_buf(),
            anonymous_default,
            records: Vec::new(),
        }
    }

    /// Visit one node; only module-level export statements are considered
    pub fn visit(&mut self, tree: &SyntaxTree, id: NodeId) {
        if tree.kind(id) != "export_statement" {
            return;
        }
        // Exports inside `namespace` or `declare module` blocks belong to
        // that block, not to the file
        if tree.parent(id).map(|p| tree.kind(p)) != Some("program") {
            return;
        }

        if tree.child_of_kind(id, "default").is_some() {
            self.visit_default(tree, id);
        } else {
            self.visit_named(tree, id);
        }
    }

    fn visit_named(&mut self, tree: &SyntaxTree, id: NodeId) {
        if let Some(decl) = tree.field(id, "declaration") {
            self.visit_declaration(tree, decl);
        }

        if let Some(clause) = tree.child_of_kind(id, "export_clause") {
            for spec in tree.named_children(clause) {
                if tree.kind(spec) != "export_specifier" {
                    continue;
                }
                let exported = tree.field(spec, "alias").or_else(|| tree.field(spec, "name"));
                if let Some(name) = exported.filter(|&n| tree.kind(n) == "identifier") {
                    self.records
                        .push(ExportRecord::new(tree.text(name), SymbolKind::ReExport));
                }
            }
        }

        // export * as ns from './mod'
        if let Some(ns) = tree.child_of_kind(id, "namespace_export") {
            if let Some(name) = tree
                .named_children(ns)
                .find(|&n| tree.kind(n) == "identifier")
            {
                self.records.push(
                    ExportRecord::new(tree.text(name), SymbolKind::ReExport)
                        .with_export_kind(Some(ExportKind::All)),
                );
            }
        }
    }

    fn visit_declaration(&mut self, tree: &SyntaxTree, decl: NodeId) {
        let name_of = |node: NodeId| tree.field(node, "name").map(|n| tree.text(n).to_string());

        match tree.kind(decl) {
            // export declare ...
            "ambient_declaration" => {
                if let Some(inner) = tree.named_children(decl).next() {
                    self.visit_declaration(tree, inner);
                }
            }
            "interface_declaration" => {
                if let Some(name) = name_of(decl) {
                    let properties = tree
                        .field(decl, "body")
                        .map(|body| interface_properties(tree, body))
                        .unwrap_or_default();
                    self.records.push(
                        ExportRecord::new(name, SymbolKind::Interface)
                            .with_metadata(RecordMetadata::Properties(properties)),
                    );
                }
            }
            "type_alias_declaration" => {
                if let Some(name) = name_of(decl) {
                    let definition = tree
                        .field(decl, "value")
                        .map(|value| resolve_type(tree, value))
                        .unwrap_or_else(|| "unknown".to_string());
                    self.records.push(
                        ExportRecord::new(name, SymbolKind::TypeAlias)
                            .with_metadata(RecordMetadata::Definition(definition)),
                    );
                }
            }
            "function_declaration" | "generator_function_declaration" | "function_signature" => {
                if let Some(name) = name_of(decl) {
                    self.records.push(ExportRecord::new(name, SymbolKind::Function));
                }
            }
            "class_declaration" | "abstract_class_declaration" => {
                if let Some(name) = name_of(decl) {
                    self.records.push(ExportRecord::new(name, SymbolKind::Class));
                }
            }
            "lexical_declaration" | "variable_declaration" => {
                for declarator in tree.named_children(decl) {
                    if tree.kind(declarator) != "variable_declarator" {
                        continue;
                    }
                    if let Some(name) = tree
                        .field(declarator, "name")
                        .filter(|&n| tree.kind(n) == "identifier")
                    {
                        self.records
                            .push(ExportRecord::new(tree.text(name), SymbolKind::Variable));
                    }
                }
            }
            _ => {}
        }
    }

    fn visit_default(&mut self, tree: &SyntaxTree, id: NodeId) {
        let target = tree
            .field(id, "declaration")
            .or_else(|| tree.field(id, "value"));

        let kind = target.and_then(|t| match tree.kind(t) {
            "function_declaration"
            | "generator_function_declaration"
            | "function"
            | "function_expression"
            | "generator_function" => Some(SymbolKind::Function),
            "class_declaration" | "abstract_class_declaration" | "class" => {
                Some(SymbolKind::Class)
            }
            _ => None,
        });

        let record = match (target, kind) {
            (Some(t), Some(kind)) => {
                let name = tree
                    .field(t, "name")
                    .map(|n| tree.text(n).to_string())
                    .unwrap_or_else(|| self.anonymous_default.name_for(&self.file_path));
                ExportRecord::default_export(name, kind)
            }
            _ => ExportRecord::default_export(
                self.anonymous_default.name_for(&self.file_path),
                SymbolKind::Default,
            ),
        };
        self.records.push(record);
    }
}

/// Property signatures of an interface body, in declaration order
fn interface_properties(tree: &SyntaxTree, body: NodeId) -> Vec<PropertySignature> {
    tree.named_children(body)
        .filter(|&m| tree.kind(m) == "property_signature")
        .filter_map(|m| {
            let name = property_key(tree, tree.field(m, "name")?)?;
            let type_name = tree
                .field(m, "type")
                .map(|t| resolve_type(tree, t))
                .unwrap_or_else(|| IMPLICIT_ANY.to_string());
            let optional = tree.child_of_kind(m, "?").is_some();
            Some(PropertySignature::new(name, type_name, optional))
        })
        .collect()
}

/// `id`, `'quoted-key'` and `0` keys; computed keys have no static name
fn property_key(tree: &SyntaxTree, key: NodeId) -> Option<String> {
    match tree.kind(key) {
        "property_identifier" | "number" => Some(tree.text(key).to_string()),
        "string" => string_value(tree, key),
        _ => None,
    }
}
