//! Component discovery over TSX syntax trees

use mindex_parser_api::{
    dedup_records, AnonymousDefault, ExportKind, ExportRecord, NodeId, RecordMetadata, SymbolKind,
    SyntaxTree,
};
use std::path::{Path, PathBuf};

use crate::component::{extract_props, is_component};

/// Collects component records; module-level components that are not
/// exported yet are tracked so an `export { X }` anywhere in the module can
/// promote them
pub struct ComponentVisitor {
    file_path: PathBuf,
    anonymous_default: AnonymousDefault,
    records: Vec<ExportRecord>,
    /// Names exported by reference, applied once every candidate is known
    exported_names: Vec<(String, ExportKind)>,
}

impl ComponentVisitor {
    pub fn new(file_path: &Path, anonymous_default: AnonymousDefault) -> Self {
        Self {
            file_path: file_path.to_path_buf(),
            anonymous_default,
            records: Vec::new(),
            exported_names: Vec::new(),
        }
    }

    /// Exported components only, one per name
    pub fn finish(mut self) -> Vec<ExportRecord> {
        for (name, kind) in std::mem::take(&mut self.exported_names) {
            self.mark_exported(&name, kind);
        }
        dedup_records(self.records.into_iter().filter(|r| r.exported).collect())
    }

    pub fn visit(&mut self, tree: &SyntaxTree, id: NodeId) {
        let at_module_level = tree.parent(id).map(|p| tree.kind(p)) == Some("program");
        if !at_module_level {
            return;
        }

        match tree.kind(id) {
            "export_statement" => {
                if tree.child_of_kind(id, "default").is_some() {
                    self.visit_default(tree, id);
                    return;
                }
                if let Some(decl) = tree.field(id, "declaration") {
                    self.visit_declaration(tree, decl, Some(ExportKind::Named));
                }
                if let Some(clause) = tree.child_of_kind(id, "export_clause") {
                    for spec in tree.named_children(clause) {
                        if let Some(local) = tree.field(spec, "name") {
                            self.export_by_name(tree.text(local), ExportKind::Named);
                        }
                    }
                }
            }
            "function_declaration" | "lexical_declaration" | "variable_declaration" => {
                self.visit_declaration(tree, id, None);
            }
            _ => {}
        }
    }

    fn visit_declaration(&mut self, tree: &SyntaxTree, decl: NodeId, export: Option<ExportKind>) {
        match tree.kind(decl) {
            "function_declaration" => {
                if let Some(name) = tree.field(decl, "name") {
                    self.add_candidate(tree, tree.text(name), decl, export);
                }
            }
            "lexical_declaration" | "variable_declaration" => {
                for declarator in tree.named_children(decl) {
                    let name = tree
                        .field(declarator, "name")
                        .filter(|&n| tree.kind(n) == "identifier");
                    if let (Some(name), Some(value)) = (name, tree.field(declarator, "value")) {
                        self.add_candidate(tree, tree.text(name), value, export);
                    }
                }
            }
            _ => {}
        }
    }

    fn visit_default(&mut self, tree: &SyntaxTree, id: NodeId) {
        let Some(target) = tree
            .field(id, "declaration")
            .or_else(|| tree.field(id, "value"))
        else {
            return;
        };

        // export default Card;
        if tree.kind(target) == "identifier" {
            self.export_by_name(tree.text(target), ExportKind::Default);
            return;
        }

        let name = tree
            .field(target, "name")
            .map(|n| tree.text(n).to_string())
            .unwrap_or_else(|| self.anonymous_default.name_for(&self.file_path));
        self.add_candidate(tree, &name, target, Some(ExportKind::Default));
    }

    fn add_candidate(
        &mut self,
        tree: &SyntaxTree,
        name: &str,
        function: NodeId,
        export: Option<ExportKind>,
    ) {
        if !is_component(tree, function) {
            return;
        }

        if let Some(existing) = self.records.iter_mut().find(|r| r.name == name) {
            if let Some(kind) = export {
                existing.mark_exported(kind);
            }
            return;
        }

        let props = RecordMetadata::Props(extract_props(tree, function));
        let record = match export {
            Some(kind) => ExportRecord::new(name, SymbolKind::Component)
                .with_export_kind(Some(kind)),
            None => ExportRecord::internal(name, SymbolKind::Component),
        };
        self.records.push(record.with_metadata(props));
    }

    /// Declarations are hoisted, so the name may still be undiscovered here
    fn export_by_name(&mut self, name: &str, kind: ExportKind) {
        self.exported_names.push((name.to_string(), kind));
    }

    /// Promote a discovered component; unknown names are ignored
    fn mark_exported(&mut self, name: &str, kind: ExportKind) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.name == name) {
            existing.mark_exported(kind);
        }
    }
}
