use serde::{Deserialize, Serialize};
use std::path::Path;

/// What kind of symbol an export record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolKind {
    Function,
    Class,
    Variable,
    Interface,
    TypeAlias,
    ReExport,
    Component,
    Default,
    Unknown,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Class => "class",
            SymbolKind::Variable => "variable",
            SymbolKind::Interface => "interface",
            SymbolKind::TypeAlias => "type-alias",
            SymbolKind::ReExport => "re-export",
            SymbolKind::Component => "component",
            SymbolKind::Default => "default",
            SymbolKind::Unknown => "unknown",
        }
    }
}

/// How a symbol is exposed to importers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    Named,
    Default,
    All,
}

/// One property of an exported interface
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertySignature {
    pub name: String,

    /// Canonical type text (see the typed parser's type resolution)
    #[serde(rename = "type")]
    pub type_name: String,

    pub optional: bool,
}

impl PropertySignature {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, optional: bool) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            optional,
        }
    }
}

/// One destructured prop of a component's first parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentProp {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,
}

impl ComponentProp {
    /// Prop types are never resolved; every prop reports `unknown`.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: "unknown".to_string(),
        }
    }
}

/// Kind-specific detail attached to a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordMetadata {
    /// Interface members in declaration order
    Properties(Vec<PropertySignature>),

    /// Resolved right-hand side of a type alias
    Definition(String),

    /// Component props in destructuring order
    Props(Vec<ComponentProp>),
}

/// Canonical description of one exported symbol in a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub name: String,

    pub kind: SymbolKind,

    /// False only for declarations a parser tracks internally before an
    /// export is seen; such records never reach the output
    pub exported: bool,

    pub export_kind: Option<ExportKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RecordMetadata>,
}

impl ExportRecord {
    /// A named, exported record without metadata
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            exported: true,
            export_kind: Some(ExportKind::Named),
            metadata: None,
        }
    }

    /// A default-export record
    pub fn default_export(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self::new(name, kind).with_export_kind(Some(ExportKind::Default))
    }

    /// A declaration seen but not (yet) exported
    pub fn internal(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            exported: false,
            export_kind: None,
            ..Self::new(name, kind)
        }
    }

    pub fn with_export_kind(mut self, export_kind: Option<ExportKind>) -> Self {
        self.export_kind = export_kind;
        self
    }

    pub fn with_metadata(mut self, metadata: RecordMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn is_default(&self) -> bool {
        self.export_kind == Some(ExportKind::Default)
    }

    /// Mark a tracked declaration as exported under `export_kind`
    pub fn mark_exported(&mut self, export_kind: ExportKind) {
        self.exported = true;
        self.export_kind = Some(export_kind);
    }
}

/// Naming policy for default exports that carry no name of their own
///
/// The dynamic-module parser and the typed parser intentionally disagree
/// here, so each parser declares its own constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnonymousDefault {
    /// File basename minus extension, first character uppercased
    CapitalizedBasename,
    /// A fixed name
    Literal(&'static str),
}

impl AnonymousDefault {
    pub fn name_for(&self, file_path: &Path) -> String {
        match self {
            AnonymousDefault::Literal(name) => (*name).to_string(),
            AnonymousDefault::CapitalizedBasename => {
                let stem = file_path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let mut chars = stem.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized_basename() {
        let policy = AnonymousDefault::CapitalizedBasename;
        assert_eq!(policy.name_for(Path::new("src/widget.js")), "Widget");
        assert_eq!(policy.name_for(Path::new("userCard.jsx")), "UserCard");
        assert_eq!(policy.name_for(Path::new("api.client.ts")), "Api.client");
        assert_eq!(policy.name_for(Path::new("Already.js")), "Already");
    }

    #[test]
    fn test_literal_default() {
        let policy = AnonymousDefault::Literal("default");
        assert_eq!(policy.name_for(Path::new("widget.ts")), "default");
    }

    #[test]
    fn test_record_serialization() {
        let record = ExportRecord::new("User", SymbolKind::Interface).with_metadata(
            RecordMetadata::Properties(vec![PropertySignature::new("id", "string", false)]),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "User");
        assert_eq!(json["kind"], "interface");
        assert_eq!(json["exported"], true);
        assert_eq!(json["export_kind"], "named");
        assert_eq!(json["metadata"]["properties"][0]["type"], "string");
    }

    #[test]
    fn test_internal_then_exported() {
        let mut record = ExportRecord::internal("Button", SymbolKind::Component);
        assert!(!record.exported);
        assert_eq!(record.export_kind, None);

        record.mark_exported(ExportKind::Named);
        assert!(record.exported);
        assert!(!record.is_default());
    }

    #[test]
    fn test_kind_strings_match_serde() {
        for kind in [
            SymbolKind::TypeAlias,
            SymbolKind::ReExport,
            SymbolKind::Component,
            SymbolKind::Unknown,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.as_str());
        }
    }
}
