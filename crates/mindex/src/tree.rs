//! Nested result tree: directories map child names to entries, in
//! filesystem enumeration order

use mindex_parser_api::ExportRecord;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Exports of one file, shaped by the output mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FileExports {
    Names(Vec<String>),
    Records(Vec<ExportRecord>),
}

impl FileExports {
    pub fn len(&self) -> usize {
        match self {
            FileExports::Names(names) => names.len(),
            FileExports::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exported names regardless of mode
    pub fn names(&self) -> Vec<&str> {
        match self {
            FileExports::Names(names) => names.iter().map(String::as_str).collect(),
            FileExports::Records(records) => records.iter().map(|r| r.name.as_str()).collect(),
        }
    }
}

/// A child of a directory
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Directory(DirectoryNode),
    File(FileExports),
}

/// Ordered mapping from child key to entry. Directory keys end in `/`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectoryNode {
    entries: Vec<(String, Entry)>,
}

impl DirectoryNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_file(&mut self, name: impl Into<String>, exports: FileExports) {
        self.entries.push((name.into(), Entry::File(exports)));
    }

    /// Insert a subdirectory; the trailing `/` is added to the key
    pub fn insert_directory(&mut self, name: &str, node: DirectoryNode) {
        self.entries
            .push((format!("{name}/"), Entry::Directory(node)));
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    pub fn file(&self, name: &str) -> Option<&FileExports> {
        match self.get(name)? {
            Entry::File(exports) => Some(exports),
            Entry::Directory(_) => None,
        }
    }

    /// Look up a subdirectory by bare name
    pub fn directory(&self, name: &str) -> Option<&DirectoryNode> {
        match self.get(&format!("{name}/"))? {
            Entry::Directory(node) => Some(node),
            Entry::File(_) => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn entries(&self) -> &[(String, Entry)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for DirectoryNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindex_parser_api::SymbolKind;

    #[test]
    fn test_lookup() {
        let mut inner = DirectoryNode::new();
        inner.insert_file("b.js", FileExports::Names(vec!["b".to_string()]));

        let mut root = DirectoryNode::new();
        root.insert_file("a.py", FileExports::Names(Vec::new()));
        root.insert_directory("lib", inner);

        assert_eq!(root.keys().collect::<Vec<_>>(), vec!["a.py", "lib/"]);
        assert!(root.file("a.py").unwrap().is_empty());
        assert!(root.file("lib/").is_none());
        assert_eq!(root.directory("lib").unwrap().file("b.js").unwrap().names(), vec!["b"]);
        assert!(root.directory("a.py").is_none());
    }

    #[test]
    fn test_serialization_keeps_insertion_order() {
        let mut root = DirectoryNode::new();
        root.insert_file("zeta.js", FileExports::Names(vec!["z".to_string()]));
        root.insert_directory("alpha", DirectoryNode::new());
        root.insert_file("beta.ts", FileExports::Names(Vec::new()));

        let json = serde_json::to_string(&root).unwrap();
        assert_eq!(json, r#"{"zeta.js":["z"],"alpha/":{},"beta.ts":[]}"#);
    }

    #[test]
    fn test_records_serialize_inline() {
        let mut root = DirectoryNode::new();
        root.insert_file(
            "api.ts",
            FileExports::Records(vec![ExportRecord::new("fetchUser", SymbolKind::Function)]),
        );

        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["api.ts"][0]["name"], "fetchUser");
        assert_eq!(json["api.ts"][0]["kind"], "function");
    }
}
