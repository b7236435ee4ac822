//! Implementation of the ExportParser trait for TypeScript

use mindex_parser_api::{ExportParser, ExportRecord, ParserConfig, ParserResult};
use std::path::Path;

use crate::extractor;

/// TypeScript export parser implementing the ExportParser trait
pub struct TypeScriptParser {
    config: ParserConfig,
}

impl TypeScriptParser {
    /// Create a new TypeScript parser with default configuration
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a new TypeScript parser with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl Default for TypeScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportParser for TypeScriptParser {
    fn language(&self) -> &str {
        "typescript"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".ts", ".tsx"]
    }

    fn try_parse(&self, source: &str, file_path: &Path) -> ParserResult<Vec<ExportRecord>> {
        extractor::extract(source, file_path, &self.config)
    }

    fn config(&self) -> &ParserConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language() {
        let parser = TypeScriptParser::new();
        assert_eq!(parser.language(), "typescript");
    }

    #[test]
    fn test_file_extensions() {
        let parser = TypeScriptParser::new();
        assert_eq!(parser.file_extensions(), &[".ts", ".tsx"]);
    }

    #[test]
    fn test_can_parse() {
        let parser = TypeScriptParser::new();
        assert!(parser.can_parse(Path::new("test.ts")));
        assert!(parser.can_parse(Path::new("test.tsx")));
        assert!(!parser.can_parse(Path::new("test.js")));
        assert!(!parser.can_parse(Path::new("test.jsx")));
    }

    #[test]
    fn test_other_extensions_are_unsupported() {
        let parser = TypeScriptParser::new();
        let err = parser
            .try_parse("export const a = 1;", Path::new("a.js"))
            .unwrap_err();
        assert!(err.is_unsupported());
    }
}
