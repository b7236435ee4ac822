//! Implementation of the ExportParser trait for JSX/TSX components

use mindex_parser_api::{ExportParser, ExportRecord, ParserConfig, ParserResult};
use std::path::Path;

use crate::extractor;

/// Component parser implementing the ExportParser trait
///
/// Only exported functions that render templated elements are reported;
/// other exports are left to the language parsers.
pub struct JsxParser {
    config: ParserConfig,
}

impl JsxParser {
    /// Create a new JSX parser with default configuration
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a new JSX parser with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl Default for JsxParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportParser for JsxParser {
    fn language(&self) -> &str {
        "jsx"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".jsx", ".tsx"]
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
        assert_eq!(JsxParser::new().language(), "jsx");
    }

    #[test]
    fn test_can_parse() {
        let parser = JsxParser::new();
        assert!(parser.can_parse(Path::new("Card.jsx")));
        assert!(parser.can_parse(Path::new("Card.tsx")));
        assert!(!parser.can_parse(Path::new("card.js")));
        assert!(!parser.can_parse(Path::new("card.ts")));
    }
}
