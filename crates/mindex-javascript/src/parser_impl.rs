//! Implementation of the ExportParser trait for JavaScript

use mindex_parser_api::{ExportParser, ExportRecord, ParserConfig, ParserResult};
use std::path::Path;

use crate::extractor;

/// JavaScript/CommonJS export parser implementing the ExportParser trait
///
/// Also accepts `.ts`/`.tsx` through its type-stripping fallback, which is
/// what makes it usable as a legacy names-only parser for typed sources.
pub struct JavaScriptParser {
    config: ParserConfig,
}

impl JavaScriptParser {
    /// Create a new JavaScript parser with default configuration
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a new JavaScript parser with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl Default for JavaScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportParser for JavaScriptParser {
    fn language(&self) -> &str {
        "javascript"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".js", ".jsx", ".ts", ".tsx", ".mjs"]
    }

    fn try_parse(&self, source: &str, file_path: &Path) -> ParserResult<Vec<ExportRecord>> {
        extractor::extract(source, file_path, &self.config)
    }

    fn config(&self) -> &ParserConfig {
        &self.config
    }
}
