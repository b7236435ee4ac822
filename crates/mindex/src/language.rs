//! Extension-keyed dispatch from a file to the parsers that index it

use mindex_javascript::JavaScriptParser;
use mindex_jsx::JsxParser;
use mindex_parser_api::{merge_records, ExportParser, ExportRecord, ParserConfig};
use mindex_python::PythonSymbolService;
use mindex_typescript::TypeScriptParser;
use std::path::Path;
use tracing::{debug, warn};

/// Language family of a file, decided by its extension alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceLanguage {
    /// `.js`, `.mjs`
    JavaScript,
    /// `.ts`
    TypeScript,
    /// `.tsx`: typed exports merged with components
    TypeScriptJsx,
    /// `.jsx`
    Jsx,
    /// `.py`
    Python,
    /// Anything else; reported with no exports and never read
    Other,
}

impl SourceLanguage {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("js" | "mjs") => SourceLanguage::JavaScript,
            Some("ts") => SourceLanguage::TypeScript,
            Some("tsx") => SourceLanguage::TypeScriptJsx,
            Some("jsx") => SourceLanguage::Jsx,
            Some("py") => SourceLanguage::Python,
            _ => SourceLanguage::Other,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, SourceLanguage::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLanguage::JavaScript => "javascript",
            SourceLanguage::TypeScript => "typescript",
            SourceLanguage::TypeScriptJsx => "tsx",
            SourceLanguage::Jsx => "jsx",
            SourceLanguage::Python => "python",
            SourceLanguage::Other => "other",
        }
    }
}

/// Outcome of running every parser registered for one file
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<ExportRecord>,
    /// Every parser that ran reported an error
    pub failed: bool,
}

/// One instance of each parser, shared across a scan
pub struct ParserSet {
    javascript: JavaScriptParser,
    typescript: TypeScriptParser,
    jsx: JsxParser,
    python: PythonSymbolService,
}

impl ParserSet {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            javascript: JavaScriptParser::with_config(config.clone()),
            typescript: TypeScriptParser::with_config(config.clone()),
            jsx: JsxParser::with_config(config.clone()),
            python: PythonSymbolService::with_config(config.clone()),
        }
    }

    /// Parsers for `language`, in merge order
    pub fn parsers_for(&self, language: SourceLanguage) -> Vec<&dyn ExportParser> {
        match language {
            SourceLanguage::JavaScript => vec![&self.javascript],
            SourceLanguage::TypeScript => vec![&self.typescript],
            SourceLanguage::TypeScriptJsx => vec![&self.typescript, &self.jsx],
            SourceLanguage::Jsx => vec![&self.jsx],
            SourceLanguage::Python => vec![&self.python],
            SourceLanguage::Other => Vec::new(),
        }
    }

    /// Run the parsers for `language` and merge their records by name,
    /// first-seen wins. Failures are logged and contribute nothing.
    pub fn extract(&self, language: SourceLanguage, source: &str, path: &Path) -> Extraction {
        let parsers = self.parsers_for(language);
        if parsers.is_empty() {
            return Extraction::default();
        }

        let mut failures = 0;
        let mut batches = Vec::with_capacity(parsers.len());
        for parser in &parsers {
            match parser.try_parse(source, path) {
                Ok(records) => {
                    debug!(
                        parser = parser.language(),
                        count = records.len(),
                        "Extracted exports"
                    );
                    batches.push(records);
                }
                Err(e) if e.is_unsupported() => {}
                Err(e) => {
                    warn!(
                        parser = parser.language(),
                        path = %path.display(),
                        error = %e,
                        "Failed to extract exports"
                    );
                    failures += 1;
                }
            }
        }

        Extraction {
            records: merge_records(batches),
            failed: failures == parsers.len(),
        }
    }
}

impl Default for ParserSet {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindex_parser_api::{PythonBackend, SymbolKind};

    fn parsers() -> ParserSet {
        ParserSet::new(&ParserConfig::default().with_python_backend(PythonBackend::Embedded))
    }

    #[test]
    fn test_from_path() {
        assert_eq!(SourceLanguage::from_path(Path::new("a.js")), SourceLanguage::JavaScript);
        assert_eq!(SourceLanguage::from_path(Path::new("a.mjs")), SourceLanguage::JavaScript);
        assert_eq!(SourceLanguage::from_path(Path::new("a.ts")), SourceLanguage::TypeScript);
        assert_eq!(SourceLanguage::from_path(Path::new("a.tsx")), SourceLanguage::TypeScriptJsx);
        assert_eq!(SourceLanguage::from_path(Path::new("a.jsx")), SourceLanguage::Jsx);
        assert_eq!(SourceLanguage::from_path(Path::new("a.py")), SourceLanguage::Python);
        assert_eq!(SourceLanguage::from_path(Path::new("a.rs")), SourceLanguage::Other);
        assert_eq!(SourceLanguage::from_path(Path::new("Makefile")), SourceLanguage::Other);
        assert!(!SourceLanguage::Other.is_supported());
    }

    #[test]
    fn test_tsx_merges_typed_and_components() {
        let source = r#"
export interface Props { title: string; }
export const Header = ({ title }: Props) => <h1>{title}</h1>;
"#;
        let out = parsers().extract(SourceLanguage::TypeScriptJsx, source, Path::new("Header.tsx"));
        assert!(!out.failed);
        let names: Vec<_> = out.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Props", "Header"]);
        // The typed parser's record comes first and wins
        assert_eq!(out.records[1].kind, SymbolKind::Variable);
    }

    #[test]
    fn test_failure_is_reported() {
        let out = parsers().extract(SourceLanguage::TypeScript, "export const = ;", Path::new("a.ts"));
        assert!(out.failed);
        assert!(out.records.is_empty());
    }

    #[test]
    fn test_other_runs_nothing() {
        let out = parsers().extract(SourceLanguage::Other, "anything", Path::new("a.txt"));
        assert!(!out.failed);
        assert!(out.records.is_empty());
    }
}
