use crate::{config::ParserConfig, errors::ParserResult, normalize, record::ExportRecord};
use std::path::Path;

/// Core trait that all export parsers implement
///
/// A parser turns the text of one source file into the records of the
/// symbols that file exports. The scanner selects parsers by extension and
/// never sees a parser's internal grammar or fallback strategy.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`.
///
/// # Example
/// ```rust,ignore
/// use mindex_parser_api::{ExportParser, ExportRecord, ParserConfig, ParserResult};
///
/// struct MyParser {
///     config: ParserConfig,
/// }
///
/// impl ExportParser for MyParser {
///     fn language(&self) -> &str {
///         "mylang"
///     }
///
///     fn file_extensions(&self) -> &[&str] {
///         &[".my"]
///     }
///
///     // ... implement try_parse and config
/// }
/// ```
pub trait ExportParser: Send + Sync {
    /// Returns the language identifier (lowercase, e.g., "python", "typescript")
    fn language(&self) -> &str;

    /// Returns supported file extensions (e.g., [".ts"])
    fn file_extensions(&self) -> &[&str];

    /// Extract export records, surfacing every failure
    ///
    /// # Errors
    /// Returns `ParserError` if:
    /// - The extension is outside this parser's support boundary
    /// - Every grammar attempt fails
    /// - A delegated process fails
    fn try_parse(&self, source: &str, file_path: &Path) -> ParserResult<Vec<ExportRecord>>;

    /// Get parser configuration
    fn config(&self) -> &ParserConfig;

    /// Extract export records, degrading every failure to an empty list
    ///
    /// Unsupported extensions are silent; any other error is logged as a
    /// warning.
    fn parse(&self, source: &str, file_path: &Path) -> Vec<ExportRecord> {
        match self.try_parse(source, file_path) {
            Ok(records) => records,
            Err(e) if e.is_unsupported() => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    language = self.language(),
                    path = %file_path.display(),
                    error = %e,
                    "Failed to extract exports"
                );
                Vec::new()
            }
        }
    }

    /// Bare exported names in first-seen order
    fn parse_names(&self, source: &str, file_path: &Path) -> Vec<String> {
        normalize::extract_names(&self.parse(source, file_path))
    }

    /// Check if this parser can handle the given file
    ///
    /// Default implementation checks file extension.
    fn can_parse(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            let ext_str = format!(".{}", ext.to_string_lossy());
            self.file_extensions().contains(&ext_str.as_str())
        } else {
            false
        }
    }
}
