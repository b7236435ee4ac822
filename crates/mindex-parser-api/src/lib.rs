//! mindex Parser API
//!
//! Shared trait and types for building mindex export parsers.
//!
//! This crate provides the foundation every language crate builds on. It defines:
//!
//! - **ExportParser trait**: The uniform `parse(source, path)` capability
//! - **ExportRecord**: The canonical description of one exported symbol
//! - **SyntaxTree**: An arena of syntax nodes with an identity-guarded walker
//! - **Normalization**: Name extraction and first-seen deduplication
//! - **Configuration**: Customizable parser behavior
//! - **Metrics**: Scan statistics
//! - **Error handling**: Comprehensive error types
//!
//! # Example
//!
//! ```rust,ignore
//! use mindex_parser_api::{ExportParser, ExportRecord, ParserResult, SymbolKind};
//! use std::path::Path;
//!
//! struct MyParser;
//!
//! impl ExportParser for MyParser {
//!     fn language(&self) -> &str {
//!         "mylang"
//!     }
//!
//!     fn file_extensions(&self) -> &[&str] {
//!         &[".my"]
//!     }
//!
//!     fn try_parse(&self, source: &str, file_path: &Path) -> ParserResult<Vec<ExportRecord>> {
//!         Ok(vec![ExportRecord::new("main", SymbolKind::Function)])
//!     }
//! }
//! ```

pub mod config;
pub mod errors;
pub mod metrics;
pub mod normalize;
pub mod record;
pub mod syntax;
pub mod traits;

// Re-export commonly used types
pub use config::{ParserConfig, PythonBackend};
pub use errors::{ParserError, ParserResult};
pub use metrics::ScanMetrics;
pub use normalize::{dedup_records, extract_names, merge_records};
pub use record::{
    AnonymousDefault, ComponentProp, ExportKind, ExportRecord, PropertySignature,
    RecordMetadata, SymbolKind,
};
pub use syntax::{NodeId, SyntaxNode, SyntaxTree, CHILDREN_FIELD, PARENT_FIELD};
pub use traits::ExportParser;
