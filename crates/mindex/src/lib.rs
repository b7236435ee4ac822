//! # mindex
//!
//! Project export index. Scans a source tree depth-first and reports, for
//! every file, the symbols it exports.
//!
//! Files are routed by extension:
//!
//! | Extension      | Parsers                               |
//! |----------------|---------------------------------------|
//! | `.js`, `.mjs`  | dynamic module parser                 |
//! | `.ts`          | typed parser                          |
//! | `.tsx`         | typed parser merged with components   |
//! | `.jsx`         | component parser                      |
//! | `.py`          | Python symbol service                 |
//! | anything else  | none; reported with no exports        |
//!
//! Directories in the skip-list and hidden directories are never entered.
//! Per-file failures are logged and reported as empty entries; only a bad
//! root fails the scan.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mindex::{OutputMode, ProjectScanner, ScanConfig};
//! use std::path::Path;
//!
//! let scanner = ProjectScanner::with_config(ScanConfig::default().with_mode(OutputMode::Enhanced));
//! let report = scanner.scan(Path::new("./my-project")).unwrap();
//! println!("{}", report.tree.to_json().unwrap());
//! println!("{} files, {} records", report.metrics.files_seen, report.metrics.total_records);
//! ```

pub mod config;
pub mod error;
pub mod language;
pub mod scanner;
pub mod tree;

pub use config::{OutputMode, ScanConfig, DEFAULT_SKIP_DIRS};
pub use error::{ScanError, ScanResult};
pub use language::{Extraction, ParserSet, SourceLanguage};
pub use scanner::{scan_directory, ProjectScanner, ScanReport};
pub use tree::{DirectoryNode, Entry, FileExports};

// Re-export parser-api types for convenience
pub use mindex_parser_api::{ExportRecord, ParserConfig, PythonBackend, ScanMetrics, SymbolKind};
