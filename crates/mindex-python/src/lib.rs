//! # mindex-python
//!
//! Top-level public symbol names for Python sources.
//!
//! Module-level `def`, `async def`, `class` and plain-name assignment
//! targets are reported; names starting with `_` and anything nested are
//! not. Two backends honour that contract:
//!
//! - **Interpreter**: runs a short `ast` script with the configured
//!   interpreter under a timeout and reads one JSON line from its output
//! - **Embedded**: walks a tree-sitter-python tree in process
//!
//! With [`PythonBackend::Auto`](mindex_parser_api::PythonBackend::Auto) the
//! interpreter is probed once and the embedded grammar is used when it is
//! missing.
//!
//! ## Quick Start
//!
//! ```rust
//! use mindex_parser_api::{ParserConfig, PythonBackend};
//! use mindex_python::PythonSymbolService;
//! use std::path::Path;
//!
//! let config = ParserConfig::default().with_python_backend(PythonBackend::Embedded);
//! let service = PythonSymbolService::with_config(config);
//! let names = service.extract_symbols("def run():\n    pass\n_cache = {}\n", Path::new("app.py"));
//! assert_eq!(names, vec!["run"]);
//! ```

mod embedded;
mod interpreter;
mod service;

// Re-export parser-api types for convenience
pub use mindex_parser_api::{ExportParser, ExportRecord, ParserConfig, ParserError};

pub use interpreter::InterpreterBackend;
pub use service::{PythonSymbolService, ResolvedBackend, PRIVATE_PREFIX};
