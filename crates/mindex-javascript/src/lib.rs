//! # mindex-javascript
//!
//! Export extraction for JavaScript, ES modules and CommonJS.
//!
//! ## Features
//!
//! - ES module exports: declarations, export lists, default exports
//! - CommonJS `module.exports = { ... }` and `exports.name = ...`
//! - Fallback ladder: module, then script, then type-stripped script for
//!   `.ts`/`.tsx`
//! - Anonymous default exports named after the file (`widget.js` → `Widget`)
//!
//! ## Quick Start
//!
//! ```rust
//! use mindex_javascript::JavaScriptParser;
//! use mindex_parser_api::ExportParser;
//! use std::path::Path;
//!
//! let parser = JavaScriptParser::new();
//! let names = parser.parse_names("module.exports = { a, b };", Path::new("lib.js"));
//! assert_eq!(names, vec!["a", "b"]);
//! ```

mod extractor;
mod parser_impl;
mod strip;
mod visitor;

// Re-export parser-api types for convenience
pub use mindex_parser_api::{ExportParser, ExportRecord, ParserConfig, ParserError};

pub use extractor::{SourceType, ANONYMOUS_DEFAULT, SUPPORTED_EXTENSIONS};
pub use parser_impl::JavaScriptParser;
pub use strip::strip_types;
