//! # mindex-typescript
//!
//! TypeScript export extraction for mindex.
//!
//! ## Features
//!
//! - Typed records: function, class, variable, interface, type alias, re-export
//! - Interface property shapes with resolved types and optionality
//! - Type alias definitions rendered to canonical text
//! - Default exports: declared name, or the literal `default` when anonymous
//! - `.tsx` files parsed with the templated-element grammar
//!
//! ## Quick Start
//!
//! ```rust
//! use mindex_typescript::TypeScriptParser;
//! use mindex_parser_api::{ExportParser, SymbolKind};
//! use std::path::Path;
//!
//! let parser = TypeScriptParser::new();
//! let records = parser.parse("export type Id = string | number;", Path::new("ids.ts"));
//! assert_eq!(records[0].kind, SymbolKind::TypeAlias);
//! ```

mod extractor;
mod parser_impl;
mod types;
mod visitor;

// Re-export parser-api types for convenience
pub use mindex_parser_api::{ExportParser, ExportRecord, ParserConfig, ParserError};

pub use extractor::{ANONYMOUS_DEFAULT, SUPPORTED_EXTENSIONS};
pub use parser_impl::TypeScriptParser;
pub use types::resolve_type;
