//! # mindex-jsx
//!
//! UI component detection for `.jsx` and `.tsx` files.
//!
//! A declaration counts as a component when its function body renders a
//! templated element on some path: directly, through `return`, in either
//! branch of a ternary, or in either operand of `&&`, `||` or `??`.
//! Destructured props of the first parameter are recorded by name.
//!
//! ## Quick Start
//!
//! ```rust
//! use mindex_jsx::JsxParser;
//! use mindex_parser_api::{ExportParser, SymbolKind};
//! use std::path::Path;
//!
//! let parser = JsxParser::new();
//! let records = parser.parse(
//!     "export const Badge = ({ label }) => <span>{label}</span>;",
//!     Path::new("Badge.jsx"),
//! );
//! assert_eq!(records[0].name, "Badge");
//! assert_eq!(records[0].kind, SymbolKind::Component);
//! ```

mod component;
mod extractor;
mod parser_impl;
mod visitor;

// Re-export parser-api types for convenience
pub use mindex_parser_api::{ExportParser, ExportRecord, ParserConfig, ParserError};

pub use component::{extract_props, is_component, renders_template};
pub use extractor::{ANONYMOUS_DEFAULT, SUPPORTED_EXTENSIONS};
pub use parser_impl::JsxParser;
