//! Export extraction for TypeScript source code

use mindex_parser_api::{
    dedup_records, AnonymousDefault, ExportRecord, ParserConfig, ParserError, ParserResult,
    SyntaxTree,
};
use std::path::Path;
use tracing::instrument;

use crate::visitor::TypeScriptVisitor;

/// Extensions this parser accepts
pub const SUPPORTED_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Anonymous default exports are reported under the literal name `default`
pub const ANONYMOUS_DEFAULT: AnonymousDefault = AnonymousDefault::Literal("default");

/// Extract typed export records from TypeScript source code
///
/// There is no fallback: a tree with syntax errors fails the whole file.
#[instrument(skip(source, config), fields(file = %file_path.display()))]
pub fn extract(
    source: &str,
    file_path: &Path,
    config: &ParserConfig,
) -> ParserResult<Vec<ExportRecord>> {
    let ext = file_path
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| SUPPORTED_EXTENSIONS.contains(e))
        .ok_or_else(|| ParserError::UnsupportedExtension(file_path.to_path_buf()))?;

    if source.len() > config.max_file_size {
        return Err(ParserError::FileTooLarge(file_path.to_path_buf(), source.len()));
    }

    // Templated elements are only understood in .tsx files
    let language = if ext == "tsx" {
        tree_sitter_typescript::language_tsx()
    } else {
        tree_sitter_typescript::language_typescript()
    };

    let tree = SyntaxTree::parse(&language, source, file_path)?;
    tree.check(file_path)?;

    let mut visitor = TypeScriptVisitor::new(file_path, ANONYMOUS_DEFAULT);
    tree.walk(tree.root(), |tree, id| visitor.visit(tree, id));

    Ok(dedup_records(visitor.records))
}
