//! Component extraction for JSX and TSX source code
//!
//! `.jsx` files use the JavaScript grammar, whose JSX support accepts plain
//! JavaScript such as `let as = 2;`. `.tsx` files use the TSX grammar.

use mindex_parser_api::{
    AnonymousDefault, ExportRecord, ParserConfig, ParserError, ParserResult, SyntaxTree,
};
use std::path::Path;
use std::sync::LazyLock;
use tracing::instrument;

use crate::visitor::ComponentVisitor;

/// Extensions this parser accepts
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jsx", "tsx"];

/// Anonymous default-exported components are reported as `default`
pub const ANONYMOUS_DEFAULT: AnonymousDefault = AnonymousDefault::Literal("default");

static LANGUAGE: LazyLock<tree_sitter::Language> =
    LazyLock::new(tree_sitter_typescript::language_tsx);
static JSX_LANGUAGE: LazyLock<tree_sitter::Language> =
    LazyLock::new(tree_sitter_javascript::language);

/// Extract exported components from templating source code
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

    let language = if ext == "jsx" { &JSX_LANGUAGE } else { &LANGUAGE };
    let tree = SyntaxTree::parse(language, source, file_path)?;
    tree.check(file_path)?;

    let mut visitor = ComponentVisitor::new(file_path, ANONYMOUS_DEFAULT);
    tree.walk(tree.root(), |tree, id| visitor.visit(tree, id));
    Ok(visitor.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{extract_props, renders_template};

    fn tree(source: &str) -> SyntaxTree {
        SyntaxTree::parse(&LANGUAGE, source, Path::new("t.tsx")).unwrap()
    }

    /// Classify the body of the first function-valued node
    fn body_renders(source: &str) -> bool {
        let tree = tree(source);
        let mut result = None;
        tree.walk(tree.root(), |t, id| {
            if result.is_none() && crate::component::FUNCTION_KINDS.contains(&t.kind(id)) {
                result = t.field(id, "body").map(|b| renders_template(t, b));
            }
        });
        result.unwrap_or(false)
    }

    #[test]
    fn test_direct_element_and_fragment() {
        assert!(body_renders("const A = () => <div />;"));
        assert!(body_renders("const A = () => <><span>x</span></>;"));
        assert!(body_renders("const A = () => (\n  <section>hi</section>\n);"));
    }

    #[test]
    fn test_ternary_branches() {
        assert!(body_renders("function A() { return condition ? <div /> : null; }"));
        assert!(body_renders("function A() { return condition ? null : <div />; }"));
        assert!(!body_renders("function A() { return condition ? 1 : 2; }"));
    }

    #[test]
    fn test_logical_operands() {
        assert!(body_renders("const A = ({ show }) => show && <div />;"));
        assert!(body_renders("const A = ({ x }) => x ?? <div />;"));
        assert!(!body_renders("const A = (a, b) => a + b;"));
    }

    #[test]
    fn test_block_uses_any_statement() {
        let source = r#"
function A({ items }) {
    const count = items.length;
    return <ul>{count}</ul>;
    return null;
}
"#;
        assert!(body_renders(source));
        assert!(!body_renders("function A() { if (x) { return <div />; } return null; }"));
    }

    #[test]
    fn test_plain_functions_are_not_components() {
        assert!(!body_renders("function add(a, b) { return a + b; }"));
        assert!(!body_renders("const f = () => ({ el: 1 });"));
    }

    #[test]
    fn test_props_from_object_pattern() {
        let tree = tree("function Card({ title, body: content, size = 2, ...rest }: Props) { return <div />; }");
        let function = tree
            .named_children(tree.root())
            .next()
            .unwrap();
        let props: Vec<_> = extract_props(&tree, function)
            .into_iter()
            .map(|p| (p.name, p.type_name))
            .collect();
        assert_eq!(
            props,
            vec![
                ("title".to_string(), "unknown".to_string()),
                ("body".to_string(), "unknown".to_string()),
                ("size".to_string(), "unknown".to_string()),
            ]
        );
    }

    #[test]
    fn test_props_without_pattern() {
        let tree = tree("function Card(props) { return <div />; }");
        let function = tree.named_children(tree.root()).next().unwrap();
        assert!(extract_props(&tree, function).is_empty());
    }
}
