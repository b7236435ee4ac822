//! Integration tests for mindex-jsx

use mindex_jsx::JsxParser;
use mindex_parser_api::{ComponentProp, ExportKind, ExportParser, ExportRecord, RecordMetadata, SymbolKind};
use std::path::Path;

fn parse(source: &str, file: &str) -> Vec<ExportRecord> {
    JsxParser::new().parse(source, Path::new(file))
}

fn names(source: &str, file: &str) -> Vec<String> {
    parse(source, file).into_iter().map(|r| r.name).collect()
}

#[test]
fn test_ternary_component() {
    let source = r#"
export function Banner({ condition }) {
    return condition ? <div /> : null;
}
"#;
    let records = parse(source, "Banner.jsx");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Banner");
    assert_eq!(records[0].kind, SymbolKind::Component);
    assert_eq!(records[0].export_kind, Some(ExportKind::Named));
}

#[test]
fn test_arrow_components() {
    let source = r#"
export const Badge = ({ label }) => <span>{label}</span>;
export const Panel = function ({ open }) {
    return open && <section />;
};
export const helper = (a, b) => a + b;
export const LIMIT = 10;
"#;
    assert_eq!(names(source, "ui.jsx"), vec!["Badge", "Panel"]);
}

#[test]
fn test_non_rendering_exports_are_not_recorded() {
    let source = "export function sum(a, b) { return a + b; }\nexport class Store {}";
    assert!(parse(source, "util.jsx").is_empty());
}

#[test]
fn test_props_metadata() {
    let source = "export const Card = ({ title, subtitle = '' }) => <h1>{title}</h1>;";
    let records = parse(source, "Card.jsx");
    assert_eq!(
        records[0].metadata,
        Some(RecordMetadata::Props(vec![
            ComponentProp::untyped("title"),
            ComponentProp::untyped("subtitle"),
        ]))
    );
}

#[test]
fn test_export_list_promotes_declared_component() {
    let source = r#"
function Header() {
    return <header />;
}
const Footer = () => <footer />;
function format(x) { return String(x); }
export { Header, format };
"#;
    let records = parse(source, "Layout.jsx");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Header");
    assert!(records[0].exported);
}

#[test]
fn test_export_list_before_declaration() {
    let source = "export { Card, missing };\nfunction Card() { return <div />; }";
    let records = parse(source, "Card.jsx");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Card");
    assert_eq!(records[0].export_kind, Some(ExportKind::Named));
}

#[test]
fn test_default_identifier_before_declaration() {
    let source = "export default Page;\nfunction Page() { return <main />; }";
    let records = parse(source, "Page.jsx");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Page");
    assert!(records[0].is_default());
}

#[test]
fn test_jsx_accepts_contextual_keywords_as_names() {
    let source = "let as = 2;\nexport const View = () => <p>{as}</p>;";
    assert_eq!(names(source, "View.jsx"), vec!["View"]);
}

#[test]
fn test_jsx_fragment_and_props() {
    let source = "export function List({ items, empty = 'none' }) {\n    return <>{items}</>;\n}";
    let records = parse(source, "List.jsx");
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].metadata,
        Some(RecordMetadata::Props(vec![
            ComponentProp::untyped("items"),
            ComponentProp::untyped("empty"),
        ]))
    );
}

#[test]
fn test_export_list_does_not_backfill_unknown_names() {
    let source = "export { Imported } from './elsewhere';";
    assert!(parse(source, "index.jsx").is_empty());
}

#[test]
fn test_default_components() {
    let named = parse("export default function App() { return <main />; }", "App.jsx");
    assert_eq!(named[0].name, "App");
    assert!(named[0].is_default());

    let anonymous = parse("export default () => <main />;", "App.jsx");
    assert_eq!(anonymous[0].name, "default");
    assert!(anonymous[0].is_default());
}

#[test]
fn test_default_identifier_promotes_component() {
    let source = "const Card = () => <div />;\nexport default Card;";
    let records = parse(source, "Card.jsx");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Card");
    assert_eq!(records[0].export_kind, Some(ExportKind::Default));
}

#[test]
fn test_typed_component_in_tsx() {
    let source = r#"
interface Props { title: string }
export const Title = ({ title }: Props) => <h1>{title}</h1>;
"#;
    let records = parse(source, "Title.tsx");
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].metadata,
        Some(RecordMetadata::Props(vec![ComponentProp::untyped("title")]))
    );
}

#[test]
fn test_nested_functions_are_not_components() {
    let source = r#"
export function Outer() {
    const Inner = () => <span />;
    return null;
}
"#;
    assert!(parse(source, "Outer.jsx").is_empty());
}

#[test]
fn test_invalid_source_returns_empty() {
    assert!(parse("export const A = () => <div>;", "A.jsx").is_empty());
    assert!(parse("export function (", "A.tsx").is_empty());
}

#[test]
fn test_unsupported_extension() {
    assert!(parse("export const A = () => <div />;", "A.js").is_empty());
}

#[test]
fn test_component_serialization() {
    let records = parse("export const Dot = () => <i />;", "Dot.jsx");
    let json = serde_json::to_value(&records).unwrap();
    assert_eq!(json[0]["kind"], "component");
    assert_eq!(json[0]["metadata"]["props"], serde_json::json!([]));
}
