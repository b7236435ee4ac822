// Component parser performance benchmarks
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mindex_jsx::JsxParser;
use mindex_parser_api::ExportParser;
use std::path::Path;

fn bench_parse_components(c: &mut Criterion) {
    let source = r#"
import React from 'react';

export function List({ items, onSelect }) {
    if (!items.length) {
        return null;
    }
    return (
        <ul>
            {items.map((item) => (
                <li key={item.id} onClick={() => onSelect(item)}>{item.label}</li>
            ))}
        </ul>
    );
}

export const Empty = () => <p>Nothing here</p>;

const Loading = ({ active }) => active && <span className="spinner" />;

export { Loading };
export default function Page({ title }) {
    return title ? <h1>{title}</h1> : <Empty />;
}
"#;

    c.bench_function("parse_components", |b| {
        let parser = JsxParser::new();
        b.iter(|| parser.parse(black_box(source), Path::new("Page.jsx")));
    });
}

criterion_group!(benches, bench_parse_components);
criterion_main!(benches);
