// Project scan performance benchmarks
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mindex::{OutputMode, ParserConfig, ProjectScanner, PythonBackend, ScanConfig};
use std::fs;
use std::path::Path;

fn populate(root: &Path, modules: usize) {
    for i in 0..modules {
        let dir = root.join(format!("pkg{}", i % 8));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(format!("mod{i}.js")),
            format!("export function run{i}() {{}}\nexports.value{i} = {i};\n"),
        )
        .unwrap();
        fs::write(
            dir.join(format!("types{i}.ts")),
            format!("export interface Shape{i} {{ id: string; size?: number; }}\n"),
        )
        .unwrap();
        fs::write(
            dir.join(format!("View{i}.tsx")),
            format!("export const View{i} = ({{ title }}) => <div>{{title}}</div>;\n"),
        )
        .unwrap();
        fs::write(
            dir.join(format!("tool{i}.py")),
            format!("def tool{i}():\n    pass\n"),
        )
        .unwrap();
    }
}

fn bench_scan_project(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), 64);

    let config = ScanConfig::default()
        .with_parser_config(ParserConfig::default().with_python_backend(PythonBackend::Embedded));

    c.bench_function("scan_project_legacy", |b| {
        let scanner = ProjectScanner::with_config(config.clone());
        b.iter(|| scanner.scan(black_box(dir.path())).unwrap());
    });

    c.bench_function("scan_project_enhanced", |b| {
        let scanner = ProjectScanner::with_config(config.clone().with_mode(OutputMode::Enhanced));
        b.iter(|| scanner.scan(black_box(dir.path())).unwrap());
    });
}

criterion_group!(benches, bench_scan_project);
criterion_main!(benches);
