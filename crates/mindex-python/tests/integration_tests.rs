//! Integration tests for mindex-python

use mindex_parser_api::{ExportParser, ParserConfig, PythonBackend};
use mindex_python::{PythonSymbolService, ResolvedBackend};
use std::path::Path;
use std::time::Duration;

const SAMPLE: &str = r#"
import os

LIMIT = 10
_cache = {}

def visible():
    pass

def _hidden():
    pass

async def fetch(url):
    def helper():
        pass
    return url

@decorator
class Model:
    field = 1

first = second = None
"#;

const EXPECTED: &[&str] = &["LIMIT", "visible", "fetch", "Model", "first", "second"];

fn service(backend: PythonBackend) -> PythonSymbolService {
    PythonSymbolService::with_config(
        ParserConfig::default()
            .with_python_backend(backend)
            .with_python_timeout(Duration::from_secs(5)),
    )
}

#[test]
fn test_embedded_backend_contract() {
    let names = service(PythonBackend::Embedded).extract_symbols(SAMPLE, Path::new("sample.py"));
    assert_eq!(names, EXPECTED);
}

#[test]
fn test_interpreter_backend_contract() {
    let service = service(PythonBackend::Interpreter);
    if !service.is_interpreter_available() {
        return;
    }
    assert_eq!(service.backend(), ResolvedBackend::Interpreter);
    let names = service.extract_symbols(SAMPLE, Path::new("sample.py"));
    assert_eq!(names, EXPECTED);
}

#[test]
fn test_backends_agree_on_private_filtering() {
    let source = "def _hidden(): pass\ndef visible(): pass\n";
    for backend in [PythonBackend::Auto, PythonBackend::Embedded, PythonBackend::Interpreter] {
        let service = service(backend);
        if service.backend() == ResolvedBackend::Unavailable {
            continue;
        }
        let names = service.extract_symbols(source, Path::new("m.py"));
        assert!(names.contains(&"visible".to_string()), "{backend:?}");
        assert!(!names.contains(&"_hidden".to_string()), "{backend:?}");
    }
}

#[test]
fn test_backends_agree_on_edge_cases() {
    let cases: &[(&str, &[&str])] = &[
        ("print 'hello'\nvisible = 1\n", &[]),
        ("exec 'x=1'\nname = 2\n", &[]),
        ("(paren) = 1\n", &["paren"]),
        ("(a, b) = 1, 2\n", &[]),
        ("print('ready')\nready = True\n", &["ready"]),
    ];
    for backend in [PythonBackend::Embedded, PythonBackend::Interpreter] {
        let service = service(backend);
        if service.backend() == ResolvedBackend::Unavailable {
            continue;
        }
        for (source, expected) in cases {
            let names = service.extract_symbols(source, Path::new("m.py"));
            assert_eq!(names, *expected, "{backend:?}: {source:?}");
        }
    }
}

#[test]
fn test_syntax_error_yields_empty() {
    for backend in [PythonBackend::Embedded, PythonBackend::Interpreter] {
        let names = service(backend).extract_symbols("def broken(:\n    pass\n", Path::new("bad.py"));
        assert!(names.is_empty(), "{backend:?}");
    }
}

#[test]
fn test_export_parser_surface() {
    let service = service(PythonBackend::Embedded);
    assert_eq!(service.language(), "python");
    assert!(service.can_parse(Path::new("pkg/module.py")));
    assert!(!service.can_parse(Path::new("pkg/module.pyc")));
    assert_eq!(
        service.parse_names(SAMPLE, Path::new("sample.py")),
        EXPECTED
    );
}

#[test]
fn test_repeated_calls_are_identical() {
    let service = service(PythonBackend::Auto);
    let first = service.extract_symbols(SAMPLE, Path::new("sample.py"));
    let second = service.extract_symbols(SAMPLE, Path::new("sample.py"));
    assert_eq!(first, second);
}
