//! Textual removal of simple type syntax
//!
//! A last-resort pass for typed sources the untyped grammar rejects. It only
//! understands bare and union type names after a colon, brace-delimited
//! interface blocks without nesting, and single-statement type aliases.
//! Anything richer survives and the retry fails as before.

use regex::Regex;
use std::sync::LazyLock;

// `: Name`, `: Name[]`, `: A | B[]` immediately before the terminator
const ANNOTATION: &str =
    r"[A-Za-z_$][A-Za-z0-9_$]*(\[\])?(\s*\|\s*[A-Za-z_$][A-Za-z0-9_$]*(\[\])?)*\s*";

static RE_BEFORE_ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r":\s*{ANNOTATION}=")).unwrap());
static RE_BEFORE_SEMI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r":\s*{ANNOTATION};")).unwrap());
static RE_BEFORE_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r":\s*{ANNOTATION}\)")).unwrap());
static RE_INTERFACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"interface\s+[A-Za-z_$][A-Za-z0-9_$]*\s*\{[^}]*\}").unwrap());
static RE_TYPE_ALIAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"type\s+[A-Za-z_$][A-Za-z0-9_$]*\s*=[^;]+;").unwrap());

/// Apply every strip rule in order and return the rewritten source
pub fn strip_types(source: &str) -> String {
    let mut out = source.to_string();
    for (re, replacement) in [
        (&*RE_BEFORE_ASSIGN, " ="),
        (&*RE_BEFORE_SEMI, ";"),
        (&*RE_BEFORE_PAREN, ")"),
        (&*RE_INTERFACE, ""),
        (&*RE_TYPE_ALIAS, ""),
    ] {
        out = re.replace_all(&out, replacement).into_owned();
    }
    out
}
