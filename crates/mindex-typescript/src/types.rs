//! Canonical text for TypeScript type nodes
//!
//! Only the shapes that matter for an export index are expanded. Function,
//! mapped and conditional types collapse to fixed placeholders.

use mindex_parser_api::{NodeId, SyntaxTree};

/// Placeholder for interface members declared without a type
pub const IMPLICIT_ANY: &str = "any";

/// Placeholder for every type shape not listed below
pub const UNKNOWN: &str = "unknown";

/// Resolve a type node (or a `: T` annotation) to its canonical text
pub fn resolve_type(tree: &SyntaxTree, id: NodeId) -> String {
    match tree.kind(id) {
        "type_annotation" | "parenthesized_type" | "readonly_type" => first_named(tree, id)
            .map(|inner| resolve_type(tree, inner))
            .unwrap_or_else(|| UNKNOWN.to_string()),

        "predefined_type" => tree.text(id).to_lowercase(),

        "type_identifier" | "nested_type_identifier" | "this_type" => tree.text(id).to_string(),

        "generic_type" => {
            let name = tree
                .field(id, "name")
                .map(|n| tree.text(n).to_string())
                .unwrap_or_else(|| UNKNOWN.to_string());
            let args: Vec<String> = tree
                .field(id, "type_arguments")
                .map(|list| {
                    tree.named_children(list)
                        .map(|arg| resolve_type(tree, arg))
                        .collect()
                })
                .unwrap_or_default();
            format!("{}<{}>", name, args.join(", "))
        }

        "array_type" => {
            let element = first_named(tree, id)
                .map(|e| resolve_type(tree, e))
                .unwrap_or_else(|| UNKNOWN.to_string());
            format!("{element}[]")
        }

        "union_type" => flatten(tree, id, "union_type").join(" | "),
        "intersection_type" => flatten(tree, id, "intersection_type").join(" & "),

        "literal_type" => first_named(tree, id)
            .map(|lit| literal_text(tree, lit))
            .unwrap_or_else(|| tree.text(id).to_string()),

        "object_type" => object_shape(tree, id),

        "function_type" | "constructor_type" => "function".to_string(),

        "tuple_type" => {
            let members: Vec<String> = tree
                .named_children(id)
                .map(|m| tuple_member(tree, m))
                .collect();
            format!("[{}]", members.join(", "))
        }

        "optional_type" => {
            let inner = first_named(tree, id)
                .map(|t| resolve_type(tree, t))
                .unwrap_or_else(|| UNKNOWN.to_string());
            format!("{inner}?")
        }

        "conditional_type" => "conditional".to_string(),

        _ => UNKNOWN.to_string(),
    }
}

fn first_named(tree: &SyntaxTree, id: NodeId) -> Option<NodeId> {
    tree.named_children(id).next()
}

/// Members of a left-nested union or intersection, in source order
fn flatten(tree: &SyntaxTree, id: NodeId, kind: &str) -> Vec<String> {
    let mut out = Vec::new();
    for member in tree.named_children(id) {
        if tree.kind(member) == kind {
            out.extend(flatten(tree, member, kind));
        } else {
            out.push(resolve_type(tree, member));
        }
    }
    out
}

fn literal_text(tree: &SyntaxTree, lit: NodeId) -> String {
    if tree.kind(lit) != "string" {
        return tree.text(lit).to_string();
    }
    string_value(tree, lit)
        .and_then(|value| serde_json::to_string(&value).ok())
        .unwrap_or_else(|| tree.text(lit).to_string())
}

/// `label: T` and `label?: T` tuple members keep their labels
fn tuple_member(tree: &SyntaxTree, member: NodeId) -> String {
    let optional = match tree.kind(member) {
        "required_parameter" => "",
        "optional_parameter" => "?",
        _ => return resolve_type(tree, member),
    };
    let type_name = tree
        .field(member, "type")
        .map(|t| resolve_type(tree, t))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let label = tree
        .field(member, "name")
        .or_else(|| tree.field(member, "pattern"));
    match label {
        Some(label) => format!("{}{}: {}", tree.text(label), optional, type_name),
        None => type_name,
    }
}

/// Decoded contents of a quoted string node
pub(crate) fn string_value(tree: &SyntaxTree, id: NodeId) -> Option<String> {
    let text = tree.text(id);
    let quote = text.chars().next().filter(|q| matches!(q, '\'' | '"'))?;
    let inner = text.strip_prefix(quote)?.strip_suffix(quote)?;
    Some(unescape(inner))
}

/// Resolve JavaScript string escapes; malformed escapes keep their text
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            out.push('\\');
            break;
        };
        match escape {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !chars.peek().is_some_and(|d| d.is_ascii_digit()) => out.push('\0'),
            // Line continuation
            '\n' => {}
            '\r' => {
                chars.next_if_eq(&'\n');
            }
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                push_code_point(&mut out, &hex, &format!("\\x{hex}"));
            }
            'u' if chars.peek() == Some(&'{') => {
                chars.next();
                let hex: String = chars.by_ref().take_while(|&d| d != '}').collect();
                push_code_point(&mut out, &hex, &format!("\\u{{{hex}}}"));
            }
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                push_code_point(&mut out, &hex, &format!("\\u{hex}"));
            }
            other => out.push(other),
        }
    }
    out
}

fn push_code_point(out: &mut String, hex: &str, fallback: &str) {
    match u32::from_str_radix(hex, 16).ok().and_then(char::from_u32) {
        Some(c) => out.push(c),
        None => out.push_str(fallback),
    }
}

/// `{ a: T; b?: U }`, or `mapped` for `{ [K in X]: Y }`
fn object_shape(tree: &SyntaxTree, id: NodeId) -> String {
    let is_mapped = tree.named_children(id).any(|member| {
        tree.kind(member) == "index_signature"
            && tree.child_of_kind(member, "mapped_type_clause").is_some()
    });
    if is_mapped {
        return "mapped".to_string();
    }

    let members: Vec<String> = tree
        .named_children(id)
        .filter(|&m| tree.kind(m) == "property_signature")
        .filter_map(|m| {
            let name = tree.field(m, "name")?;
            let optional = if tree.child_of_kind(m, "?").is_some() { "?" } else { "" };
            let type_name = tree
                .field(m, "type")
                .map(|t| resolve_type(tree, t))
                .unwrap_or_else(|| IMPLICIT_ANY.to_string());
            Some(format!("{}{}: {}", tree.text(name), optional, type_name))
        })
        .collect();

    if members.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", members.join("; "))
    }
}
