//! Component classification: does a function body render a templated element?

use mindex_parser_api::{ComponentProp, NodeId, SyntaxTree};

const TEMPLATE_KINDS: &[&str] = &["jsx_element", "jsx_self_closing_element", "jsx_fragment"];

/// Function-valued nodes whose body can be classified
pub const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "function",
    "function_expression",
    "arrow_function",
];

/// Whether `id` renders a templated element on at least one path.
///
/// Blocks qualify when any direct statement does, so one templated branch
/// among several returns is enough. Statements other than `return` (an
/// `if` wrapping a return, for example) never qualify.
pub fn renders_template(tree: &SyntaxTree, id: NodeId) -> bool {
    let kind = tree.kind(id);
    if TEMPLATE_KINDS.contains(&kind) {
        return true;
    }

    match kind {
        "parenthesized_expression" | "return_statement" => tree
            .named_children(id)
            .next()
            .is_some_and(|inner| renders_template(tree, inner)),
        "statement_block" => tree
            .named_children(id)
            .any(|stmt| renders_template(tree, stmt)),
        "ternary_expression" => ["consequence", "alternative"]
            .iter()
            .filter_map(|field| tree.field(id, field))
            .any(|branch| renders_template(tree, branch)),
        "binary_expression" => {
            let short_circuit = tree
                .field(id, "operator")
                .is_some_and(|op| matches!(tree.text(op), "&&" | "||" | "??"));
            short_circuit
                && ["left", "right"]
                    .iter()
                    .filter_map(|field| tree.field(id, field))
                    .any(|operand| renders_template(tree, operand))
        }
        _ => false,
    }
}

/// Whether a function-valued node's body renders a templated element
pub fn is_component(tree: &SyntaxTree, function: NodeId) -> bool {
    FUNCTION_KINDS.contains(&tree.kind(function))
        && tree
            .field(function, "body")
            .is_some_and(|body| renders_template(tree, body))
}

/// Props destructured from the first parameter, in pattern order
///
/// Prop types are not resolved.
pub fn extract_props(tree: &SyntaxTree, function: NodeId) -> Vec<ComponentProp> {
    let Some(first) = first_parameter(tree, function) else {
        return Vec::new();
    };
    // `({ a }: Props)` wraps the pattern in a parameter node
    let pattern = match tree.kind(first) {
        "required_parameter" | "optional_parameter" => match tree.field(first, "pattern") {
            Some(pattern) => pattern,
            None => return Vec::new(),
        },
        _ => first,
    };
    if tree.kind(pattern) != "object_pattern" {
        return Vec::new();
    }

    tree.named_children(pattern)
        .filter_map(|member| {
            let key = match tree.kind(member) {
                "shorthand_property_identifier_pattern" => member,
                "pair_pattern" => tree.field(member, "key")?,
                "object_assignment_pattern" => tree.field(member, "left")?,
                _ => return None,
            };
            Some(ComponentProp::untyped(tree.text(key)))
        })
        .collect()
}

fn first_parameter(tree: &SyntaxTree, function: NodeId) -> Option<NodeId> {
    // `x => ...` has a single bare parameter
    if let Some(param) = tree.field(function, "parameter") {
        return Some(param);
    }
    let params = tree.field(function, "parameters")?;
    tree.named_children(params)
        .find(|&p| tree.kind(p) != "comment")
}
