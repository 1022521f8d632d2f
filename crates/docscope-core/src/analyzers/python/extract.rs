//! Function discovery over the Python parse tree.
//!
//! Walks the full tree-sitter tree — nested and async definitions included —
//! and produces one [`FunctionInfo`] per `function_definition` node. Type
//! annotations, defaults, and return types are captured as opaque source
//! text; the assessor only ever checks presence, never meaning.

use tree_sitter::{Node, Tree};

use crate::config::AnalysisConfig;
use crate::models::{ArgInfo, FunctionInfo};

/// Node kinds that contribute to the cyclomatic complexity estimate.
///
/// `elif_clause` is counted separately because tree-sitter keeps it inside
/// the parent `if_statement` instead of nesting a second conditional the way
/// a desugared AST would. `for_in_clause` and `if_clause` cover comprehension
/// generators and their filters.
const BRANCHING_KINDS: &[&str] = &[
    "if_statement",
    "elif_clause",
    "while_statement",
    "for_statement",
    "except_clause",
    "boolean_operator",
    "for_in_clause",
    "if_clause",
];

/// Extract every function definition in the tree, in discovery order.
pub fn extract_functions(tree: &Tree, source: &str, config: &AnalysisConfig) -> Vec<FunctionInfo> {
    let mut functions = Vec::new();
    walk(tree.root_node(), source, config, &mut functions);
    functions
}

fn walk(node: Node, source: &str, config: &AnalysisConfig, out: &mut Vec<FunctionInfo>) {
    if node.kind() == "function_definition" {
        out.push(extract_function_info(node, source, config));
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        walk(child, source, config, out);
    }
}

fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    &source[node.byte_range()]
}

fn extract_function_info(node: Node, source: &str, config: &AnalysisConfig) -> FunctionInfo {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();

    let args = node
        .child_by_field_name("parameters")
        .map(|params| extract_parameters(params, source))
        .unwrap_or_default();

    let returns = node
        .child_by_field_name("return_type")
        .map(|n| node_text(n, source).to_string());

    let docstring = extract_docstring(node, source);

    FunctionInfo {
        line: node.start_position().row + 1,
        complexity: complexity_estimate(node),
        is_private: name.starts_with('_'),
        is_test: config.is_test_function(&name),
        args,
        returns,
        decorators: extract_decorators(node, source),
        current_docstring: docstring,
        name,
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Collect the plain positional parameters, in order.
///
/// Matches CPython's `args.args` view of a signature: keyword-only
/// parameters (everything after `*` / `*args`) and the splats themselves are
/// excluded, and a `/` separator drops the positional-only names collected
/// before it.
fn extract_parameters(params: Node, source: &str) -> Vec<ArgInfo> {
    let mut args = Vec::new();
    let mut cursor = params.walk();

    for child in params.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => args.push(ArgInfo {
                name: node_text(child, source).to_string(),
                type_annotation: None,
                default: None,
            }),
            "typed_parameter" => {
                // First named child is the pattern; a splat pattern here
                // (`*args: int`) starts the keyword-only tail.
                let Some(pattern) = child.named_child(0) else {
                    continue;
                };
                if pattern.kind() != "identifier" {
                    break;
                }
                args.push(ArgInfo {
                    name: node_text(pattern, source).to_string(),
                    type_annotation: child
                        .child_by_field_name("type")
                        .map(|n| node_text(n, source).to_string()),
                    default: None,
                });
            }
            "default_parameter" | "typed_default_parameter" => {
                let Some(name) = child.child_by_field_name("name") else {
                    continue;
                };
                args.push(ArgInfo {
                    name: node_text(name, source).to_string(),
                    type_annotation: child
                        .child_by_field_name("type")
                        .map(|n| node_text(n, source).to_string()),
                    default: child
                        .child_by_field_name("value")
                        .map(|n| node_text(n, source).to_string()),
                });
            }
            "positional_separator" => args.clear(),
            "list_splat_pattern" | "dictionary_splat_pattern" | "keyword_separator" => break,
            _ => {}
        }
    }

    args
}

// ---------------------------------------------------------------------------
// Decorators
// ---------------------------------------------------------------------------

/// Best-effort decorator names for a function definition.
///
/// Simple names and dotted attributes come through as written; anything
/// else falls back to the raw decorator expression text.
fn extract_decorators(node: Node, source: &str) -> Vec<String> {
    let Some(parent) = node.parent() else {
        return Vec::new();
    };
    if parent.kind() != "decorated_definition" {
        return Vec::new();
    }

    let mut decorators = Vec::new();
    let mut cursor = parent.walk();
    for child in parent.named_children(&mut cursor) {
        if child.kind() != "decorator" {
            continue;
        }
        if let Some(expression) = child.named_child(0) {
            decorators.push(node_text(expression, source).to_string());
        }
    }
    decorators
}

// ---------------------------------------------------------------------------
// Docstring
// ---------------------------------------------------------------------------

/// The leading string expression of the function body, cleaned PEP 257
/// style. Empty if the body does not open with a plain string literal;
/// f-strings are not docstrings (`ast.get_docstring` returns `None` for a
/// `JoinedStr`).
fn extract_docstring(node: Node, source: &str) -> String {
    let Some(body) = node.child_by_field_name("body") else {
        return String::new();
    };
    let Some(first) = body.named_child(0) else {
        return String::new();
    };
    if first.kind() != "expression_statement" {
        return String::new();
    }
    let Some(expression) = first.named_child(0) else {
        return String::new();
    };

    let raw = match expression.kind() {
        "string" => {
            if has_interpolation(expression) {
                return String::new();
            }
            string_literal_content(expression, source)
        }
        "concatenated_string" => {
            let mut content = String::new();
            let mut cursor = expression.walk();
            for part in expression.named_children(&mut cursor) {
                if part.kind() != "string" {
                    continue;
                }
                // One f-string part makes the whole concatenation a
                // JoinedStr.
                if has_interpolation(part) {
                    return String::new();
                }
                content.push_str(&string_literal_content(part, source));
            }
            content
        }
        _ => return String::new(),
    };

    clean_docstring(&raw)
}

/// F-strings parse as `string` nodes with `interpolation` children.
fn has_interpolation(node: Node) -> bool {
    let mut cursor = node.walk();
    let result = node
        .named_children(&mut cursor)
        .any(|child| child.kind() == "interpolation");
    result
}

/// Text between the quotes of a string literal. Escape sequences are kept
/// as written; presence heuristics do not depend on their decoded form.
fn string_literal_content(node: Node, source: &str) -> String {
    let mut content = String::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "string_content" | "escape_sequence" => content.push_str(node_text(child, source)),
            _ => {}
        }
    }
    content
}

/// Normalize a raw docstring the way `inspect.cleandoc` does: strip the
/// common indentation margin of every line after the first, strip leading
/// whitespace from the first line, and drop blank edge lines.
fn clean_docstring(raw: &str) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();

    let margin = lines[1..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.trim_start()
            } else {
                line.get(margin..).unwrap_or_else(|| line.trim_start())
            }
        })
        .collect();

    while cleaned.first().is_some_and(|line| line.trim().is_empty()) {
        cleaned.remove(0);
    }
    while cleaned.last().is_some_and(|line| line.trim().is_empty()) {
        cleaned.pop();
    }

    cleaned.join("\n")
}

// ---------------------------------------------------------------------------
// Complexity
// ---------------------------------------------------------------------------

/// Cyclomatic complexity estimate: 1 plus every branching construct in the
/// subtree rooted at the function, nested function bodies included.
fn complexity_estimate(node: Node) -> u32 {
    let mut complexity = 1;
    count_branches(node, &mut complexity);
    complexity
}

fn count_branches(node: Node, complexity: &mut u32) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if BRANCHING_KINDS.contains(&child.kind()) {
            *complexity += 1;
        }
        count_branches(child, complexity);
    }
}
