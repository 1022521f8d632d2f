//! Input validation and DoS guardrails around parsing.
//!
//! Everything here rejects fast and cheap, before the extractor or assessor
//! run: size and path checks on the raw input, a wall-clock bound on the
//! parse itself, and depth/node budgets on the resulting tree.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::warn;
use tree_sitter::{Node, Tree};

use crate::config::AnalysisConfig;
use crate::errors::{DocscopeError, DocscopeResult};

/// Reject source text over the configured size cap before any parse work.
pub fn validate_code_size(code: &str, config: &AnalysisConfig) -> DocscopeResult<()> {
    if code.len() > config.max_code_size {
        return Err(DocscopeError::CodeTooLarge {
            max_kb: config.max_code_size / 1024,
        });
    }
    Ok(())
}

/// Validate the caller-supplied file identifier.
///
/// Over-length and NUL-containing identifiers are rejected. A traversal
/// pattern is only logged: the identifier never touches the filesystem, it
/// labels output, so the risk is informational.
pub fn validate_file_path(file_path: &str, config: &AnalysisConfig) -> DocscopeResult<()> {
    if file_path.len() > config.max_file_path_length {
        return Err(DocscopeError::PathTooLong {
            max: config.max_file_path_length,
        });
    }
    if file_path.contains('\0') {
        return Err(DocscopeError::PathNullByte);
    }
    if file_path.contains("../") || file_path.contains("..\\") {
        let preview: String = file_path.chars().take(100).collect();
        warn!("Path traversal pattern detected: {preview}");
    }
    Ok(())
}

/// Parse Python source with a wall-clock deadline.
///
/// The parse runs on a worker thread while the caller waits on a channel
/// with `recv_timeout`, so the bound holds on every platform instead of
/// depending on signal delivery. On timeout the worker is abandoned; it
/// owns its parser and source copy and leaks no state into later calls.
pub fn parse_bounded(code: &str, timeout_secs: u64) -> DocscopeResult<Tree> {
    let (sender, receiver) = mpsc::channel();
    let source = code.to_string();

    let spawned = thread::Builder::new()
        .name("docscope-parse".to_string())
        .spawn(move || {
            let mut parser = tree_sitter::Parser::new();
            let result = parser
                .set_language(&tree_sitter_python::LANGUAGE.into())
                .map_err(|e| DocscopeError::Internal(format!("failed to set language: {e}")))
                .and_then(|()| {
                    parser
                        .parse(source.as_bytes(), None)
                        .ok_or_else(|| DocscopeError::Internal("parser returned no tree".into()))
                });
            let _ = sender.send(result);
        });

    if let Err(e) = spawned {
        return Err(DocscopeError::Internal(format!(
            "failed to spawn parse thread: {e}"
        )));
    }

    match receiver.recv_timeout(Duration::from_secs(timeout_secs)) {
        Ok(result) => result,
        Err(_) => Err(DocscopeError::ParseTimeout {
            seconds: timeout_secs,
        }),
    }
}

/// Surface parse-tree errors as a single syntax rejection.
///
/// tree-sitter recovers from malformed input with `ERROR`/missing nodes
/// rather than failing the parse; the first such node becomes the message.
pub fn check_syntax(tree: &Tree) -> DocscopeResult<()> {
    let root = tree.root_node();
    if !root.has_error() {
        return Ok(());
    }

    let position = find_error_node(root)
        .map(|node| node.start_position())
        .unwrap_or_else(|| root.start_position());
    Err(DocscopeError::Syntax(format!(
        "invalid syntax at line {}, column {}",
        position.row + 1,
        position.column + 1
    )))
}

/// Cursor walk instead of recursion: this runs before the depth budget is
/// checked, so the first error node can sit arbitrarily deep.
fn find_error_node(root: Node) -> Option<Node> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        // Only subtrees flagged with an error are worth descending into.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

/// Enforce the nesting-depth and node-count budgets on a parsed tree.
///
/// Depth is checked first and bails on the first offending node, so the
/// recursion itself stays bounded by the configured maximum.
pub fn check_tree_limits(tree: &Tree, config: &AnalysisConfig) -> DocscopeResult<()> {
    let mut nodes = 0usize;
    walk_limits(tree.root_node(), 0, &mut nodes, config)
}

fn walk_limits(
    node: Node,
    depth: usize,
    nodes: &mut usize,
    config: &AnalysisConfig,
) -> DocscopeResult<()> {
    if depth > config.max_ast_depth {
        return Err(DocscopeError::DepthExceeded {
            depth,
            max: config.max_ast_depth,
        });
    }
    *nodes += 1;
    if *nodes > config.max_ast_nodes {
        return Err(DocscopeError::NodeBudgetExceeded {
            nodes: *nodes,
            max: config.max_ast_nodes,
        });
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        walk_limits(child, depth + 1, nodes, config)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AnalysisConfig {
        AnalysisConfig::default()
    }

    #[test]
    fn test_code_size_limit() {
        let mut small = config();
        small.max_code_size = 16;
        assert!(validate_code_size("def f(): pass", &small).is_ok());
        let err = validate_code_size("def f(): pass # padding padding", &small).unwrap_err();
        assert!(err.to_string().contains("Code too large"));
    }

    #[test]
    fn test_file_path_null_byte_rejected() {
        let err = validate_file_path("bad\0path.py", &config()).unwrap_err();
        assert!(err.to_string().contains("null byte"));
    }

    #[test]
    fn test_file_path_length_limit() {
        let long = "a".repeat(5000);
        let err = validate_file_path(&long, &config()).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn test_traversal_path_is_accepted() {
        // Traversal patterns warn but never reject.
        assert!(validate_file_path("../../etc/passwd", &config()).is_ok());
        assert!(validate_file_path("..\\windows\\system32", &config()).is_ok());
    }

    #[test]
    fn test_parse_bounded_returns_tree() {
        let tree = parse_bounded("def f():\n    pass\n", 5).unwrap();
        assert_eq!(tree.root_node().kind(), "module");
        assert!(check_syntax(&tree).is_ok());
    }

    #[test]
    fn test_malformed_source_is_syntax_error() {
        let tree = parse_bounded("def bad syntax", 5).unwrap();
        let err = check_syntax(&tree).unwrap_err();
        assert!(err.to_string().starts_with("Syntax error"));
    }

    #[test]
    fn test_syntax_error_deep_in_nested_expression() {
        // The first error node sits under tens of thousands of valid
        // nesting levels; it must surface as a syntax rejection, not blow
        // the stack.
        let depth = 100_000;
        let code = format!("x = {}$%{}", "(".repeat(depth), ")".repeat(depth));
        let tree = parse_bounded(&code, 10).unwrap();
        let err = check_syntax(&tree).unwrap_err();
        assert!(err.to_string().starts_with("Syntax error"));
    }

    #[test]
    fn test_depth_guard_trips_on_deep_nesting() {
        let mut shallow = config();
        shallow.max_ast_depth = 5;
        let mut code = String::new();
        for level in 0..7 {
            code.push_str(&"    ".repeat(level));
            code.push_str("if True:\n");
        }
        code.push_str(&"    ".repeat(7));
        code.push_str("pass\n");

        let tree = parse_bounded(&code, 5).unwrap();
        let err = check_tree_limits(&tree, &shallow).unwrap_err();
        assert!(err.to_string().contains("depth"));
    }

    #[test]
    fn test_node_budget_trips_on_wide_tree() {
        let mut tiny = config();
        tiny.max_ast_nodes = 10;
        let code = "a = 1\nb = 2\nc = 3\nd = 4\ne = 5\nf = 6\n";
        let tree = parse_bounded(code, 5).unwrap();
        let err = check_tree_limits(&tree, &tiny).unwrap_err();
        assert!(err.to_string().contains("node count"));
    }

    #[test]
    fn test_tree_limits_pass_for_normal_source() {
        let tree = parse_bounded("def f(x):\n    return x\n", 5).unwrap();
        assert!(check_tree_limits(&tree, &config()).is_ok());
    }
}
