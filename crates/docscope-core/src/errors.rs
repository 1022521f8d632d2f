//! Error types for the DocScope core library.

/// Top-level error enum for the DocScope core library.
///
/// Every pipeline rejection collapses into one of these variants so callers
/// have a single `Result` branch to check. The display strings mirror the
/// messages surfaced through the tool responses.
#[derive(Debug, thiserror::Error)]
pub enum DocscopeError {
    #[error("Code too large (max {max_kb}KB)")]
    CodeTooLarge { max_kb: usize },

    #[error("file_path too long (max {max})")]
    PathTooLong { max: usize },

    #[error("file_path contains null byte")]
    PathNullByte,

    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Parse timeout after {seconds}s")]
    ParseTimeout { seconds: u64 },

    #[error("AST depth {depth} exceeds maximum {max}")]
    DepthExceeded { depth: usize, max: usize },

    #[error("AST node count {nodes} exceeds maximum {max}")]
    NodeBudgetExceeded { nodes: usize, max: usize },

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to analyze code: {0}")]
    Internal(String),
}

pub type DocscopeResult<T> = Result<T, DocscopeError>;
