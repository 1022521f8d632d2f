//! DocScope core library — documentation quality analysis engine.
//!
//! This crate parses source code, discovers every function definition, and
//! scores the quality of each function's documentation, producing a
//! priority-ordered list of the functions most in need of better docs. The
//! surrounding request layer (transport, tool registry) lives elsewhere;
//! the only boundary here is [`analyze_code`] and the [`analyzers::Analyzer`]
//! trait it is built on.
//!
//! Python is the reference language, parsed with tree-sitter; additional
//! languages plug into the same scoring contract via the analyzer registry.

pub mod analyzers;
pub mod config;
pub mod errors;
pub mod models;
pub mod priority;
pub mod quality;
pub mod report;

pub use analyzers::{analyzer_for, Analyzer, PythonAnalyzer};
pub use config::{AnalysisConfig, QualityThresholds, TestDetection, TestIndicatorPolicy};
pub use errors::{DocscopeError, DocscopeResult};
pub use models::{
    ArgInfo, FunctionAnalysis, FunctionInfo, QualityAssessment, QualityIndicators, QualityLevel,
};

/// Analyze source code in the given language with an optional configuration
/// override.
///
/// Convenience wrapper over the analyzer registry: selects the analyzer for
/// `language`, runs the full pipeline, and returns the prioritized results.
pub fn analyze_code(
    code: &str,
    file_path: &str,
    language: &str,
    config: Option<AnalysisConfig>,
) -> DocscopeResult<Vec<FunctionAnalysis>> {
    let analyzer = analyzer_for(language, config.unwrap_or_default())?;
    analyzer.analyze(code, file_path)
}
