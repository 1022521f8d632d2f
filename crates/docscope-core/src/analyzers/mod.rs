//! Language analyzer contract and registry.
//!
//! Every language plugs into the same four-operation contract; the engine
//! never special-cases a language beyond the string key used to select an
//! implementation. Python is the reference implementation.

pub mod python;

use crate::config::AnalysisConfig;
use crate::errors::{DocscopeError, DocscopeResult};
use crate::models::{FunctionAnalysis, FunctionInfo, QualityAssessment};

pub use python::PythonAnalyzer;

/// Documentation analyzer contract.
///
/// Implementations parse one source language into [`FunctionInfo`]
/// descriptors and score them through the shared assessment and priority
/// machinery. All four operations are pure with respect to the analyzer:
/// repeated calls with identical inputs yield identical output.
pub trait Analyzer {
    /// Analyze source code and return the functions needing documentation
    /// improvement, highest priority first. Empty means every function
    /// already has excellent documentation.
    fn analyze(&self, code: &str, file_path: &str) -> DocscopeResult<Vec<FunctionAnalysis>>;

    /// Language identifier, e.g. `"python"`.
    fn language(&self) -> &'static str;

    /// Assess one docstring against the quality heuristics.
    fn assess_quality(
        &self,
        docstring: &str,
        func_name: &str,
        func_info: &FunctionInfo,
    ) -> QualityAssessment;

    /// Improvement priority for one assessed function.
    fn calculate_priority(&self, func_info: &FunctionInfo, assessment: &QualityAssessment)
        -> i64;
}

/// Select an analyzer by language key.
pub fn analyzer_for(
    language: &str,
    config: AnalysisConfig,
) -> DocscopeResult<Box<dyn Analyzer + Send + Sync>> {
    match language {
        "python" => Ok(Box::new(PythonAnalyzer::with_config(config)?)),
        other => Err(DocscopeError::UnsupportedLanguage(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_selects_python() {
        let analyzer = analyzer_for("python", AnalysisConfig::default()).unwrap();
        assert_eq!(analyzer.language(), "python");
        let results = analyzer.analyze("def f(): pass", "").unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_registry_rejects_unknown_language() {
        let Err(err) = analyzer_for("cobol", AnalysisConfig::default()) else {
            panic!("expected an unsupported-language error");
        };
        assert_eq!(err.to_string(), "Unsupported language: cobol");
    }

    #[test]
    fn test_trait_object_assessment_round_trip() {
        let analyzer = analyzer_for("python", AnalysisConfig::default()).unwrap();
        let results = analyzer.analyze("def process(data): return data", "").unwrap();
        let info = &results[0].function_info;
        let assessment = analyzer.assess_quality(&info.current_docstring, &info.name, info);
        let priority = analyzer.calculate_priority(info, &assessment);
        assert_eq!(priority, results[0].priority);
    }
}
