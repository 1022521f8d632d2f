//! Python documentation analyzer.
//!
//! Orchestrates the linear analysis pipeline: input validation, bounded
//! parse, tree guards, extraction, assessment, priority scoring, and the
//! final stable sort. A single call is synchronous and single-threaded
//! (the parse worker excepted); concurrent calls share nothing but the
//! read-only configuration.

mod extract;
mod guards;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::analyzers::Analyzer;
use crate::config::AnalysisConfig;
use crate::errors::{DocscopeError, DocscopeResult};
use crate::models::{FunctionAnalysis, FunctionInfo, QualityAssessment};
use crate::{priority, quality};

/// Python documentation quality analyzer backed by tree-sitter.
pub struct PythonAnalyzer {
    config: AnalysisConfig,
}

impl Default for PythonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonAnalyzer {
    /// Analyzer with the default configuration.
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }

    /// Analyzer with a caller-supplied configuration, validated up front.
    pub fn with_config(config: AnalysisConfig) -> DocscopeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze Python source and return the functions needing documentation
    /// improvement, highest priority first.
    ///
    /// An empty list means every discovered function already has excellent
    /// documentation. All failures, including panics escaping the pipeline,
    /// surface as a single [`DocscopeError`].
    pub fn analyze(&self, code: &str, file_path: &str) -> DocscopeResult<Vec<FunctionAnalysis>> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.analyze_inner(code, file_path)));
        match outcome {
            Ok(result) => result,
            Err(payload) => Err(DocscopeError::Internal(panic_message(payload.as_ref()))),
        }
    }

    fn analyze_inner(&self, code: &str, file_path: &str) -> DocscopeResult<Vec<FunctionAnalysis>> {
        guards::validate_code_size(code, &self.config)?;
        guards::validate_file_path(file_path, &self.config)?;

        let tree = guards::parse_bounded(code, self.config.ast_parse_timeout)?;
        guards::check_syntax(&tree)?;
        guards::check_tree_limits(&tree, &self.config)?;

        let mut results = Vec::new();
        for info in extract::extract_functions(&tree, code, &self.config) {
            let assessment =
                quality::assess(&info.current_docstring, &info.name, &info, &self.config);
            if !assessment.needs_improvement {
                continue;
            }
            let priority = priority::calculate_priority(&info, &assessment, &self.config);
            results.push(FunctionAnalysis {
                function_name: info.name.clone(),
                line_number: info.line,
                file_path: file_path.to_string(),
                current_docstring: info.current_docstring.clone(),
                quality_assessment: assessment,
                function_info: info,
                priority,
            });
        }

        // Stable sort: ties keep discovery order.
        results.sort_by(|a, b| b.priority.cmp(&a.priority));
        Ok(results)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected panic".to_string()
    }
}

impl Analyzer for PythonAnalyzer {
    fn analyze(&self, code: &str, file_path: &str) -> DocscopeResult<Vec<FunctionAnalysis>> {
        PythonAnalyzer::analyze(self, code, file_path)
    }

    fn language(&self) -> &'static str {
        "python"
    }

    fn assess_quality(
        &self,
        docstring: &str,
        func_name: &str,
        func_info: &FunctionInfo,
    ) -> QualityAssessment {
        quality::assess(docstring, func_name, func_info, &self.config)
    }

    fn calculate_priority(
        &self,
        func_info: &FunctionInfo,
        assessment: &QualityAssessment,
    ) -> i64 {
        priority::calculate_priority(func_info, assessment, &self.config)
    }
}
