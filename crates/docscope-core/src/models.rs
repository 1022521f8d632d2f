//! Shared typed models used across extraction, assessment, and reporting.
//!
//! These types are language-agnostic: every analyzer produces the same
//! [`FunctionInfo`] / [`QualityAssessment`] / [`FunctionAnalysis`] shapes
//! regardless of the source language it parses. Nothing here is mutated
//! after construction and nothing outlives a single analysis call.

use indexmap::IndexMap;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Quality level
// ---------------------------------------------------------------------------

/// Documentation quality tiers mapping numeric scores to categorical
/// assessments.
///
/// With default cutoffs: EXCELLENT >= 0.8, GOOD >= 0.6, BASIC >= 0.3,
/// POOR below that. A brief one-liner forces POOR regardless of score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Poor,
    Basic,
    Good,
    Excellent,
}

impl QualityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLevel::Poor => "poor",
            QualityLevel::Basic => "basic",
            QualityLevel::Good => "good",
            QualityLevel::Excellent => "excellent",
        }
    }
}

// ---------------------------------------------------------------------------
// Function metadata
// ---------------------------------------------------------------------------

/// A single parameter of a discovered function.
///
/// Annotation and default are opaque source text — presence is all the
/// assessor ever checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArgInfo {
    pub name: String,
    pub type_annotation: Option<String>,
    pub default: Option<String>,
}

/// Function metadata extracted from source analysis.
#[derive(Clone, Debug, Serialize)]
pub struct FunctionInfo {
    /// Function/method name without class prefix.
    pub name: String,
    /// 1-indexed line of the definition.
    pub line: usize,
    /// Cyclomatic complexity estimate, always >= 1.
    pub complexity: u32,
    /// Name starts with the `_` privacy marker.
    pub is_private: bool,
    /// Name matches the configured test-naming convention.
    pub is_test: bool,
    /// Positional parameters in declaration order.
    pub args: Vec<ArgInfo>,
    /// Return annotation as raw source text, if any.
    pub returns: Option<String>,
    /// Best-effort decorator names.
    pub decorators: Vec<String>,
    /// Existing docstring text, empty if absent.
    pub current_docstring: String,
}

impl FunctionInfo {
    /// Parameters excluding a conventional leading `self`.
    pub fn param_count(&self) -> usize {
        self.args.iter().filter(|a| a.name != "self").count()
    }

    /// Whether the function declares a return type other than `None`.
    pub fn has_return(&self) -> bool {
        self.returns.as_deref().is_some_and(|r| r != "None")
    }
}

// ---------------------------------------------------------------------------
// Quality assessment
// ---------------------------------------------------------------------------

/// Named boolean quality checks in declaration order.
///
/// Standard functions carry 8 indicators; test functions carry 11 under the
/// combined policy (the Arrange/Act/Assert set on top of the section set) or
/// 7 under the exclusive policy. Insertion order drives the order of the
/// `missing` list in [`QualityAssessment`].
pub type QualityIndicators = IndexMap<&'static str, bool>;

/// Docstring quality evaluation result.
///
/// Recomputed fresh on every assessment; never persisted.
#[derive(Clone, Debug, Serialize)]
pub struct QualityAssessment {
    /// Categorical tier derived from the score plus override rules.
    pub quality: QualityLevel,
    /// Fraction of true indicators, 0.0–1.0.
    pub score: f64,
    /// Human-readable names of false indicators, declaration order.
    pub missing: Vec<String>,
    /// False only for EXCELLENT documentation.
    pub needs_improvement: bool,
    /// The indicators the score was computed from.
    pub indicators: QualityIndicators,
}

// ---------------------------------------------------------------------------
// Analysis result
// ---------------------------------------------------------------------------

/// Complete per-function analysis result returned by the pipeline.
#[derive(Clone, Debug, Serialize)]
pub struct FunctionAnalysis {
    pub function_name: String,
    pub line_number: usize,
    /// The identifier the caller supplied; used only for labeling output.
    pub file_path: String,
    pub current_docstring: String,
    pub quality_assessment: QualityAssessment,
    pub function_info: FunctionInfo,
    /// Urgency score, higher = more urgent. Unbounded small integer.
    pub priority: i64,
}
