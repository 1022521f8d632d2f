//! Priority scoring for documentation improvement.
//!
//! Priority = Visibility + Complexity + Signature + Quality gap. Each factor
//! contributes a small capped integer; the sum is unbounded but observed in
//! the 0–13+ range. Higher = more urgent.

use crate::config::AnalysisConfig;
use crate::models::{FunctionInfo, QualityAssessment};

/// Public functions outrank private ones.
fn visibility_score(func_info: &FunctionInfo) -> i64 {
    if func_info.is_private {
        0
    } else {
        3
    }
}

/// Higher complexity needs more documentation.
fn complexity_score(func_info: &FunctionInfo, config: &AnalysisConfig) -> i64 {
    let thresholds = &config.thresholds;
    if func_info.complexity > thresholds.complexity_high {
        2
    } else if func_info.complexity > thresholds.complexity_medium {
        1
    } else {
        0
    }
}

/// More parameters and a return value need more documentation.
///
/// The parameter count excludes `self` and is capped by
/// `max_param_priority_contribution`; a non-`None` return adds 2.
fn signature_score(func_info: &FunctionInfo, config: &AnalysisConfig) -> i64 {
    let mut score = 0i64;

    let param_count = func_info.param_count();
    if param_count > 0 {
        score += param_count.min(config.thresholds.max_param_priority_contribution) as i64;
    }
    if func_info.has_return() {
        score += 2;
    }

    score
}

/// The worse the current documentation, the more urgent the fix.
fn quality_gap_score(assessment: &QualityAssessment) -> i64 {
    if assessment.score < 0.3 {
        3
    } else if assessment.score < 0.6 {
        2
    } else if assessment.score < 0.8 {
        1
    } else {
        0
    }
}

/// Calculate the improvement priority for one function.
pub fn calculate_priority(
    func_info: &FunctionInfo,
    assessment: &QualityAssessment,
    config: &AnalysisConfig,
) -> i64 {
    visibility_score(func_info)
        + complexity_score(func_info, config)
        + signature_score(func_info, config)
        + quality_gap_score(assessment)
}
