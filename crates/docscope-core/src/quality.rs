//! Docstring quality assessment.
//!
//! The assessor turns one function's docstring into a set of named boolean
//! indicators, aggregates them into a 0.0–1.0 score, and maps the score
//! (plus override rules) to a quality tier. Everything in this module is a
//! pure function of its inputs and the configuration, so assessments are
//! idempotent and safe to run concurrently.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{AnalysisConfig, TestIndicatorPolicy};
use crate::models::{FunctionInfo, QualityAssessment, QualityIndicators, QualityLevel};

/// First line of a well-formed brief: starts with a capital letter, has no
/// internal period, ends with a period.
static BRIEF_DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[A-Z][^.]*\.$").unwrap());

// ---------------------------------------------------------------------------
// Pattern classifiers
// ---------------------------------------------------------------------------

fn count_non_empty_lines(docstring: &str) -> usize {
    docstring
        .trim()
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .count()
}

/// Detect terse-but-complete technical documentation.
///
/// Recognizes bullet lists of at least `min_bullet_points` items, or
/// technical notation (colons, arrows, equals, complexity classes) combined
/// with at least `min_paragraph_breaks` blank-line-separated sections.
pub fn detect_terse_notation(docstring: &str, config: &AnalysisConfig) -> bool {
    let thresholds = &config.thresholds;

    let bullet_lines = docstring
        .trim()
        .split('\n')
        .filter(|line| {
            let t = line.trim_start();
            t.starts_with('•')
                || t.starts_with('-')
                || t.starts_with('*')
                || t.starts_with("1.")
                || t.starts_with("2.")
                || t.starts_with("3.")
        })
        .count();
    let has_bullet_list = bullet_lines >= thresholds.min_bullet_points;

    let has_technical_specs = [":", "→", "=", "O(", "Θ(", "Ω("]
        .iter()
        .any(|notation| docstring.contains(notation));

    let has_structured_sections =
        docstring.matches("\n\n").count() >= thresholds.min_paragraph_breaks;

    has_bullet_list || (has_technical_specs && has_structured_sections)
}

/// Determine whether a docstring is insufficiently brief.
///
/// Terse-but-complete documentation is exempt: compact notation judged
/// sufficient overrides the brevity penalty.
pub fn is_brief_one_liner(docstring: &str, is_terse_complete: bool, config: &AnalysisConfig) -> bool {
    let thresholds = &config.thresholds;
    let non_empty = count_non_empty_lines(docstring);

    (non_empty <= thresholds.max_brief_lines
        || (non_empty <= thresholds.max_brief_lines_extended
            && docstring.chars().count() < thresholds.min_brief_chars))
        && !is_terse_complete
}

// ---------------------------------------------------------------------------
// Indicator computation
// ---------------------------------------------------------------------------

fn check_brief_and_detailed(
    docstring: &str,
    indicators: &mut QualityIndicators,
    is_brief: bool,
    is_terse_complete: bool,
    is_test: bool,
    config: &AnalysisConfig,
) {
    let thresholds = &config.thresholds;
    let first_line = docstring.trim().split('\n').next().unwrap_or("").trim();
    let non_empty = count_non_empty_lines(docstring);
    let chars = docstring.chars().count();

    let (min_lines, min_chars) = if is_test {
        (
            thresholds.min_detailed_lines_test,
            thresholds.min_detailed_chars_test,
        )
    } else {
        (
            thresholds.min_detailed_lines_standard,
            thresholds.min_detailed_chars_standard,
        )
    };

    indicators.insert(
        "brief_description",
        BRIEF_DESCRIPTION_RE.is_match(first_line) && !is_brief,
    );
    indicators.insert(
        "detailed_description",
        (non_empty > min_lines && chars > min_chars) || is_terse_complete,
    );
}

fn check_documentation_sections(docstring: &str, indicators: &mut QualityIndicators) {
    indicators.insert(
        "args_section",
        docstring.contains("Args:") || docstring.contains("Parameters:"),
    );
    indicators.insert(
        "returns_section",
        docstring.contains("Returns:") || docstring.contains("Return:"),
    );
    indicators.insert(
        "raises_section",
        docstring.contains("Raises:") || docstring.contains("Raise:"),
    );
    indicators.insert(
        "example_section",
        docstring.contains("Example:") || docstring.contains("Examples:"),
    );
}

fn check_context_and_details(
    docstring: &str,
    indicators: &mut QualityIndicators,
    is_terse_complete: bool,
    config: &AnalysisConfig,
) {
    let thresholds = &config.thresholds;
    let lowered = docstring.to_lowercase();
    let chars = docstring.chars().count();

    let business_context = [
        "business",
        "purpose",
        "context",
        "responsible",
        "protocol",
        "interface",
        "implements",
        "provides",
    ]
    .iter()
    .any(|keyword| lowered.contains(keyword));

    indicators.insert("business_context", business_context);
    indicators.insert(
        "implementation_details",
        chars > thresholds.min_comprehensive_chars_standard
            || (is_terse_complete && chars > thresholds.min_comprehensive_chars_standard_terse),
    );
}

fn check_test_specific_indicators(
    docstring: &str,
    indicators: &mut QualityIndicators,
    is_brief: bool,
    is_terse_complete: bool,
    config: &AnalysisConfig,
) {
    let thresholds = &config.thresholds;
    let chars = docstring.chars().count();

    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| docstring.contains(k));

    let has_arrangement = contains_any(&[
        "Arrangement",
        "Setup",
        "Given",
        "ARRANGE",
        "Arrange:",
        "Setup:",
        "Given:",
    ]);
    let has_action = contains_any(&[
        "Action",
        "When",
        "ACT",
        "execution",
        "Act:",
        "When:",
        "Execute:",
    ]);
    let has_assertion = contains_any(&[
        "Assertion",
        "Then",
        "ASSERT",
        "validates",
        "verifies",
        "Assert:",
        "Then:",
        "Verify:",
    ]);
    let has_testing_principles = contains_any(&[
        "Testing Principles",
        "Principles",
        "Test:",
        "Validates:",
        "Ensures:",
    ]);

    indicators.insert("arrangement_steps", has_arrangement && !is_brief);
    indicators.insert("action_description", has_action && !is_brief);
    indicators.insert("assertion_strategy", has_assertion && !is_brief);
    indicators.insert("testing_principles", has_testing_principles);
    indicators.insert(
        "comprehensive_content",
        chars > thresholds.min_comprehensive_chars_test
            || (is_terse_complete && chars > thresholds.min_comprehensive_chars_test_terse),
    );
}

fn calculate_quality_indicators(
    docstring: &str,
    is_test: bool,
    is_terse_complete: bool,
    is_brief: bool,
    config: &AnalysisConfig,
) -> QualityIndicators {
    let mut indicators = QualityIndicators::new();

    check_brief_and_detailed(
        docstring,
        &mut indicators,
        is_brief,
        is_terse_complete,
        is_test,
        config,
    );

    let include_sections =
        !is_test || config.test_indicator_policy == TestIndicatorPolicy::Combined;
    if include_sections {
        check_documentation_sections(docstring, &mut indicators);
    }

    if is_test {
        check_test_specific_indicators(docstring, &mut indicators, is_brief, is_terse_complete, config);
    } else {
        check_context_and_details(docstring, &mut indicators, is_terse_complete, config);
    }

    indicators
}

/// Re-check the args/returns indicators against the function signature.
///
/// Returns a fresh indicator map. The pass only ever confirms a deficiency
/// for a non-trivial signature; it never flips an indicator to true, so it
/// can never raise the score.
pub fn validate_signature_coverage(
    indicators: &QualityIndicators,
    func_info: &FunctionInfo,
) -> QualityIndicators {
    let mut corrected = indicators.clone();

    if func_info.param_count() > 0 && !corrected.get("args_section").copied().unwrap_or(true) {
        corrected.insert("args_section", false);
    }
    if func_info.has_return() && !corrected.get("returns_section").copied().unwrap_or(true) {
        corrected.insert("returns_section", false);
    }

    corrected
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// Assess docstring quality against multi-dimensional standards.
///
/// Evaluates structural elements (brief, detailed, sections), content
/// quality (context, implementation details), signature coverage, and a
/// test-specific Arrange/Act/Assert set for test functions.
pub fn assess(
    docstring: &str,
    func_name: &str,
    func_info: &FunctionInfo,
    config: &AnalysisConfig,
) -> QualityAssessment {
    // Early exit for missing or minimal docstrings.
    if docstring.trim().chars().count() < config.min_docstring_length {
        return QualityAssessment {
            quality: QualityLevel::Poor,
            score: 0.0,
            missing: vec!["docstring".to_string()],
            needs_improvement: true,
            indicators: QualityIndicators::new(),
        };
    }

    let is_test = config.is_test_function(func_name);
    let is_terse_complete = detect_terse_notation(docstring, config);
    let is_brief = is_brief_one_liner(docstring, is_terse_complete, config);

    let indicators =
        calculate_quality_indicators(docstring, is_test, is_terse_complete, is_brief, config);
    let indicators = validate_signature_coverage(&indicators, func_info);

    let true_count = indicators.values().filter(|v| **v).count();
    let score = true_count as f64 / indicators.len() as f64;

    let mut missing: Vec<String> = indicators
        .iter()
        .filter(|(_, value)| !**value)
        .map(|(key, _)| key.replace('_', " "))
        .collect();

    let cutoffs = &config.cutoffs;
    let (quality, needs_improvement) = if is_brief {
        missing.insert(0, "comprehensive content (too brief)".to_string());
        (QualityLevel::Poor, true)
    } else if score >= cutoffs.excellent {
        (QualityLevel::Excellent, false)
    } else if score >= cutoffs.good {
        (QualityLevel::Good, true)
    } else if score >= cutoffs.basic {
        (QualityLevel::Basic, true)
    } else {
        (QualityLevel::Poor, true)
    };

    QualityAssessment {
        quality,
        score,
        missing,
        needs_improvement,
        indicators,
    }
}
