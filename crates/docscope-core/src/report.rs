//! Human-readable rendering of analysis results.
//!
//! The routing layer serializes whatever transport shape it needs from the
//! typed results; this module provides the canonical plain-text report the
//! tool response embeds, honoring the display limits in the configuration.

use crate::config::AnalysisConfig;
use crate::models::FunctionAnalysis;

/// Render a prioritized improvement report.
///
/// Shows at most `max_results_display` functions, each with its quality
/// tier, priority, the first `max_missing_elements_display` missing
/// indicators, and a single-line docstring preview truncated at
/// `docstring_preview_length` characters.
pub fn format_results(results: &[FunctionAnalysis], config: &AnalysisConfig) -> String {
    if results.is_empty() {
        return "Great! All functions have comprehensive docstrings \
                that meet high quality standards."
            .to_string();
    }

    let mut lines = vec![
        "Functions needing better docstrings (prioritized):".to_string(),
        "=".repeat(60),
        "NOTE: Quality assessment analyzes FULL docstrings.".to_string(),
        String::new(),
    ];

    for (i, func) in results.iter().take(config.max_results_display).enumerate() {
        let missing = func
            .quality_assessment
            .missing
            .iter()
            .take(config.max_missing_elements_display)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");

        lines.push(format!(
            "{}. {}() [Line {}]",
            i + 1,
            func.function_name,
            func.line_number
        ));
        lines.push(format!(
            "   Quality: {} | Priority: {}",
            func.quality_assessment.quality.as_str().to_uppercase(),
            func.priority
        ));
        lines.push(format!("   Missing: {missing}"));

        if func.current_docstring.is_empty() {
            lines.push("   Current: No docstring".to_string());
        } else {
            let preview: String = func
                .current_docstring
                .chars()
                .take(config.docstring_preview_length)
                .collect::<String>()
                .replace('\n', " ")
                .trim()
                .to_string();
            let suffix =
                if func.current_docstring.chars().count() > config.docstring_preview_length {
                    "..."
                } else {
                    ""
                };
            lines.push(format!("   Current: {preview}{suffix}"));
        }
        lines.push(String::new());
    }

    if results.len() > config.max_results_display {
        let remaining = results.len() - config.max_results_display;
        lines.push(format!("... and {remaining} more functions"));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FunctionInfo, QualityAssessment, QualityIndicators, QualityLevel,
    };

    fn result(name: &str, line: usize, priority: i64, docstring: &str) -> FunctionAnalysis {
        FunctionAnalysis {
            function_name: name.to_string(),
            line_number: line,
            file_path: "example.py".to_string(),
            current_docstring: docstring.to_string(),
            quality_assessment: QualityAssessment {
                quality: QualityLevel::Poor,
                score: 0.0,
                missing: vec![
                    "docstring".to_string(),
                    "args section".to_string(),
                    "returns section".to_string(),
                    "raises section".to_string(),
                ],
                needs_improvement: true,
                indicators: QualityIndicators::new(),
            },
            function_info: FunctionInfo {
                name: name.to_string(),
                line,
                complexity: 1,
                is_private: false,
                is_test: false,
                args: vec![],
                returns: None,
                decorators: vec![],
                current_docstring: docstring.to_string(),
            },
            priority,
        }
    }

    #[test]
    fn test_empty_results_render_success_message() {
        let text = format_results(&[], &AnalysisConfig::default());
        assert!(text.contains("Great!"));
    }

    #[test]
    fn test_report_lists_functions_with_quality_and_priority() {
        let config = AnalysisConfig::default();
        let text = format_results(&[result("process", 3, 8, "")], &config);
        assert!(text.contains("1. process() [Line 3]"));
        assert!(text.contains("Quality: POOR | Priority: 8"));
        assert!(text.contains("Current: No docstring"));
    }

    #[test]
    fn test_missing_list_is_truncated() {
        let config = AnalysisConfig::default();
        let text = format_results(&[result("process", 3, 8, "")], &config);
        // Four missing entries, but only max_missing_elements_display shown.
        assert!(text.contains("Missing: docstring, args section, returns section"));
        assert!(!text.contains("raises section"));
    }

    #[test]
    fn test_docstring_preview_is_flattened_and_truncated() {
        let config = AnalysisConfig::default();
        let long = format!("First line.\nSecond line. {}", "x".repeat(400));
        let text = format_results(&[result("process", 3, 8, &long)], &config);
        assert!(text.contains("Current: First line. Second line."));
        assert!(text.contains("..."));
    }

    #[test]
    fn test_overflow_tail_counts_remaining() {
        let config = AnalysisConfig::default();
        let results: Vec<FunctionAnalysis> = (0..13)
            .map(|i| result(&format!("func{i}"), i + 1, 5, ""))
            .collect();
        let text = format_results(&results, &config);
        assert!(text.contains("10. func9()"));
        assert!(!text.contains("11. func10()"));
        assert!(text.contains("... and 3 more functions"));
    }
}
