//! Analysis configuration: quality cutoffs, heuristic thresholds, and
//! resource limits.
//!
//! Everything that governs a heuristic decision lives here as plain data.
//! A configuration is constructed once (or once per request override),
//! validated, and then shared read-only across concurrent analyses — the
//! types are `Clone + Send + Sync` with no interior mutability.

use serde::Serialize;

use crate::errors::{DocscopeError, DocscopeResult};

// ---------------------------------------------------------------------------
// Test-detection and indicator-set policies
// ---------------------------------------------------------------------------

/// How test functions are recognized from their name.
///
/// Two rules exist in the wild; the choice is surfaced here instead of being
/// hard-coded:
///
/// * `Strict` — name starts with `test_` AND either has a capitalized token
///   right after the prefix (`test_CamelCase`) or contains more than one
///   underscore (`test_foo_bar`). Plain `test_foo` is NOT a test.
/// * `Lenient` — name starts with `test_`, nothing more.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum TestDetection {
    #[default]
    Strict,
    Lenient,
}

/// Which indicator set test functions are scored against.
///
/// * `Combined` — test functions keep the four section indicators
///   (Args/Returns/Raises/Example) in addition to the Arrange/Act/Assert
///   set: 11 indicators total.
/// * `Exclusive` — the Arrange/Act/Assert set replaces the section set:
///   7 indicators total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum TestIndicatorPolicy {
    #[default]
    Combined,
    Exclusive,
}

// ---------------------------------------------------------------------------
// Heuristic thresholds
// ---------------------------------------------------------------------------

/// Docstring quality assessment thresholds.
///
/// Defaults are calibrated against PEP 257 / Google style docstring
/// conventions and are split by test-vs-production context throughout.
#[derive(Clone, Debug, Serialize)]
pub struct QualityThresholds {
    /// Maximum non-empty lines for a docstring to count as brief.
    pub max_brief_lines: usize,
    /// Extended brief-line threshold applied when the text is short.
    pub max_brief_lines_extended: usize,
    /// Minimum characters to escape the extended brief classification.
    pub min_brief_chars: usize,

    /// Non-empty lines required for detailed content (production).
    pub min_detailed_lines_standard: usize,
    /// Non-empty lines required for detailed content (test).
    pub min_detailed_lines_test: usize,
    /// Characters required for detailed content (production).
    pub min_detailed_chars_standard: usize,
    /// Characters required for detailed content (test).
    pub min_detailed_chars_test: usize,

    /// Characters required for comprehensive production docs.
    pub min_comprehensive_chars_standard: usize,
    /// Comprehensive threshold for terse-notation production docs.
    pub min_comprehensive_chars_standard_terse: usize,
    /// Characters required for comprehensive test docs.
    pub min_comprehensive_chars_test: usize,
    /// Comprehensive threshold for terse-notation test docs.
    pub min_comprehensive_chars_test_terse: usize,

    /// Complexity above this earns one priority point.
    pub complexity_medium: u32,
    /// Complexity above this earns two priority points.
    pub complexity_high: u32,

    /// Cap on the parameter-count contribution to priority.
    pub max_param_priority_contribution: usize,

    /// Bullet-style lines required for terse-notation detection.
    pub min_bullet_points: usize,
    /// Blank-line paragraph breaks required for structured sections.
    pub min_paragraph_breaks: usize,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            max_brief_lines: 1,
            max_brief_lines_extended: 3,
            min_brief_chars: 100,
            min_detailed_lines_standard: 5,
            min_detailed_lines_test: 10,
            min_detailed_chars_standard: 200,
            min_detailed_chars_test: 300,
            min_comprehensive_chars_standard: 300,
            min_comprehensive_chars_standard_terse: 150,
            min_comprehensive_chars_test: 500,
            min_comprehensive_chars_test_terse: 200,
            complexity_medium: 5,
            complexity_high: 10,
            max_param_priority_contribution: 3,
            min_bullet_points: 3,
            min_paragraph_breaks: 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Quality score cutoffs
// ---------------------------------------------------------------------------

/// Score cutoffs mapping the 0.0–1.0 indicator score to quality tiers.
///
/// Scores below `basic` are poor. Invariant: `excellent >= good >= basic`,
/// enforced by [`AnalysisConfig::validate`].
#[derive(Clone, Copy, Debug, Serialize)]
pub struct QualityCutoffs {
    pub excellent: f64,
    pub good: f64,
    pub basic: f64,
}

impl Default for QualityCutoffs {
    fn default() -> Self {
        Self {
            excellent: 0.8,
            good: 0.6,
            basic: 0.3,
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level configuration
// ---------------------------------------------------------------------------

/// Configuration for documentation analysis.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisConfig {
    pub cutoffs: QualityCutoffs,
    pub thresholds: QualityThresholds,

    /// Maximum code size in bytes (5 MiB default).
    pub max_code_size: usize,
    /// Docstrings below this trimmed length are treated as absent.
    pub min_docstring_length: usize,

    /// Parse-tree node budget (DoS protection).
    pub max_ast_nodes: usize,
    /// Parse-tree nesting depth limit (DoS protection).
    pub max_ast_depth: usize,
    /// Seconds before the bounded parse gives up.
    pub ast_parse_timeout: u64,

    /// Maximum accepted file-identifier length.
    pub max_file_path_length: usize,

    /// Maximum results rendered in a report.
    pub max_results_display: usize,
    /// Missing-indicator names shown per function in a report.
    pub max_missing_elements_display: usize,
    /// Characters of the current docstring previewed in a report.
    pub docstring_preview_length: usize,

    pub test_detection: TestDetection,
    pub test_indicator_policy: TestIndicatorPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cutoffs: QualityCutoffs::default(),
            thresholds: QualityThresholds::default(),
            max_code_size: 5 * 1024 * 1024,
            min_docstring_length: 10,
            max_ast_nodes: 50_000,
            max_ast_depth: 100,
            ast_parse_timeout: 5,
            max_file_path_length: 4096,
            max_results_display: 10,
            max_missing_elements_display: 3,
            docstring_preview_length: 300,
            test_detection: TestDetection::default(),
            test_indicator_policy: TestIndicatorPolicy::default(),
        }
    }
}

impl AnalysisConfig {
    /// Check the cutoff ordering invariant.
    ///
    /// Numeric thresholds are unsigned and therefore non-negative by
    /// construction; the cutoffs additionally must lie in `[0, 1]` and be
    /// monotonically ordered `excellent >= good >= basic`.
    pub fn validate(&self) -> DocscopeResult<()> {
        let c = &self.cutoffs;
        for (name, value) in [
            ("excellent", c.excellent),
            ("good", c.good),
            ("basic", c.basic),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DocscopeError::InvalidConfig(format!(
                    "cutoff {name} must be in [0, 1], got {value}"
                )));
            }
        }
        if c.excellent < c.good || c.good < c.basic {
            return Err(DocscopeError::InvalidConfig(format!(
                "cutoffs must be ordered excellent >= good >= basic, got {} / {} / {}",
                c.excellent, c.good, c.basic
            )));
        }
        Ok(())
    }

    /// Detect test functions by naming pattern under the configured rule.
    pub fn is_test_function(&self, func_name: &str) -> bool {
        if !func_name.starts_with("test_") {
            return false;
        }
        match self.test_detection {
            TestDetection::Lenient => true,
            TestDetection::Strict => {
                let after_prefix = &func_name["test_".len()..];
                after_prefix.starts_with(|c: char| c.is_ascii_uppercase())
                    || func_name.matches('_').count() > 1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unordered_cutoffs_rejected() {
        let mut config = AnalysisConfig::default();
        config.cutoffs.good = 0.9; // above excellent
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_cutoff_rejected() {
        let mut config = AnalysisConfig::default();
        config.cutoffs.excellent = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_detect_test_function_camelcase() {
        let config = AnalysisConfig::default();
        assert!(config.is_test_function("test_UserLogin"));
    }

    #[test]
    fn test_detect_test_function_underscores() {
        let config = AnalysisConfig::default();
        assert!(config.is_test_function("test_user_login_flow"));
        assert!(config.is_test_function("test_foo_bar"));
    }

    #[test]
    fn test_strict_rejects_bare_prefix() {
        let config = AnalysisConfig::default();
        // Single underscore, no CamelCase: not a test under the strict rule.
        assert!(!config.is_test_function("test_foo"));
        assert!(!config.is_test_function("testfoo"));
        assert!(!config.is_test_function("process_data"));
    }

    #[test]
    fn test_lenient_accepts_bare_prefix() {
        let config = AnalysisConfig {
            test_detection: TestDetection::Lenient,
            ..AnalysisConfig::default()
        };
        assert!(config.is_test_function("test_foo"));
        assert!(config.is_test_function("test_user_login_flow"));
        assert!(!config.is_test_function("helper"));
    }
}
