//! Heuristic analyzer - runs the rule set and derives the overall assessment

use super::rules::{default_detectors, Detector};
use crate::{AnalysisResult, Language};

/// Overall message when no findings are reported
pub const OVERALL_CLEAN: &str = "Great job! Your code looks clean. Keep following best \
                                 practices and consider adding comments for complex logic.";

/// Overall message for one or two findings
pub const OVERALL_MINOR: &str = "Good work! I found a few minor suggestions that could \
                                 improve your code quality. These are common patterns to \
                                 watch for.";

/// Overall message for three or more findings
pub const OVERALL_SEVERAL: &str = "Your code is functional, but there are several areas \
                                   where you can improve code quality and follow best \
                                   practices. Review the suggestions below.";

/// Maps a finding count to the overall assessment tier.
/// The 0 / 1-2 / 3+ boundaries are a contract; callers must not shift them.
pub fn overall_message(finding_count: usize) -> &'static str {
    match finding_count {
        0 => OVERALL_CLEAN,
        1..=2 => OVERALL_MINOR,
        _ => OVERALL_SEVERAL,
    }
}

/// Runs the registered detectors for a language over a snippet
pub struct HeuristicAnalyzer {
    detectors: Vec<Box<dyn Detector>>,
}

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self {
            detectors: default_detectors(),
        }
    }

    /// Analyze a snippet. Pure: identical inputs yield identical results.
    /// Unknown languages have no registered detectors and produce an empty
    /// finding list, not an error.
    pub fn analyze(&self, code: &str, language: Language) -> AnalysisResult {
        let mut feedback = Vec::new();
        for detector in self.detectors.iter().filter(|d| d.language() == language) {
            feedback.extend(detector.detect(code));
        }
        let overall = overall_message(feedback.len()).to_string();
        AnalysisResult { feedback, overall }
    }
}

impl Default for HeuristicAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
