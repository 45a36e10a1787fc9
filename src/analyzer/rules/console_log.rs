//! Leftover console.log debugging in JavaScript snippets

use super::Detector;
use crate::{locate_line, Finding, Language, Severity};

/// Above this many occurrences the rule reports an aggregate count
/// instead of a single location.
const AGGREGATE_THRESHOLD: usize = 5;

/// Rule for detecting console.log statements
pub struct ConsoleLogRule;

impl ConsoleLogRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for ConsoleLogRule {
    fn name(&self) -> &'static str {
        "console-log"
    }

    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn detect(&self, code: &str) -> Vec<Finding> {
        let count = code.matches("console.log").count();
        if count == 0 {
            return Vec::new();
        }
        if count > AGGREGATE_THRESHOLD {
            // Aggregate finding: exact count, no single-line attribution
            return vec![Finding {
                line: None,
                severity: Severity::Info,
                message: format!("Found {} console.log statements", count),
                explanation: "While debugging with console.log is fine during development, \
                              consider using a debugger for complex issues."
                    .to_string(),
                suggestion: "Learn to use the browser DevTools debugger.".to_string(),
            }];
        }
        vec![Finding {
            line: Some(locate_line(code, "console.log")),
            severity: Severity::Info,
            message: "Console logging detected".to_string(),
            explanation: "Console.log statements are useful for debugging but should be \
                          removed or replaced with proper logging in production code."
                .to_string(),
            suggestion: "Consider using a proper logging library for production code."
                .to_string(),
        }]
    }
}
