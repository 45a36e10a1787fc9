//! Debug print statements in Python snippets

use super::Detector;
use crate::{locate_line, Finding, Language, Severity};

/// Rule for detecting print() calls
pub struct PrintCallRule;

impl PrintCallRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PrintCallRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for PrintCallRule {
    fn name(&self) -> &'static str {
        "print-call"
    }

    fn language(&self) -> Language {
        Language::Python
    }

    fn detect(&self, code: &str) -> Vec<Finding> {
        if !code.contains("print(") {
            return Vec::new();
        }
        vec![Finding {
            line: Some(locate_line(code, "print(")),
            severity: Severity::Info,
            message: "Print statement detected".to_string(),
            explanation: "Print statements are good for debugging, but consider using the \
                          logging module for production code."
                .to_string(),
            suggestion: "Use the logging module for better control over output in production."
                .to_string(),
        }]
    }
}
