//! Mutable default arguments in Python function definitions

use super::Detector;
use crate::{Finding, Language, Severity};
use regex::Regex;

/// Rule for detecting list literals used as parameter defaults
pub struct MutableDefaultRule {
    pattern: Regex,
}

impl MutableDefaultRule {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"def\s+\w+\([^)]*=\s*\[").unwrap(),
        }
    }
}

impl Default for MutableDefaultRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for MutableDefaultRule {
    fn name(&self) -> &'static str {
        "mutable-default"
    }

    fn language(&self) -> Language {
        Language::Python
    }

    fn detect(&self, code: &str) -> Vec<Finding> {
        if !self.pattern.is_match(code) {
            return Vec::new();
        }
        vec![Finding {
            line: None,
            severity: Severity::Warning,
            message: "Mutable default argument detected".to_string(),
            explanation: "Using mutable objects (like lists) as default arguments can lead \
                          to unexpected behavior."
                .to_string(),
            suggestion: "Use None as default and create the list inside the function."
                .to_string(),
        }]
    }
}
