//! `var` declarations in JavaScript snippets

use super::Detector;
use crate::{locate_line, Finding, Language, Severity};
use regex::Regex;

/// Rule for detecting `var` instead of `let`/`const`
pub struct VarDeclRule {
    pattern: Regex,
}

impl VarDeclRule {
    pub fn new() -> Self {
        Self {
            // Whole-word match so identifiers like `variable` don't trigger
            pattern: Regex::new(r"\bvar\b").unwrap(),
        }
    }
}

impl Default for VarDeclRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for VarDeclRule {
    fn name(&self) -> &'static str {
        "var-declaration"
    }

    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn detect(&self, code: &str) -> Vec<Finding> {
        if !self.pattern.is_match(code) {
            return Vec::new();
        }
        // One finding per snippet, anchored to the first declaration
        vec![Finding {
            line: Some(locate_line(code, "var ")),
            severity: Severity::Warning,
            message: "Using var instead of let or const".to_string(),
            explanation: "The var keyword has function scope and can lead to unexpected \
                          behavior. Modern JavaScript uses let for variables that change \
                          and const for constants."
                .to_string(),
            suggestion: "Replace var with let or const depending on whether the variable \
                         will be reassigned."
                .to_string(),
        }]
    }
}
