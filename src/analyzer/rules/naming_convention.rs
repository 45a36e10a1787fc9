//! camelCase identifiers in Python snippets

use super::Detector;
use crate::{Finding, Language, Severity};
use regex::Regex;

/// Rule for detecting camelCase names where snake_case is conventional
pub struct NamingConventionRule {
    pattern: Regex,
}

impl NamingConventionRule {
    pub fn new() -> Self {
        Self {
            // Approximate: can misfire on acronyms and mixed-case constants
            pattern: Regex::new(r"\b[a-z]+[A-Z][a-zA-Z]*\b").unwrap(),
        }
    }
}

impl Default for NamingConventionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for NamingConventionRule {
    fn name(&self) -> &'static str {
        "naming-convention"
    }

    fn language(&self) -> Language {
        Language::Python
    }

    fn detect(&self, code: &str) -> Vec<Finding> {
        if !self.pattern.is_match(code) {
            return Vec::new();
        }
        // Anchored at line 1 regardless of where the match occurred
        vec![Finding {
            line: Some(1),
            severity: Severity::Info,
            message: "Variable naming convention".to_string(),
            explanation: "Python typically uses snake_case for variable names rather than \
                          camelCase."
                .to_string(),
            suggestion: "Consider using snake_case naming (e.g. my_variable instead of \
                         myVariable)."
                .to_string(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_detects_camel_case() {
        let rule = NamingConventionRule::new();
        let findings = rule.detect("myVariable = 1");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, Some(1));
    }

    #[test]
    fn fixed_at_line_one_even_for_later_matches() {
        let rule = NamingConventionRule::new();
        let findings = rule.detect("x = 1\ny = 2\nmyVariable = 3");
        assert_eq!(findings[0].line, Some(1));
    }

    #[test]
    fn negative_snake_case_only() {
        let rule = NamingConventionRule::new();
        assert!(rule.detect("my_variable = 1\ndef some_func(): pass").is_empty());
    }

    #[test]
    fn negative_pascal_case_class_name() {
        // Leading uppercase doesn't match the lower-then-upper pattern
        let rule = NamingConventionRule::new();
        assert!(rule.detect("MyClass = 1").is_empty());
    }
}
