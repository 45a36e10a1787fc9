//! Loose equality (`==`) in JavaScript snippets

use super::Detector;
use crate::{Finding, Language, Severity};

/// Rule for detecting `==` comparisons that should be `===`
pub struct LooseEqualityRule;

impl LooseEqualityRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LooseEqualityRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offsets of `==` occurrences that are not part of `===`, `!=`, or
/// `!==`. The regex crate has no lookarounds, so neighbors are checked
/// by hand.
fn loose_eq_offsets(code: &str) -> Vec<usize> {
    let bytes = code.as_bytes();
    code.match_indices("==")
        .filter(|(i, _)| {
            let before = i.checked_sub(1).map(|p| bytes[p]);
            let after = bytes.get(i + 2).copied();
            before != Some(b'=') && before != Some(b'!') && after != Some(b'=')
        })
        .map(|(i, _)| i)
        .collect()
}

impl Detector for LooseEqualityRule {
    fn name(&self) -> &'static str {
        "loose-equality"
    }

    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn detect(&self, code: &str) -> Vec<Finding> {
        loose_eq_offsets(code)
            .into_iter()
            .map(|offset| {
                let line = code[..offset].matches('\n').count() + 1;
                Finding {
                    line: Some(line),
                    severity: Severity::Warning,
                    message: "Using loose equality (==) instead of strict equality (===)"
                        .to_string(),
                    explanation: "The == operator performs type coercion, which can lead to \
                                  unexpected results. The === operator compares both value \
                                  and type."
                        .to_string(),
                    suggestion: "Use === for comparisons to avoid type coercion issues."
                        .to_string(),
                }
            })
            .collect()
    }
}
