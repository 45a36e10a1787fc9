//! Mentor: code feedback analyzer for JavaScript and Python snippets
//!
//! This library inspects a single source snippet and produces structured
//! findings plus a short overall assessment, either from built-in heuristic
//! detectors or from a remote model whose output is normalized into the
//! same schema.

pub mod analyzer;
pub mod config;
pub mod mcp;
pub mod normalizer;
pub mod remote;
pub mod reporter;
pub mod service;

use serde::{Deserialize, Serialize};

/// Severity levels for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// One reported issue with location, severity, and guidance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Line number (1-indexed); None when the finding is not tied to a
    /// single location (e.g. an aggregate count)
    pub line: Option<usize>,
    /// Severity of the finding
    pub severity: Severity,
    /// Brief description
    pub message: String,
    /// Detailed explanation
    pub explanation: String,
    /// How to fix or improve
    pub suggestion: String,
}

/// The canonical result of analyzing a snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Findings in detector registration order
    pub feedback: Vec<Finding>,
    /// Overall assessment derived from the findings
    pub overall: String,
}

/// Language selecting which detectors apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    Python,
    Unknown,
}

impl Language {
    /// Parse a language identifier. Unrecognized names map to Unknown,
    /// which has no applicable rules; never an error.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Language::JavaScript,
            "python" | "py" => Language::Python,
            _ => Language::Unknown,
        }
    }

    /// Infer the language from a file extension
    pub fn from_extension(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("js") | Some("mjs") | Some("cjs") | Some("jsx") => Language::JavaScript,
            Some("py") => Language::Python,
            _ => Language::Unknown,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::JavaScript => write!(f, "javascript"),
            Language::Python => write!(f, "python"),
            Language::Unknown => write!(f, "unknown"),
        }
    }
}

/// Returns the 1-based index of the first line containing `needle` as a
/// substring, or 1 when no line does, so a finding can always render a
/// location even when detection used a whole-text pattern.
pub fn locate_line(code: &str, needle: &str) -> usize {
    code.split('\n')
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
        .unwrap_or(1)
}

/// Public API: analyze a snippet with the built-in heuristics only.
/// Used by programmatic consumers that don't want a configured service.
pub fn analyze_snippet(code: &str, language: Language) -> AnalysisResult {
    analyzer::HeuristicAnalyzer::new().analyze(code, language)
}
