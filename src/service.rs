//! Analysis service: remote capability with heuristic fallback

use crate::analyzer::HeuristicAnalyzer;
use crate::config::Config;
use crate::normalizer::normalize;
use crate::remote::ClaudeClient;
use crate::{AnalysisResult, Language};
use std::time::Duration;

/// Backend selected once at construction time
pub enum Backend {
    /// Built-in pattern detectors only
    Heuristic,
    /// Remote model, with heuristic fallback on any failure
    Remote(ClaudeClient),
}

/// Orchestrates snippet analysis over the configured backend.
/// Stateless across calls; safe to share behind a reference.
pub struct AnalysisService {
    backend: Backend,
    heuristics: HeuristicAnalyzer,
}

impl AnalysisService {
    /// Build a service from config: remote when a valid credential is
    /// present, heuristic-only otherwise.
    pub fn from_config(config: &Config) -> Self {
        let backend = match config.remote_api_key() {
            Some(key) => Backend::Remote(
                ClaudeClient::with_key(key.to_string())
                    .model(&config.model)
                    .timeout(Duration::from_secs(config.timeout_secs)),
            ),
            None => Backend::Heuristic,
        };
        Self::new(backend)
    }

    /// Build a service with an explicit backend
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            heuristics: HeuristicAnalyzer::new(),
        }
    }

    /// Heuristic-only service, no remote capability
    pub fn heuristic_only() -> Self {
        Self::new(Backend::Heuristic)
    }

    /// Whether the remote path will be attempted
    pub fn is_remote(&self) -> bool {
        matches!(self.backend, Backend::Remote(_))
    }

    /// Analyze a snippet. Total: every input yields a valid result.
    /// Callers reject blank code before invoking this.
    pub fn analyze_code(&self, code: &str, language: Language) -> AnalysisResult {
        match &self.backend {
            Backend::Remote(client) => match client.analyze(code, language) {
                Ok(raw) => normalize(&raw),
                Err(e) => {
                    eprintln!("Remote analysis failed, using heuristics: {}", e);
                    self.heuristics.analyze(code, language)
                }
            },
            Backend::Heuristic => self.heuristics.analyze(code, language),
        }
    }

    /// Explain a programming concept. Without a remote capability this
    /// returns a placeholder instead of failing.
    pub fn explain_concept(&self, concept: &str, context: &str) -> String {
        match &self.backend {
            Backend::Remote(client) => match client.explain(concept, context) {
                Ok(text) => text,
                Err(e) => format!("Error generating explanation: {}", e),
            },
            Backend::Heuristic => format!(
                "Explanation for '{}': configure an Anthropic API key to get AI-powered \
                 explanations.",
                concept
            ),
        }
    }
}
