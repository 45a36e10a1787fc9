//! Claude API client for remote snippet analysis
//!
//! Requires the `ai` feature to be enabled:
//! ```toml
//! mentor = { version = "0.2", features = ["ai"] }
//! ```

use crate::Language;
use std::time::Duration;
use thiserror::Error;

/// Default model for analysis requests
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Claude API client
#[allow(dead_code)]
pub struct ClaudeClient {
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

/// Error from the Claude API
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("ANTHROPIC_API_KEY environment variable not set")]
    NoApiKey,
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("rate limited - try again later")]
    RateLimited,
    #[error("API error: {0}")]
    Api(String),
}

impl ClaudeClient {
    /// Create a client using ANTHROPIC_API_KEY from the environment
    pub fn from_env() -> Result<Self, RemoteError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| RemoteError::NoApiKey)?;
        Ok(Self::with_key(api_key))
    }

    /// Create a client with a specific API key
    pub fn with_key(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the model to use
    pub fn model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Bound the request so a slow upstream call cannot stall the service
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the API endpoint (used by tests)
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Ask the model to analyze a snippet; returns the raw text reply
    #[cfg(feature = "ai")]
    pub fn analyze(&self, code: &str, language: Language) -> Result<String, RemoteError> {
        let prompt = super::build_analysis_prompt(code, language);
        self.send_request(&prompt)
    }

    /// Ask the model to explain a programming concept
    #[cfg(feature = "ai")]
    pub fn explain(&self, concept: &str, context: &str) -> Result<String, RemoteError> {
        let prompt = super::build_concept_prompt(concept, context);
        self.send_request(&prompt)
    }

    /// Send a prompt and return the text of the first content block
    #[cfg(feature = "ai")]
    pub fn send_request(&self, prompt: &str) -> Result<String, RemoteError> {
        use serde_json::json;

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| RemoteError::RequestFailed(e.to_string()))?;

        let body = json!({
            "model": self.model,
            "max_tokens": 1024,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let response = client
            .post(&self.base_url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&body)
            .send()
            .map_err(|e| RemoteError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RemoteError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(RemoteError::Api(format!("{}: {}", status, error_text)));
        }

        let json: serde_json::Value = response
            .json()
            .map_err(|e| RemoteError::InvalidResponse(e.to_string()))?;

        json["content"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|item| item["text"].as_str())
            .map(|text| text.to_string())
            .ok_or_else(|| RemoteError::InvalidResponse("no content in response".to_string()))
    }

    /// Stub when the ai feature is disabled; callers fall back to heuristics
    #[cfg(not(feature = "ai"))]
    pub fn analyze(&self, _code: &str, _language: Language) -> Result<String, RemoteError> {
        Err(RemoteError::RequestFailed(
            "AI feature not enabled. Rebuild with: cargo build --features ai".to_string(),
        ))
    }

    #[cfg(not(feature = "ai"))]
    pub fn explain(&self, _concept: &str, _context: &str) -> Result<String, RemoteError> {
        Err(RemoteError::RequestFailed(
            "AI feature not enabled. Rebuild with: cargo build --features ai".to_string(),
        ))
    }

    #[cfg(not(feature = "ai"))]
    pub fn send_request(&self, _prompt: &str) -> Result<String, RemoteError> {
        Err(RemoteError::RequestFailed(
            "AI feature not enabled. Rebuild with: cargo build --features ai".to_string(),
        ))
    }
}

/// Check if the AI feature is compiled in
pub fn is_ai_available() -> bool {
    cfg!(feature = "ai")
}
