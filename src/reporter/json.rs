//! JSON reporter for machine-readable output

use crate::AnalysisResult;

/// Fallback payload when serialization fails; same shape as every other path
const ERROR_RESULT_JSON: &str = r#"{"feedback":[],"overall":"Error occurred"}"#;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report an analysis result as JSON
    pub fn report(&self, result: &AnalysisResult) -> String {
        if self.pretty {
            serde_json::to_string_pretty(result)
                .unwrap_or_else(|_| ERROR_RESULT_JSON.to_string())
        } else {
            serde_json::to_string(result).unwrap_or_else(|_| ERROR_RESULT_JSON.to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}
