//! Normalizes remote-model output into the canonical result schema.
//!
//! Model output is untrusted: it may wrap the JSON in prose, truncate it,
//! or return something else entirely. Every input degrades to a valid
//! result; this module never fails.

use crate::AnalysisResult;

/// Overall message used when remote output cannot be parsed
pub const PARSE_FAILED_OVERALL: &str = "Analysis completed but response parsing failed.";

/// The degraded result returned for unparseable input
pub fn parse_failed_result() -> AnalysisResult {
    AnalysisResult {
        feedback: Vec::new(),
        overall: PARSE_FAILED_OVERALL.to_string(),
    }
}

/// Extract the JSON object embedded in a text block: first `{` to last `}`.
fn embedded_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Parse raw model output into an AnalysisResult. Malformed input (missing
/// braces, invalid JSON, missing keys, unknown severities) yields the
/// degraded result.
pub fn normalize(raw: &str) -> AnalysisResult {
    embedded_object(raw)
        .and_then(|json| serde_json::from_str(json).ok())
        .unwrap_or_else(parse_failed_result)
}
