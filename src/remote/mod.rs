//! Remote model capability: prompt contract and Claude client.
//!
//! The capability is optional: the analysis service only constructs a
//! client when a valid credential is configured, and every client failure
//! is recovered by falling back to the heuristic analyzer.

pub mod claude;

pub use claude::{ClaudeClient, RemoteError, DEFAULT_MODEL};

use crate::Language;

/// Prompt sent for snippet analysis. The contract demands strictly the
/// canonical JSON schema with no surrounding prose; the normalizer still
/// treats the reply as untrusted input.
pub fn build_analysis_prompt(code: &str, language: Language) -> String {
    format!(
        r#"You are an expert code mentor. Analyze this {language} code and provide constructive feedback.

Code to analyze:
```{language}
{code}
```

Provide feedback in JSON format with this structure:
{{
    "feedback": [
        {{
            "line": <line_number>,
            "severity": "error|warning|info",
            "message": "Brief description",
            "explanation": "Detailed explanation",
            "suggestion": "How to fix or improve"
        }}
    ],
    "overall": "Overall assessment and encouragement"
}}

Focus on:
1. Common mistakes and bugs
2. Best practices
3. Code quality and readability
4. Performance considerations
5. Security issues

Be encouraging and educational. Return ONLY the JSON, no other text."#
    )
}

/// Prompt for explaining a programming concept
pub fn build_concept_prompt(concept: &str, context: &str) -> String {
    let mut prompt = format!("Explain the programming concept: {concept}");
    if !context.is_empty() {
        prompt.push_str(&format!("\n\nContext: {context}"));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_prompt_embeds_language_code_and_schema() {
        let prompt = build_analysis_prompt("var x = 1;", Language::JavaScript);
        assert!(prompt.contains("```javascript"));
        assert!(prompt.contains("var x = 1;"));
        assert!(prompt.contains("\"severity\": \"error|warning|info\""));
        assert!(prompt.contains("Return ONLY the JSON"));
    }

    #[test]
    fn concept_prompt_with_and_without_context() {
        let bare = build_concept_prompt("closures", "");
        assert!(bare.contains("closures"));
        assert!(!bare.contains("Context:"));

        let with = build_concept_prompt("closures", "in javascript");
        assert!(with.contains("Context: in javascript"));
    }
}
