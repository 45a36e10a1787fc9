//! MCP (Model Context Protocol) server for editor/agent integration.
//!
//! Exposes tools: analyze_code, explain_concept, health. The analysis
//! service is constructed by the caller and injected here; request
//! handling holds no state of its own.

use crate::service::AnalysisService;
use crate::Language;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Write};

/// MCP JSON-RPC request
#[derive(Debug, Deserialize, Serialize)]
pub struct JsonRpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,
    pub id: Option<serde_json::Value>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// MCP JSON-RPC response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

/// Tool definition for MCP tools/list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolDef {
    name: String,
    description: String,
    input_schema: InputSchema,
}

#[derive(Debug, Serialize)]
struct InputSchema {
    #[serde(rename = "type")]
    typ: &'static str,
    properties: serde_json::Value,
    required: Vec<&'static str>,
}

/// Handle a single JSON-RPC request and return a response.
/// Extracted from `run_server` for testability.
pub fn handle_request(service: &AnalysisService, req: &JsonRpcRequest) -> JsonRpcResponse {
    let id = req.id.clone();
    let result = match req.method.as_str() {
        "initialize" => Some(serde_json::json!({
            "protocolVersion": "0.1.0",
            "capabilities": { "tools": {} },
            "serverInfo": { "name": "mentor", "version": env!("CARGO_PKG_VERSION") }
        })),
        "tools/list" => {
            let tools = vec![
                ToolDef {
                    name: "analyze_code".to_string(),
                    description: "Analyze a code snippet and return structured feedback"
                        .to_string(),
                    input_schema: InputSchema {
                        typ: "object",
                        properties: serde_json::json!({
                            "code": { "type": "string", "description": "Source snippet to analyze" },
                            "language": { "type": "string", "description": "Language of the snippet (default: javascript)" }
                        }),
                        required: vec!["code"],
                    },
                },
                ToolDef {
                    name: "explain_concept".to_string(),
                    description: "Explain a programming concept".to_string(),
                    input_schema: InputSchema {
                        typ: "object",
                        properties: serde_json::json!({
                            "concept": { "type": "string", "description": "Concept to explain" },
                            "context": { "type": "string", "description": "Optional extra context" }
                        }),
                        required: vec!["concept"],
                    },
                },
                ToolDef {
                    name: "health".to_string(),
                    description: "Liveness probe".to_string(),
                    input_schema: InputSchema {
                        typ: "object",
                        properties: serde_json::json!({}),
                        required: vec![],
                    },
                },
            ];
            Some(serde_json::json!({ "tools": tools }))
        }
        "tools/call" => {
            let (name, args_obj) = req
                .params
                .as_ref()
                .and_then(|p| p.get("params").or(Some(p)))
                .map(|p| {
                    let name = p.get("name").and_then(|n| n.as_str()).unwrap_or("");
                    let args = p
                        .get("arguments")
                        .cloned()
                        .unwrap_or(serde_json::Value::Null);
                    let obj = args.as_object().cloned().unwrap_or_default();
                    (name, obj)
                })
                .unwrap_or(("", serde_json::Map::new()));

            let result = match name {
                "analyze_code" => run_analyze(service, &args_obj),
                "explain_concept" => run_explain(service, &args_obj),
                "health" => Ok(serde_json::json!({ "status": "ok" })),
                _ => Err(anyhow::anyhow!("Unknown tool: {}", name)),
            };

            match result {
                Ok(val) => Some(serde_json::json!({
                    "content": [{ "type": "text", "text": serde_json::to_string(&val).unwrap_or_else(|_| "{}".to_string()) }]
                })),
                Err(e) => Some(serde_json::json!({
                    "content": [{ "type": "text", "text": format!("Error: {}", e) }],
                    "isError": true
                })),
            }
        }
        _ => None,
    };

    JsonRpcResponse {
        jsonrpc: "2.0",
        id,
        result,
        error: None,
    }
}

/// Run the MCP server loop (stdin / stdout)
pub fn run_server(service: &AnalysisService) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let reader = BufReader::new(stdin.lock());

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let req: JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(_) => continue,
        };

        let response = handle_request(service, &req);
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn run_analyze(
    service: &AnalysisService,
    args: &serde_json::Map<String, serde_json::Value>,
) -> anyhow::Result<serde_json::Value> {
    let code = args.get("code").and_then(|v| v.as_str()).unwrap_or("");
    if code.trim().is_empty() {
        anyhow::bail!("No code provided");
    }
    let language = args
        .get("language")
        .and_then(|v| v.as_str())
        .unwrap_or("javascript");

    let result = service.analyze_code(code, Language::parse(language));
    // Serialization of the canonical shape cannot realistically fail; the
    // generic result is the defensive last resort for the boundary.
    Ok(serde_json::to_value(&result).unwrap_or_else(|e| {
        eprintln!("Failed to serialize analysis result: {}", e);
        serde_json::json!({ "feedback": [], "overall": "Error occurred" })
    }))
}

fn run_explain(
    service: &AnalysisService,
    args: &serde_json::Map<String, serde_json::Value>,
) -> anyhow::Result<serde_json::Value> {
    let concept = args.get("concept").and_then(|v| v.as_str()).unwrap_or("");
    if concept.trim().is_empty() {
        anyhow::bail!("No concept provided");
    }
    let context = args.get("context").and_then(|v| v.as_str()).unwrap_or("");

    let explanation = service.explain_concept(concept, context);
    Ok(serde_json::json!({ "explanation": explanation }))
}
