//! Integration tests for the MCP server public API.
//! Exercises handle_request from outside the crate (initialize, tools/list,
//! tools/call success and error paths).

use mentor::mcp::{handle_request, JsonRpcRequest};
use mentor::service::AnalysisService;
use serde_json::json;

fn make_request(method: &str, params: Option<serde_json::Value>) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: Some("2.0".to_string()),
        id: Some(json!(1)),
        method: method.to_string(),
        params,
    }
}

fn service() -> AnalysisService {
    AnalysisService::heuristic_only()
}

#[test]
fn mcp_initialize_returns_protocol_and_server_info() {
    let resp = handle_request(&service(), &make_request("initialize", None));

    assert_eq!(resp.jsonrpc, "2.0");
    assert!(resp.error.is_none());
    let result = resp.result.expect("expected result");
    assert_eq!(result["protocolVersion"], "0.1.0");
    assert_eq!(result["serverInfo"]["name"], "mentor");
    assert!(result["serverInfo"]["version"].as_str().is_some());
}

#[test]
fn mcp_tools_list_includes_analyze_and_health() {
    let resp = handle_request(&service(), &make_request("tools/list", None));

    assert!(resp.error.is_none());
    let result = resp.result.expect("expected result");
    let tools = result["tools"].as_array().expect("tools array");
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"analyze_code"));
    assert!(names.contains(&"explain_concept"));
    assert!(names.contains(&"health"));

    // Each tool must have inputSchema with type, properties, required
    for tool in tools {
        let schema = &tool["inputSchema"];
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"].is_object());
        assert!(schema["required"].is_array());
    }
}

#[test]
fn mcp_analyze_code_round_trips_the_canonical_schema() {
    let req = make_request(
        "tools/call",
        Some(json!({
            "name": "analyze_code",
            "arguments": { "code": "def f(items=[]): print(items)", "language": "python" }
        })),
    );
    let resp = handle_request(&service(), &req);

    assert!(resp.error.is_none());
    let result = resp.result.expect("expected result");
    let text = result["content"][0]["text"].as_str().unwrap();
    let payload: mentor::AnalysisResult = serde_json::from_str(text).expect("canonical schema");
    assert_eq!(payload.feedback.len(), 2);
    assert!(!payload.overall.is_empty());
}

#[test]
fn mcp_blank_code_returns_error_content() {
    let req = make_request(
        "tools/call",
        Some(json!({
            "name": "analyze_code",
            "arguments": { "code": "" }
        })),
    );
    let resp = handle_request(&service(), &req);

    assert!(resp.error.is_none());
    let result = resp.result.expect("expected result");
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("No code provided"));
}

#[test]
fn mcp_health_returns_ok_status() {
    let req = make_request(
        "tools/call",
        Some(json!({ "name": "health", "arguments": {} })),
    );
    let resp = handle_request(&service(), &req);

    let result = resp.result.expect("expected result");
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("\"status\":\"ok\""));
}
