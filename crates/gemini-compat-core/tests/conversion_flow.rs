#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]
#![allow(clippy::indexing_slicing, reason = "fixtures have known JSON shapes")]

use gemini_compat_core::{
    convert_request, convert_response, extract_rate_limit_reset_time_at, inject_thought_signatures,
    parse_rate_limit_info, CompatConfig, RateLimitReason, RequestConverter,
    DUMMY_THOUGHT_SIGNATURE,
};
use serde_json::{json, Value};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn claude_request() -> Value {
    json!({
        "model": "claude-sonnet-4-5",
        "max_tokens": 2048,
        "system": "You edit files.",
        "messages": [
            {"role": "user", "content": "Create a.txt"},
            {
                "role": "assistant",
                "content": [
                    {"type": "text", "text": "Creating it."},
                    {
                        "type": "tool_use",
                        "id": "toolu_01",
                        "name": "write_file",
                        "input": {"path": "a.txt", "content": "x"}
                    }
                ]
            },
            {
                "role": "user",
                "content": [{"type": "tool_result", "tool_use_id": "toolu_01", "content": "ok"}]
            }
        ],
        "tools": [
            {
                "name": "write_file",
                "description": "Write a file",
                "input_schema": {"type": "object", "properties": {"path": {"type": "string"}}}
            },
            {
                "type": "custom",
                "name": "mcp__fs__list",
                "custom": {"description": "List a directory"}
            },
            {"type": "custom", "name": "mcp__broken"}
        ]
    })
}

#[test]
fn test_request_round_trip_through_gateway() {
    init_tracing();

    let body = serde_json::to_vec(&claude_request()).expect("encode");
    let out = convert_request(&body).expect("convert");
    let gemini: Value = serde_json::from_slice(&out).expect("decode");

    let contents = gemini["contents"].as_array().expect("contents");
    assert_eq!(contents.len(), 3);
    assert_eq!(contents[1]["parts"][1]["functionCall"]["name"], "write_file");
    assert_eq!(contents[1]["parts"][1]["thoughtSignature"], DUMMY_THOUGHT_SIGNATURE);
    assert_eq!(contents[2]["parts"][0]["functionResponse"]["name"], "write_file");

    let decls = gemini["tools"][0]["functionDeclarations"].as_array().expect("declarations");
    let names: Vec<&str> = decls.iter().filter_map(|d| d["name"].as_str()).collect();
    assert_eq!(names, ["write_file", "mcp__fs__list"]);
    assert_eq!(decls[1]["parameters"], json!({"type": "object", "properties": {}}));

    // Already signed: the injector must leave the bytes alone
    assert_eq!(inject_thought_signatures(&out), out);
}

#[test]
fn test_configured_converter() {
    init_tracing();

    let config = CompatConfig::from_json_str(
        r#"{"safety_threshold": "block_none", "max_output_tokens_cap": 1024}"#,
    )
    .expect("config");
    let converter = RequestConverter::new(config).expect("valid config");

    let body = serde_json::to_vec(&claude_request()).expect("encode");
    let gemini: Value =
        serde_json::from_slice(&converter.convert(&body).expect("convert")).expect("decode");
    assert_eq!(gemini["generationConfig"]["maxOutputTokens"], 1024);
    assert!(gemini["safetySettings"].is_array());
}

#[test]
fn test_response_and_rate_limit_path() {
    init_tracing();

    let gemini_response = json!({
        "response": {
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Done."}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 2}
        }
    });
    let body = serde_json::to_vec(&gemini_response).expect("encode");
    let claude: Value = serde_json::from_slice(
        &convert_response(&body, "claude-sonnet-4-5").expect("convert"),
    )
    .expect("decode");
    assert_eq!(claude["content"], json!([{"type": "text", "text": "Done."}]));
    assert_eq!(claude["stop_reason"], "end_turn");

    let error_body = br#"{"error":{"code":429,"message":"Rate limit exceeded","details":[{"@type":"type.googleapis.com/google.rpc.RetryInfo","retryDelay":"30s"}]}}"#;
    assert_eq!(extract_rate_limit_reset_time_at(error_body, 1_000), Some(1_030));

    let info = parse_rate_limit_info(error_body).expect("rate limit info");
    assert_eq!(info.retry_after_sec, 30);
    assert_eq!(info.reason, RateLimitReason::RateLimitExceeded);
}
