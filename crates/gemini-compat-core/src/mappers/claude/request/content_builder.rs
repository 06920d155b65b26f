use super::tool_result_handler::{build_tool_result_parts, inline_data_from_source};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Convert one Claude message `content` into Gemini parts, in block order.
///
/// `tool_id_to_name` carries `tool_use` ids across messages so that later
/// `tool_result` blocks can name the function they answer. Blocks that
/// cannot be converted are dropped and logged.
pub fn build_parts(content: &Value, tool_id_to_name: &mut HashMap<String, String>) -> Vec<Value> {
    match content {
        Value::String(text) => {
            if text.is_empty() {
                Vec::new()
            } else {
                vec![json!({ "text": text })]
            }
        },
        Value::Array(blocks) => {
            let mut parts = Vec::with_capacity(blocks.len());
            for block in blocks {
                parts.extend(build_block_parts(block, tool_id_to_name));
            }
            parts
        },
        other => {
            tracing::debug!("[Claude-Request] Unsupported message content, skipping: {}", other);
            Vec::new()
        },
    }
}

fn build_block_parts(block: &Value, tool_id_to_name: &mut HashMap<String, String>) -> Vec<Value> {
    let block_type = block.get("type").and_then(Value::as_str);
    match block_type {
        Some("text") => match block.get("text").and_then(Value::as_str) {
            Some(text) if !text.is_empty() => vec![json!({ "text": text })],
            _ => Vec::new(),
        },
        Some("thinking") => {
            let Some(thinking) = non_empty_str(block.get("thinking")) else {
                return Vec::new();
            };
            let mut part = json!({ "text": thinking, "thought": true });
            if let Some(sig) = non_empty_str(block.get("signature")) {
                part["thoughtSignature"] = json!(sig);
            }
            vec![part]
        },
        Some("image") | Some("document") => {
            match block.get("source").and_then(inline_data_from_source) {
                Some(part) => vec![part],
                None => {
                    tracing::debug!(
                        "[Claude-Request] Skipping {:?} block without base64 source",
                        block_type
                    );
                    Vec::new()
                },
            }
        },
        Some("tool_use") => build_function_call_part(block, tool_id_to_name).into_iter().collect(),
        Some("tool_result") => {
            let Some(tool_use_id) = block.get("tool_use_id").and_then(Value::as_str) else {
                tracing::warn!("[Claude-Request] Skipping tool_result without tool_use_id");
                return Vec::new();
            };
            let func_name = tool_id_to_name
                .get(tool_use_id)
                .map(String::as_str)
                .unwrap_or(tool_use_id);
            let is_error = block.get("is_error").and_then(Value::as_bool).unwrap_or(false);
            build_tool_result_parts(tool_use_id, block.get("content"), is_error, func_name)
        },
        // redacted_thinking, server tool blocks, unknown future types
        _ => {
            tracing::debug!(
                "[Claude-Request] Dropping unsupported content block type {:?}",
                block_type
            );
            Vec::new()
        },
    }
}

fn build_function_call_part(
    block: &Value,
    tool_id_to_name: &mut HashMap<String, String>,
) -> Option<Value> {
    let Some(name) = non_empty_str(block.get("name")) else {
        tracing::warn!("[Claude-Request] Skipping tool_use block without a name");
        return None;
    };

    let args = match block.get("input") {
        Some(input) if !input.is_null() => input.clone(),
        _ => json!({}),
    };

    let mut function_call = json!({ "name": name, "args": args });
    if let Some(id) = non_empty_str(block.get("id")) {
        function_call["id"] = json!(id);
        tool_id_to_name.insert(id.to_string(), name.to_string());
    }

    let mut part = json!({ "functionCall": function_call });
    match non_empty_str(block.get("signature")) {
        Some(sig) => part["thoughtSignature"] = json!(sig),
        None => tracing::debug!(
            "[Tool-Signature] tool_use '{}' has no signature, placeholder will be injected",
            name
        ),
    }
    Some(part)
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
