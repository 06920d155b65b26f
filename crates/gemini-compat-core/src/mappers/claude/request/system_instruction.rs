//! System instruction building.

use serde_json::{json, Value};

/// Claude `system` (string or text-block array) → Gemini `systemInstruction`.
pub fn build_system_instruction(system: Option<&Value>) -> Option<Value> {
    let parts: Vec<Value> = match system? {
        Value::String(text) if !text.is_empty() => vec![json!({ "text": text })],
        Value::Array(blocks) => blocks
            .iter()
            .filter(|b| b.get("type").and_then(Value::as_str) == Some("text"))
            .filter_map(|b| b.get("text").and_then(Value::as_str))
            .filter(|text| !text.is_empty())
            .map(|text| json!({ "text": text }))
            .collect(),
        _ => Vec::new(),
    };

    if parts.is_empty() {
        return None;
    }
    Some(json!({ "parts": parts }))
}
