// Google content construction for Claude → Gemini transformation
// One Gemini content entry per Claude message, in order

use super::content_builder::build_parts;
use gemini_compat_types::protocol::{ClaudeRole, GeminiRole};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Build a single Google content entry from a Claude message.
///
/// Returns `None` for messages with an unknown role or no convertible content.
pub fn build_google_content(
    msg: &Value,
    tool_id_to_name: &mut HashMap<String, String>,
) -> Option<Value> {
    let role_str = msg.get("role").and_then(Value::as_str);
    let Some(role) = role_str.and_then(ClaudeRole::from_wire) else {
        tracing::warn!("[Claude-Request] Skipping message with unsupported role {:?}", role_str);
        return None;
    };

    let parts = msg.get("content").map(|c| build_parts(c, tool_id_to_name)).unwrap_or_default();
    if parts.is_empty() {
        tracing::debug!("[Claude-Request] Omitting {:?} message with no convertible parts", role);
        return None;
    }

    Some(json!({
        "role": GeminiRole::from(role).as_str(),
        "parts": parts
    }))
}

/// Build all Google contents from the Claude `messages` value.
pub fn build_google_contents(messages: Option<&Value>) -> Vec<Value> {
    let Some(messages) = messages.and_then(Value::as_array) else {
        if messages.is_some_and(|m| !m.is_null()) {
            tracing::warn!("[Claude-Request] `messages` is not an array, sending empty contents");
        }
        return Vec::new();
    };

    let mut tool_id_to_name = HashMap::new();
    messages.iter().filter_map(|msg| build_google_content(msg, &mut tool_id_to_name)).collect()
}
