//! Tool building for Gemini API.

use gemini_compat_types::protocol::FunctionCallingMode;
use serde_json::{json, Map, Value};

/// Convert Claude tool definitions into Gemini's `tools` value.
///
/// Accepts both the standard shape (`name`, `description`, `input_schema` at
/// the top level) and the MCP/custom shape (`type: "custom"`, with
/// `description`/`input_schema` nested under `custom`). Every surviving tool
/// goes into one shared `functionDeclarations` container. Returns `None` when
/// nothing survives, so callers can drop the `tools` field entirely.
pub fn convert_tools(tools: &Value) -> Option<Vec<Value>> {
    let Some(tools_list) = tools.as_array() else {
        if !tools.is_null() {
            tracing::debug!("[Claude-Request] `tools` is not an array, ignoring");
        }
        return None;
    };

    let function_declarations: Vec<Value> =
        tools_list.iter().filter_map(function_declaration).collect();

    if function_declarations.is_empty() {
        return None;
    }

    Some(vec![json!({ "functionDeclarations": function_declarations })])
}

fn function_declaration(tool: &Value) -> Option<Value> {
    let tool_obj = tool.as_object()?;

    // Custom tools keep everything but the name one level down
    let is_custom = tool_obj.get("type").and_then(Value::as_str) == Some("custom");
    let source: &Map<String, Value> = if is_custom {
        match tool_obj.get("custom").and_then(Value::as_object) {
            Some(custom) => custom,
            None => {
                tracing::debug!(
                    "[Claude-Request] Skipping custom tool {:?} without `custom` object",
                    tool_obj.get("name")
                );
                return None;
            },
        }
    } else {
        tool_obj
    };

    let name = tool_obj.get("name").and_then(Value::as_str).filter(|n| !n.is_empty())?;
    let description = source.get("description").and_then(Value::as_str).unwrap_or_default();
    let parameters = match source.get("input_schema") {
        Some(schema) if !schema.is_null() => schema.clone(),
        _ => json!({"type": "object", "properties": {}}),
    };

    Some(json!({
        "name": name,
        "description": description,
        "parameters": parameters
    }))
}

/// Map Claude `tool_choice` onto `toolConfig.functionCallingConfig`.
///
/// Accepts the object form (`{"type": "tool", "name": "x"}`) and a bare string.
pub fn build_tool_config(tool_choice: &Value) -> Option<Value> {
    let choice_type = tool_choice
        .as_str()
        .or_else(|| tool_choice.get("type").and_then(Value::as_str))?;

    let Some(mode) = FunctionCallingMode::from_claude_choice(choice_type) else {
        tracing::debug!("[Claude-Request] Unknown tool_choice type '{}', ignoring", choice_type);
        return None;
    };

    let mut calling_config = json!({ "mode": mode.as_str() });
    if choice_type == "tool" {
        if let Some(name) = tool_choice.get("name").and_then(Value::as_str) {
            calling_config["allowedFunctionNames"] = json!([name]);
        }
    }

    Some(json!({ "functionCallingConfig": calling_config }))
}
