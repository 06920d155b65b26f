use serde_json::{json, Value};

/// Build the Gemini parts for one Claude `tool_result` block.
///
/// The first part is always the `functionResponse`. Images inside the result
/// follow it as sibling `inlineData` parts, since Gemini cannot nest them.
pub fn build_tool_result_parts(
    tool_use_id: &str,
    content: Option<&Value>,
    is_error: bool,
    func_name: &str,
) -> Vec<Value> {
    let (payload, image_parts) = match content {
        Some(value) => extract_payload_and_images(value),
        None => (json!(""), Vec::new()),
    };

    let response = if is_error {
        json!({ "error": payload })
    } else {
        json!({ "result": payload })
    };

    let mut result = vec![json!({
        "functionResponse": {
            "name": func_name,
            "response": response,
            "id": tool_use_id
        }
    })];
    result.extend(image_parts);
    result
}

fn extract_payload_and_images(content: &Value) -> (Value, Vec<Value>) {
    let Value::Array(blocks) = content else {
        // Strings, objects and scalars are forwarded as-is
        let payload = if content.is_null() { json!("") } else { content.clone() };
        return (payload, Vec::new());
    };

    let mut images = Vec::new();
    let mut texts = Vec::new();
    for block in blocks {
        match block.get("type").and_then(Value::as_str) {
            Some("text") => {
                if let Some(text) = block.get("text").and_then(Value::as_str) {
                    texts.push(text);
                }
            },
            Some("image") => {
                if let Some(part) = block.get("source").and_then(inline_data_from_source) {
                    images.push(part);
                }
            },
            _ => {},
        }
    }

    if texts.is_empty() && images.is_empty() {
        // Nothing we recognise: keep the original structure rather than lose it
        return (content.clone(), images);
    }
    (json!(texts.join("\n")), images)
}

/// `inlineData` part for a base64 Claude `source` object.
pub fn inline_data_from_source(source: &Value) -> Option<Value> {
    if source.get("type").and_then(Value::as_str) != Some("base64") {
        return None;
    }
    let data = source.get("data").and_then(Value::as_str)?;
    let mime_type = source.get("media_type").and_then(Value::as_str).unwrap_or("image/png");
    Some(json!({
        "inlineData": {
            "mimeType": mime_type,
            "data": data
        }
    }))
}
