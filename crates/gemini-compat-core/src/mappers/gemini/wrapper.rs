// Gemini v1internal envelope handling
use serde_json::Value;

/// Envelope keys the v1internal endpoints wrap a generateContent payload in.
const ENVELOPE_KEYS: [&str; 2] = ["request", "response"];

/// Unwrap a v1internal `{"response": {...}}` body. Plain bodies are returned as-is.
pub fn unwrap_response(response: &Value) -> &Value {
    response.get("response").filter(|inner| inner.is_object()).unwrap_or(response)
}

/// Visit every `parts` array of a Gemini request or response body.
///
/// Covers `contents[*].parts` (requests), `candidates[*].content.parts`
/// (responses), the same locations one level down inside a v1internal
/// envelope, and bodies that are a JSON array of such payloads (chunked
/// responses). Entries missing `parts`, or whose `parts` is not an array, are
/// passed over.
pub fn for_each_parts_array<F>(body: &mut Value, mut visit: F)
where
    F: FnMut(&mut Vec<Value>),
{
    match body {
        Value::Array(payloads) => {
            for payload in payloads {
                visit_enveloped(payload, &mut visit);
            }
        },
        _ => visit_enveloped(body, &mut visit),
    }
}

fn visit_enveloped<F>(payload: &mut Value, visit: &mut F)
where
    F: FnMut(&mut Vec<Value>),
{
    visit_payload(payload, visit);
    for key in ENVELOPE_KEYS {
        if let Some(inner) = payload.get_mut(key) {
            visit_payload(inner, visit);
        }
    }
}

fn visit_payload<F>(payload: &mut Value, visit: &mut F)
where
    F: FnMut(&mut Vec<Value>),
{
    if let Some(contents) = payload.get_mut("contents").and_then(Value::as_array_mut) {
        for content in contents {
            if let Some(parts) = content.get_mut("parts").and_then(Value::as_array_mut) {
                visit(parts);
            }
        }
    }

    if let Some(candidates) = payload.get_mut("candidates").and_then(Value::as_array_mut) {
        for candidate in candidates {
            if let Some(parts) = candidate
                .get_mut("content")
                .and_then(|c| c.get_mut("parts"))
                .and_then(Value::as_array_mut)
            {
                visit(parts);
            }
        }
    }
}

#[cfg(test)]
#[path = "wrapper_tests.rs"]
mod wrapper_tests;
