//! Thought-signature repair for outgoing Gemini trees.
//!
//! Gemini rejects multi-turn histories whose `functionCall` parts carry no
//! `thoughtSignature`. Claude has no such concept, so tool calls replayed from
//! a Claude history usually arrive unsigned and get the placeholder below.

use super::wrapper::for_each_parts_array;
use serde_json::{json, Value};

/// Placeholder signature that tells Gemini to skip signature validation.
///
/// Per Google docs: https://ai.google.dev/gemini-api/docs/thought-signatures#faqs
pub const DUMMY_THOUGHT_SIGNATURE: &str = "skip_thought_signature_validator";

/// Sign every unsigned `functionCall` part in `body`. Returns how many were signed.
///
/// A part counts as unsigned when `thoughtSignature` is absent, empty, or not
/// a string. Non-object parts and parts of other kinds are left alone.
pub fn ensure_function_call_signatures(body: &mut Value) -> usize {
    let mut injected = 0;
    for_each_parts_array(body, |parts| {
        for part in parts.iter_mut() {
            if !needs_signature(part) {
                continue;
            }
            if let Some(obj) = part.as_object_mut() {
                obj.insert("thoughtSignature".to_string(), json!(DUMMY_THOUGHT_SIGNATURE));
                injected += 1;
            }
        }
    });

    if injected > 0 {
        tracing::debug!(
            "[Tool-Signature] Injected placeholder thoughtSignature into {} functionCall part(s)",
            injected
        );
    }
    injected
}

/// Byte-level variant of [`ensure_function_call_signatures`]. Never fails.
///
/// Input that is not JSON, or that needs no repair, is returned verbatim, so
/// applying this twice is the same as applying it once.
pub fn inject_thought_signatures(body: &[u8]) -> Vec<u8> {
    let mut tree: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("[Tool-Signature] Body is not JSON, passing through unchanged: {}", e);
            return body.to_vec();
        },
    };

    if ensure_function_call_signatures(&mut tree) == 0 {
        return body.to_vec();
    }

    match serde_json::to_vec(&tree) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("[Tool-Signature] Failed to re-encode signed body: {}", e);
            body.to_vec()
        },
    }
}

fn needs_signature(part: &Value) -> bool {
    let is_function_call = part.get("functionCall").is_some_and(Value::is_object);
    if !is_function_call {
        return false;
    }
    !part
        .get("thoughtSignature")
        .and_then(Value::as_str)
        .is_some_and(|sig| !sig.is_empty())
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod signature_tests;
