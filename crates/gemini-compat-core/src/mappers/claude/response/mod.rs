// Claude non-streaming response transformation (Gemini → Claude)
// Corresponds to NonStreamingProcessor

mod models;
mod part_processing;

use crate::mappers::gemini::unwrap_response;
use gemini_compat_types::protocol::{ClaudeUsage, StopReason};
use gemini_compat_types::DecodeError;
pub use models::{ClaudeResponse, ContentBlock, ImageSource};
use part_processing::PartProcessingContext;
use serde_json::Value;

/// Non-streaming response processor
#[derive(Debug, Default)]
pub struct NonStreamingProcessor {
    content_blocks: Vec<ContentBlock>,
    text_builder: String,
    thinking_builder: String,
    thinking_signature: Option<String>,
    has_tool_call: bool,
}

impl NonStreamingProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a Claude response from a (possibly enveloped) Gemini response tree.
    pub fn process(mut self, gemini_response: &Value, model: &str) -> ClaudeResponse {
        let gemini_response = unwrap_response(gemini_response);
        let candidate = gemini_response
            .get("candidates")
            .and_then(Value::as_array)
            .and_then(|c| c.first());

        let parts = candidate
            .and_then(|c| c.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(Value::as_array);

        for part in parts.into_iter().flatten() {
            self.process_part(part);
        }

        let mut ctx = self.context();
        ctx.flush_thinking();
        ctx.flush_text();

        let finish_reason = candidate.and_then(|c| c.get("finishReason")).and_then(Value::as_str);
        let stop_reason = StopReason::from_gemini(finish_reason, self.has_tool_call);

        let id = match gemini_response.get("responseId").and_then(Value::as_str) {
            Some(response_id) if !response_id.is_empty() => format!("msg_{}", response_id),
            _ => format!("msg_{}", uuid::Uuid::new_v4().simple()),
        };

        ClaudeResponse {
            id,
            type_: "message",
            role: "assistant",
            model: model.to_string(),
            content: self.content_blocks,
            stop_reason,
            stop_sequence: None,
            usage: to_claude_usage(gemini_response.get("usageMetadata")),
        }
    }

    fn process_part(&mut self, part: &Value) {
        let signature = part
            .get("thoughtSignature")
            .and_then(Value::as_str)
            .filter(|sig| !sig.is_empty())
            .map(str::to_string);

        let mut ctx = self.context();

        if let Some(fc) = part.get("functionCall").filter(|fc| fc.is_object()) {
            ctx.process_function_call(fc, signature);
            return;
        }

        if let Some(text) = part.get("text").and_then(Value::as_str) {
            let is_thought = part.get("thought").and_then(Value::as_bool).unwrap_or(false);
            ctx.process_text(text, is_thought, signature);
        }

        if let Some(inline_data) = part.get("inlineData") {
            ctx.process_inline_data(inline_data);
        }
    }

    fn context(&mut self) -> PartProcessingContext<'_> {
        PartProcessingContext {
            content_blocks: &mut self.content_blocks,
            text_builder: &mut self.text_builder,
            thinking_builder: &mut self.thinking_builder,
            thinking_signature: &mut self.thinking_signature,
            has_tool_call: &mut self.has_tool_call,
        }
    }
}

fn to_claude_usage(usage_metadata: Option<&Value>) -> ClaudeUsage {
    let count = |key: &str| usage_metadata.and_then(|u| u.get(key)).and_then(Value::as_u64);
    ClaudeUsage {
        input_tokens: count("promptTokenCount").unwrap_or(0),
        output_tokens: count("candidatesTokenCount")
            .unwrap_or(0)
            .saturating_add(count("thoughtsTokenCount").unwrap_or(0)),
        cache_read_input_tokens: count("cachedContentTokenCount"),
    }
}

/// Convert a non-streaming Gemini response body into a Claude Messages response.
///
/// `model` is echoed back as the response model, since clients expect the
/// name they asked for rather than the backend's.
pub fn convert_response(body: &[u8], model: &str) -> Result<Vec<u8>, DecodeError> {
    let gemini_response: Value =
        serde_json::from_slice(body).map_err(|e| DecodeError::from_json_error(&e))?;
    if !gemini_response.is_object() {
        return Err(DecodeError::not_an_object(&gemini_response));
    }

    let claude_response = NonStreamingProcessor::new().process(&gemini_response, model);
    tracing::debug!(
        "[Claude-Response] Built {} content block(s), stop_reason={:?}",
        claude_response.content.len(),
        claude_response.stop_reason
    );
    serde_json::to_vec(&claude_response).map_err(|e| DecodeError::from_encode_error(&e))
}
