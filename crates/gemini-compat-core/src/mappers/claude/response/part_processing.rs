// Part processing helpers for NonStreamingProcessor

use super::models::{ContentBlock, ImageSource};
use serde_json::{json, Value};

pub struct PartProcessingContext<'a> {
    pub content_blocks: &'a mut Vec<ContentBlock>,
    pub text_builder: &'a mut String,
    pub thinking_builder: &'a mut String,
    pub thinking_signature: &'a mut Option<String>,
    pub has_tool_call: &'a mut bool,
}

impl PartProcessingContext<'_> {
    pub fn process_function_call(&mut self, fc: &Value, signature: Option<String>) {
        let Some(name) = fc.get("name").and_then(Value::as_str).filter(|n| !n.is_empty()) else {
            tracing::warn!("[Claude-Response] Dropping functionCall without a name");
            return;
        };

        self.flush_thinking();
        self.flush_text();
        *self.has_tool_call = true;

        let id = fc
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("toolu_{}", uuid::Uuid::new_v4().simple()));

        let input = match fc.get("args") {
            Some(args) if !args.is_null() => args.clone(),
            _ => json!({}),
        };

        self.content_blocks.push(ContentBlock::ToolUse {
            id,
            name: name.to_string(),
            input,
            signature,
        });
    }

    pub fn process_text(&mut self, text: &str, is_thought: bool, signature: Option<String>) {
        if is_thought {
            self.flush_text();
            self.thinking_builder.push_str(text);
            if signature.is_some() {
                *self.thinking_signature = signature;
            }
            return;
        }

        self.flush_thinking();
        self.text_builder.push_str(text);

        // Signature on a plain text part: keep it as an empty thinking block
        if let Some(sig) = signature {
            self.flush_text();
            self.content_blocks
                .push(ContentBlock::Thinking { thinking: String::new(), signature: Some(sig) });
        }
    }

    pub fn process_inline_data(&mut self, inline_data: &Value) {
        let data = inline_data.get("data").and_then(Value::as_str).unwrap_or_default();
        if data.is_empty() {
            return;
        }
        let mime_type = inline_data.get("mimeType").and_then(Value::as_str).unwrap_or("image/png");

        self.flush_thinking();
        self.flush_text();
        let source = ImageSource::base64(mime_type, data);
        self.content_blocks.push(ContentBlock::Image { source });
    }

    pub fn flush_text(&mut self) {
        if self.text_builder.is_empty() {
            return;
        }
        let text = std::mem::take(self.text_builder);
        self.content_blocks.push(ContentBlock::Text { text });
    }

    pub fn flush_thinking(&mut self) {
        if self.thinking_builder.is_empty() && self.thinking_signature.is_none() {
            return;
        }
        let thinking = std::mem::take(self.thinking_builder);
        let signature = self.thinking_signature.take();
        self.content_blocks.push(ContentBlock::Thinking { thinking, signature });
    }
}
