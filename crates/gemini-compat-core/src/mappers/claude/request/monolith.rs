use super::generation_config::build_generation_config;
use super::google_content::build_google_contents;
use super::safety::build_safety_settings;
use super::system_instruction::build_system_instruction;
use super::tools_builder::{build_tool_config, convert_tools};
use crate::mappers::gemini::ensure_function_call_signatures;
use gemini_compat_types::{CompatConfig, ConfigError, DecodeError};
use serde_json::{json, Map, Value};

/// Claude Messages request → Gemini generateContent request.
///
/// Holds a validated [`CompatConfig`]. Conversion itself is stateless, so one
/// converter can serve any number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct RequestConverter {
    config: CompatConfig,
}

impl RequestConverter {
    pub fn new(config: CompatConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CompatConfig {
        &self.config
    }

    /// Convert raw request bytes. Fails only when the body is not a JSON object.
    pub fn convert(&self, body: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let claude_req: Value =
            serde_json::from_slice(body).map_err(|e| DecodeError::from_json_error(&e))?;
        let gemini_req = self.convert_value(&claude_req)?;
        serde_json::to_vec(&gemini_req).map_err(|e| DecodeError::from_encode_error(&e))
    }

    /// Tree-level variant of [`RequestConverter::convert`].
    ///
    /// Every `functionCall` part of the result carries a non-empty
    /// `thoughtSignature`.
    pub fn convert_value(&self, claude_req: &Value) -> Result<Value, DecodeError> {
        let Some(claude_req) = claude_req.as_object() else {
            return Err(DecodeError::not_an_object(claude_req));
        };

        let model = claude_req.get("model").and_then(Value::as_str).unwrap_or("<unset>");
        tracing::debug!("[Claude-Request] Converting request for model {}", model);

        let mut inner_request = Map::new();
        let contents = build_google_contents(claude_req.get("messages"));
        inner_request.insert("contents".to_string(), json!(contents));

        if let Some(system) = build_system_instruction(claude_req.get("system")) {
            inner_request.insert("systemInstruction".to_string(), system);
        }

        if let Some(gen_config) = build_generation_config(claude_req, &self.config) {
            inner_request.insert("generationConfig".to_string(), gen_config);
        }

        if let Some(tools) = claude_req.get("tools").and_then(convert_tools) {
            inner_request.insert("tools".to_string(), json!(tools));
            if let Some(tool_config) = claude_req.get("tool_choice").and_then(build_tool_config) {
                inner_request.insert("toolConfig".to_string(), tool_config);
            }
        }

        if let Some(threshold) = self.config.safety_threshold {
            inner_request.insert("safetySettings".to_string(), build_safety_settings(threshold));
        }

        let mut gemini_req = Value::Object(inner_request);
        ensure_function_call_signatures(&mut gemini_req);
        Ok(gemini_req)
    }
}

/// Convert a Claude request with the default configuration.
pub fn convert_request(body: &[u8]) -> Result<Vec<u8>, DecodeError> {
    RequestConverter::default().convert(body)
}
