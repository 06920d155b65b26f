//! Converter configuration.

use serde::{Deserialize, Serialize};

use super::enums::SafetyThreshold;
use super::thinking::ThinkingBudgetConfig;
use crate::error::ConfigError;

/// Tunables for the Claude → Gemini request converter.
///
/// Every field has a default, so an empty JSON object is a valid config.
/// Loading it from disk or environment is the gateway's job.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompatConfig {
    /// Threshold for generated `safetySettings`. `None` omits the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_threshold: Option<SafetyThreshold>,
    /// Upper bound for `maxOutputTokens`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens_cap: Option<u64>,
    /// Thinking budget resolution.
    #[serde(default)]
    pub thinking: ThinkingBudgetConfig,
}

impl CompatConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(|e| ConfigError::from_json_error(&e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce requests the backend refuses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_output_tokens_cap == Some(0) {
            return Err(ConfigError::invalid("max_output_tokens_cap", "must be greater than zero"));
        }
        if self.thinking.custom_value == 0 {
            return Err(ConfigError::invalid("thinking.custom_value", "must be greater than zero"));
        }
        Ok(())
    }
}
