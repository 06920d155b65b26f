//! Google Gemini generateContent API vocabulary.

use serde::{Deserialize, Serialize};

use super::claude::ClaudeRole;

/// `@type` of the structured retry hint in `error.details`.
pub const RETRY_INFO_TYPE: &str = "type.googleapis.com/google.rpc.RetryInfo";

/// Message name of RetryInfo, as some backends send it without the URL prefix.
pub const RETRY_INFO_TYPE_NAME: &str = "google.rpc.RetryInfo";

/// `@type` of the structured error reason in `error.details`.
pub const ERROR_INFO_TYPE: &str = "type.googleapis.com/google.rpc.ErrorInfo";

/// Gemini content role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GeminiRole {
    User,
    Model,
}

impl GeminiRole {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

impl From<ClaudeRole> for GeminiRole {
    fn from(role: ClaudeRole) -> Self {
        match role {
            ClaudeRole::User => Self::User,
            ClaudeRole::Assistant => Self::Model,
        }
    }
}

/// `toolConfig.functionCallingConfig.mode`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FunctionCallingMode {
    Auto,
    Any,
    None,
}

impl FunctionCallingMode {
    /// Map a Claude `tool_choice.type`. `tool` forces a call, like `any`.
    pub fn from_claude_choice(choice_type: &str) -> Option<Self> {
        match choice_type {
            "auto" => Some(Self::Auto),
            "any" | "tool" => Some(Self::Any),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Auto => "AUTO",
            Self::Any => "ANY",
            Self::None => "NONE",
        }
    }
}
