//! Anthropic Claude Messages API vocabulary.

use serde::{Deserialize, Serialize};

/// Claude message role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClaudeRole {
    /// Human user message.
    User,
    /// AI assistant response.
    Assistant,
}

impl ClaudeRole {
    /// Parse a wire role. Anything else (including `system`) is not a message role.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }
}

/// Why the assistant turn ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of turn.
    EndTurn,
    /// Output token limit reached.
    MaxTokens,
    /// Model requested one or more tool calls.
    ToolUse,
}

impl StopReason {
    /// Map a Gemini `finishReason`, with tool calls taking precedence.
    pub fn from_gemini(finish_reason: Option<&str>, has_tool_call: bool) -> Self {
        if has_tool_call {
            Self::ToolUse
        } else if finish_reason == Some("MAX_TOKENS") {
            Self::MaxTokens
        } else {
            Self::EndTurn
        }
    }
}

/// Claude usage statistics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClaudeUsage {
    /// Number of input tokens consumed.
    pub input_tokens: u64,
    /// Number of output tokens generated (thinking included).
    pub output_tokens: u64,
    /// Tokens read from prompt cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_read_input_tokens: Option<u64>,
}
