//! Protocol vocabulary for the two wire formats.
//!
//! - Anthropic Claude Messages API (source protocol)
//! - Google Gemini generateContent API (destination protocol)
//!
//! Bodies are handled as `serde_json::Value` trees by the core. These modules
//! only pin down the closed sets of strings the core matches on.

pub mod claude;
pub mod gemini;

pub use claude::{ClaudeRole, ClaudeUsage, StopReason};
pub use gemini::{FunctionCallingMode, GeminiRole};
