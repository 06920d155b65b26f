//! # Gemini Compat Types
//!
//! Error, configuration and protocol types for the Claude Messages ↔ Gemini
//! generateContent compatibility layer.
//!
//! - **`error`** - Typed errors for decoding, configuration and duration parsing
//! - **`models`** - Converter configuration and rate-limit results
//! - **`protocol`** - Small Claude/Gemini protocol enums and constants
//!
//! ## Architecture Role
//!
//! ```text
//!          gemini-compat-types (this crate)
//!                     │
//!                     ▼
//!          gemini-compat-core
//!                     │
//!                     ▼
//!      gateway (routing, auth, transport)
//! ```
//!
//! The JSON trees themselves stay as `serde_json::Value` inside the core; the
//! types here only describe what surrounds them.

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{ConfigError, DecodeError, DurationParseError};
pub use models::{
    CompatConfig, RateLimitInfo, RateLimitReason, RetryDelay, SafetyThreshold,
    ThinkingBudgetConfig, ThinkingBudgetMode,
};
