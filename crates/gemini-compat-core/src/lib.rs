//! # Gemini Compat Core
//!
//! Transformation engines that let a gateway accept Claude Messages requests
//! and forward them to a Gemini generateContent backend.
//!
//! ## Architecture
//!
//! ```text
//! gemini-compat-core/src/
//! ├── mappers/
//! │   ├── claude/request/   # Claude request → Gemini request (+ tool schemas)
//! │   ├── claude/response/  # Gemini response → Claude response
//! │   └── gemini/           # thoughtSignature repair, v1internal envelopes
//! └── rate_limit/           # error body → reset timestamp
//! ```
//!
//! Every entry point is a pure function over byte buffers or JSON trees. There
//! is no I/O, no shared mutable state and nothing to cancel, so all of them
//! are safe to call from any number of request handlers at once.

#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::print_stdout,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

pub mod mappers;
pub mod rate_limit;

pub use gemini_compat_types::{CompatConfig, DecodeError, RateLimitInfo, RateLimitReason};
pub use mappers::claude::{convert_request, convert_response, convert_tools, RequestConverter};
pub use mappers::gemini::{
    ensure_function_call_signatures, inject_thought_signatures, DUMMY_THOUGHT_SIGNATURE,
};
pub use rate_limit::{
    classify_rate_limit_reason, extract_rate_limit_reset_time, extract_rate_limit_reset_time_at,
    extract_retry_delay, parse_duration, parse_rate_limit_info, parse_rate_limit_info_at,
};
