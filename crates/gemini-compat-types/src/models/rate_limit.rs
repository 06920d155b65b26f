//! Rate-limit signal models.

use serde::{Deserialize, Serialize};

/// Outcome of reading one backoff signal.
///
/// `NonPositive` is a real answer, not an absence: the backend said "zero or
/// less", which callers treat as "no actionable reset time".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RetryDelay {
    /// Wait this many whole seconds (always at least 1).
    Seconds(u64),
    /// Duration was zero or negative.
    NonPositive,
}

impl RetryDelay {
    /// Seconds to wait, or `None` for the non-positive sentinel.
    pub fn as_secs(&self) -> Option<u64> {
        match *self {
            Self::Seconds(s) => Some(s),
            Self::NonPositive => None,
        }
    }
}

/// Why the backend throttled the request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateLimitReason {
    /// Daily/project quota used up
    QuotaExhausted,
    /// Short-window rate limit (RPM/TPM)
    RateLimitExceeded,
    /// Backend has no capacity for the model right now
    ModelCapacityExhausted,
    /// No recognizable reason
    #[default]
    Unknown,
}

/// Everything the retry policy needs from one error body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Absolute reset time, Unix seconds.
    pub reset_at: i64,
    /// Delay that produced `reset_at`.
    pub retry_after_sec: u64,
    /// Classified throttling reason.
    pub reason: RateLimitReason,
}
