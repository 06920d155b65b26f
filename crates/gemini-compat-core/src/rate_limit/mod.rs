//! Backoff signal extraction from Gemini error bodies.
//!
//! A 429 body may carry its reset hint in several places. They are checked in
//! a fixed order (see `strategies`) and the first one present decides, even
//! when it says "zero or less".

mod error_parsing;
mod parser;
mod strategies;
#[cfg(test)]
mod tests;

use gemini_compat_types::{RateLimitInfo, RateLimitReason, RetryDelay};
use serde_json::{Map, Value};

pub use parser::parse_duration;

/// Pull the `error` object out of a body. Array bodies use their first element.
fn parse_error_object(body: &[u8]) -> Option<Map<String, Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    let json: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("[RateLimit] Error body is not JSON: {}", e);
            return None;
        },
    };

    let payload = match json {
        Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
        other => other,
    };

    match payload {
        Value::Object(mut obj) => match obj.remove("error") {
            Some(Value::Object(error)) => Some(error),
            _ => None,
        },
        _ => None,
    }
}

fn resolve_delay(body: &[u8]) -> Option<RetryDelay> {
    let error = parse_error_object(body)?;
    let Some((source, delay)) = strategies::resolve(&error) else {
        tracing::debug!("[RateLimit] No retry signal in error body");
        return None;
    };
    tracing::debug!("[RateLimit] Retry signal from {}: {:?}", source, delay);
    Some(delay)
}

/// Delay in whole seconds from an error body, or `None` when no actionable
/// signal is present.
pub fn extract_retry_delay(body: &[u8]) -> Option<u64> {
    resolve_delay(body)?.as_secs()
}

/// Absolute reset time (Unix seconds) relative to `now`.
pub fn extract_rate_limit_reset_time_at(body: &[u8], now: i64) -> Option<i64> {
    let delay = extract_retry_delay(body)?;
    Some(now.saturating_add(i64::try_from(delay).unwrap_or(i64::MAX)))
}

/// Absolute reset time (Unix seconds) from an error body, using the current time.
pub fn extract_rate_limit_reset_time(body: &[u8]) -> Option<i64> {
    extract_rate_limit_reset_time_at(body, chrono::Utc::now().timestamp())
}

/// Classify why the backend throttled the request.
pub fn classify_rate_limit_reason(body: &[u8]) -> RateLimitReason {
    match parse_error_object(body) {
        Some(error) => error_parsing::classify_error_object(&error),
        None => error_parsing::classify_raw_body(body),
    }
}

/// Reset time, delay and reason together, relative to `now`.
pub fn parse_rate_limit_info_at(body: &[u8], now: i64) -> Option<RateLimitInfo> {
    let retry_after_sec = extract_retry_delay(body)?;
    let reset_at = now.saturating_add(i64::try_from(retry_after_sec).unwrap_or(i64::MAX));
    let reason = classify_rate_limit_reason(body);

    tracing::warn!(
        "[RateLimit] Rate limited: reason={:?}, retry after {}s (reset at {})",
        reason,
        retry_after_sec,
        reset_at
    );
    Some(RateLimitInfo { reset_at, retry_after_sec, reason })
}

/// Reset time, delay and reason together, using the current time.
pub fn parse_rate_limit_info(body: &[u8]) -> Option<RateLimitInfo> {
    parse_rate_limit_info_at(body, chrono::Utc::now().timestamp())
}
