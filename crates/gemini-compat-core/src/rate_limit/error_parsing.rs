use gemini_compat_types::protocol::gemini::ERROR_INFO_TYPE;
use gemini_compat_types::RateLimitReason;
use serde_json::{Map, Value};

fn reason_from_code(code: &str) -> RateLimitReason {
    match code {
        "QUOTA_EXHAUSTED" => RateLimitReason::QuotaExhausted,
        "RATE_LIMIT_EXCEEDED" => RateLimitReason::RateLimitExceeded,
        "MODEL_CAPACITY_EXHAUSTED" => RateLimitReason::ModelCapacityExhausted,
        _ => RateLimitReason::Unknown,
    }
}

fn reason_from_text(text: &str) -> RateLimitReason {
    let lower = text.to_lowercase();
    if lower.contains("capacity") {
        RateLimitReason::ModelCapacityExhausted
    } else if lower.contains("per minute")
        || lower.contains("rate limit")
        || lower.contains("too many requests")
    {
        RateLimitReason::RateLimitExceeded
    } else if lower.contains("exhausted") || lower.contains("quota") {
        RateLimitReason::QuotaExhausted
    } else {
        RateLimitReason::Unknown
    }
}

/// Classify a parsed `error` object.
///
/// An ErrorInfo (or untyped) `reason` anywhere in `details` wins over message
/// keywords.
pub fn classify_error_object(error: &Map<String, Value>) -> RateLimitReason {
    let reason_code = error
        .get("details")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|detail| match detail.get("@type") {
            None => true,
            Some(t) => t.as_str() == Some(ERROR_INFO_TYPE),
        })
        .filter_map(|detail| detail.get("reason"))
        .find_map(Value::as_str);

    if let Some(code) = reason_code {
        let reason = reason_from_code(code);
        if reason != RateLimitReason::Unknown {
            return reason;
        }
        tracing::debug!("[RateLimit] Unrecognized ErrorInfo reason '{}'", code);
    }

    error.get("message").and_then(Value::as_str).map(reason_from_text).unwrap_or_default()
}

/// Classify a body that is not a JSON error object.
pub fn classify_raw_body(body: &[u8]) -> RateLimitReason {
    reason_from_text(&String::from_utf8_lossy(body))
}
