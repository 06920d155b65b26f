// Ordered backoff-signal strategies over a Gemini `error` object

use super::parser::{
    duration_from_message_capture, duration_from_value, get_after_regex, get_retry_in_regex,
};
use gemini_compat_types::protocol::gemini::RETRY_INFO_TYPE_NAME;
use gemini_compat_types::{DurationParseError, RetryDelay};
use regex::Regex;
use serde_json::{Map, Value};

/// One signal location. `None` means "not present here", so the next strategy runs.
type Strategy = fn(&Map<String, Value>) -> Option<RetryDelay>;

/// Highest priority first. The first strategy to return a value decides the
/// outcome, including [`RetryDelay::NonPositive`].
const STRATEGIES: [(&str, Strategy); 4] = [
    ("RetryInfo.retryDelay", retry_info_delay),
    ("metadata.quotaResetDelay", quota_reset_delay),
    ("message 'retry in'", message_retry_in),
    ("message 'after'", message_after),
];

/// Run the strategies in order against an `error` object.
pub fn resolve(error: &Map<String, Value>) -> Option<(&'static str, RetryDelay)> {
    STRATEGIES
        .iter()
        .find_map(|(name, strategy)| strategy(error).map(|delay| (*name, delay)))
}

fn detail_objects(error: &Map<String, Value>) -> impl Iterator<Item = &Map<String, Value>> {
    error
        .get("details")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

/// Matches the full type URL as well as a bare `google.rpc.RetryInfo`.
fn is_retry_info(detail: &Map<String, Value>) -> bool {
    detail
        .get("@type")
        .and_then(Value::as_str)
        .is_some_and(|t| t.ends_with(RETRY_INFO_TYPE_NAME))
}

/// Unparseable values are not a match at this location.
fn accept(location: &str, parsed: Result<RetryDelay, DurationParseError>) -> Option<RetryDelay> {
    match parsed {
        Ok(delay) => Some(delay),
        Err(e) => {
            tracing::debug!("[RateLimit] Ignoring unparseable {}: {}", location, e);
            None
        },
    }
}

fn retry_info_delay(error: &Map<String, Value>) -> Option<RetryDelay> {
    detail_objects(error)
        .filter(|detail| is_retry_info(detail))
        .filter_map(|detail| duration_from_value(detail.get("retryDelay")?))
        .find_map(|parsed| accept("retryDelay", parsed))
}

fn quota_reset_delay(error: &Map<String, Value>) -> Option<RetryDelay> {
    detail_objects(error)
        .filter_map(|detail| detail.get("metadata")?.get("quotaResetDelay"))
        .filter_map(duration_from_value)
        .find_map(|parsed| accept("quotaResetDelay", parsed))
}

fn message_delay(error: &Map<String, Value>, regex: &Regex) -> Option<RetryDelay> {
    let message = error.get("message").and_then(Value::as_str)?;
    regex
        .captures_iter(message)
        .map(|caps| duration_from_message_capture(&caps[1], &caps[2]))
        .find_map(|parsed| accept("message delay", parsed))
}

fn message_retry_in(error: &Map<String, Value>) -> Option<RetryDelay> {
    message_delay(error, get_retry_in_regex())
}

fn message_after(error: &Map<String, Value>) -> Option<RetryDelay> {
    message_delay(error, get_after_regex())
}
