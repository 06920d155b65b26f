use gemini_compat_types::{DurationParseError, RetryDelay};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static DURATION_REGEX: OnceLock<Regex> = OnceLock::new();
static DURATION_COMPONENT_REGEX: OnceLock<Regex> = OnceLock::new();
static RETRY_IN_REGEX: OnceLock<Regex> = OnceLock::new();
static AFTER_REGEX: OnceLock<Regex> = OnceLock::new();

const NANOS_PER_SECOND: u128 = 1_000_000_000;
/// Largest representable duration, matching a signed 64-bit nanosecond count.
const MAX_DURATION_NANOS: u128 = i64::MAX as u128;
/// Fraction digits past this are below nanosecond resolution for every unit.
const MAX_FRACTION_DIGITS: usize = 18;

pub fn get_duration_regex() -> &'static Regex {
    DURATION_REGEX.get_or_init(|| {
        Regex::new(r"^[+-]?(?:(?:\d+(?:\.\d*)?|\.\d+)(?:ns|us|µs|μs|ms|s|m|h))+$")
            .expect("Duration regex is valid")
    })
}

fn get_duration_component_regex() -> &'static Regex {
    DURATION_COMPONENT_REGEX.get_or_init(|| {
        Regex::new(r"(\d*)(?:\.(\d*))?(ns|us|µs|μs|ms|s|m|h)")
            .expect("Duration component regex is valid")
    })
}

pub fn get_retry_in_regex() -> &'static Regex {
    RETRY_IN_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\bretry in\s+(-?\d+(?:\.\d+)?)\s*(milliseconds?|ms|seconds?|secs?|s)\b")
            .expect("Retry in regex is valid")
    })
}

pub fn get_after_regex() -> &'static Regex {
    AFTER_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\bafter\s+(-?\d+(?:\.\d+)?)\s*(milliseconds?|ms|seconds?|secs?|s)\b")
            .expect("After regex is valid")
    })
}

fn unit_nanos(unit: &str) -> u128 {
    match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => NANOS_PER_SECOND,
        "m" => 60 * NANOS_PER_SECOND,
        _ => 3_600 * NANOS_PER_SECOND,
    }
}

/// Parse a backend duration string into whole seconds, rounding up.
///
/// Accepts `"45s"`, `"373.801628ms"`, `"0.847655010s"`, `"1m30s"` and the
/// bare `"0"`. Zero and negative durations yield [`RetryDelay::NonPositive`].
pub fn parse_duration(s: &str) -> Result<RetryDelay, DurationParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::Empty);
    }
    tracing::debug!("[timeparse] attempt parse: '{}'", trimmed);

    if matches!(trimmed, "0" | "+0" | "-0") {
        return Ok(RetryDelay::NonPositive);
    }

    if !get_duration_regex().is_match(trimmed) {
        tracing::debug!("[timeparse] malformed duration: '{}'", trimmed);
        return Err(DurationParseError::Malformed { input: trimmed.to_string() });
    }

    let negative = trimmed.starts_with('-');
    let overflow = || DurationParseError::Overflow { input: trimmed.to_string() };

    let mut total_nanos: u128 = 0;
    for caps in get_duration_component_regex().captures_iter(trimmed) {
        let whole = caps.get(1).map_or("", |m| m.as_str());
        let fraction = caps.get(2).map_or("", |m| m.as_str());
        let unit = unit_nanos(caps.get(3).map_or("h", |m| m.as_str()));

        let component = component_nanos(whole, fraction, unit).ok_or_else(overflow)?;
        total_nanos = total_nanos.checked_add(component).ok_or_else(overflow)?;
        if total_nanos > MAX_DURATION_NANOS {
            return Err(overflow());
        }
    }

    if negative || total_nanos == 0 {
        tracing::debug!("[timeparse] non-positive duration: '{}'", trimmed);
        return Ok(RetryDelay::NonPositive);
    }

    let seconds = total_nanos.div_ceil(NANOS_PER_SECOND) as u64;
    tracing::debug!("[timeparse] success: '{}' => {}s ({}ns)", trimmed, seconds, total_nanos);
    Ok(RetryDelay::Seconds(seconds))
}

fn component_nanos(whole: &str, fraction: &str, unit: u128) -> Option<u128> {
    let whole_value: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos = whole_value.checked_mul(unit)?;

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if !fraction.is_empty() {
        let scale = 10u128.pow(fraction.len() as u32);
        let fraction_value: u128 = fraction.parse().ok()?;
        // Sub-nanosecond remainders are truncated
        nanos = nanos.checked_add(fraction_value.checked_mul(unit)? / scale)?;
    }
    Some(nanos)
}

/// Read a `retryDelay`-style value: a duration string, or a protobuf
/// `{"seconds": N, "nanos": M}` object.
pub fn duration_from_value(value: &Value) -> Option<Result<RetryDelay, DurationParseError>> {
    match value {
        Value::String(s) => Some(parse_duration(s)),
        Value::Object(obj) => {
            let seconds = match obj.get("seconds") {
                Some(Value::Number(n)) => n.as_i64()?,
                Some(Value::String(s)) => s.trim().parse::<i64>().ok()?,
                None => 0,
                Some(_) => return None,
            };
            let nanos = obj.get("nanos").and_then(Value::as_i64).unwrap_or(0);
            let total = i128::from(seconds) * NANOS_PER_SECOND as i128 + i128::from(nanos);
            if total <= 0 {
                return Some(Ok(RetryDelay::NonPositive));
            }
            let seconds = (total as u128).div_ceil(NANOS_PER_SECOND) as u64;
            Some(Ok(RetryDelay::Seconds(seconds)))
        },
        _ => None,
    }
}

/// Parse the number and unit captured from an error message.
pub fn duration_from_message_capture(
    number: &str,
    unit: &str,
) -> Result<RetryDelay, DurationParseError> {
    let unit = if unit.to_ascii_lowercase().starts_with('m') { "ms" } else { "s" };
    parse_duration(&format!("{}{}", number, unit))
}
