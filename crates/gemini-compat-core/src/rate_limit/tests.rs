use super::*;

const NOW: i64 = 1_700_000_000;

fn reset_delta(body: &str) -> Option<i64> {
    extract_rate_limit_reset_time_at(body.as_bytes(), NOW).map(|ts| ts - NOW)
}

#[test]
fn test_quota_reset_delay_fallback() {
    let body = r#"{"error":{"message":"Rate limit exceeded","details":[{"metadata":{"quotaResetDelay":"45s"}}]}}"#;
    assert_eq!(reset_delta(body), Some(45));
}

#[test]
fn test_milliseconds_duration_rounds_up() {
    let body = r#"{"error":{"message":"Rate limit exceeded","details":[{"metadata":{"quotaResetDelay":"373.801628ms"}}]}}"#;
    assert_eq!(reset_delta(body), Some(1));
}

#[test]
fn test_retry_info_retry_delay() {
    let body = r#"{"error":{"message":"Rate limit exceeded","details":[{"@type":"type.googleapis.com/google.rpc.RetryInfo","retryDelay":"0.847655010s"}]}}"#;
    assert_eq!(reset_delta(body), Some(1));
}

#[test]
fn test_please_retry_in_message() {
    assert_eq!(reset_delta(r#"{"error":{"message":"Please retry in 30s"}}"#), Some(30));
}

#[test]
fn test_after_seconds_in_message() {
    let body = r#"{"error":{"message":"Your quota will reset after 60s."}}"#;
    assert_eq!(reset_delta(body), Some(60));
}

#[test]
fn test_non_object_details_are_skipped() {
    let body = r#"{"error":{"message":"Rate limit exceeded","details":["oops",{"@type":"type.googleapis.com/google.rpc.RetryInfo","retryDelay":"2s"}]}}"#;
    assert_eq!(reset_delta(body), Some(2));
}

#[test]
fn test_retry_info_outranks_quota_reset_delay() {
    let body = concat!(
        r#"{"error":{"message":"Rate limit exceeded","details":["#,
        r#"{"@type":"type.googleapis.com/google.rpc.ErrorInfo","metadata":{"quotaResetDelay":"45s"}},"#,
        r#"{"@type":"type.googleapis.com/google.rpc.RetryInfo","retryDelay":"30s"}"#,
        r#"]}}"#
    );
    assert_eq!(reset_delta(body), Some(30));
}

#[test]
fn test_unprefixed_retry_info_type() {
    let body = concat!(
        r#"{"error":{"message":"Rate limit exceeded","details":["#,
        r#"{"metadata":{"quotaResetDelay":"45s"}},"#,
        r#"{"@type":"google.rpc.RetryInfo","retryDelay":"8s"}"#,
        r#"]}}"#
    );
    assert_eq!(reset_delta(body), Some(8));
}

#[test]
fn test_word_inside_longer_word_is_not_a_signal() {
    let body = r#"{"error":{"message":"Quota is recomputed thereafter 90s windows"}}"#;
    assert_eq!(reset_delta(body), None);
}

#[test]
fn test_structured_signal_outranks_message() {
    let body = r#"{"error":{"message":"Please retry in 99s","details":[{"metadata":{"quotaResetDelay":"5s"}}]}}"#;
    assert_eq!(reset_delta(body), Some(5));
}

#[test]
fn test_wall_clock_entry_point() {
    let body = br#"{"error":{"message":"Rate limit","details":[{"metadata":{"quotaResetDelay":"60s"}}]}}"#;
    let before = chrono::Utc::now().timestamp();
    let ts = extract_rate_limit_reset_time(body).unwrap();
    let after = chrono::Utc::now().timestamp();
    assert!(ts >= before + 60 && ts <= after + 60, "unexpected reset time {}", ts);
}

#[test]
fn test_zero_or_negative_duration_returns_none() {
    let bodies = [
        r#"{"error":{"message":"Rate limit exceeded","details":[{"@type":"type.googleapis.com/google.rpc.RetryInfo","retryDelay":"0s"}]}}"#,
        r#"{"error":{"message":"Rate limit exceeded","details":[{"@type":"type.googleapis.com/google.rpc.RetryInfo","retryDelay":"-1s"}]}}"#,
    ];
    for body in bodies {
        assert_eq!(reset_delta(body), None, "body: {}", body);
    }
}

#[test]
fn test_non_positive_signal_does_not_fall_through() {
    // RetryInfo says 0s; the 45s quota hint and the message hint must not be used
    let body = concat!(
        r#"{"error":{"message":"Please retry in 10s","details":["#,
        r#"{"metadata":{"quotaResetDelay":"45s"}},"#,
        r#"{"@type":"type.googleapis.com/google.rpc.RetryInfo","retryDelay":"0s"}"#,
        r#"]}}"#
    );
    assert_eq!(reset_delta(body), None);

    let body = r#"{"error":{"message":"Please retry in -5s, or after 20s"}}"#;
    assert_eq!(reset_delta(body), None);
}

#[test]
fn test_unparseable_signal_falls_through() {
    let body = concat!(
        r#"{"error":{"message":"Rate limit exceeded","details":["#,
        r#"{"@type":"type.googleapis.com/google.rpc.RetryInfo","retryDelay":"soon"},"#,
        r#"{"metadata":{"quotaResetDelay":"12s"}}"#,
        r#"]}}"#
    );
    assert_eq!(reset_delta(body), Some(12));
}

#[test]
fn test_returns_none_when_no_match() {
    let cases = [
        ("empty body", ""),
        ("whitespace body", "  \n"),
        ("invalid json", "not json"),
        ("no error field", r#"{"status": 429}"#),
        ("error not an object", r#"{"error": "quota"}"#),
        ("generic error message", r#"{"error":{"message":"Resource exhausted"}}"#),
        ("details not an array", r#"{"error":{"details":{"retryDelay":"5s"}}}"#),
    ];
    for (name, body) in cases {
        assert_eq!(reset_delta(body), None, "case: {}", name);
        assert_eq!(extract_retry_delay(body.as_bytes()), None, "case: {}", name);
    }
}

#[test]
fn test_array_body_uses_first_element() {
    let body = r#"[{"error":{"message":"Please retry in 7s"}}]"#;
    assert_eq!(reset_delta(body), Some(7));
    assert_eq!(reset_delta("[]"), None);
}

#[test]
fn test_protobuf_style_retry_delay_object() {
    let body = r#"{"error":{"details":[{"@type":"type.googleapis.com/google.rpc.RetryInfo","retryDelay":{"seconds":3,"nanos":1}}]}}"#;
    assert_eq!(extract_retry_delay(body.as_bytes()), Some(4));
}

#[test]
fn test_parse_rate_limit_info() {
    let body = concat!(
        r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED","details":["#,
        r#"{"@type":"type.googleapis.com/google.rpc.ErrorInfo","reason":"QUOTA_EXHAUSTED","metadata":{"quotaResetDelay":"1h2m"}}"#,
        r#"]}}"#
    );
    let info = parse_rate_limit_info_at(body.as_bytes(), NOW).unwrap();
    assert_eq!(info.retry_after_sec, 3720);
    assert_eq!(info.reset_at, NOW + 3720);
    assert_eq!(info.reason, RateLimitReason::QuotaExhausted);

    assert!(parse_rate_limit_info_at(b"not json", NOW).is_none());
}

#[test]
fn test_classify_rate_limit_reason() {
    let body = br#"{"error":{"details":[{"reason":"MODEL_CAPACITY_EXHAUSTED"}]}}"#;
    assert_eq!(classify_rate_limit_reason(body), RateLimitReason::ModelCapacityExhausted);
    assert_eq!(
        classify_rate_limit_reason(b"Too Many Requests"),
        RateLimitReason::RateLimitExceeded
    );
    assert_eq!(classify_rate_limit_reason(b""), RateLimitReason::Unknown);
}
