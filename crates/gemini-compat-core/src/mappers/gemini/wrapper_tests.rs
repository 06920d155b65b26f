use super::*;
use serde_json::json;

fn count_parts(body: &mut Value) -> usize {
    let mut total = 0;
    for_each_parts_array(body, |parts| total += parts.len());
    total
}

#[test]
fn test_unwrap_response_envelope() {
    let wrapped = json!({"response": {"candidates": []}, "traceId": "abc"});
    assert_eq!(unwrap_response(&wrapped), &json!({"candidates": []}));

    let plain = json!({"candidates": []});
    assert_eq!(unwrap_response(&plain), &plain);

    // A non-object "response" is not an envelope
    let odd = json!({"response": "text"});
    assert_eq!(unwrap_response(&odd), &odd);
}

#[test]
fn test_visits_request_and_envelope_locations() {
    let mut body = json!({
        "contents": [{"role": "user", "parts": [{"text": "a"}, {"text": "b"}]}],
        "request": {"contents": [{"role": "model", "parts": [{"text": "c"}]}]}
    });
    assert_eq!(count_parts(&mut body), 3);
}

#[test]
fn test_visits_response_candidates_and_chunk_arrays() {
    let mut body = json!([
        {"candidates": [{"content": {"parts": [{"text": "x"}]}}]},
        {"response": {"candidates": [{"content": {"parts": [{"text": "y"}, {"text": "z"}]}}]}}
    ]);
    assert_eq!(count_parts(&mut body), 3);
}

#[test]
fn test_malformed_intermediate_fields_are_skipped() {
    let mut body = json!({
        "contents": [
            {"role": "user"},
            {"role": "user", "parts": "not-an-array"},
            "not-an-object",
            {"role": "model", "parts": [{"text": "ok"}]}
        ],
        "candidates": [{"content": null}, 7]
    });
    assert_eq!(count_parts(&mut body), 1);
}
