//! Safety settings.

use gemini_compat_types::models::config::HARM_CATEGORIES;
use gemini_compat_types::SafetyThreshold;
use serde_json::{json, Value};

/// One `safetySettings` entry per harm category, all at `threshold`.
pub fn build_safety_settings(threshold: SafetyThreshold) -> Value {
    let settings: Vec<Value> = HARM_CATEGORIES
        .iter()
        .map(|category| json!({ "category": category, "threshold": threshold.as_gemini_str() }))
        .collect();
    Value::Array(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_covered() {
        let settings = build_safety_settings(SafetyThreshold::BlockOnlyHigh);
        let arr = settings.as_array().unwrap();
        assert_eq!(arr.len(), HARM_CATEGORIES.len());
        assert!(arr.iter().all(|s| s["threshold"] == "BLOCK_ONLY_HIGH"));
        assert_eq!(arr[0]["category"], "HARM_CATEGORY_HARASSMENT");
    }
}
