//! Generation config building.

use gemini_compat_types::CompatConfig;
use serde_json::{json, Map, Value};

/// Sampling and limit fields of a Claude request → Gemini `generationConfig`.
///
/// Returns `None` when the request sets none of them.
pub fn build_generation_config(
    claude_req: &Map<String, Value>,
    config: &CompatConfig,
) -> Option<Value> {
    let mut gen_config = Map::new();

    if let Some(max_tokens) = claude_req.get("max_tokens").and_then(Value::as_u64) {
        let capped = match config.max_output_tokens_cap {
            Some(cap) if max_tokens > cap => {
                tracing::debug!(
                    "[Generation-Config] Capping maxOutputTokens from {} to {}",
                    max_tokens,
                    cap
                );
                cap
            },
            _ => max_tokens,
        };
        gen_config.insert("maxOutputTokens".to_string(), json!(capped));
    }

    for (claude_key, gemini_key) in
        [("temperature", "temperature"), ("top_p", "topP"), ("top_k", "topK")]
    {
        if let Some(value) = claude_req.get(claude_key).filter(|v| v.is_number()) {
            gen_config.insert(gemini_key.to_string(), value.clone());
        }
    }

    if let Some(stops) = claude_req.get("stop_sequences").and_then(Value::as_array) {
        let stops: Vec<&str> = stops.iter().filter_map(Value::as_str).collect();
        if !stops.is_empty() {
            gen_config.insert("stopSequences".to_string(), json!(stops));
        }
    }

    if let Some(thinking_config) = build_thinking_config(claude_req.get("thinking"), config) {
        gen_config.insert("thinkingConfig".to_string(), thinking_config);
    }

    if gen_config.is_empty() {
        return None;
    }
    Some(Value::Object(gen_config))
}

fn build_thinking_config(thinking: Option<&Value>, config: &CompatConfig) -> Option<Value> {
    let thinking = thinking?;
    if thinking.get("type").and_then(Value::as_str) != Some("enabled") {
        return None;
    }

    let requested = thinking.get("budget_tokens").and_then(Value::as_u64);
    let mut thinking_config = json!({ "includeThoughts": true });
    if let Some(budget) = config.thinking.resolve(requested) {
        thinking_config["thinkingBudget"] = json!(budget);
    }
    Some(thinking_config)
}
