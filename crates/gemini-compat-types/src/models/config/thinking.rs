//! Thinking budget configuration.

use serde::{Deserialize, Serialize};

/// How the Gemini `thinkingBudget` is derived from Claude's `budget_tokens`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThinkingBudgetMode {
    /// Forward the client's value unchanged.
    #[default]
    Passthrough,
    /// Forward the client's value, clamped to `custom_value`.
    Capped,
    /// Always use `custom_value` when thinking is enabled.
    Custom,
}

/// Configuration for thinking budget behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThinkingBudgetConfig {
    /// Budget resolution mode.
    #[serde(default)]
    pub mode: ThinkingBudgetMode,
    /// Cap for `Capped`, fixed value for `Custom`.
    #[serde(default = "default_thinking_budget_custom_value")]
    pub custom_value: u64,
}

fn default_thinking_budget_custom_value() -> u64 {
    24576
}

impl Default for ThinkingBudgetConfig {
    fn default() -> Self {
        Self { mode: ThinkingBudgetMode::Passthrough, custom_value: 24576 }
    }
}

impl ThinkingBudgetConfig {
    /// Resolve the budget to send upstream for a client-requested budget.
    pub fn resolve(&self, requested: Option<u64>) -> Option<u64> {
        match self.mode {
            ThinkingBudgetMode::Passthrough => requested,
            ThinkingBudgetMode::Capped => requested.map(|b| b.min(self.custom_value)),
            ThinkingBudgetMode::Custom => Some(self.custom_value),
        }
    }
}
