//! Converter configuration models.

mod compat;
mod enums;
mod thinking;

pub use compat::CompatConfig;
pub use enums::{SafetyThreshold, HARM_CATEGORIES};
pub use thinking::{ThinkingBudgetConfig, ThinkingBudgetMode};
