//! Configuration and result models shared with the gateway.

pub mod config;
mod rate_limit;

pub use config::{CompatConfig, SafetyThreshold, ThinkingBudgetConfig, ThinkingBudgetMode};
pub use rate_limit::{RateLimitInfo, RateLimitReason, RetryDelay};
