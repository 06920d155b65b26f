//! Configuration enums.

use serde::{Deserialize, Serialize};

/// Gemini harm categories covered by `safetySettings`.
pub const HARM_CATEGORIES: [&str; 5] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
    "HARM_CATEGORY_CIVIC_INTEGRITY",
];

/// Blocking threshold applied to every harm category.
///
/// Deserializes from either the config (`block_none`) or wire (`BLOCK_NONE`)
/// spelling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum SafetyThreshold {
    /// Filter disabled entirely
    #[default]
    Off,
    /// Never block, still annotate
    BlockNone,
    /// Block only high-probability harm
    BlockOnlyHigh,
    /// Block medium and high
    BlockMediumAndAbove,
    /// Block low, medium and high
    BlockLowAndAbove,
}

impl SafetyThreshold {
    /// Wire value expected by Gemini.
    pub fn as_gemini_str(&self) -> &'static str {
        match *self {
            Self::Off => "OFF",
            Self::BlockNone => "BLOCK_NONE",
            Self::BlockOnlyHigh => "BLOCK_ONLY_HIGH",
            Self::BlockMediumAndAbove => "BLOCK_MEDIUM_AND_ABOVE",
            Self::BlockLowAndAbove => "BLOCK_LOW_AND_ABOVE",
        }
    }

    /// Parse from string. Accepts both config (`block_none`) and wire (`BLOCK_NONE`) spellings.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Some(Self::Off),
            "block_none" => Some(Self::BlockNone),
            "block_only_high" => Some(Self::BlockOnlyHigh),
            "block_medium_and_above" => Some(Self::BlockMediumAndAbove),
            "block_low_and_above" => Some(Self::BlockLowAndAbove),
            _ => None,
        }
    }
}

impl TryFrom<String> for SafetyThreshold {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(&s).ok_or_else(|| format!("unknown safety threshold '{}'", s))
    }
}
