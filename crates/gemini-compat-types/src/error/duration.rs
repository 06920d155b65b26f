//! Duration string errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A backend duration string (`"45s"`, `"373.8ms"`, `"1m30s"`) could not be read.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum DurationParseError {
    /// Input was empty or whitespace only
    #[error("Empty duration string")]
    Empty,

    /// Input does not follow the `<number><unit>...` grammar
    #[error("Malformed duration string: {input:?}")]
    Malformed {
        /// The rejected input
        input: String,
    },

    /// Input is syntactically valid but too large to represent
    #[error("Duration out of range: {input:?}")]
    Overflow {
        /// The rejected input
        input: String,
    },
}
