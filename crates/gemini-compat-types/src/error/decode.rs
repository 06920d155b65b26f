//! Conversion errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The top-level body could not be turned into a JSON object.
///
/// This is the only failure a conversion surfaces. Callers must reject the
/// originating request instead of forwarding it.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum DecodeError {
    /// Body is not well-formed JSON
    #[error("Invalid JSON body: {message}")]
    InvalidJson {
        /// Parser diagnostic
        message: String,
    },

    /// Body parsed, but the top-level value is not an object
    #[error("Expected a JSON object at the top level, found {found}")]
    NotAnObject {
        /// JSON kind that was found instead (array, string, ...)
        found: String,
    },

    /// Converted tree could not be serialized back to bytes
    #[error("Failed to encode converted body: {message}")]
    Encode {
        /// Serializer diagnostic
        message: String,
    },
}

impl DecodeError {
    /// Create an invalid-JSON error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::InvalidJson { message: e.to_string() }
    }

    /// Create an encode error from a serde_json error.
    pub fn from_encode_error(e: &serde_json::Error) -> Self {
        Self::Encode { message: e.to_string() }
    }

    /// Create a not-an-object error describing the offending value.
    pub fn not_an_object(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        Self::NotAnObject { found: found.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_an_object_names_kind() {
        assert_eq!(
            DecodeError::not_an_object(&json!([1, 2])),
            DecodeError::NotAnObject { found: "array".to_string() }
        );
        assert_eq!(
            DecodeError::not_an_object(&json!("text")),
            DecodeError::NotAnObject { found: "string".to_string() }
        );
    }

    #[test]
    fn test_from_json_error_keeps_diagnostic() {
        let Err(e) = serde_json::from_str::<serde_json::Value>("{oops") else {
            panic!("malformed input must fail to parse");
        };
        let err = DecodeError::from_json_error(&e);
        assert!(err.to_string().starts_with("Invalid JSON body:"));
    }
}
