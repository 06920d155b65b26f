//! Typed error definitions for the compatibility layer.
//!
//! The taxonomy is deliberately small. Only a top-level decode failure is
//! fatal to a conversion; everything below the top level is recovered in
//! place by the core and never reaches these types. All errors are:
//!
//! - **Serializable** for gateway error responses via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants

mod config;
mod decode;
mod duration;

pub use config::ConfigError;
pub use decode::DecodeError;
pub use duration::DurationParseError;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = DecodeError::NotAnObject { found: "array".to_string() };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("NotAnObject"));
        assert!(json.contains("array"));

        let deserialized: DecodeError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::ValidationError {
            field: "max_output_tokens_cap".to_string(),
            message: "must be greater than zero".to_string(),
        };

        let msg = format!("{}", err);
        assert!(msg.contains("max_output_tokens_cap"));
        assert!(msg.contains("greater than zero"));
    }
}
