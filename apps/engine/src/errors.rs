use serde_json::{json, Value};
use thiserror::Error;

/// Engine-level error type.
/// Every fallible engine operation returns `Result<T, EngineError>`; nothing is swallowed.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Unparsable structure: no recognized section, or content under an unknown header.
    #[error("Grammar error: {0}")]
    Grammar(String),

    /// A required field is missing, a date range is inverted, or a value has the wrong shape.
    #[error("Validation error: {0}")]
    FieldValidation(String),

    /// Serialized output failed to re-parse. Indicates an engine bug, not bad user input.
    #[error("Round-trip error: {0}")]
    RoundTrip(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    pub fn grammar(msg: impl Into<String>) -> Self {
        EngineError::Grammar(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        EngineError::FieldValidation(msg.into())
    }

    /// Stable machine-readable code for the calling layer.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Grammar(_) => "GRAMMAR_ERROR",
            EngineError::FieldValidation(_) => "VALIDATION_ERROR",
            EngineError::RoundTrip(_) => "ROUND_TRIP_ERROR",
            EngineError::Io(_) => "IO_ERROR",
            EngineError::Json(_) => "JSON_ERROR",
        }
    }

    /// True when the caller can fix the input and retry; round-trip failures are internal.
    pub fn is_user_correctable(&self) -> bool {
        match self {
            EngineError::Grammar(_) | EngineError::FieldValidation(_) | EngineError::Json(_) => {
                true
            }
            EngineError::RoundTrip(_) | EngineError::Io(_) => false,
        }
    }

    /// Error body in the shape the HTTP collaborator returns to clients.
    pub fn to_body(&self) -> Value {
        let message = match self {
            EngineError::Grammar(msg)
            | EngineError::FieldValidation(msg)
            | EngineError::RoundTrip(msg) => msg.clone(),
            EngineError::Io(e) => e.to_string(),
            EngineError::Json(e) => e.to_string(),
        };

        json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(EngineError::grammar("x").code(), "GRAMMAR_ERROR");
        assert_eq!(EngineError::validation("x").code(), "VALIDATION_ERROR");
        assert_eq!(
            EngineError::RoundTrip("x".to_string()).code(),
            "ROUND_TRIP_ERROR"
        );
    }

    #[test]
    fn test_body_shape() {
        let body = EngineError::validation("School is required").to_body();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "School is required");
    }

    #[test]
    fn test_round_trip_is_not_user_correctable() {
        assert!(!EngineError::RoundTrip("bug".to_string()).is_user_correctable());
        assert!(EngineError::grammar("bad header").is_user_correctable());
    }
}
