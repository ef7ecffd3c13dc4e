//! Error types for density map construction and computation.

use thiserror::Error;

/// Result type alias using KdeError.
pub type KdeResult<T> = Result<T, KdeError>;

/// Primary error type for density map operations.
///
/// Everything except `ResourceExhausted` and `Encoding` is raised while
/// validating inputs, before any computation starts.
#[derive(Debug, Error)]
pub enum KdeError {
    // === Validation Errors ===
    #[error("Invalid extent: {0}")]
    InvalidExtent(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown {kind}: {value}")]
    UnknownEnum { kind: &'static str, value: String },

    // === Runtime Errors ===
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    #[error("Encoding failed: {0}")]
    Encoding(String),
}

impl KdeError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an UnknownEnum error.
    pub fn unknown_enum(kind: &'static str, value: impl ToString) -> Self {
        Self::UnknownEnum {
            kind,
            value: value.to_string(),
        }
    }

    /// Whether this error was raised by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            KdeError::InvalidExtent(_)
                | KdeError::InvalidParameter { .. }
                | KdeError::InvalidInput(_)
                | KdeError::UnknownEnum { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = KdeError::invalid_parameter("bandwidth", "must be > 0, got -1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter value for 'bandwidth': must be > 0, got -1"
        );

        let err = KdeError::unknown_enum("kernel", 7);
        assert_eq!(err.to_string(), "Unknown kernel: 7");
    }

    #[test]
    fn test_is_validation() {
        assert!(KdeError::InvalidExtent("x".into()).is_validation());
        assert!(KdeError::InvalidInput("x".into()).is_validation());
        assert!(!KdeError::ResourceExhausted("x".into()).is_validation());
        assert!(!KdeError::Encoding("x".into()).is_validation());
    }
}
