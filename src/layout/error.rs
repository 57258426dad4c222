//! Key-value store error types

use thiserror::Error;

/// Errors a key-value backend can report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The backend is missing (no `localStorage`, private mode, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A write was rejected (quota exceeded, security error, ...)
    #[error("Storage write rejected for {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    /// Serialization of a record failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for key-value operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::WriteRejected {
            key: "weather-tz".to_string(),
            reason: "QuotaExceededError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Storage write rejected for weather-tz: QuotaExceededError"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("{").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
