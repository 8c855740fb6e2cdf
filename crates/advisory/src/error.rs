//! Advisory error types.

/// Errors that can occur while producing advisory output.
#[derive(Debug, thiserror::Error)]
pub enum AdvisoryError {
    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_display() {
        let err = AdvisoryError::Serialization {
            reason: "key must be a string".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("serialization error"));
        assert!(msg.contains("key must be a string"));
    }

    #[test]
    fn test_error_bounds() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<AdvisoryError>();
    }
}
