//! Error types for the sipai-quality crate.

/// Error type for all fallible operations in the sipai-quality crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum QualityError {
    /// Returned when a threshold configuration is invalid.
    #[error("invalid threshold: {reason}")]
    InvalidThreshold {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a parameter key is not recognised.
    #[error("unknown parameter: '{key}'")]
    UnknownParameter {
        /// The key that failed to resolve.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_threshold() {
        let e = QualityError::InvalidThreshold {
            reason: "ec_amber must not exceed ec_red".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid threshold: ec_amber must not exceed ec_red"
        );
    }

    #[test]
    fn error_unknown_parameter() {
        let e = QualityError::UnknownParameter {
            key: "turbidity".to_string(),
        };
        assert_eq!(e.to_string(), "unknown parameter: 'turbidity'");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<QualityError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<QualityError>();
    }
}
