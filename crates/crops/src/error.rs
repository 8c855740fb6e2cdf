//! Error types for the sipai-crops crate.

/// Error type for all fallible operations in the sipai-crops crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CropError {
    /// Returned when a crop's EC cutoffs are invalid.
    #[error("invalid thresholds for {crop}: {reason}")]
    InvalidThreshold {
        /// Key of the crop kind (`sweet_corn`, `cotton`, `generic`).
        crop: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a crop kind key is not recognised.
    #[error("unknown crop kind: '{key}' (expected sweet_corn, cotton or generic)")]
    UnknownKind {
        /// The key that failed to resolve.
        key: String,
    },
}
