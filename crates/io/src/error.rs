//! Error types for sipai-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the sipai-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a fixture file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a fixture file exists but cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a fixture is not valid JSON for the requested type.
    #[error("failed to parse {}: {reason}", path.display())]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Description of the JSON error, with line and column.
        reason: String,
    },

    /// Returned when a fixture name is empty or contains a path component.
    #[error("invalid fixture name: '{name}'")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
}
