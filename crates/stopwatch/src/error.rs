//! Error types for the stopwatch registry.

use thiserror::Error;

/// Errors that can occur while operating on a [`Stopwatch`](crate::Stopwatch).
#[derive(Debug, Error)]
pub enum StopwatchError {
    /// The label was never passed to `start`
    #[error("Performance not initialized: {label}")]
    NotInitialized { label: String },

    /// Writing a report to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a summary or parse a configuration
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StopwatchError {
    pub(crate) fn not_initialized(label: &str) -> Self {
        Self::NotInitialized {
            label: label.to_string(),
        }
    }

    /// Whether this is the `NotInitialized` case.
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, Self::NotInitialized { .. })
    }
}

/// Result type for stopwatch operations.
pub type StopwatchResult<T> = Result<T, StopwatchError>;
