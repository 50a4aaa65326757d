//! Error types for configuration loading.
//!
//! Engine and UI operations never fail; see [`MeasureEngine::remove_at`]
//! for how stale indices are absorbed.
//!
//! [`MeasureEngine::remove_at`]: crate::engine::MeasureEngine::remove_at

use thiserror::Error;

/// Result type alias for fallible crate operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

#[derive(Debug, Error)]
pub enum MeasureError {
    /// Configuration text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MeasureError {
    #[must_use]
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig(details.into())
    }
}
