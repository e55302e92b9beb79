//! Error types for the scoring engine.

use thiserror::Error;

/// Errors raised at the engine boundary.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A numeric input the algorithms cannot accept
    #[error("Invalid input `{input}` = {value}: {reason}")]
    InvalidInput {
        input: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error while loading or saving configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Rejection for NaN or infinite values.
    pub fn non_finite(input: &'static str, value: f64) -> Self {
        Self::InvalidInput {
            input,
            value,
            reason: "value must be finite",
        }
    }

    /// Rejection for values that must not be negative.
    pub fn negative(input: &'static str, value: f64) -> Self {
        Self::InvalidInput {
            input,
            value,
            reason: "value must not be negative",
        }
    }
}

/// Returns `value` if finite, otherwise an `InvalidInput` error naming `input`.
pub(crate) fn require_finite(input: &'static str, value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::warn!(input, value, "rejected non-finite input");
        Err(EngineError::non_finite(input, value))
    }
}
