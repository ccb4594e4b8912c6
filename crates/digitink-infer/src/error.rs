//! Error types for digitink-infer
//!
//! Two families matter to callers: configuration errors (no models, bad
//! index) abort the requested operation but leave the session usable,
//! and output errors degrade a recognition to "no prediction". None of
//! them are fatal.

use thiserror::Error;

/// Errors that can occur during model management and recognition
#[derive(Debug, Error)]
pub enum InferError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] digitink_core::Error),

    /// No model sources configured
    #[error("no model sources configured")]
    NoModels,

    /// Model index outside the configured source list
    #[error("model index out of range: {index} >= {count}")]
    IndexOutOfRange { index: usize, count: usize },

    /// Forward pass produced no readable output tensor
    #[error("model output unavailable")]
    OutputUnavailable,

    /// Loading a model source failed
    #[error("model load failed: {0}")]
    LoadFailed(String),

    /// Releasing a classifier's compute resources failed
    #[error("classifier release failed: {0}")]
    ReleaseFailed(String),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for inference operations
pub type InferResult<T> = Result<T, InferError>;
