//! Error types for digitink-session

use thiserror::Error;

/// Errors surfaced to the session's caller
#[derive(Debug, Error)]
pub enum SessionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] digitink_core::Error),

    /// Inference library error
    #[error("inference error: {0}")]
    Infer(#[from] digitink_infer::InferError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
