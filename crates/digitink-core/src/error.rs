//! Error types for digitink-core
//!
//! Provides a unified error type for canvas construction and pixel
//! operations. Drawing itself never fails: out-of-bounds writes are
//! clipped at the rasterizer, not reported.

use thiserror::Error;

/// Digitink core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid canvas dimensions
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
