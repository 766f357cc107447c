//! Error types for compression operations.

use thiserror::Error;

/// Result type alias for compression operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Compression error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Input exceeds the size the bit-cost accounting can represent.
    #[error("input too large: {size} bytes exceeds supported maximum {max}")]
    InputTooLarge { size: usize, max: usize },

    /// Buffer too small for output.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },

    /// Offset window outside the range the format can express.
    #[error("invalid offset window {limit}: must be in range [1, {max}]")]
    InvalidWindow { limit: usize, max: usize },
}

impl Error {
    /// Create an input too large error.
    pub fn input_too_large(size: usize, max: usize) -> Self {
        Error::InputTooLarge { size, max }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Create an invalid offset window error.
    pub fn invalid_window(limit: usize, max: usize) -> Self {
        Error::InvalidWindow { limit, max }
    }

    /// Check if error is recoverable (can retry with different parameters).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::BufferTooSmall { .. })
    }

    /// Get error category for diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::InputTooLarge { .. } => "input_too_large",
            Error::BufferTooSmall { .. } => "buffer_too_small",
            Error::InvalidWindow { .. } => "invalid_window",
        }
    }
}
