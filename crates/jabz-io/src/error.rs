//! Error types for pixel-stream I/O.

use std::io;
use thiserror::Error;

/// Pixel-stream I/O error.
///
/// Any of these aborts the stream: there is no way to resynchronize a
/// farbfeld stream after a bad header or a short read.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Header is not a farbfeld header.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// The stream ended before every pixel announced by the header.
    #[error("truncated stream: expected {expected} pixels, got {decoded}")]
    Truncated {
        /// Pixels announced by the header.
        expected: u64,
        /// Pixels actually transferred.
        decoded: u64,
    },

    /// Dimensions too large to address.
    #[error("image dimensions {width}x{height} overflow")]
    DimensionOverflow {
        /// Width from the header.
        width: u32,
        /// Height from the header.
        height: u32,
    },
}

impl IoError {
    /// Creates an [`IoError::InvalidFormat`] error.
    #[inline]
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Returns `true` for a malformed header.
    #[inline]
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }

    /// Returns `true` for a stream that ended early.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
