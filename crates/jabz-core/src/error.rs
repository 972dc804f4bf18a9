//! Error types for jabz-core operations.
//!
//! Color transforms in this workspace are total: they never fail for finite
//! input. The few operations that *can* fail are the ones with an explicit
//! precondition (inverting an affine map with a zero scale) and the parsing
//! of user-facing names.
//!
//! # Usage
//!
//! ```rust
//! use jabz_core::{Error, Result};
//!
//! fn reciprocal(m: f64) -> Result<f64> {
//!     if m == 0.0 {
//!         return Err(Error::division_by_zero("reciprocal"));
//!     }
//!     Ok(1.0 / m)
//! }
//!
//! assert!(reciprocal(0.0).unwrap_err().is_division_by_zero());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `jabz-math` - Affine map inversion
//! - `jabz-color` - Color space name and hex literal parsing

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the jabz color pipeline.
///
/// Out-of-gamut colors are deliberately *not* an error: they are a normal
/// outcome handled by a [`crate::GamutPolicy`] at the output boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operation required dividing by a zero scale.
    ///
    /// Returned when inverting an affine map `x -> 0*x + a`, dividing a map
    /// by zero, or building a map between two identical points.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jabz_core::Error;
    ///
    /// let err = Error::division_by_zero("A2::inverse");
    /// assert!(err.to_string().contains("A2::inverse"));
    /// ```
    #[error("division by zero in {operation}")]
    DivisionByZero {
        /// Name of the operation that failed
        operation: &'static str,
    },

    /// A color space name could not be parsed.
    #[error("unknown color space: {0}")]
    UnknownColorSpace(String),

    /// A gamut policy name could not be parsed.
    #[error("unknown gamut policy: {0} (expected 'clip' or 'mask')")]
    UnknownGamutPolicy(String),

    /// A hex color literal was not of the form `#rrggbb`.
    #[error("invalid hex color: {0} (expected #rrggbb)")]
    InvalidHexColor(String),
}

impl Error {
    /// Creates an [`Error::DivisionByZero`] error.
    #[inline]
    pub fn division_by_zero(operation: &'static str) -> Self {
        Self::DivisionByZero { operation }
    }

    /// Creates an [`Error::UnknownColorSpace`] error.
    #[inline]
    pub fn unknown_color_space(name: impl Into<String>) -> Self {
        Self::UnknownColorSpace(name.into())
    }

    /// Creates an [`Error::UnknownGamutPolicy`] error.
    #[inline]
    pub fn unknown_gamut_policy(name: impl Into<String>) -> Self {
        Self::UnknownGamutPolicy(name.into())
    }

    /// Creates an [`Error::InvalidHexColor`] error.
    #[inline]
    pub fn invalid_hex_color(text: impl Into<String>) -> Self {
        Self::InvalidHexColor(text.into())
    }

    /// Returns `true` if this is a division-by-zero error.
    #[inline]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }

    /// Returns `true` if this error came from parsing a name.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownColorSpace(_) | Self::UnknownGamutPolicy(_) | Self::InvalidHexColor(_)
        )
    }
}
