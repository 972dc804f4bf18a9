//! Single pipeline steps.
//!
//! Adjacent spaces are linked by a pair of mutually inverse functions.
//! [`Forth`] points away from sRGB, [`Back`] points toward it:
//!
//! ```text
//! Srgb - LinearRgb - Xyz - XyzPrime - Lms - LmsPrime - IzAzBz - JzAzBz - JzCzHz - Jchz
//!                                                                     \
//!                                                                      Jabz
//! ```
//!
//! The target type picks the step, so `JzAzBz` has two `Forth` impls:
//!
//! ```rust
//! use jabz_color::{Forth, Jabz, JzAzBz, JzCzHz};
//!
//! let lab = JzAzBz::new(0.1, 0.02, -0.03);
//! let polar: JzCzHz = lab.forth();
//! let rescaled: Jabz = lab.forth();
//! assert!(polar.cz > 0.0 && rescaled.j > 0.0);
//! ```

use jabz_math::{Mat3, Vec3};

/// Step away from sRGB.
pub trait Forth<T>: Copy {
    /// Converts one step further from sRGB.
    fn forth(self) -> T;
}

/// Step toward sRGB.
pub trait Back<T>: Copy {
    /// Converts one step closer to sRGB.
    fn back(self) -> T;
}

/// Applies a matrix to any triple type, producing any other.
#[inline]
pub(crate) fn transform<I: Into<Vec3>, O: From<Vec3>>(m: &Mat3, v: I) -> O {
    O::from(*m * v.into())
}
