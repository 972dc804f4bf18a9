//! # jabz-color
//!
//! Exactly invertible conversions between sRGB and the JzAzBz family.
//!
//! - **Gamma** - sRGB ⇄ linear RGB
//! - **Perceptual space** - linear RGB ⇄ JzAzBz via XYZ and cone response
//! - **Rescale** - JzAzBz ⇄ Jabz, axes normalized over the sRGB cube
//! - **Polar** - JzAzBz ⇄ JzCzHz ⇄ Jchz
//! - **Distance** - perceptual difference in JzCzHz
//! - **Repair** - chroma reduction for undisplayable polar colors
//! - **Hash** - stable hues for text labels
//!
//! # Architecture
//!
//! ```text
//!                    jabz-color
//!                        |
//!          +-------------+-------------+
//!          |                           |
//!    jabz-transfer                 jabz-math
//!          |                           |
//!          +-------------+-------------+
//!                        |
//!                    jabz-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use jabz_color::prelude::*;
//!
//! // Typed conversion
//! let sky = Srgb::new(0.35, 0.6, 0.9);
//! let jch: Jchz = sky.convert();
//! assert!(jch.j > 0.0 && jch.j < 1.0);
//!
//! // Spaces chosen at runtime
//! let from: ColorSpace = "jchz".parse().unwrap();
//! let rgb = convert(from, ColorSpace::Srgb, jch.to_array());
//! assert!((rgb[2] - 0.9).abs() < 1e-9);
//! ```
//!
//! # Precision
//!
//! Everything runs in `f64`. Each adjacent pair of spaces is connected by
//! a [`Forth`]/[`Back`] pair whose composition is the identity to within
//! floating-point rounding. Only the gamut policy applied at output
//! (see [`jabz_core::GamutPolicy`]) loses information.
//!
//! # Dependencies
//!
//! - [`jabz-core`] - Errors, pixels, gamut policies
//! - [`jabz-math`] - Affine maps and 3x3 matrices
//! - [`jabz-transfer`] - sRGB and PQ curves
//! - [`tracing`] - Gamut repair diagnostics
//! - [`sha3`] - SHAKE-128 for text-derived colors
//!
//! # Used By
//!
//! - `jabz-cli` - Command-line conversion tool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod convert;
mod distance;
mod space;
mod step;
pub mod gamma;
pub mod hash;
pub mod html;
pub mod jzazbz;
pub mod polar;
pub mod repair;
pub mod rescale;

pub use convert::{Color, convert, convert_pixel, distance_between};
pub use distance::distance;
pub use repair::PolarColor;
pub use space::{
    ColorSpace, IzAzBz, Jabz, Jchz, JzAzBz, JzCzHz, LinearRgb, Lms, LmsPrime, Srgb, Xyz, XyzPrime,
};
pub use step::{Back, Forth};

// Re-export sub-crates for convenience
pub use jabz_math as math;
pub use jabz_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        Back, Color, ColorSpace, Forth, Jabz, Jchz, JzAzBz, JzCzHz, LinearRgb, Srgb, convert,
        convert_pixel, distance, distance_between,
    };
    pub use jabz_core::{GamutPolicy, Rgba};
}
