//! # jabz-core
//!
//! Core types shared by the jabz color crates.
//!
//! - [`Rgba`] - The four-channel pixel exchanged at the system boundary
//! - [`GamutPolicy`] - Clip or mask pixels that fall outside `[0, 1]`
//! - [`Error`] / [`Result`] - The few fallible operations of the pipeline
//!
//! ## Crate Structure
//!
//! ```text
//! jabz-core (this crate)
//!    ^
//!    |
//!    +-- jabz-math (affine maps, matrices)
//!    +-- jabz-transfer (sRGB curve, perceptual quantizer)
//!    +-- jabz-color (color spaces and conversions)
//!    +-- jabz-io (farbfeld pixel streams)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod gamut;
pub mod pixel;

pub use error::*;
pub use gamut::{GamutPolicy, MASK_SENTINEL, clip, is_in_gamut, mask};
pub use pixel::Rgba;

/// Prelude module for convenient imports.
///
/// ```
/// use jabz_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::gamut::GamutPolicy;
    pub use crate::pixel::Rgba;
}
