//! # jabz-transfer
//!
//! Transfer functions (OETF/EOTF) used by the jabz color pipeline.
//!
//! Transfer functions convert between linear light values and encoded values.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`srgb`] | Storage and display encoding | [0, 1] |
//! | [`pq`] | JzAzBz cone response compression | [0, 10000] cd/m2 |
//!
//! Both work in `f64` and neither clamps its nominal range on the way in,
//! apart from the PQ treating negative light as black.
//!
//! # Usage
//!
//! ```rust
//! use jabz_transfer::{srgb, pq};
//!
//! // Decode sRGB to linear
//! let linear = srgb::eotf(0.5);
//!
//! // Encode linear to sRGB
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//!
//! // Compress absolute luminance the way JzAzBz does
//! let signal = pq::oetf(100.0);
//! ```
//!
//! # Used By
//!
//! - `jabz-color` - Gamma and perceptual space modules

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod pq;
pub mod srgb;
