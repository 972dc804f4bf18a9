//! # jabz-math
//!
//! Math primitives for the jabz color pipeline.
//!
//! - [`A2`] - One-dimensional affine maps with exact inversion
//! - [`Mat3`] - 3x3 matrices for the fixed color matrices
//! - [`Vec3`] - 3D vectors for color triplets
//!
//! Everything is `f64`: the perceptual pipeline is only invertible to
//! machine precision if every coefficient is carried in double precision.
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use jabz_math::{A2, Mat3, Vec3};
//!
//! let m = Mat3::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 2.0, 0.0],
//!     [0.0, 0.0, 2.0],
//! ]);
//! assert_eq!(m * Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0));
//!
//! let f = A2::new(2.0, 1.0);
//! assert_eq!(f.invert().apply(f.apply(0.25)), 0.25);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop with `DMat3`/`DVec3`
//! - [`jabz-core`] - Error types
//!
//! # Used By
//!
//! - `jabz-color` - Color space conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod affine;
mod mat3;
mod vec3;

pub use affine::*;
pub use mat3::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
