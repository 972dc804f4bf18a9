//! Perceptual color difference in JzCzHz.
//!
//! # Formula
//!
//! ```text
//! ΔH = 2 * sqrt(cz1 * cz2) * sin(Δhz / 2)
//! ΔE = sqrt(Δjz² + Δcz² + ΔH²)
//! ```
//!
//! The hue term is the chord between the two hue angles scaled by the
//! geometric mean chroma, so it vanishes for achromatic colors and is
//! insensitive to which side of the hue seam either angle sits on.

use crate::space::JzCzHz;

/// Distance between two JzCzHz colors.
///
/// # Example
///
/// ```rust
/// use jabz_color::{distance, JzCzHz};
/// use std::f64::consts::PI;
///
/// let a = JzCzHz::new(0.1, 0.05, 0.0);
/// let b = JzCzHz::new(0.1, 0.05, PI);
/// assert!((distance(a, b) - 0.1).abs() < 1e-15);
/// ```
#[inline]
pub fn distance(x: JzCzHz, y: JzCzHz) -> f64 {
    let dj = x.jz - y.jz;
    let dc = x.cz - y.cz;
    let s = ((x.hz - y.hz) / 2.0).sin();
    (dj * dj + dc * dc + 4.0 * x.cz * y.cz * s * s).sqrt()
}
