//! Gamut boundary policies.
//!
//! Every color transform in the pipeline is a lossless bijection. The one
//! lossy step is the last one: squeezing a computed pixel into the `[0, 1]`
//! range an output container can store. Two policies exist:
//!
//! | Policy | Out-of-range pixel becomes |
//! |--------|----------------------------|
//! | [`GamutPolicy::Clip`] | each channel clamped to `[0, 1]` independently |
//! | [`GamutPolicy::Mask`] | [`MASK_SENTINEL`], whatever the original values |
//!
//! Mask exists to make gamut problems visible instead of silently
//! distorting hue.
//!
//! # Example
//!
//! ```rust
//! use jabz_core::{GamutPolicy, Rgba, MASK_SENTINEL};
//!
//! let p = Rgba::new(1.2, -0.1, 0.5, 1.0);
//! assert_eq!(GamutPolicy::Clip.apply(p), Rgba::new(1.0, 0.0, 0.5, 1.0));
//! assert_eq!(GamutPolicy::Mask.apply(p), MASK_SENTINEL);
//! ```

use crate::{Error, Rgba};
use std::fmt;
use std::str::FromStr;

/// Pixel written in place of an out-of-gamut pixel under [`GamutPolicy::Mask`].
///
/// Full-intensity white at zero alpha (16-bit codes `FFFF FFFF FFFF 0000`).
pub const MASK_SENTINEL: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.0);

/// How to treat a pixel that falls outside `[0, 1]` on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamutPolicy {
    /// Clamp each channel independently.
    Clip,
    /// Replace the whole pixel with [`MASK_SENTINEL`].
    #[default]
    Mask,
}

impl GamutPolicy {
    /// All policies, in declaration order.
    pub const ALL: [GamutPolicy; 2] = [GamutPolicy::Clip, GamutPolicy::Mask];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            GamutPolicy::Clip => "clip",
            GamutPolicy::Mask => "mask",
        }
    }

    /// Applies the policy to a pixel.
    #[inline]
    pub fn apply(self, p: Rgba) -> Rgba {
        match self {
            GamutPolicy::Clip => clip(p),
            GamutPolicy::Mask => mask(p),
        }
    }
}

impl fmt::Display for GamutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GamutPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clip" | "clamp" => Ok(GamutPolicy::Clip),
            "mask" => Ok(GamutPolicy::Mask),
            _ => Err(Error::unknown_gamut_policy(s)),
        }
    }
}

/// Returns `true` if the pixel is representable as-is.
#[inline]
pub fn is_in_gamut(p: Rgba) -> bool {
    p.is_in_unit_range()
}

/// Clamps a single channel to `[0, 1]`. NaN becomes 0.
#[inline]
pub fn clip_channel(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Clamps every channel, alpha included, to `[0, 1]`.
#[inline]
pub fn clip(p: Rgba) -> Rgba {
    Rgba::from_array(p.to_array().map(clip_channel))
}

/// Returns the pixel unchanged if it is in gamut, else [`MASK_SENTINEL`].
#[inline]
pub fn mask(p: Rgba) -> Rgba {
    if is_in_gamut(p) { p } else { MASK_SENTINEL }
}
