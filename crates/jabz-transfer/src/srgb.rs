//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! # Range
//!
//! - Input/Output: nominally [0, 1]
//!
//! Values outside [0, 1] are not clamped; they pass through the same
//! formula so that out-of-gamut colors survive a round trip.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Encoded value where the linear segment ends.
pub const ENCODED_BREAK: f64 = 0.04045;

/// Linear value where the linear segment ends.
///
/// Exactly `eotf(ENCODED_BREAK)`, the end of the linear segment.
///
/// The two pieces of the curve do not meet here: the power branch gives
/// `0.0404499704...` at this point, slightly below [`ENCODED_BREAK`]. For
/// linear values in a window of about `2.4e-9` above the break, `oetf`
/// lands below `ENCODED_BREAK` and `eotf(oetf(l))` misses `l` by up to
/// about `2.3e-9`. Encoded values round-trip through `oetf(eotf(v))`
/// everywhere.
pub const LINEAR_BREAK: f64 = 0.0031308049535603713;

const SLOPE: f64 = 12.92;
const GAMMA: f64 = 2.4;
const A: f64 = 0.055;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use jabz_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= ENCODED_BREAK {
        v / SLOPE
    } else {
        ((v + A) / (1.0 + A)).powf(GAMMA)
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308049535603713:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use jabz_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= LINEAR_BREAK {
        l * SLOPE
    } else {
        (1.0 + A) * l.powf(1.0 / GAMMA) - A
    }
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf)
}

/// Applies sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(oetf)
}
