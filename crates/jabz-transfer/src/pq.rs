//! Perceptual Quantizer (PQ) as used by the JzAzBz color space.
//!
//! JzAzBz encodes cone responses with the SMPTE ST 2084 curve, except that
//! the outer exponent is raised by a factor of 1.7 (`p = 1.7 * m2`). That
//! makes the curve steeper in the dark range, which is what gives Jz its
//! perceptual spacing.
//!
//! # Range
//!
//! - Linear: [0, 10000] cd/m2 (nits)
//! - Encoded: [`oetf(0.0)`, ~1]
//!
//! Note that `oetf(0.0)` is *not* zero: it is `c1^p`. The perceptual
//! pipeline relies on that value to map black onto the origin.
//!
//! # Reference
//!
//! - SMPTE ST 2084:2014
//! - Safdar et al., "Perceptually uniform color space for image signals
//!   including high dynamic range and wide gamut", Optics Express 2017
//!
//! # Usage
//!
//! ```rust
//! use jabz_transfer::pq;
//!
//! let signal = pq::oetf(100.0);
//! let nits = pq::eotf(signal);
//! assert!((nits - 100.0).abs() < 1e-9);
//! ```

/// Maximum luminance in cd/m2 (nits).
pub const L_MAX: f64 = 10000.0;

/// ST 2084 `m1`, the inner exponent (`n` in the JzAzBz paper).
pub const M1: f64 = 2610.0 / 16384.0;
/// ST 2084 `m2`.
pub const M2: f64 = 2523.0 / 4096.0 * 128.0;
/// JzAzBz outer exponent `p = 1.7 * m2`.
pub const P: f64 = 1.7 * M2;
/// ST 2084 `c1`.
pub const C1: f64 = 3424.0 / 4096.0;
/// ST 2084 `c2`.
pub const C2: f64 = 2413.0 / 4096.0 * 32.0;
/// ST 2084 `c3`.
pub const C3: f64 = 2392.0 / 4096.0 * 32.0;

/// PQ OETF: Encodes absolute luminance to the JzAzBz PQ signal.
///
/// Negative input is treated as zero. The result is never negative.
///
/// # Formula
///
/// ```text
/// y = (max(L, 0) / 10000)^m1
/// V = ((c1 + c2*y) / (1 + c3*y))^p
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    let y = (l.max(0.0) / L_MAX).powf(M1);
    let num = C1 + C2 * y;
    let den = 1.0 + C3 * y;

    (num / den).powf(P)
}

/// PQ EOTF: Decodes the JzAzBz PQ signal to absolute luminance (cd/m2).
///
/// Negative signal decodes to zero, as does any signal below `oetf(0.0)`.
///
/// # Formula
///
/// ```text
/// Vp = V^(1/p)
/// L  = 10000 * (max(Vp - c1, 0) / (c2 - c3*Vp))^(1/m1)
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v < 0.0 {
        return 0.0;
    }

    let vp = v.powf(1.0 / P);
    let num = (vp - C1).max(0.0);
    let den = C2 - C3 * vp;

    L_MAX * (num / den).powf(1.0 / M1)
}

/// Applies PQ OETF to each component.
#[inline]
pub fn oetf_rgb(lms: [f64; 3]) -> [f64; 3] {
    lms.map(oetf)
}

/// Applies PQ EOTF to each component.
#[inline]
pub fn eotf_rgb(lms: [f64; 3]) -> [f64; 3] {
    lms.map(eotf)
}
