//! Approximate gamut repair for polar colors.
//!
//! A Jchz (or JzCzHz) color can name a lightness and hue that sRGB cannot
//! show at the requested chroma. Instead of clipping channels, which shifts
//! hue, the repair keeps `j` and `h` fixed and searches for the largest
//! chroma that still lands inside the sRGB cube.
//!
//! The search bisects chroma over `[0, c]`. It stops after [`PROBES`]
//! probes or once the interval is narrower than [`MIN_INTERVAL`] Jchz
//! chroma units. If no probe is representable the color collapses to the
//! gray `(j, j, j)`.
//!
//! # Example
//!
//! ```rust
//! use jabz_color::{repair, Jchz};
//!
//! let vivid = Jchz::new(0.6, 2.0, 0.3);
//! let shown = repair::to_srgb_approx(vivid);
//! assert!(repair::is_valid_srgb(shown));
//! ```

use jabz_core::Rgba;
use tracing::trace;

use crate::convert::Color;
use crate::space::{Jchz, JzCzHz, Srgb};
use crate::step::Forth;

/// Maximum number of bisection probes.
pub const PROBES: usize = 8;

/// Chroma interval below which the search stops.
pub const MIN_INTERVAL: f64 = 1.0 / 128.0;

/// A color with lightness, chroma and hue axes.
pub trait PolarColor: Color {
    /// The same color in Jchz.
    fn to_jchz(self) -> Jchz;
}

impl PolarColor for Jchz {
    #[inline]
    fn to_jchz(self) -> Jchz {
        self
    }
}

impl PolarColor for JzCzHz {
    #[inline]
    fn to_jchz(self) -> Jchz {
        self.forth()
    }
}

/// True if every channel lies in [0, 1]. NaN is never valid.
#[inline]
pub fn is_valid_srgb(c: Srgb) -> bool {
    c.to_array().iter().all(|v| (0.0..=1.0).contains(v))
}

/// Converts to sRGB, pulling chroma in until the result is displayable.
pub fn to_srgb_approx<C: PolarColor>(color: C) -> Srgb {
    let target = color.to_jchz();
    let srgb: Srgb = target.convert();
    if is_valid_srgb(srgb) {
        return srgb;
    }

    let mut low = 0.0;
    let mut high = target.c;
    for _ in 0..PROBES {
        let delta = high - low;
        if delta < MIN_INTERVAL {
            break;
        }
        let mid = low + delta / 2.0;
        if is_valid_srgb(Jchz::new(target.j, mid, target.h).convert()) {
            low = mid;
        } else {
            high = mid;
        }
    }

    trace!(j = target.j, c = target.c, h = target.h, chroma = low, "gamut repair");

    if low == 0.0 {
        Srgb::new(target.j, target.j, target.j)
    } else {
        Jchz::new(target.j, low, target.h).convert()
    }
}

/// Repairs the color channels of a pixel holding `C`. Alpha is passed through.
#[inline]
pub fn repair_pixel<C: PolarColor>(px: Rgba) -> Rgba {
    px.with_rgb(to_srgb_approx(C::from(px.rgb())).to_array())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_in_gamut_untouched() {
        let orange: Jchz = Srgb::new(0.9, 0.5, 0.1).convert();
        let direct: Srgb = orange.convert();
        assert_eq!(to_srgb_approx(orange), direct);
    }

    #[test]
    fn test_out_of_gamut_is_repaired() {
        for i in 0..16 {
            let h = i as f64 / 16.0;
            let c = Jchz::new(0.5, 1.5, h);
            assert!(!is_valid_srgb(c.convert()));
            let fixed = to_srgb_approx(c);
            assert!(is_valid_srgb(fixed), "h = {} -> {:?}", h, fixed);
        }
    }

    #[test]
    fn test_repair_keeps_hue() {
        let c = Jchz::new(0.55, 1.4, 0.2);
        let fixed: Jchz = to_srgb_approx(c).convert();
        assert!(fixed.c > 0.0 && fixed.c < c.c);
        assert_abs_diff_eq!(fixed.h, c.h, epsilon = 1e-9);
        assert_abs_diff_eq!(fixed.j, c.j, epsilon = 1e-9);
    }

    #[test]
    fn test_search_limits() {
        assert_eq!(PROBES, 8);
        assert_eq!(MIN_INTERVAL, 0.0078125);

        // wide interval: the probe count ends the search at 4 / 2^8
        let wide = Jchz::new(0.5, 4.0, 0.6);
        assert_eq!(to_srgb_approx(wide), Jchz::new(0.5, 0.703125, 0.6).convert());

        // narrow interval: the width threshold ends it after 6 probes
        let narrow = Jchz::new(0.9, 0.3, 0.1);
        assert!(!is_valid_srgb(narrow.convert()));
        assert_eq!(to_srgb_approx(narrow), Jchz::new(0.9, 0.2109375, 0.1).convert());
    }

    #[test]
    fn test_gray_fallback() {
        // too bright for any chroma: every probe fails
        let c = Jchz::new(1.2, 0.5, 0.4);
        assert_eq!(to_srgb_approx(c), Srgb::new(1.2, 1.2, 1.2));
    }

    #[test]
    fn test_jzczhz_source() {
        let polar: JzCzHz = Jchz::new(0.5, 1.5, 0.7).convert();
        assert!(is_valid_srgb(to_srgb_approx(polar)));
    }

    #[test]
    fn test_pixel_alpha() {
        let px = Rgba::new(0.5, 1.5, 0.1, 0.4);
        let out = repair_pixel::<Jchz>(px);
        assert_eq!(out.a, 0.4);
        assert!(is_valid_srgb(Srgb::from(out.rgb())));
    }
}
