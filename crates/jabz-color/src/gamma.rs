//! sRGB gamma: [`Srgb`] ⇄ [`LinearRgb`].
//!
//! Per channel, no clamping. Out-of-range values go through the same
//! piecewise curve and come back unchanged.

use jabz_transfer::srgb;

use crate::space::{LinearRgb, Srgb};
use crate::step::{Back, Forth};

/// Decodes one gamma-encoded channel to linear light.
#[inline]
pub fn linear(c: f64) -> f64 {
    srgb::eotf(c)
}

/// Encodes one linear channel with the sRGB curve.
#[inline]
pub fn nonlinear(c: f64) -> f64 {
    srgb::oetf(c)
}

impl Forth<LinearRgb> for Srgb {
    #[inline]
    fn forth(self) -> LinearRgb {
        LinearRgb::from(srgb::eotf_rgb(self.to_array()))
    }
}

impl Back<Srgb> for LinearRgb {
    #[inline]
    fn back(self) -> Srgb {
        Srgb::from(srgb::oetf_rgb(self.to_array()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_channel_roundtrip() {
        for &c in &[0.0, 0.0001, 0.003, 0.0031308, 0.0031309, 0.04045, 0.5, 1.0] {
            assert_abs_diff_eq!(linear(nonlinear(c)), c, epsilon = 1e-10);
            assert_abs_diff_eq!(nonlinear(linear(c)), c, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_triple_roundtrip() {
        let c = Srgb::new(0.2, 0.6, 0.9);
        let lin: LinearRgb = c.forth();
        assert!(lin.r < c.r && lin.g < c.g && lin.b < c.b);
        let back: Srgb = lin.back();
        assert_abs_diff_eq!(back.r, c.r, epsilon = 1e-12);
        assert_abs_diff_eq!(back.g, c.g, epsilon = 1e-12);
        assert_abs_diff_eq!(back.b, c.b, epsilon = 1e-12);
    }

    #[test]
    fn test_no_clamping() {
        let lin: LinearRgb = Srgb::new(-0.1, 1.2, 0.0).forth();
        assert!(lin.r < 0.0);
        assert!(lin.g > 1.0);
    }
}
