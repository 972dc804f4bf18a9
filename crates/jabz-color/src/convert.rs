//! Any-to-any conversion between the named color spaces.
//!
//! The named spaces form a tree rooted at JzAzBz:
//!
//! ```text
//!            JzAzBz
//!          /   |    \
//!  LinearRgb  Jabz  JzCzHz
//!      |              |
//!    Srgb           Jchz
//! ```
//!
//! A conversion walks the unique path between two nodes. It climbs from
//! the source toward the common ancestor with `back`/`forth` steps, then
//! descends to the target. No intermediate value is clamped.
//!
//! Two entry points:
//!
//! - [`convert`] / [`convert_pixel`] for spaces chosen at runtime
//! - [`Color::convert`] for spaces known at compile time
//!
//! # Example
//!
//! ```rust
//! use jabz_color::{convert, Color, ColorSpace, Jchz, Srgb};
//!
//! let red = Srgb::new(1.0, 0.0, 0.0);
//! let jch: Jchz = red.convert();
//! let back = convert(ColorSpace::Jchz, ColorSpace::Srgb, jch.to_array());
//! assert!((back[0] - 1.0).abs() < 1e-9);
//! ```

use jabz_core::Rgba;

use crate::distance::distance;
use crate::space::{ColorSpace, Jabz, Jchz, JzAzBz, JzCzHz, LinearRgb, Srgb};
use crate::step::{Back, Forth};

/// Deepest node below the hub.
const MAX_DEPTH: usize = 2;

/// Next node on the way to JzAzBz. The hub is its own parent.
const fn parent(space: ColorSpace) -> ColorSpace {
    match space {
        ColorSpace::Srgb => ColorSpace::LinearRgb,
        ColorSpace::Jchz => ColorSpace::JzCzHz,
        ColorSpace::LinearRgb | ColorSpace::JzAzBz | ColorSpace::JzCzHz | ColorSpace::Jabz => {
            ColorSpace::JzAzBz
        }
    }
}

const fn depth(space: ColorSpace) -> usize {
    match space {
        ColorSpace::JzAzBz => 0,
        ColorSpace::LinearRgb | ColorSpace::JzCzHz | ColorSpace::Jabz => 1,
        ColorSpace::Srgb | ColorSpace::Jchz => 2,
    }
}

#[inline]
fn forth_as<A, B>(v: [f64; 3]) -> [f64; 3]
where
    A: Forth<B> + From<[f64; 3]>,
    B: Into<[f64; 3]>,
{
    A::from(v).forth().into()
}

#[inline]
fn back_as<A, B>(v: [f64; 3]) -> [f64; 3]
where
    A: Back<B> + From<[f64; 3]>,
    B: Into<[f64; 3]>,
{
    A::from(v).back().into()
}

/// One step from `space` to its parent.
fn toward_hub(space: ColorSpace, v: [f64; 3]) -> [f64; 3] {
    match space {
        ColorSpace::Srgb => forth_as::<Srgb, LinearRgb>(v),
        ColorSpace::LinearRgb => forth_as::<LinearRgb, JzAzBz>(v),
        ColorSpace::JzAzBz => v,
        ColorSpace::JzCzHz => back_as::<JzCzHz, JzAzBz>(v),
        ColorSpace::Jabz => back_as::<Jabz, JzAzBz>(v),
        ColorSpace::Jchz => back_as::<Jchz, JzCzHz>(v),
    }
}

/// One step from the parent of `space` to `space`.
fn from_hub(space: ColorSpace, v: [f64; 3]) -> [f64; 3] {
    match space {
        ColorSpace::Srgb => back_as::<LinearRgb, Srgb>(v),
        ColorSpace::LinearRgb => back_as::<JzAzBz, LinearRgb>(v),
        ColorSpace::JzAzBz => v,
        ColorSpace::JzCzHz => forth_as::<JzAzBz, JzCzHz>(v),
        ColorSpace::Jabz => forth_as::<JzAzBz, Jabz>(v),
        ColorSpace::Jchz => forth_as::<JzCzHz, Jchz>(v),
    }
}

/// Converts a triple from one named space to another.
///
/// Converting a space to itself returns the input untouched.
pub fn convert(from: ColorSpace, to: ColorSpace, v: [f64; 3]) -> [f64; 3] {
    let mut src = from;
    let mut dst = to;
    let mut v = v;
    let mut descent = [ColorSpace::JzAzBz; MAX_DEPTH];
    let mut n = 0;

    while src != dst {
        if depth(src) >= depth(dst) {
            v = toward_hub(src, v);
            src = parent(src);
        } else {
            descent[n] = dst;
            n += 1;
            dst = parent(dst);
        }
    }

    for &space in descent[..n].iter().rev() {
        v = from_hub(space, v);
    }
    v
}

/// Converts the color channels of a pixel. Alpha is passed through.
#[inline]
pub fn convert_pixel(from: ColorSpace, to: ColorSpace, px: Rgba) -> Rgba {
    px.with_rgb(convert(from, to, px.rgb()))
}

/// A color value whose space is known at compile time.
pub trait Color: Copy + From<[f64; 3]> + Into<[f64; 3]> {
    /// The space this type lives in.
    const SPACE: ColorSpace;

    /// Converts to another color type along the shortest path.
    #[inline]
    fn convert<T: Color>(self) -> T {
        T::from(convert(Self::SPACE, T::SPACE, self.into()))
    }
}

macro_rules! impl_color {
    ($($ty:ident => $space:ident),* $(,)?) => {
        $(
            impl Color for $ty {
                const SPACE: ColorSpace = ColorSpace::$space;
            }
        )*
    };
}

impl_color!(
    Srgb => Srgb,
    LinearRgb => LinearRgb,
    JzAzBz => JzAzBz,
    JzCzHz => JzCzHz,
    Jabz => Jabz,
    Jchz => Jchz,
);

/// Perceptual distance between two colors in any spaces.
///
/// Both are converted to JzCzHz first, see [`distance`].
#[inline]
pub fn distance_between<A: Color, B: Color>(a: A, b: B) -> f64 {
    distance(a.convert(), b.convert())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamma;
    use approx::assert_abs_diff_eq;

    fn assert_close(a: [f64; 3], b: [f64; 3], tol: f64) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < tol, "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_tree_shape() {
        for space in ColorSpace::ALL {
            let p = parent(space);
            if space == ColorSpace::JzAzBz {
                assert_eq!(p, space);
            } else {
                assert_eq!(depth(p) + 1, depth(space));
            }
            assert!(depth(space) <= MAX_DEPTH);
        }
    }

    #[test]
    fn test_identity_is_untouched() {
        let v = [0.3, -0.2, 7.0];
        for space in ColorSpace::ALL {
            assert_eq!(convert(space, space, v), v);
        }
    }

    #[test]
    fn test_single_steps() {
        let s = [0.2, 0.4, 0.6];
        let lin = convert(ColorSpace::Srgb, ColorSpace::LinearRgb, s);
        assert_eq!(lin, [gamma::linear(0.2), gamma::linear(0.4), gamma::linear(0.6)]);

        let back = convert(ColorSpace::LinearRgb, ColorSpace::Srgb, lin);
        assert_close(back, s, 1e-12);
    }

    #[test]
    fn test_matches_manual_chain() {
        let srgb = Srgb::new(0.9, 0.3, 0.1);
        let lin: LinearRgb = srgb.forth();
        let lab: JzAzBz = lin.forth();
        let polar: JzCzHz = lab.forth();
        let jch: Jchz = polar.forth();
        assert_eq!(convert(ColorSpace::Srgb, ColorSpace::Jchz, srgb.to_array()), jch.to_array());

        let jab: Jabz = lab.forth();
        assert_eq!(convert(ColorSpace::Jchz, ColorSpace::Jabz, jch.to_array()), {
            let p: JzCzHz = jch.back();
            let l: JzAzBz = p.back();
            Forth::<Jabz>::forth(l).to_array()
        });
        assert_close(
            convert(ColorSpace::Jchz, ColorSpace::Jabz, jch.to_array()),
            jab.to_array(),
            1e-12,
        );
    }

    #[test]
    fn test_all_pairs_roundtrip() {
        let srgb = [0.7, 0.2, 0.45];
        for from in ColorSpace::ALL {
            let v = convert(ColorSpace::Srgb, from, srgb);
            for to in ColorSpace::ALL {
                let there = convert(from, to, v);
                let back = convert(to, from, there);
                assert_close(back, v, 1e-9);
            }
        }
    }

    #[test]
    fn test_pixel_alpha_passthrough() {
        let px = Rgba::new(0.1, 0.5, 0.9, 0.25);
        for to in ColorSpace::ALL {
            assert_eq!(convert_pixel(ColorSpace::Srgb, to, px).a, 0.25);
        }
    }

    #[test]
    fn test_color_trait() {
        let white = Srgb::new(1.0, 1.0, 1.0);
        let jab: Jabz = white.convert();
        assert_abs_diff_eq!(jab.j, 1.0, epsilon = 1e-12);
        let back: Srgb = jab.convert();
        assert_close(back.to_array(), white.to_array(), 1e-9);
    }

    #[test]
    fn test_distance_between() {
        let red = Srgb::new(1.0, 0.0, 0.0);
        let red_jch: Jchz = red.convert();
        assert_abs_diff_eq!(distance_between(red, red_jch), 0.0, epsilon = 1e-12);

        let black = Srgb::new(0.0, 0.0, 0.0);
        let white = LinearRgb::new(1.0, 1.0, 1.0);
        let d = distance_between(black, white);
        assert!(d > 0.16 && d < 0.17, "d = {}", d);
    }
}
