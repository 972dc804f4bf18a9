//! Stable colors derived from text.
//!
//! A label is hashed with SHAKE-128 and the first output bytes pick a hue
//! or a chroma split, so the same string always gets the same color.
//!
//! # Example
//!
//! ```rust
//! use jabz_color::hash;
//!
//! let tag = hash::jchz_hash(0.7, 0.5, "release");
//! assert_eq!(tag, hash::jchz_hash(0.7, 0.5, "release"));
//! assert!((0.0..=1.0).contains(&tag.h));
//! ```

use sha3::Shake128;
use sha3::digest::{ExtendableOutput, Update, XofReader};

use crate::space::Jchz;

/// First `N` bytes of the SHAKE-128 output for `text`.
fn shake<const N: usize>(text: &str) -> [u8; N] {
    let mut hasher = Shake128::default();
    hasher.update(text.as_bytes());
    let mut out = [0u8; N];
    hasher.finalize_xof().read(&mut out);
    out
}

/// Hue in [0, 1] taken from the first hash byte of `text`.
#[inline]
pub fn text_hue(text: &str) -> f64 {
    shake::<1>(text)[0] as f64 / 255.0
}

/// A Jchz color with the given lightness and chroma and a hue from `text`.
pub fn jchz_hash(j: f64, c: f64, text: &str) -> Jchz {
    Jchz::new(j, c, text_hue(text))
}

/// Splits `chroma` between the two opponent axes, driven by `text`.
///
/// The first hash byte sets the share of `a` (the rest goes to `b`), the
/// low two bits of the second byte set the signs of `a` and `b`.
pub fn chroma_values(chroma: f64, text: &str) -> (f64, f64) {
    let [split, signs] = shake::<2>(text);
    let x = split as f64 / 255.0;
    let sign_a = if signs & 0x1 != 0 { 1.0 } else { -1.0 };
    let sign_b = if signs & 0x2 != 0 { 1.0 } else { -1.0 };
    (chroma * sign_a * x, chroma * sign_b * (1.0 - x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_known_digests() {
        // SHAKE-128("") starts 7f 9c
        assert_eq!(shake::<2>(""), [0x7f, 0x9c]);
        assert_eq!(shake::<2>("jabz"), [83, 32]);
        assert_eq!(shake::<2>("hello world"), [58, 145]);
        assert_eq!(shake::<2>("farbfeld"), [16, 23]);
    }

    #[test]
    fn test_text_hue() {
        assert_eq!(text_hue(""), 127.0 / 255.0);
        assert_eq!(text_hue("jabz"), 83.0 / 255.0);
        assert_eq!(text_hue("hello world"), 58.0 / 255.0);
    }

    #[test]
    fn test_jchz_hash() {
        let c = jchz_hash(0.7, 0.5, "hello world");
        assert_eq!(c, Jchz::new(0.7, 0.5, 58.0 / 255.0));
        assert_ne!(jchz_hash(0.7, 0.5, "hello"), c);
    }

    #[test]
    fn test_chroma_values() {
        // both sign bits clear
        let (a, b) = chroma_values(0.5, "jabz");
        assert_abs_diff_eq!(a, -0.5 * 83.0 / 255.0, epsilon = 1e-15);
        assert_abs_diff_eq!(b, -0.5 * 172.0 / 255.0, epsilon = 1e-15);

        // only the a bit set
        let (a, b) = chroma_values(0.5, "hello world");
        assert_abs_diff_eq!(a, 0.5 * 58.0 / 255.0, epsilon = 1e-15);
        assert_abs_diff_eq!(b, -0.5 * 197.0 / 255.0, epsilon = 1e-15);

        // both set
        let (a, b) = chroma_values(0.5, "farbfeld");
        assert_abs_diff_eq!(a, 0.5 * 16.0 / 255.0, epsilon = 1e-15);
        assert_abs_diff_eq!(b, 0.5 * 239.0 / 255.0, epsilon = 1e-15);
        assert_abs_diff_eq!(a.abs() + b.abs(), 0.5, epsilon = 1e-15);
    }
}
