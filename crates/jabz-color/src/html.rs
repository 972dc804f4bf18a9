//! HTML/CSS color strings.
//!
//! Channels are clamped to [0, 1] and rounded to 8 bits, so any color can
//! be printed, displayable or not.

use jabz_core::{Error, Result};

use crate::space::Srgb;

#[inline]
fn to_u8(v: f64) -> u8 {
    // NaN saturates to 0
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Formats as `#rrggbb`.
///
/// # Example
///
/// ```rust
/// use jabz_color::{html, Srgb};
///
/// assert_eq!(html::to_html_hex(Srgb::new(1.0, 0.5, 0.0)), "#ff8000");
/// assert_eq!(html::to_html_hex(Srgb::new(1.3, -0.2, 0.0)), "#ff0000");
/// ```
pub fn to_html_hex(c: Srgb) -> String {
    format!("#{:02x}{:02x}{:02x}", to_u8(c.r), to_u8(c.g), to_u8(c.b))
}

/// Formats as `rgba(r, g, b, a)`, or `#rrggbb` when alpha is 1.
pub fn to_html_rgba(c: Srgb, alpha: f64) -> String {
    let alpha = alpha.clamp(0.0, 1.0);
    if alpha == 1.0 {
        return to_html_hex(c);
    }
    format!("rgba({}, {}, {}, {})", to_u8(c.r), to_u8(c.g), to_u8(c.b), alpha)
}

/// Parses `#rrggbb` (the `#` is optional).
pub fn from_html_hex(s: &str) -> Result<Srgb> {
    let hex = s.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(Error::invalid_hex_color(s));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|v| v as f64 / 255.0)
            .map_err(|_| Error::invalid_hex_color(s))
    };
    Ok(Srgb::new(channel(0)?, channel(2)?, channel(4)?))
}
