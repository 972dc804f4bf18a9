//! Four-channel pixel value.
//!
//! [`Rgba`] is the value exchanged with the outside world: three color
//! channels in whatever space the caller is working in, plus alpha.
//! Color transforms only ever touch the first three channels; alpha is
//! carried through unmodified.
//!
//! # Example
//!
//! ```rust
//! use jabz_core::Rgba;
//!
//! let p = Rgba::new(0.2, 0.4, 0.6, 0.5);
//! let q = p.map_rgb(|[r, g, b]| [b, g, r]);
//! assert_eq!(q.rgb(), [0.6, 0.4, 0.2]);
//! assert_eq!(q.a, 0.5);
//! ```

/// An RGBA pixel with `f64` channels, nominally in `[0, 1]`.
///
/// The channel names are positional: when the pixel carries a Jchz color,
/// `r`, `g` and `b` hold `j`, `c` and `h`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    /// First color channel.
    pub r: f64,
    /// Second color channel.
    pub g: f64,
    /// Third color channel.
    pub b: f64,
    /// Alpha (coverage), never altered by color transforms.
    pub a: f64,
}

impl Rgba {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new pixel.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque pixel (alpha = 1.0).
    #[inline]
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a pixel from a color triple and an alpha value.
    #[inline]
    pub const fn from_rgb(rgb: [f64; 3], a: f64) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    /// Creates from a `[r, g, b, a]` array.
    #[inline]
    pub const fn from_array(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// Returns the color channels.
    #[inline]
    pub const fn rgb(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns all four channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Replaces the color channels, keeping alpha.
    #[inline]
    pub const fn with_rgb(self, rgb: [f64; 3]) -> Self {
        Self::from_rgb(rgb, self.a)
    }

    /// Applies `f` to the color channels, keeping alpha.
    #[inline]
    pub fn map_rgb(self, f: impl FnOnce([f64; 3]) -> [f64; 3]) -> Self {
        self.with_rgb(f(self.rgb()))
    }

    /// Returns `true` if every channel, alpha included, lies in `[0, 1]`.
    ///
    /// NaN is never in range.
    #[inline]
    pub fn is_in_unit_range(&self) -> bool {
        self.to_array().iter().all(|v| (0.0..=1.0).contains(v))
    }
}

impl From<[f64; 4]> for Rgba {
    #[inline]
    fn from(v: [f64; 4]) -> Self {
        Self::from_array(v)
    }
}

impl From<Rgba> for [f64; 4] {
    #[inline]
    fn from(p: Rgba) -> Self {
        p.to_array()
    }
}
