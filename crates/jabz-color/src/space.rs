//! Color coordinate types.
//!
//! One plain `Copy` struct per color space. Public spaces can be named at
//! runtime through [`ColorSpace`]; the intermediate ones (`Xyz`, `Lms`, ...)
//! only exist between two steps of the perceptual pipeline.
//!
//! Every type converts to and from `[f64; 3]` and [`Vec3`], so the same
//! matrix helper can feed any of them.

use std::fmt;
use std::str::FromStr;

use jabz_core::Error;
use jabz_math::Vec3;

macro_rules! triple {
    ($(#[$meta:meta])* $name:ident { $a:ident, $b:ident, $c:ident }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name {
            #[allow(missing_docs)]
            pub $a: f64,
            #[allow(missing_docs)]
            pub $b: f64,
            #[allow(missing_docs)]
            pub $c: f64,
        }

        impl $name {
            /// Creates a new value from its three components.
            #[inline]
            pub const fn new($a: f64, $b: f64, $c: f64) -> Self {
                Self { $a, $b, $c }
            }

            /// Components in declaration order.
            #[inline]
            pub const fn to_array(self) -> [f64; 3] {
                [self.$a, self.$b, self.$c]
            }

            /// Creates from components in declaration order.
            #[inline]
            pub const fn from_array(v: [f64; 3]) -> Self {
                Self::new(v[0], v[1], v[2])
            }
        }

        impl From<[f64; 3]> for $name {
            #[inline]
            fn from(v: [f64; 3]) -> Self {
                Self::from_array(v)
            }
        }

        impl From<$name> for [f64; 3] {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl From<Vec3> for $name {
            #[inline]
            fn from(v: Vec3) -> Self {
                Self::new(v.x, v.y, v.z)
            }
        }

        impl From<$name> for Vec3 {
            #[inline]
            fn from(v: $name) -> Self {
                Vec3::new(v.$a, v.$b, v.$c)
            }
        }
    };
}

triple!(
    /// Gamma-encoded sRGB, nominally in [0, 1].
    Srgb { r, g, b }
);
triple!(
    /// Linear-light sRGB primaries, nominally in [0, 1].
    LinearRgb { r, g, b }
);
triple!(
    /// CIE XYZ (D65) scaled so that white has `y = 100`.
    Xyz { x, y, z }
);
triple!(
    /// XYZ after the blue/green cross-mixing of the JzAzBz model.
    XyzPrime { x, y, z }
);
triple!(
    /// Cone response.
    Lms { l, m, s }
);
triple!(
    /// Cone response after perceptual quantization.
    LmsPrime { l, m, s }
);
triple!(
    /// Intensity and opponent axes before the lightness correction.
    IzAzBz { iz, az, bz }
);
triple!(
    /// JzAzBz: lightness `jz`, green-red `az`, blue-yellow `bz`.
    JzAzBz { jz, az, bz }
);
triple!(
    /// Polar JzAzBz: lightness, chroma and hue angle in radians.
    JzCzHz { jz, cz, hz }
);
triple!(
    /// JzAzBz with each axis rescaled to roughly [0, 1] over the sRGB cube.
    Jabz { j, a, b }
);
triple!(
    /// JzCzHz with lightness and chroma rescaled and hue as a turn in [0, 1].
    Jchz { j, c, h }
);

/// The color spaces reachable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Gamma-encoded sRGB.
    Srgb,
    /// Linear-light RGB.
    LinearRgb,
    /// JzAzBz.
    JzAzBz,
    /// Polar JzAzBz.
    JzCzHz,
    /// Rescaled JzAzBz.
    Jabz,
    /// Rescaled polar JzAzBz.
    Jchz,
}

impl ColorSpace {
    /// All named spaces, in pipeline order.
    pub const ALL: [ColorSpace; 6] = [
        ColorSpace::Srgb,
        ColorSpace::LinearRgb,
        ColorSpace::JzAzBz,
        ColorSpace::JzCzHz,
        ColorSpace::Jabz,
        ColorSpace::Jchz,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            ColorSpace::Srgb => "srgb",
            ColorSpace::LinearRgb => "linear",
            ColorSpace::JzAzBz => "jzazbz",
            ColorSpace::JzCzHz => "jzczhz",
            ColorSpace::Jabz => "jabz",
            ColorSpace::Jchz => "jchz",
        }
    }

    /// Component labels, used when printing values.
    pub const fn components(self) -> [&'static str; 3] {
        match self {
            ColorSpace::Srgb | ColorSpace::LinearRgb => ["r", "g", "b"],
            ColorSpace::JzAzBz => ["jz", "az", "bz"],
            ColorSpace::JzCzHz => ["jz", "cz", "hz"],
            ColorSpace::Jabz => ["j", "a", "b"],
            ColorSpace::Jchz => ["j", "c", "h"],
        }
    }

    /// True for the polar spaces, whose third component is a hue.
    pub const fn is_polar(self) -> bool {
        matches!(self, ColorSpace::JzCzHz | ColorSpace::Jchz)
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srgb" | "rgb" => Ok(ColorSpace::Srgb),
            "linear" | "lrgb" | "linearrgb" => Ok(ColorSpace::LinearRgb),
            "jzazbz" => Ok(ColorSpace::JzAzBz),
            "jzczhz" => Ok(ColorSpace::JzCzHz),
            "jabz" | "jab" => Ok(ColorSpace::Jabz),
            "jchz" | "jch" => Ok(ColorSpace::Jchz),
            _ => Err(Error::unknown_color_space(s)),
        }
    }
}
