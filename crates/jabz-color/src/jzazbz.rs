//! Perceptual space: [`LinearRgb`] ⇄ [`JzAzBz`].
//!
//! JzAzBz (Safdar et al. 2017) is built from six invertible steps:
//!
//! ```text
//! LinearRgb --M1--> Xyz --mix--> XyzPrime --M2--> Lms --PQ--> LmsPrime --M3--> IzAzBz --J--> JzAzBz
//! ```
//!
//! - `M1`: sRGB primaries to XYZ, white at `Y = 100`
//! - `mix`: blue/green cross-mixing with `b = 1.15`, `g = 0.66`
//! - `M2`: XYZ′ to cone response
//! - `PQ`: the JzAzBz perceptual quantizer, see [`jabz_transfer::pq`]
//! - `M3`: cone response to intensity and opponent axes
//! - `J`: lightness correction `jz = (1+d)iz / (1+d*iz) - d0`
//!
//! Every step has a closed-form inverse. The inverse matrices are stored at
//! full double precision rather than recomputed, and every product with its
//! forward matrix is the identity to within a few ulps.
//!
//! The offset `d0` is chosen so that black maps to `jz = 0`.
//!
//! # Usage
//!
//! ```rust
//! use jabz_color::{jzazbz, LinearRgb};
//!
//! let white = jzazbz::forth(LinearRgb::new(1.0, 1.0, 1.0));
//! assert!(white.az.abs() < 1e-3 && white.bz.abs() < 1e-3);
//!
//! let back = jzazbz::back(white);
//! assert!((back.g - 1.0).abs() < 1e-9);
//! ```

use jabz_math::Mat3;
use jabz_transfer::pq;

use crate::space::{IzAzBz, JzAzBz, LinearRgb, Lms, LmsPrime, Xyz, XyzPrime};
use crate::step::{Back, Forth, transform};

/// Linear sRGB to XYZ (D65), scaled so white has `Y = 100`.
pub const RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4123999971730992, 0.35760000265100844, 0.18050001435233867],
    [0.21259999073612254, 0.7151999842346091, 0.07220001553015046],
    [0.01930001704591329, 0.11920004192621718, 0.9505000471041638],
])
.scaled(100.0);

/// XYZ (white at `Y = 100`) to linear sRGB.
pub const XYZ_TO_RGB: Mat3 = Mat3::from_rows([
    [3.2406255, -1.537208, -0.4986286],
    [-0.9689307, 1.8757561, 0.0415175],
    [0.0557101, -0.2040211, 1.0569959],
])
.scaled(0.01);

/// XYZ′ to LMS cone response.
pub const XYZ_TO_LMS: Mat3 = Mat3::from_rows([
    [0.41478972, 0.579999, 0.0146480],
    [-0.2015100, 1.120649, 0.0531008],
    [-0.0166008, 0.264800, 0.6684799],
]);

/// LMS cone response to XYZ′.
pub const LMS_TO_XYZ: Mat3 = Mat3::from_rows([
    [1.9242264357876069, -1.0047923125953657, 0.037651404030617994],
    [0.35031676209499907, 0.7264811939316552, -0.06538442294808501],
    [-0.09098281098284752, -0.3127282905230739, 1.5227665613052603],
]);

/// Quantized LMS′ to IzAzBz.
pub const LMS_TO_IAB: Mat3 = Mat3::from_rows([
    [0.5, 0.5, 0.0],
    [3.524, -4.066708, 0.542708],
    [0.199076, 1.096799, -1.295875],
]);

/// IzAzBz to quantized LMS′.
pub const IAB_TO_LMS: Mat3 = Mat3::from_rows([
    [1.0, 0.1386050432715393, 0.05804731615611883],
    [1.0, -0.13860504327153927, -0.058047316156118904],
    [1.0, -0.09601924202631895, -0.811891896056039],
]);

/// Blue cross-mixing factor.
pub const B: f64 = 1.15;
/// Green cross-mixing factor.
pub const G: f64 = 0.66;
/// Lightness curvature.
pub const D: f64 = -0.56;
/// Lightness offset that puts black at `jz = 0`.
pub const D0: f64 = 1.6295499532821566e-11;

impl Forth<Xyz> for LinearRgb {
    #[inline]
    fn forth(self) -> Xyz {
        transform(&RGB_TO_XYZ, self)
    }
}

impl Back<LinearRgb> for Xyz {
    #[inline]
    fn back(self) -> LinearRgb {
        transform(&XYZ_TO_RGB, self)
    }
}

impl Forth<XyzPrime> for Xyz {
    #[inline]
    fn forth(self) -> XyzPrime {
        XyzPrime::new(
            self.x * B + self.z * (1.0 - B),
            self.y * G + self.x * (1.0 - G),
            self.z,
        )
    }
}

impl Back<Xyz> for XyzPrime {
    #[inline]
    fn back(self) -> Xyz {
        let x = self.z * ((B - 1.0) / B) + self.x / B;
        Xyz::new(x, x * ((G - 1.0) / G) + self.y / G, self.z)
    }
}

impl Forth<Lms> for XyzPrime {
    #[inline]
    fn forth(self) -> Lms {
        transform(&XYZ_TO_LMS, self)
    }
}

impl Back<XyzPrime> for Lms {
    #[inline]
    fn back(self) -> XyzPrime {
        transform(&LMS_TO_XYZ, self)
    }
}

impl Forth<LmsPrime> for Lms {
    #[inline]
    fn forth(self) -> LmsPrime {
        LmsPrime::from(pq::oetf_rgb(self.to_array()))
    }
}

impl Back<Lms> for LmsPrime {
    #[inline]
    fn back(self) -> Lms {
        Lms::from(pq::eotf_rgb(self.to_array()))
    }
}

impl Forth<IzAzBz> for LmsPrime {
    #[inline]
    fn forth(self) -> IzAzBz {
        transform(&LMS_TO_IAB, self)
    }
}

impl Back<LmsPrime> for IzAzBz {
    #[inline]
    fn back(self) -> LmsPrime {
        transform(&IAB_TO_LMS, self)
    }
}

impl Forth<JzAzBz> for IzAzBz {
    #[inline]
    fn forth(self) -> JzAzBz {
        let jz = ((1.0 + D) * self.iz) / (1.0 + D * self.iz) - D0;
        JzAzBz::new(jz, self.az, self.bz)
    }
}

impl Back<IzAzBz> for JzAzBz {
    #[inline]
    fn back(self) -> IzAzBz {
        let j = self.jz + D0;
        IzAzBz::new(j / (1.0 + D - D * j), self.az, self.bz)
    }
}

/// Linear RGB to JzAzBz through every intermediate step.
#[inline]
pub fn forth(rgb: LinearRgb) -> JzAzBz {
    let xyz: Xyz = rgb.forth();
    let xyz_prime: XyzPrime = xyz.forth();
    let lms: Lms = xyz_prime.forth();
    let lms_prime: LmsPrime = lms.forth();
    let iab: IzAzBz = lms_prime.forth();
    iab.forth()
}

/// JzAzBz to linear RGB, the exact reverse of [`forth`].
#[inline]
pub fn back(jab: JzAzBz) -> LinearRgb {
    let iab: IzAzBz = jab.back();
    let lms_prime: LmsPrime = iab.back();
    let lms: Lms = lms_prime.back();
    let xyz_prime: XyzPrime = lms.back();
    let xyz: Xyz = xyz_prime.back();
    xyz.back()
}

impl Forth<JzAzBz> for LinearRgb {
    #[inline]
    fn forth(self) -> JzAzBz {
        forth(self)
    }
}

impl Back<LinearRgb> for JzAzBz {
    #[inline]
    fn back(self) -> LinearRgb {
        back(self)
    }
}
