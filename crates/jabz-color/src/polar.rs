//! Polar forms: [`JzAzBz`] ⇄ [`JzCzHz`] ⇄ [`Jchz`].
//!
//! `JzCzHz` replaces the opponent axes with chroma `cz = |(az, bz)|` and hue
//! angle `hz = atan2(bz, az)` in `[-π, π]`. `Jchz` then rescales lightness
//! and chroma so the sRGB cube fits in [0, 1] and turns the hue angle into
//! a fraction of a turn:
//!
//! ```text
//! h = (hz + π) / τ
//! ```
//!
//! # Hue seam
//!
//! The seam sits on the negative `az` axis. `atan2` reports `+π` for
//! `bz = +0.0` and `-π` for `bz = -0.0`, so `h` is `1` or `0` there. Both
//! values describe the same color and convert back to the same point.

use std::f64::consts::{PI, TAU};

use jabz_math::A2;

use crate::rescale::{J_TO_JZ, JZ_TO_J};
use crate::space::{Jchz, JzAzBz, JzCzHz};
use crate::step::{Back, Forth};

/// `c` to `cz`: the most saturated sRGB color has `c = 1`.
pub const C_TO_CZ: A2 = A2::new(0.15934590589262138, 0.0);
/// `cz` to `c`.
pub const CZ_TO_C: A2 = C_TO_CZ.invert();
/// `h` in [0, 1] to `hz` in [-π, π].
pub const H_TO_HZ: A2 = A2::new(TAU, -PI);
/// `hz` in [-π, π] to `h` in [0, 1].
pub const HZ_TO_H: A2 = H_TO_HZ.invert();

impl Forth<JzCzHz> for JzAzBz {
    #[inline]
    fn forth(self) -> JzCzHz {
        JzCzHz::new(self.jz, self.az.hypot(self.bz), self.bz.atan2(self.az))
    }
}

impl Back<JzAzBz> for JzCzHz {
    #[inline]
    fn back(self) -> JzAzBz {
        let (sin, cos) = self.hz.sin_cos();
        JzAzBz::new(self.jz, self.cz * cos, self.cz * sin)
    }
}

impl Forth<Jchz> for JzCzHz {
    #[inline]
    fn forth(self) -> Jchz {
        Jchz::new(
            JZ_TO_J.apply(self.jz),
            CZ_TO_C.apply(self.cz),
            HZ_TO_H.apply(self.hz),
        )
    }
}

impl Back<JzCzHz> for Jchz {
    #[inline]
    fn back(self) -> JzCzHz {
        JzCzHz::new(
            J_TO_JZ.apply(self.j),
            C_TO_CZ.apply(self.c),
            H_TO_HZ.apply(self.h),
        )
    }
}
