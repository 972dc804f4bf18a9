//! Rescaled JzAzBz: [`JzAzBz`] ⇄ [`Jabz`].
//!
//! Each axis is mapped independently so that the sRGB cube spans [0, 1]
//! on it. The constants record where sRGB black, white and the primaries
//! land in JzAzBz: `jz` runs from black (0) to white, `az` from green to
//! magenta and `bz` from blue to yellow.

use jabz_math::A2;

use crate::space::{Jabz, JzAzBz};
use crate::step::{Back, Forth};

/// `j` to `jz`: white is `j = 1`.
pub const J_TO_JZ: A2 = A2::new(0.167174631203662, 0.0);
/// `a` to `az`.
pub const A_TO_AZ: A2 = A2::new(0.2018781487395795, -0.09286318752421584);
/// `b` to `bz`.
pub const B_TO_BZ: A2 = A2::new(0.27155478748819284, -0.15632173274783687);

/// `jz` to `j`.
pub const JZ_TO_J: A2 = J_TO_JZ.invert();
/// `az` to `a`.
pub const AZ_TO_A: A2 = A_TO_AZ.invert();
/// `bz` to `b`.
pub const BZ_TO_B: A2 = B_TO_BZ.invert();

impl Forth<Jabz> for JzAzBz {
    #[inline]
    fn forth(self) -> Jabz {
        Jabz::new(
            JZ_TO_J.apply(self.jz),
            AZ_TO_A.apply(self.az),
            BZ_TO_B.apply(self.bz),
        )
    }
}

impl Back<JzAzBz> for Jabz {
    #[inline]
    fn back(self) -> JzAzBz {
        JzAzBz::new(
            J_TO_JZ.apply(self.j),
            A_TO_AZ.apply(self.a),
            B_TO_BZ.apply(self.b),
        )
    }
}
