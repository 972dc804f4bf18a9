//! 3x3 matrix type for color transformations.
//!
//! [`Mat3`] holds the fixed RGB→XYZ, XYZ′→LMS and LMS′→IzAzBz matrices of
//! the perceptual pipeline and their precomputed inverses.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! Each row is summed left to right, so a constant matrix applied to the
//! same vector always produces the same bits.
//!
//! # Usage
//!
//! ```rust
//! use jabz_math::{Mat3, Vec3};
//!
//! const SWAP_RB: Mat3 = Mat3::from_rows([
//!     [0.0, 0.0, 1.0],
//!     [0.0, 1.0, 0.0],
//!     [1.0, 0.0, 0.0],
//! ]);
//!
//! let bgr = SWAP_RB * Vec3::new(1.0, 0.5, 0.25);
//! assert_eq!(bgr, Vec3::new(0.25, 0.5, 1.0));
//! ```

use crate::Vec3;
use std::ops::Mul;

/// A 3x3 matrix for color transformations.
///
/// Stored in row-major order. Construct with [`Mat3::from_rows`], which is
/// `const` so matrices can live in `const` items.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Multiplies every element by `k`.
    pub const fn scaled(self, k: f64) -> Self {
        let mut m = self.m;
        let mut i = 0;
        while i < 3 {
            let mut j = 0;
            while j < 3 {
                m[i][j] *= k;
                j += 1;
            }
            i += 1;
        }
        Self { m }
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Largest absolute element-wise difference to another matrix.
    #[inline]
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Converts to glam DMat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        // glam uses column-major, so we transpose
        glam::DMat3::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Creates from glam DMat3.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        let c = m.to_cols_array_2d();
        Self::from_rows([
            [c[0][0], c[1][0], c[2][0]],
            [c[0][1], c[1][1], c[2][1]],
            [c[0][2], c[1][2], c[2][2]],
        ])
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat3_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat3::IDENTITY * v, v);
    }

    #[test]
    fn test_mat3_transform() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 0.0],
            [-1.0, 0.0, 2.0],
        ]);
        let v = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(m * v, Vec3::new(6.0, 1.0, 1.0));
    }

    #[test]
    fn test_mat3_mul() {
        let m = Mat3::from_rows([
            [2.0, 0.0, 0.0],
            [0.0, 3.0, 0.0],
            [1.0, 0.0, 1.0],
        ]);
        let p = m * Mat3::IDENTITY;
        assert_eq!(p, m);
        assert_eq!(p.max_abs_diff(&m), 0.0);
    }

    #[test]
    fn test_mat3_scaled() {
        const DOUBLE: Mat3 = Mat3::IDENTITY.scaled(2.0);
        assert_eq!(DOUBLE * Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(DOUBLE.max_abs_diff(&Mat3::IDENTITY), 1.0);
    }

    #[test]
    fn test_glam_roundtrip() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 10.0],
        ]);
        let g = m.to_glam();
        // glam is column-major: column 0 is the first element of each row
        assert_eq!(g.x_axis, glam::DVec3::new(1.0, 4.0, 7.0));
        assert_eq!(Mat3::from_glam(g), m);

        let v = Vec3::new(0.5, -1.0, 2.0);
        assert_eq!(Vec3::from(g * v.to_glam()), m * v);
    }
}
