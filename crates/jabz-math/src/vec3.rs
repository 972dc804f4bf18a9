//! 3D vector type for color triplets.
//!
//! [`Vec3`] carries RGB, XYZ, LMS or any other 3-component color value in
//! double precision while it passes through a matrix.
//!
//! # Usage
//!
//! ```rust
//! use jabz_math::Vec3;
//!
//! let rgb = Vec3::from([1.0, 0.5, 0.25]);
//! assert_eq!(rgb.y, 0.5);
//! assert_eq!(<[f64; 3]>::from(rgb), [1.0, 0.5, 0.25]);
//! ```

/// A 3D vector for color triplets (RGB, XYZ, LMS, etc.).
///
/// # Components
///
/// Access via `.x`, `.y`, `.z`.
/// For RGB: x=R, y=G, z=B. For LMS: x=L, y=M, z=S.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// First component
    pub x: f64,
    /// Second component
    pub y: f64,
    /// Third component
    pub z: f64,
}

impl Vec3 {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Largest absolute component-wise difference.
    ///
    /// Handy for round-trip checks where every channel must agree.
    #[inline]
    pub fn max_abs_diff(self, other: Self) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }

    /// Converts to glam DVec3.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam DVec3.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

impl From<glam::DVec3> for Vec3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_abs_diff() {
        let a = Vec3::new(0.1, 0.2, 0.3);
        let b = Vec3::new(0.1, 0.25, 0.2);
        assert!((a.max_abs_diff(b) - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vec3::new(0.25, -1.5, 3.0);
        assert_eq!(Vec3::from(v.to_glam()), v);
    }
}
