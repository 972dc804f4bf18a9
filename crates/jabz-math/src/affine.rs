//! One-dimensional affine maps.
//!
//! [`A2`] represents `f(x) = m*x + a`. Affine maps are closed under
//! composition, scaling, translation and (for `m != 0`) inversion, which
//! makes them a compact way to describe per-axis rescalings that must be
//! undone exactly later.
//!
//! Rescalings are usually easier to state by their end points than by
//! slope and intercept. [`A2::mix`] builds the unique map sending
//! `x0 -> y0` and `x1 -> y1`:
//!
//! ```rust
//! use jabz_math::A2;
//!
//! // Celsius to Fahrenheit from two known points
//! let c2f = A2::mix(0.0, 100.0, 32.0, 212.0).unwrap();
//! assert_eq!(c2f.apply(100.0), 212.0);
//!
//! let f2c = c2f.inverse().unwrap();
//! assert_eq!(f2c.apply(32.0), 0.0);
//! ```
//!
//! # Composition order
//!
//! `f.compose(g)` is `f ∘ g` (apply `g` first). `f.then(g)` is `g ∘ f`
//! (apply `f` first). Both return a single map, no closures involved.
//!
//! # Const evaluation
//!
//! Every infallible operation is a `const fn`, so calibration constants can
//! be written as `const` items and their inverses computed at compile time
//! with [`A2::invert`].

use jabz_core::{Error, Result};

/// Affine map `x -> m*x + a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct A2 {
    m: f64,
    a: f64,
}

impl A2 {
    /// The identity map `x -> x`.
    pub const IDENTITY: Self = Self::new(1.0, 0.0);

    /// Creates the map `x -> m*x + a`.
    #[inline]
    pub const fn new(m: f64, a: f64) -> Self {
        Self { m, a }
    }

    /// The map sending `0 -> y0` and `1 -> y1`.
    #[inline]
    pub const fn unit(y0: f64, y1: f64) -> Self {
        Self::new(y1 - y0, y0)
    }

    /// The map sending `x0 -> 0` and `x1 -> 1`.
    ///
    /// Fails when `x0 == x1`.
    pub fn normalize(x0: f64, x1: f64) -> Result<Self> {
        Self::unit(x0, x1)
            .inverse()
            .map_err(|_| Error::division_by_zero("A2::normalize"))
    }

    /// The map sending `x0 -> y0` and `x1 -> y1`.
    ///
    /// Fails when `x0 == x1`.
    pub fn mix(x0: f64, x1: f64, y0: f64, y1: f64) -> Result<Self> {
        let norm = Self::unit(x0, x1)
            .inverse()
            .map_err(|_| Error::division_by_zero("A2::mix"))?;
        Ok(Self::unit(y0, y1).compose(norm))
    }

    /// Slope `m`.
    #[inline]
    pub const fn scale(self) -> f64 {
        self.m
    }

    /// Intercept `a`.
    #[inline]
    pub const fn offset(self) -> f64 {
        self.a
    }

    /// Evaluates the map at `x`.
    #[inline]
    pub const fn apply(self, x: f64) -> f64 {
        x * self.m + self.a
    }

    /// `self ∘ inner`: applies `inner` first, then `self`.
    #[inline]
    pub const fn compose(self, inner: Self) -> Self {
        Self::new(inner.m * self.m, inner.a * self.m + self.a)
    }

    /// `outer ∘ self`: applies `self` first, then `outer`.
    #[inline]
    pub const fn then(self, outer: Self) -> Self {
        outer.compose(self)
    }

    /// `x -> f(x) + c`. Pass a negative `c` to subtract.
    #[inline]
    pub const fn translate(self, c: f64) -> Self {
        Self::new(self.m, self.a + c)
    }

    /// `x -> k * f(x)`.
    #[inline]
    pub const fn scale_by(self, k: f64) -> Self {
        Self::new(self.m * k, self.a * k)
    }

    /// `x -> f(x) / d`. Fails when `d == 0`.
    pub fn divide_by(self, d: f64) -> Result<Self> {
        if d == 0.0 {
            return Err(Error::division_by_zero("A2::divide_by"));
        }
        Ok(Self::new(self.m / d, self.a / d))
    }

    /// `x -> -f(x)`.
    #[inline]
    pub const fn negate(self) -> Self {
        Self::new(-self.m, -self.a)
    }

    /// `x -> c - f(x)`.
    #[inline]
    pub const fn rsub(self, c: f64) -> Self {
        Self::new(-self.m, c - self.a)
    }

    /// The inverse map `y -> (y - a) / m`, stored as `A2(1/m, -a/m)`.
    ///
    /// Fails with [`Error::DivisionByZero`] when `m == 0`, rather than
    /// producing infinities.
    pub fn inverse(self) -> Result<Self> {
        if self.m == 0.0 {
            return Err(Error::division_by_zero("A2::inverse"));
        }
        Ok(self.invert())
    }

    /// Const counterpart of [`A2::inverse`] for calibration constants.
    ///
    /// # Panics
    ///
    /// Panics when `m == 0`. In a `const` item that is a compile error.
    #[inline]
    pub const fn invert(self) -> Self {
        assert!(self.m != 0.0, "A2::invert: zero scale is not invertible");
        Self::new(1.0 / self.m, -self.a / self.m)
    }
}

impl Default for A2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
