//! 2D point type.

use super::Vec2;
use crate::tolerance::Tolerance;
use num_traits::Float;
use std::fmt;
use std::ops::Sub;

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`). The derived
/// `PartialEq` is exact; geometric code compares points with
/// [`Point2::almost_equal`] instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Squared distance from the origin, `x² + y²`.
    #[inline]
    pub fn norm_squared(self) -> F {
        self.x * self.x + self.y * self.y
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Component-wise approximate equality under `tol`.
    #[inline]
    pub fn almost_equal(self, other: Self, tol: Tolerance<F>) -> bool {
        tol.almost_equal(self.x, other.x) && tol.almost_equal(self.y, other.y)
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns `true` if the point lies in `[0, width] x [0, height]`.
    ///
    /// Coordinates that compare equal to a bound under `tol` count as inside.
    #[inline]
    pub fn within(self, width: F, height: F, tol: Tolerance<F>) -> bool {
        let in_range = |v: F, hi: F| {
            (v >= F::zero() || tol.almost_equal(v, F::zero()))
                && (v <= hi || tol.almost_equal(v, hi))
        };
        in_range(self.x, width) && in_range(self.y, height)
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: fmt::Display> fmt::Display for Point2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
