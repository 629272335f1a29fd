//! Undirected 2D edge.

use super::Point2;
use crate::tolerance::Tolerance;
use num_traits::Float;
use std::fmt;

/// An undirected edge between two points.
///
/// Identity is order-independent: `(v, w)` and `(w, v)` describe the same
/// edge under [`Edge2::almost_equal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge2<F> {
    pub v: Point2<F>,
    pub w: Point2<F>,
}

impl<F: Float> Edge2<F> {
    /// Creates a new edge from two endpoints.
    #[inline]
    pub fn new(v: Point2<F>, w: Point2<F>) -> Self {
        Self { v, w }
    }

    /// Returns the squared length of the edge.
    #[inline]
    pub fn length_squared(self) -> F {
        self.v.distance_squared(self.w)
    }

    /// Returns `true` if both endpoint pairs match, in either order.
    #[inline]
    pub fn almost_equal(self, other: Self, tol: Tolerance<F>) -> bool {
        (self.v.almost_equal(other.v, tol) && self.w.almost_equal(other.w, tol))
            || (self.v.almost_equal(other.w, tol) && self.w.almost_equal(other.v, tol))
    }

    /// Returns `true` if `p` lies on the infinite line through this edge.
    ///
    /// Compares the slopes from `p` to each endpoint. When `p` shares an x
    /// coordinate with either endpoint the slope is undefined, and the
    /// result is `false`; a point on a vertical edge is therefore never
    /// reported as collinear.
    pub fn collinear_with(self, p: Point2<F>, tol: Tolerance<F>) -> bool {
        let dx_v = p.x - self.v.x;
        let dx_w = p.x - self.w.x;
        if dx_v == F::zero() || dx_w == F::zero() {
            return false;
        }

        let slope_v = (p.y - self.v.y) / dx_v;
        let slope_w = (p.y - self.w.y) / dx_w;
        // almost_equal rejects non-finite slopes from near-zero offsets.
        tol.almost_equal(slope_v, slope_w)
    }
}

impl<F: fmt::Display> fmt::Display for Edge2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge {}, {}", self.v, self.w)
    }
}
