//! Index-based edge and triangle handles.

use crate::primitives::{Edge2, Point2, Triangle2};
use num_traits::Float;

/// A triangle represented by indices into a point buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the three edges `ab`, `bc`, `ca`.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Checks if the triangle uses a specific vertex index.
    #[inline]
    pub fn contains_index(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// Resolves the indices against `points`.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds for `points`.
    #[inline]
    pub fn resolve<F: Float>(&self, points: &[Point2<F>]) -> Triangle2<F> {
        Triangle2::new(points[self.a], points[self.b], points[self.c])
    }
}

/// An undirected edge represented by two vertex indices.
///
/// Endpoint order is preserved as created; use [`Edge::normalized`] for an
/// order-independent key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// First endpoint index.
    pub v: usize,
    /// Second endpoint index.
    pub w: usize,
}

impl Edge {
    /// Creates an edge between two vertex indices.
    #[inline]
    pub fn new(v: usize, w: usize) -> Self {
        Self { v, w }
    }

    /// Returns the edge with the smaller index first.
    #[inline]
    pub fn normalized(&self) -> Self {
        if self.v <= self.w {
            *self
        } else {
            Self::new(self.w, self.v)
        }
    }

    /// Resolves the indices against `points`.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds for `points`.
    #[inline]
    pub fn resolve<F: Float>(&self, points: &[Point2<F>]) -> Edge2<F> {
        Edge2::new(points[self.v], points[self.w])
    }
}
