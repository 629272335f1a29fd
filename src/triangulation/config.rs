//! Triangulator configuration.

use crate::tolerance::Tolerance;
use num_traits::Float;

/// Smallest accepted [`DelaunayConfig::super_triangle_margin`].
///
/// Below roughly 1.4 the super-triangle no longer encloses the bounding box.
pub const MIN_SUPER_TRIANGLE_MARGIN: f64 = 3.0;

/// Options for [`Delaunay`](super::Delaunay).
///
/// # Example
///
/// ```
/// use featmesh::triangulation::DelaunayConfig;
///
/// let config: DelaunayConfig<f64> = DelaunayConfig::default().with_skinny_angle(20.0);
/// assert_eq!(config.skinny_angle_degrees, 20.0);
/// assert_eq!(config.super_triangle_margin, 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelaunayConfig<F> {
    /// How far the super-triangle corners reach beyond the input bounding
    /// box, in multiples of its larger side. Must be finite and at least
    /// [`MIN_SUPER_TRIANGLE_MARGIN`].
    pub super_triangle_margin: F,
    /// Triangles with an interior angle below this are skinny.
    pub skinny_angle_degrees: F,
    /// Tolerance for point, edge and slope comparisons.
    pub tolerance: Tolerance<F>,
}

impl<F: Float> Default for DelaunayConfig<F> {
    fn default() -> Self {
        Self {
            super_triangle_margin: F::from(20.0).unwrap(),
            skinny_angle_degrees: F::from(15.0).unwrap(),
            tolerance: Tolerance::default(),
        }
    }
}

impl<F: Float> DelaunayConfig<F> {
    /// Sets the super-triangle margin.
    ///
    /// Checked by [`Delaunay::triangulate`](super::Delaunay::triangulate).
    pub fn with_super_triangle_margin(self, margin: F) -> Self {
        Self {
            super_triangle_margin: margin,
            ..self
        }
    }

    /// Sets the skinny-triangle angle threshold, in degrees.
    pub fn with_skinny_angle(self, degrees: F) -> Self {
        Self {
            skinny_angle_degrees: degrees,
            ..self
        }
    }

    /// Sets the comparison tolerance.
    pub fn with_tolerance(self, tolerance: Tolerance<F>) -> Self {
        Self { tolerance, ..self }
    }

    /// Returns `true` if the margin is finite and at least
    /// [`MIN_SUPER_TRIANGLE_MARGIN`].
    pub fn has_valid_margin(&self) -> bool {
        let margin = self.super_triangle_margin;
        margin.is_finite()
            && F::from(MIN_SUPER_TRIANGLE_MARGIN).map_or(false, |min| margin >= min)
    }
}
