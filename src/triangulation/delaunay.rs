//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Every triangle of a Delaunay triangulation has an empty circumcircle: no
//! input point lies strictly inside it. Bowyer-Watson builds one
//! incrementally:
//!
//! 1. Start with a super-triangle far larger than the input bounding box
//! 2. For each point, remove every triangle whose circumcircle contains it
//!    and re-triangulate the resulting cavity from the point
//! 3. Remove triangles connected to the super-triangle corners
//!
//! This triangulator additionally clips the mesh to an image rectangle
//! `[0, width] x [0, height]`, which is what a feature tracker meshing
//! detected corners needs.
//!
//! # Complexity
//!
//! - Time: O(n²) worst case; every insertion scans all current triangles
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use featmesh::triangulation::Delaunay;
//! use featmesh::Point2;
//!
//! let corners: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ];
//!
//! let mut mesh = Delaunay::new();
//! let triangles = mesh.triangulate(&corners, 10.0, 10.0).unwrap();
//! assert_eq!(triangles.len(), 2);
//!
//! // Each triangle emits its own copy of a shared edge.
//! assert_eq!(mesh.edges().len(), 6);
//! assert_eq!(mesh.unique_edges().len(), 5);
//! ```

use std::collections::HashSet;

use num_traits::Float;
use tracing::{debug, trace, warn};

use super::config::{DelaunayConfig, MIN_SUPER_TRIANGLE_MARGIN};
use super::handles::{Edge, Triangle};
use crate::error::MeshError;
use crate::primitives::{Edge2, Point2, Triangle2};
use crate::tolerance::Tolerance;

/// A reusable Bowyer-Watson triangulator.
///
/// Each call to [`Delaunay::triangulate`] discards the previous result.
/// The returned slices borrow the triangulator, so they cannot outlive the
/// next call.
#[derive(Debug, Clone)]
pub struct Delaunay<F> {
    config: DelaunayConfig<F>,
    /// Input points in input order, followed by the three super-triangle
    /// corners. Never resized while triangles index into it.
    points: Vec<Point2<F>>,
    input_len: usize,
    triangles: Vec<Triangle>,
    edges: Vec<Edge>,
    vertices: Vec<Point2<F>>,
}

impl<F: Float> Default for Delaunay<F> {
    fn default() -> Self {
        Self::with_config(DelaunayConfig::default())
    }
}

impl<F: Float> Delaunay<F> {
    /// Creates a triangulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a triangulator with the given configuration.
    pub fn with_config(config: DelaunayConfig<F>) -> Self {
        Self {
            config,
            points: Vec::new(),
            input_len: 0,
            triangles: Vec::new(),
            edges: Vec::new(),
            vertices: Vec::new(),
        }
    }

    /// The configuration this triangulator was created with.
    pub fn config(&self) -> &DelaunayConfig<F> {
        &self.config
    }

    /// Triangulates `points` and clips the result to `[0, width] x [0, height]`.
    ///
    /// Returns the surviving triangles. Edges and clipped vertices are
    /// available from [`Delaunay::edges`] and [`Delaunay::vertices`] until
    /// the next call.
    ///
    /// Input points should be pairwise distinct under the configured
    /// tolerance; duplicates can produce zero-area triangles.
    ///
    /// # Errors
    ///
    /// - [`MeshError::EmptyInput`] if `points` is empty
    /// - [`MeshError::InvalidBounds`] if `width` or `height` is negative or
    ///   not finite
    /// - [`MeshError::NonFiniteCoordinate`] if a point has a NaN or infinite
    ///   coordinate
    /// - [`MeshError::InvalidMargin`] if the configured super-triangle margin
    ///   is below [`MIN_SUPER_TRIANGLE_MARGIN`] or not finite
    ///
    /// On error the triangulator is left empty.
    pub fn triangulate(
        &mut self,
        points: &[Point2<F>],
        width: F,
        height: F,
    ) -> Result<&[Triangle], MeshError> {
        self.clear();
        validate_input(points, width, height)?;
        validate_config(&self.config)?;

        debug!(
            points = points.len(),
            width = as_f64(width),
            height = as_f64(height),
            "triangulating"
        );

        let tol = self.config.tolerance;
        let corners = super_triangle(points, self.config.super_triangle_margin);

        self.input_len = points.len();
        self.points.reserve(points.len() + corners.len());
        self.points.extend_from_slice(points);
        self.points.extend_from_slice(&corners);

        // The buffer is frozen from here on.
        let buffer = &self.points;
        let n = self.input_len;
        self.triangles.push(Triangle::new(n, n + 1, n + 2));

        for index in 0..n {
            insert_point(buffer, index, &mut self.triangles, tol);
        }

        let [s0, s1, s2] = corners;
        self.triangles.retain(|t| {
            let geom = t.resolve(buffer);
            !(geom.contains_vertex(s0, tol)
                || geom.contains_vertex(s1, tol)
                || geom.contains_vertex(s2, tol))
        });

        self.triangles.retain(|t| {
            t.resolve(buffer)
                .corners()
                .iter()
                .all(|p| p.within(width, height, tol))
        });

        self.vertices = buffer[..n]
            .iter()
            .copied()
            .filter(|p| p.within(width, height, tol))
            .collect();

        // One copy per triangle side; shared sides appear twice.
        self.edges = self.triangles.iter().flat_map(|t| t.edges()).collect();

        debug!(
            triangles = self.triangles.len(),
            edges = self.edges.len(),
            vertices = self.vertices.len(),
            "triangulation complete"
        );

        Ok(&self.triangles)
    }

    /// Discards the current triangulation.
    pub fn clear(&mut self) {
        self.points.clear();
        self.input_len = 0;
        self.triangles.clear();
        self.edges.clear();
        self.vertices.clear();
    }

    /// Triangles of the last triangulation, as indices into [`Delaunay::points`].
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Sides of every triangle, three per triangle.
    ///
    /// A side shared by two triangles is listed once for each of them. Use
    /// [`Delaunay::unique_edges`] for a deduplicated list.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Input points that lie inside the clipping rectangle, in input order.
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    /// The point buffer that [`Triangle`] and [`Edge`] indices refer to.
    ///
    /// Holds the input points in input order followed by the three
    /// super-triangle corners.
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// The bootstrap super-triangle of the last triangulation.
    pub fn super_triangle(&self) -> Option<Triangle2<F>> {
        let n = self.input_len;
        match self.points.get(n..n + 3) {
            Some(&[a, b, c]) => Some(Triangle2::new(a, b, c)),
            _ => None,
        }
    }

    /// Resolves a triangle handle into its corner points.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not come from the current triangulation.
    pub fn triangle(&self, t: &Triangle) -> Triangle2<F> {
        t.resolve(&self.points)
    }

    /// Resolves an edge handle into its endpoints.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not come from the current triangulation.
    pub fn edge(&self, e: &Edge) -> Edge2<F> {
        e.resolve(&self.points)
    }

    /// Resolved geometry of every triangle, in [`Delaunay::triangles`] order.
    pub fn triangle_geometries(&self) -> impl Iterator<Item = Triangle2<F>> + '_ {
        self.triangles.iter().map(move |t| t.resolve(&self.points))
    }

    /// Resolved geometry of every edge, in [`Delaunay::edges`] order.
    pub fn edge_geometries(&self) -> impl Iterator<Item = Edge2<F>> + '_ {
        self.edges.iter().map(move |e| e.resolve(&self.points))
    }

    /// Returns each distinct edge once, in first-seen order.
    ///
    /// Edges are compared by index regardless of endpoint order.
    pub fn unique_edges(&self) -> Vec<Edge> {
        let mut seen = HashSet::with_capacity(self.edges.len());
        self.edges
            .iter()
            .copied()
            .filter(|e| seen.insert(e.normalized()))
            .collect()
    }

    /// Triangles with an interior angle below the configured threshold.
    pub fn skinny_triangles(&self) -> impl Iterator<Item = &Triangle> + '_ {
        let threshold = self.config.skinny_angle_degrees;
        self.triangles
            .iter()
            .filter(move |t| t.resolve(&self.points).is_skinny(threshold))
    }
}

fn validate_input<F: Float>(points: &[Point2<F>], width: F, height: F) -> Result<(), MeshError> {
    if points.is_empty() {
        warn!("refusing to triangulate an empty point set");
        return Err(MeshError::EmptyInput);
    }

    let bounds_ok =
        width.is_finite() && height.is_finite() && width >= F::zero() && height >= F::zero();
    if !bounds_ok {
        let (width, height) = (as_f64(width), as_f64(height));
        warn!(width, height, "invalid clipping bounds");
        return Err(MeshError::InvalidBounds { width, height });
    }

    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        warn!(index, "input point has a non-finite coordinate");
        return Err(MeshError::NonFiniteCoordinate { index });
    }

    Ok(())
}

fn validate_config<F: Float>(config: &DelaunayConfig<F>) -> Result<(), MeshError> {
    if config.has_valid_margin() {
        return Ok(());
    }
    let margin = as_f64(config.super_triangle_margin);
    warn!(margin, "super-triangle margin too small to enclose the input");
    Err(MeshError::InvalidMargin {
        margin,
        minimum: MIN_SUPER_TRIANGLE_MARGIN,
    })
}

/// Builds a triangle whose corners reach `margin` times the larger side of
/// the bounding box beyond its center.
fn super_triangle<F: Float>(points: &[Point2<F>], margin: F) -> [Point2<F>; 3] {
    let first = points[0];
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

    for p in points.iter().skip(1) {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let delta = (max_x - min_x).max(max_y - min_y);
    let two = F::one() + F::one();
    let mid_x = (min_x + max_x) / two;
    let mid_y = (min_y + max_y) / two;

    [
        Point2::new(mid_x - margin * delta, mid_y - delta),
        Point2::new(mid_x, mid_y + margin * delta),
        Point2::new(mid_x + margin * delta, mid_y - delta),
    ]
}

/// Inserts `points[index]` into `triangles`.
fn insert_point<F: Float>(
    points: &[Point2<F>],
    index: usize,
    triangles: &mut Vec<Triangle>,
    tol: Tolerance<F>,
) {
    let p = points[index];

    let bad: Vec<bool> = triangles
        .iter()
        .map(|t| t.resolve(points).circumcircle_contains(p))
        .collect();

    let mut polygon: Vec<Edge> = triangles
        .iter()
        .zip(&bad)
        .filter(|(_, is_bad)| **is_bad)
        .flat_map(|(t, _)| t.edges())
        .collect();

    let mut marks = bad.iter();
    triangles.retain(|_| !marks.next().copied().unwrap_or(false));

    // Sides shared by two cavity triangles cancel, leaving its boundary.
    let mut shared = vec![false; polygon.len()];
    for i in 0..polygon.len() {
        let ei = polygon[i].resolve(points);
        for j in (i + 1)..polygon.len() {
            if ei.almost_equal(polygon[j].resolve(points), tol) {
                shared[i] = true;
                shared[j] = true;
            }
        }
    }
    let mut marks = shared.iter();
    polygon.retain(|_| !marks.next().copied().unwrap_or(false));

    trace!(
        index,
        cavity = bad.iter().filter(|&&b| b).count(),
        boundary = polygon.len(),
        "inserted point"
    );

    for edge in polygon {
        if edge.resolve(points).collinear_with(p, tol) {
            debug!(index, v = edge.v, w = edge.w, "skipping boundary edge collinear with point");
            continue;
        }
        triangles.push(Triangle::new(edge.v, edge.w, index));
    }
}

fn as_f64<F: Float>(x: F) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
