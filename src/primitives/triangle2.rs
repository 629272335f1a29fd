//! 2D triangle with circumcircle and shape-quality predicates.

use super::{Edge2, Point2};
use crate::tolerance::Tolerance;
use num_traits::Float;
use std::fmt;

/// A triangle defined by three corner points.
///
/// Corner order carries no meaning; none of the predicates depend on
/// winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2<F> {
    pub a: Point2<F>,
    pub b: Point2<F>,
    pub c: Point2<F>,
}

impl<F: Float> Triangle2<F> {
    /// Creates a new triangle from three corners.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// Returns the corners as an array.
    #[inline]
    pub fn corners(self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three edges `ab`, `bc`, `ca`.
    #[inline]
    pub fn edges(self) -> [Edge2<F>; 3] {
        [
            Edge2::new(self.a, self.b),
            Edge2::new(self.b, self.c),
            Edge2::new(self.c, self.a),
        ]
    }

    /// Returns `true` if `p` approximately equals one of the corners.
    #[inline]
    pub fn contains_vertex(self, p: Point2<F>, tol: Tolerance<F>) -> bool {
        self.a.almost_equal(p, tol) || self.b.almost_equal(p, tol) || self.c.almost_equal(p, tol)
    }

    /// Order-independent approximate equality.
    ///
    /// Every corner of `self` must match some corner of `other`. This is
    /// not a strict one-to-one correspondence.
    pub fn almost_equal(self, other: Self, tol: Tolerance<F>) -> bool {
        self.corners()
            .iter()
            .all(|&p| other.contains_vertex(p, tol))
    }

    /// Unnormalized circumcenter coordinates `(2·cx, 2·cy)`.
    ///
    /// Both denominators vanish for collinear corners, which makes the
    /// result infinite or NaN.
    fn doubled_circumcenter(self) -> (F, F) {
        let (a, b, c) = (self.a, self.b, self.c);
        let na = a.norm_squared();
        let nb = b.norm_squared();
        let nc = c.norm_squared();

        let x = (na * (c.y - b.y) + nb * (a.y - c.y) + nc * (b.y - a.y))
            / (a.x * (c.y - b.y) + b.x * (a.y - c.y) + c.x * (b.y - a.y));
        let y = (na * (c.x - b.x) + nb * (a.x - c.x) + nc * (b.x - a.x))
            / (a.y * (c.x - b.x) + b.y * (a.x - c.x) + c.y * (b.x - a.x));
        (x, y)
    }

    /// Returns the center of the circle through all three corners.
    ///
    /// Returns `None` when the corners are collinear and the center is not
    /// finite.
    pub fn circumcenter(self) -> Option<Point2<F>> {
        let (x, y) = self.doubled_circumcenter();
        let two = F::one() + F::one();
        let center = Point2::new(x / two, y / two);
        center.is_finite().then_some(center)
    }

    /// Returns the squared circumradius, or `None` for collinear corners.
    #[inline]
    pub fn circumradius_squared(self) -> Option<F> {
        self.circumcenter().map(|center| self.a.distance_squared(center))
    }

    /// Returns `true` if `p` lies inside or on the circumcircle.
    ///
    /// A degenerate (collinear) triangle has no finite circumcircle and
    /// contains nothing.
    pub fn circumcircle_contains(self, p: Point2<F>) -> bool {
        match self.circumcenter() {
            Some(center) => p.distance_squared(center) <= self.a.distance_squared(center),
            None => false,
        }
    }

    /// Returns the interior angles at `a`, `b` and `c`, in degrees.
    ///
    /// Each angle is the clamped arccosine of the normalized dot product of
    /// the two edge vectors leaving that corner. Returns `None` if any edge
    /// has zero length.
    pub fn angles_degrees(self) -> Option<[F; 3]> {
        let at_a = (self.b - self.a).angle_to(self.c - self.a)?;
        let at_b = (self.c - self.b).angle_to(self.a - self.b)?;
        let at_c = (self.a - self.c).angle_to(self.b - self.c)?;
        Some([at_a.to_degrees(), at_b.to_degrees(), at_c.to_degrees()])
    }

    /// Returns the smallest interior angle in degrees, or `None` if an edge
    /// has zero length.
    pub fn min_angle_degrees(self) -> Option<F> {
        let [x, y, z] = self.angles_degrees()?;
        Some(x.min(y).min(z))
    }

    /// Returns `true` if any interior angle is below `threshold_degrees`.
    ///
    /// Triangles with a zero-length edge are always skinny.
    pub fn is_skinny(self, threshold_degrees: F) -> bool {
        self.min_angle_degrees()
            .map_or(true, |min| min < threshold_degrees)
    }
}

impl<F: fmt::Display> fmt::Display for Triangle2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle {}, {}, {}", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle2<f64> {
        Triangle2::new(a.into(), b.into(), c.into())
    }

    #[test]
    fn test_contains_vertex() {
        let tol = Tolerance::default();
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 3.0));
        assert!(t.contains_vertex(Point2::new(4.0, 0.0), tol));
        assert!(t.contains_vertex(Point2::new(0.0, 3.0 + 1e-16), tol));
        assert!(!t.contains_vertex(Point2::new(1.0, 1.0), tol));
    }

    #[test]
    fn test_almost_equal_any_order() {
        let tol = Tolerance::default();
        let t1 = tri((0.0, 0.0), (4.0, 0.0), (0.0, 3.0));
        let t2 = tri((0.0, 3.0), (0.0, 0.0), (4.0, 0.0));
        assert!(t1.almost_equal(t2, tol));
        assert!(!t1.almost_equal(tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0)), tol));
    }

    #[test]
    fn test_circumcenter_right_triangle() {
        // The hypotenuse is a diameter.
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 3.0));
        let c = t.circumcenter().unwrap();
        assert_relative_eq!(c.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.5, epsilon = 1e-12);
        assert_relative_eq!(t.circumradius_squared().unwrap(), 6.25, epsilon = 1e-12);
    }

    #[test]
    fn test_circumcenter_pixel_scale() {
        let t = tri((320.0, 100.0), (520.0, 300.0), (320.0, 500.0));
        let c = t.circumcenter().unwrap();
        assert_relative_eq!(c.x, 320.0, epsilon = 1e-9);
        assert_relative_eq!(c.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_circumcircle_contains() {
        let t = tri((0.0, 0.0), (1.0, 0.0), (0.5, 0.866));
        assert!(t.circumcircle_contains(Point2::new(0.5, 0.288)));
        assert!(!t.circumcircle_contains(Point2::new(10.0, 10.0)));
        // Corners lie on the circle.
        assert!(t.circumcircle_contains(t.a));
    }

    #[test]
    fn test_collinear_triangle_contains_nothing() {
        let horizontal = tri((0.0, 0.0), (5.0, 0.0), (10.0, 0.0));
        assert!(horizontal.circumcenter().is_none());
        assert!(!horizontal.circumcircle_contains(Point2::new(5.0, 0.0)));
        assert!(!horizontal.circumcircle_contains(Point2::new(5.0, 1.0)));

        let diagonal = tri((0.0, 0.0), (1.0, 1.0), (2.0, 2.0));
        assert!(diagonal.circumcenter().is_none());
        assert!(diagonal.circumradius_squared().is_none());
        assert!(!diagonal.circumcircle_contains(Point2::new(1.0, 1.0)));
        assert!(!diagonal.circumcircle_contains(Point2::new(1e9, -1e9)));
    }

    #[test]
    fn test_angles_equilateral() {
        let h = 3.0_f64.sqrt() / 2.0;
        let t = tri((0.0, 0.0), (1.0, 0.0), (0.5, h));
        for angle in t.angles_degrees().unwrap() {
            assert_relative_eq!(angle, 60.0, epsilon = 1e-9);
        }
        assert!(!t.is_skinny(15.0));
    }

    #[test]
    fn test_angles_sum_to_180() {
        let t = tri((12.0, 40.0), (300.0, 75.0), (90.0, 410.0));
        let [a, b, c] = t.angles_degrees().unwrap();
        assert_relative_eq!(a + b + c, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_skinny() {
        // Angle at a is atan(1/10), about 5.7 degrees.
        let t = tri((0.0, 0.0), (10.0, 0.0), (10.0, 1.0));
        assert_relative_eq!(t.min_angle_degrees().unwrap(), 5.710593137499643, epsilon = 1e-9);
        assert!(t.is_skinny(15.0));
        assert!(!t.is_skinny(5.0));
    }

    #[test]
    fn test_right_isoceles_not_skinny() {
        let t = tri((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        assert_relative_eq!(t.min_angle_degrees().unwrap(), 45.0, epsilon = 1e-9);
        assert!(!t.is_skinny(15.0));
    }

    #[test]
    fn test_degenerate_is_skinny() {
        let collapsed = tri((1.0, 1.0), (1.0, 1.0), (4.0, 2.0));
        assert!(collapsed.angles_degrees().is_none());
        assert!(collapsed.is_skinny(15.0));

        let flat = tri((0.0, 0.0), (5.0, 0.0), (10.0, 0.0));
        assert!(flat.is_skinny(15.0));
    }

    #[test]
    fn test_edges_and_display() {
        let t = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        let [ab, bc, ca] = t.edges();
        assert_eq!(ab.w, t.b);
        assert_eq!(bc.v, t.b);
        assert_eq!(ca.w, t.a);
        assert_eq!(t.to_string(), "Triangle (0, 0), (1, 0), (0, 1)");
    }
}
