//! End-to-end checks on small hand-built meshes.

use featmesh::{Delaunay, MeshError, Point2, Tolerance};

fn square() -> Vec<Point2<f64>> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(0.0, 10.0),
    ]
}

#[test]
fn square_yields_two_triangles_and_five_distinct_edges() {
    let mut mesh = Delaunay::new();
    let triangles = mesh.triangulate(&square(), 10.0, 10.0).unwrap();
    assert_eq!(triangles.len(), 2);

    // The diagonal is emitted once per triangle.
    assert_eq!(mesh.edges().len(), 6);
    let unique = mesh.unique_edges();
    assert_eq!(unique.len(), 5);

    let tol = Tolerance::default();
    let diagonals: Vec<_> = unique
        .iter()
        .map(|e| mesh.edge(e))
        .filter(|e| e.length_squared() == 200.0)
        .collect();
    assert_eq!(diagonals.len(), 1);
    let twice: usize = mesh
        .edge_geometries()
        .filter(|e| e.almost_equal(diagonals[0], tol))
        .count();
    assert_eq!(twice, 2);

    assert_eq!(mesh.vertices(), square().as_slice());
}

#[test]
fn square_triangles_cover_all_corners() {
    let tol = Tolerance::default();
    let mut mesh = Delaunay::new();
    mesh.triangulate(&square(), 10.0, 10.0).unwrap();

    for corner in square() {
        assert!(mesh
            .triangle_geometries()
            .any(|t| t.contains_vertex(corner, tol)));
    }
}

#[test]
fn triangles_outside_the_image_are_dropped() {
    let mut points = square();
    points.push(Point2::new(15.0, 5.0));

    let mut mesh = Delaunay::new();
    mesh.triangulate(&points, 10.0, 10.0).unwrap();

    assert_eq!(mesh.vertices().len(), 4);
    for t in mesh.triangles() {
        assert!(!t.contains_index(4));
    }
    assert!(mesh.triangles().len() <= 2);
}

#[test]
fn empty_input_is_rejected() {
    let mut mesh: Delaunay<f32> = Delaunay::new();
    let err = mesh.triangulate(&[], 640.0, 480.0).unwrap_err();
    assert_eq!(err, MeshError::EmptyInput);
    assert_eq!(err.to_string(), "cannot triangulate an empty point set");
}

#[test]
fn degenerate_collinear_input_does_not_panic() {
    let mut mesh = Delaunay::new();
    let diagonal: Vec<Point2<f64>> = (0..5)
        .map(|i| Point2::new(i as f64 * 20.0, i as f64 * 10.0))
        .collect();
    mesh.triangulate(&diagonal, 100.0, 100.0).unwrap();
    assert_eq!(mesh.vertices().len(), 5);
    for t in mesh.triangle_geometries() {
        // Any survivor must have a real (non-collinear) shape.
        assert!(t.circumcenter().is_some(), "degenerate triangle {}", t);
    }
}
