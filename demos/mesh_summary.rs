//! Triangulates a synthetic frame of feature points and prints a summary.
//!
//! Run with `RUST_LOG=featmesh=debug cargo run --example mesh_summary` to
//! see the triangulator's logging.

use std::sync::Once;

use featmesh::{Delaunay, DelaunayConfig, MeshError, Point2};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

/// Corners on a slightly perturbed grid, a few of them outside the frame.
fn synthetic_features(width: f64, height: f64) -> Vec<Point2<f64>> {
    let mut points = Vec::new();
    for row in 0..6 {
        for col in 0..8 {
            let wobble = ((row * 7 + col * 13) % 11) as f64 - 5.0;
            points.push(Point2::new(
                col as f64 * width / 7.0 + wobble * 3.1 - 8.0,
                row as f64 * height / 5.0 - wobble * 2.3 + 4.0,
            ));
        }
    }
    points
}

fn main() -> Result<(), MeshError> {
    init_tracing();

    let (width, height) = (640.0, 480.0);
    let features = synthetic_features(width, height);

    let mut mesh = Delaunay::with_config(DelaunayConfig::default().with_skinny_angle(20.0));
    let triangle_count = mesh.triangulate(&features, width, height)?.len();

    println!("features:        {}", features.len());
    println!("in-frame:        {}", mesh.vertices().len());
    println!("triangles:       {}", triangle_count);
    println!(
        "edges:           {} ({} distinct)",
        mesh.edges().len(),
        mesh.unique_edges().len()
    );
    println!("skinny (< 20°):  {}", mesh.skinny_triangles().count());

    if let Some((angle, worst)) = mesh
        .triangle_geometries()
        .filter_map(|t| t.min_angle_degrees().map(|angle| (angle, t)))
        .min_by(|a, b| a.0.total_cmp(&b.0))
    {
        println!("smallest angle:  {:.2}° in {}", angle, worst);
    }

    if let Some(super_triangle) = mesh.super_triangle() {
        println!("super-triangle:  {}", super_triangle);
    }

    // An empty frame is reported rather than meshed.
    if let Err(err) = mesh.triangulate(&[], width, height) {
        println!("empty frame:     {}", err);
    }

    Ok(())
}
