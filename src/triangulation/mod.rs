//! Delaunay triangulation of 2D feature points.
//!
//! [`Delaunay`] runs the Bowyer-Watson algorithm over a frozen point buffer,
//! removes the bootstrap super-triangle, and clips the result to an image
//! rectangle. Triangles and edges are exposed as index handles into
//! [`Delaunay::points`]; resolve them with [`Delaunay::triangle`] and
//! [`Delaunay::edge`] when geometry is needed.

mod config;
mod delaunay;
mod handles;

pub use config::{DelaunayConfig, MIN_SUPER_TRIANGLE_MARGIN};
pub use delaunay::Delaunay;
pub use handles::{Edge, Triangle};
