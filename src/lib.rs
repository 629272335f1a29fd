//! featmesh - Delaunay meshes of 2D feature points
//!
//! Builds a Delaunay triangulation of detected image features with the
//! incremental Bowyer-Watson algorithm, clipped to the image rectangle.
//! Coordinates are floating-point and every comparison goes through an
//! explicit relative [`Tolerance`], so pixel-scale inputs behave the same as
//! unit-scale ones.

pub mod error;
pub mod primitives;
pub mod tolerance;
pub mod triangulation;

pub use error::MeshError;
pub use primitives::{Edge2, Point2, Triangle2, Vec2};
pub use tolerance::{almost_equal, Tolerance};
pub use triangulation::{Delaunay, DelaunayConfig, Edge, Triangle};
