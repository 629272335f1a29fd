//! Floating-point geometric value types.
//!
//! These types carry coordinates by value. The triangulator stores
//! index-based handles instead and resolves them into these types when a
//! predicate needs geometry.

mod edge2;
mod point2;
mod triangle2;
mod vec2;

pub use edge2::Edge2;
pub use point2::Point2;
pub use triangle2::Triangle2;
pub use vec2::Vec2;
