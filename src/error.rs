//! Error types for mesh construction.

use thiserror::Error;

/// Errors that can occur when building a triangulation.
///
/// Degenerate geometry (collinear corners, vertical edges) is not an error;
/// the predicates resolve those cases to `false` instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// No input points were supplied, so there is no bounding box to seed from.
    #[error("cannot triangulate an empty point set")]
    EmptyInput,

    /// An input point has a NaN or infinite coordinate.
    #[error("input point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input slice.
        index: usize,
    },

    /// The clipping region is negative or non-finite.
    #[error("invalid clipping bounds {width} x {height}")]
    InvalidBounds {
        /// Requested region width.
        width: f64,
        /// Requested region height.
        height: f64,
    },

    /// The super-triangle margin is too small (or not finite) for the
    /// super-triangle to enclose the input.
    #[error("super-triangle margin {margin} is below the minimum of {minimum}")]
    InvalidMargin {
        /// Configured margin.
        margin: f64,
        /// Smallest accepted margin.
        minimum: f64,
    },
}
