//! Scalar approximate equality.

use num_traits::Float;

/// Default relative tolerance, in multiples of the type's machine epsilon.
pub const DEFAULT_ULPS: f64 = 4.0;

/// A relative tolerance policy for comparing floating-point scalars.
///
/// Two finite values `x` and `y` are considered equal when
/// `|x - y| <= relative * max(1, |x|, |y|)`. Non-finite operands never
/// compare equal, not even to themselves; callers rely on this to reject
/// NaN and infinite intermediate results from degenerate geometry.
///
/// # Example
///
/// ```
/// use featmesh::tolerance::Tolerance;
///
/// let tol: Tolerance<f64> = Tolerance::default();
/// assert!(tol.almost_equal(1000.0, 1000.0 + 1e-13));
/// assert!(!tol.almost_equal(1000.0, 1000.001));
/// assert!(!tol.almost_equal(f64::NAN, f64::NAN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<F> {
    /// Relative tolerance, scaled by `max(1, |x|, |y|)` at comparison time.
    pub relative: F,
}

impl<F: Float> Tolerance<F> {
    /// Creates a tolerance with the given relative bound.
    #[inline]
    pub fn new(relative: F) -> Self {
        Self { relative }
    }

    /// Creates a tolerance of `ulps` machine epsilons.
    #[inline]
    pub fn from_ulps(ulps: F) -> Self {
        Self {
            relative: F::epsilon() * ulps,
        }
    }

    /// Returns `true` if `x` and `y` are equal within this tolerance.
    ///
    /// Symmetric, reflexive for finite values, and `false` whenever either
    /// operand is NaN or infinite.
    #[inline]
    pub fn almost_equal(self, x: F, y: F) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let scale = F::one().max(x.abs()).max(y.abs());
        (x - y).abs() <= self.relative * scale
    }
}

impl<F: Float> Default for Tolerance<F> {
    fn default() -> Self {
        Self::from_ulps(F::from(DEFAULT_ULPS).unwrap())
    }
}

/// Compares two scalars using the default [`Tolerance`].
#[inline]
pub fn almost_equal<F: Float>(x: F, y: F) -> bool {
    Tolerance::default().almost_equal(x, y)
}
