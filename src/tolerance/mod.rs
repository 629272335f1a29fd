//! Tolerance-aware scalar comparisons.
//!
//! Every approximate predicate in the crate funnels through [`Tolerance`].
//! The policy is relative: the allowed difference grows with operand
//! magnitude, so pixel coordinates in the thousands compare as reliably as
//! unit-scale values.

mod scalar;

pub use scalar::{almost_equal, Tolerance, DEFAULT_ULPS};
