//! Tolerance defaults for the plane kernel (internal).
//!
//! Policy
//! - Defaults are fixed constants to avoid “tolerance juggling” at call sites.
//!   All tests are relative to the size of the input so that canvas-scale
//!   coordinates (hundreds of pixels) and unit-scale coordinates behave alike.

/// Two directions are parallel when `|d1 × d2| <= PARALLEL_EPS · |d1| · |d2|` (sine of the angle).
pub(crate) const PARALLEL_EPS: f64 = 1e-12;
/// A segment is zero-length when its length is at most this.
pub(crate) const LENGTH_EPS: f64 = 1e-12;
/// A triangle is collinear when `|2·area| <= COLLINEAR_EPS · (longest edge)²`.
pub(crate) const COLLINEAR_EPS: f64 = 1e-12;
