//! Lines, projections and rigid motions of single points.
//!
//! Conventions
//! - Coordinates are canvas coordinates: x grows to the right, y grows downward.
//! - Angles passed to `rotate_point` are counter-clockwise *as seen on the
//!   canvas*, i.e. in the usual mathematical orientation of the picture. The
//!   rotation matrix is therefore applied with the negated angle.
//! - Slope/intercept use the canvas axes directly: `y = m·x + k`. They are
//!   undefined for vertical lines, so `Line2` keeps those as a separate case.
//!   `Line2::through` also files nearly vertical lines (direction within
//!   `PARALLEL_EPS` of the y axis) under `Vertical`, so `m` stays bounded.

use nalgebra::{matrix, Matrix2};

use super::cfg::{LENGTH_EPS, PARALLEL_EPS};
use crate::error::GeomError;
use crate::Pt2;

/// Line through two distinct points, in slope/intercept form unless vertical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line2 {
    /// `y = m·x + k`.
    Sloped { m: f64, k: f64 },
    /// `x = x`.
    Vertical { x: f64 },
}

impl Line2 {
    /// Line through `a` and `b`; fails when the points coincide.
    pub fn through(a: Pt2, b: Pt2) -> Result<Self, GeomError> {
        let u = b - a;
        if is_zero_length(u) {
            return Err(GeomError::ZeroLengthReference);
        }
        if u.x.abs() <= PARALLEL_EPS * u.norm() {
            return Ok(Line2::Vertical { x: a.x });
        }
        match (slope(a, b), y_intercept(a, b)) {
            (Some(m), Some(k)) => Ok(Line2::Sloped { m, k }),
            _ => Ok(Line2::Vertical { x: a.x }),
        }
    }

    /// `y` on the line at `x`; `None` for vertical lines.
    #[inline]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            Line2::Sloped { m, k } => Some(m * x + k),
            Line2::Vertical { .. } => None,
        }
    }
}

#[inline]
pub(crate) fn is_zero_length(v: Pt2) -> bool {
    !(v.norm() > LENGTH_EPS)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Pt2, b: Pt2) -> f64 {
    (a - b).norm()
}

/// Slope of line AB; `None` when the line is vertical (`a.x == b.x`).
#[inline]
pub fn slope(a: Pt2, b: Pt2) -> Option<f64> {
    if a.x == b.x {
        return None;
    }
    Some((a.y - b.y) / (a.x - b.x))
}

/// y-intercept of line AB; `None` when the line is vertical.
#[inline]
pub fn y_intercept(a: Pt2, b: Pt2) -> Option<f64> {
    if a.x == b.x {
        return None;
    }
    Some((a.x * b.y - a.y * b.x) / (a.x - b.x))
}

/// Intersection of the infinite lines AB and CD.
///
/// Fails with `ParallelLines` when the directions agree (two vertical lines
/// included, coincident lines too) and with `ZeroLengthReference` when either
/// pair of points coincides.
pub fn line_line_intersect(a: Pt2, b: Pt2, c: Pt2, d: Pt2) -> Result<Pt2, GeomError> {
    let (u, v) = (b - a, d - c);
    if is_zero_length(u) || is_zero_length(v) {
        return Err(GeomError::ZeroLengthReference);
    }
    if (u.x * v.y - u.y * v.x).abs() <= PARALLEL_EPS * u.norm() * v.norm() {
        return Err(GeomError::ParallelLines);
    }
    // a + s·u = c + t·v, solved in direction form so vertical lines need no branch
    let m = Matrix2::from_columns(&[u, -v]);
    let st = m.try_inverse().ok_or(GeomError::ParallelLines)? * (c - a);
    let p = a + u * st.x;
    if !(p.x.is_finite() && p.y.is_finite()) {
        return Err(GeomError::ParallelLines);
    }
    Ok(p)
}

/// `a + t·(b − a)`; any real `t` (extrapolation included).
#[inline]
pub fn interp_point(a: Pt2, b: Pt2, t: f64) -> Pt2 {
    a + (b - a) * t
}

/// Midpoint of AB.
#[inline]
pub fn midpoint(a: Pt2, b: Pt2) -> Pt2 {
    interp_point(a, b, 0.5)
}

/// Orthogonal projection of `c` onto the infinite line AB.
pub fn project_point(a: Pt2, b: Pt2, c: Pt2) -> Result<Pt2, GeomError> {
    let v = b - a;
    if is_zero_length(v) {
        return Err(GeomError::ZeroLengthReference);
    }
    let u = c - a;
    Ok(a + v * (u.dot(&v) / v.norm_squared()))
}

/// Reflection of `c` across the line AB (point reflection through its projection).
pub fn reflect_point(a: Pt2, b: Pt2, c: Pt2) -> Result<Pt2, GeomError> {
    let p = project_point(a, b, c)?;
    Ok(p * 2.0 - c)
}

/// Rotate `p` about `center` by `angle` radians counter-clockwise on the canvas.
pub fn rotate_point(center: Pt2, angle: f64, p: Pt2) -> Pt2 {
    // y points down on the canvas: negate to keep the visual sense counter-clockwise
    let t = -angle;
    let rot: Matrix2<f64> = matrix![t.cos(), -t.sin(); t.sin(), t.cos()];
    rot * (p - center) + center
}
