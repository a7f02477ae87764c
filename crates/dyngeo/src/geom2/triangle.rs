//! Triangle metrics and centers.
//!
//! Degenerate (collinear) triangles are rejected up front by `is_degenerate`
//! so that orthocenter/circumcenter/circumradius never divide by a vanishing
//! quantity. The test is scale-relative, see `cfg::COLLINEAR_EPS`.
//!
//! Orientation follows `rotate_point`: "counter-clockwise" means as seen on
//! the y-down canvas, so `signed_area` is the shoelace sum with its sign
//! flipped. `signed_area(a, b, rotate_point(a, θ, b)) > 0` for `0 < θ < π`.

use super::cfg::{COLLINEAR_EPS, LENGTH_EPS};
use super::lines::{distance, is_zero_length, line_line_intersect, midpoint, project_point};
use crate::error::GeomError;
use crate::Pt2;

/// Signed area; positive iff A, B, C run counter-clockwise on the canvas.
#[inline]
pub fn signed_area(a: Pt2, b: Pt2, c: Pt2) -> f64 {
    (a.y * b.x + b.y * c.x + c.y * a.x - a.x * b.y - b.x * c.y - c.x * a.y) / 2.0
}

#[inline]
pub fn area(a: Pt2, b: Pt2, c: Pt2) -> f64 {
    signed_area(a, b, c).abs()
}

#[inline]
pub fn perimeter(a: Pt2, b: Pt2, c: Pt2) -> f64 {
    distance(a, b) + distance(b, c) + distance(c, a)
}

#[inline]
pub fn semiperimeter(a: Pt2, b: Pt2, c: Pt2) -> f64 {
    perimeter(a, b, c) / 2.0
}

/// Unsigned angle ∠ABC at vertex `b`, in `[0, π]`.
pub fn angle_at(a: Pt2, b: Pt2, c: Pt2) -> Result<f64, GeomError> {
    let u = a - b;
    let v = c - b;
    if is_zero_length(u) || is_zero_length(v) {
        return Err(GeomError::ZeroLengthReference);
    }
    let cross = u.x * v.y - u.y * v.x;
    Ok(cross.abs().atan2(u.dot(&v)))
}

/// True when the three points are collinear within tolerance (coincident points included).
pub fn is_degenerate(a: Pt2, b: Pt2, c: Pt2) -> bool {
    let longest = (b - a)
        .norm_squared()
        .max((c - b).norm_squared())
        .max((a - c).norm_squared());
    if !(longest.sqrt() > LENGTH_EPS) {
        return true;
    }
    let (u, v) = (b - a, c - a);
    !((u.x * v.y - u.y * v.x).abs() > COLLINEAR_EPS * longest)
}

/// Intersection of the altitude from `a` and the altitude from `b`.
pub fn orthocenter(a: Pt2, b: Pt2, c: Pt2) -> Result<Pt2, GeomError> {
    if is_degenerate(a, b, c) {
        return Err(GeomError::DegenerateConfiguration);
    }
    let d = project_point(b, c, a).map_err(|_| GeomError::DegenerateConfiguration)?;
    let e = project_point(c, a, b).map_err(|_| GeomError::DegenerateConfiguration)?;
    line_line_intersect(a, d, b, e).map_err(|_| GeomError::DegenerateConfiguration)
}

/// `|BC| / (2·sin ∠BAC)`.
pub fn circumradius(a: Pt2, b: Pt2, c: Pt2) -> Result<f64, GeomError> {
    if is_degenerate(a, b, c) {
        return Err(GeomError::DegenerateConfiguration);
    }
    let s = angle_at(b, a, c)
        .map_err(|_| GeomError::DegenerateConfiguration)?
        .sin();
    if !(s > COLLINEAR_EPS) {
        return Err(GeomError::DegenerateConfiguration);
    }
    Ok(distance(b, c) / (2.0 * s))
}

/// Orthocenter of the medial triangle.
pub fn circumcenter(a: Pt2, b: Pt2, c: Pt2) -> Result<Pt2, GeomError> {
    if is_degenerate(a, b, c) {
        return Err(GeomError::DegenerateConfiguration);
    }
    orthocenter(midpoint(b, c), midpoint(c, a), midpoint(a, b))
}
