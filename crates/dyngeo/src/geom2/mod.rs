//! Plane geometry kernel (stateless, pure functions over `Pt2`).
//!
//! Purpose
//! - Compute everything the construction pipeline needs from point positions:
//!   line parameters, intersections, projections, reflections, rotations and
//!   triangle metrics/centers.
//! - Never mutate inputs; never hand back `NaN`/`Infinity` silently. Every
//!   arrangement without a finite answer is an explicit `GeomError`.
//!
//! Conventions
//! - Canvas coordinates (y grows downward). `rotate_point` keeps
//!   “counter-clockwise” in the visual sense by negating the angle.
//! - Tolerances are fixed constants in `cfg`, relative to input scale.
//!
//! Code cross-refs: `crate::construction` (consumer), `crate::error::GeomError`.

pub(crate) mod cfg;
mod lines;
mod triangle;

pub use lines::{
    distance, interp_point, line_line_intersect, midpoint, project_point, reflect_point,
    rotate_point, slope, y_intercept, Line2,
};
pub use triangle::{
    angle_at, area, circumcenter, circumradius, is_degenerate, orthocenter, perimeter,
    semiperimeter, signed_area,
};

#[cfg(test)]
mod tests;
