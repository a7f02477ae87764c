//! Shape records handed to the renderer, and their geometry.

use nalgebra::vector;
use serde::Serialize;

use super::steps::{ShapeOp, Stroke};
use crate::config::Canvas;
use crate::error::GeomError;
use crate::geom2::{self, Line2};
use crate::Pt2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    /// Drawn as its three edges.
    Triangle { vertices: [Pt2; 3] },
    Segment { from: Pt2, to: Pt2 },
    /// Infinite line, already clipped to the canvas.
    Line { from: Pt2, to: Pt2 },
    Circle { center: Pt2, radius: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shape {
    pub label: String,
    #[serde(flatten)]
    pub geometry: Geometry,
    pub stroke: Stroke,
}

/// Line AB as the segment spanning the canvas: `x = 0 .. width` for sloped
/// lines, `y = 0 .. height` for vertical ones.
///
/// Fails with `DegenerateConfiguration` when an endpoint is not finite.
pub fn line_across_canvas(a: Pt2, b: Pt2, canvas: Canvas) -> Result<(Pt2, Pt2), GeomError> {
    let line = Line2::through(a, b)?;
    let (from, to) = match (line, line.y_at(0.0), line.y_at(canvas.width)) {
        (Line2::Vertical { x }, ..) => (vector![x, 0.0], vector![x, canvas.height]),
        (_, Some(y0), Some(y1)) => (vector![0.0, y0], vector![canvas.width, y1]),
        _ => return Err(GeomError::DegenerateConfiguration),
    };
    if !(from.iter().chain(to.iter()).all(|v| v.is_finite())) {
        return Err(GeomError::DegenerateConfiguration);
    }
    Ok((from, to))
}

/// Geometry of one shape op on resolved inputs (same order as `ShapeOp::inputs`).
pub(crate) fn build(op: &ShapeOp, p: &[Pt2], canvas: Canvas) -> Result<Geometry, GeomError> {
    match op {
        ShapeOp::Triangle { .. } => Ok(Geometry::Triangle {
            vertices: [p[0], p[1], p[2]],
        }),
        ShapeOp::Segment { .. } => Ok(Geometry::Segment { from: p[0], to: p[1] }),
        ShapeOp::Line { .. } => {
            let (from, to) = line_across_canvas(p[0], p[1], canvas)?;
            Ok(Geometry::Line { from, to })
        }
        ShapeOp::Circumcircle { .. } => Ok(Geometry::Circle {
            center: geom2::circumcenter(p[0], p[1], p[2])?,
            radius: geom2::circumradius(p[0], p[1], p[2])?,
        }),
    }
}
