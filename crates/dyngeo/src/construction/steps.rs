//! Declarative construction steps.
//!
//! A `Construction` is an ordered list of point steps followed by an ordered
//! list of shape steps. Inputs are `PointRef`s into the free-point registry or
//! into the outputs of *earlier* point steps, so evaluation is a single pass
//! in declaration order (no dependency graph).

use serde::{Deserialize, Serialize};

use crate::error::{ConstructionError, GeomError};
use crate::geom2;
use crate::point::{PointStyle, Rgb};
use crate::Pt2;

/// Reference to an input point of a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointRef {
    /// Index into the free-point registry.
    Free(usize),
    /// Index of an earlier point step.
    Derived(usize),
}

/// Kernel operation producing one derived point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointOp {
    /// `point` rotated about `center` by `angle` radians counter-clockwise.
    Rotate {
        center: PointRef,
        point: PointRef,
        angle: f64,
    },
    /// Intersection of lines AB and CD.
    Intersect {
        a: PointRef,
        b: PointRef,
        c: PointRef,
        d: PointRef,
    },
    Interp {
        a: PointRef,
        b: PointRef,
        t: f64,
    },
    /// Projection of `c` onto line AB.
    Project {
        a: PointRef,
        b: PointRef,
        c: PointRef,
    },
    /// Reflection of `c` across line AB.
    Reflect {
        a: PointRef,
        b: PointRef,
        c: PointRef,
    },
    Orthocenter {
        a: PointRef,
        b: PointRef,
        c: PointRef,
    },
    Circumcenter {
        a: PointRef,
        b: PointRef,
        c: PointRef,
    },
}

impl PointOp {
    /// Inputs in the positional order expected by `apply`.
    pub fn inputs(&self) -> Vec<PointRef> {
        match *self {
            PointOp::Rotate { center, point, .. } => vec![center, point],
            PointOp::Intersect { a, b, c, d } => vec![a, b, c, d],
            PointOp::Interp { a, b, .. } => vec![a, b],
            PointOp::Project { a, b, c }
            | PointOp::Reflect { a, b, c }
            | PointOp::Orthocenter { a, b, c }
            | PointOp::Circumcenter { a, b, c } => vec![a, b, c],
        }
    }

    /// Evaluate on resolved input positions (same order as `inputs`).
    pub(crate) fn apply(&self, p: &[Pt2]) -> Result<Pt2, GeomError> {
        match *self {
            PointOp::Rotate { angle, .. } => Ok(geom2::rotate_point(p[0], angle, p[1])),
            PointOp::Intersect { .. } => geom2::line_line_intersect(p[0], p[1], p[2], p[3]),
            PointOp::Interp { t, .. } => Ok(geom2::interp_point(p[0], p[1], t)),
            PointOp::Project { .. } => geom2::project_point(p[0], p[1], p[2]),
            PointOp::Reflect { .. } => geom2::reflect_point(p[0], p[1], p[2]),
            PointOp::Orthocenter { .. } => geom2::orthocenter(p[0], p[1], p[2]),
            PointOp::Circumcenter { .. } => geom2::circumcenter(p[0], p[1], p[2]),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointStep {
    pub label: String,
    pub op: PointOp,
    #[serde(default)]
    pub style: PointStyle,
}

/// Stroke colour and line weight of a shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgb,
    pub weight: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            weight: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeOp {
    Triangle {
        a: PointRef,
        b: PointRef,
        c: PointRef,
    },
    Segment {
        a: PointRef,
        b: PointRef,
    },
    /// Infinite line AB, clipped to the canvas.
    Line {
        a: PointRef,
        b: PointRef,
    },
    Circumcircle {
        a: PointRef,
        b: PointRef,
        c: PointRef,
    },
}

impl ShapeOp {
    pub fn inputs(&self) -> Vec<PointRef> {
        match *self {
            ShapeOp::Segment { a, b } | ShapeOp::Line { a, b } => vec![a, b],
            ShapeOp::Triangle { a, b, c } | ShapeOp::Circumcircle { a, b, c } => vec![a, b, c],
        }
    }
}

/// When a shape is emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Always,
    /// Only while the “show circumcircles” toggle is on.
    WithCircumcircles,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeStep {
    pub label: String,
    pub op: ShapeOp,
    #[serde(default)]
    pub stroke: Stroke,
    #[serde(default)]
    pub visibility: Visibility,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Construction {
    pub points: Vec<PointStep>,
    pub shapes: Vec<ShapeStep>,
}

impl Construction {
    /// Rotate each vertex of ABC about the next by `angle` and intersect AP with BQ.
    ///
    /// Free points: 0 = A, 1 = B, 2 = C. Derived: P (B about C), Q (C about A),
    /// R (A about B), F = AP ∩ BQ. With `angle = π/3` the triangles BCP, CAQ,
    /// ABR are equilateral and AP, BQ, CR all pass through F.
    pub fn rotation_triangles(angle: f64) -> Self {
        use PointRef::{Derived, Free};
        let (a, b, c) = (Free(0), Free(1), Free(2));
        let (p, q, r) = (Derived(0), Derived(1), Derived(2));
        let point = |label: &str, op: PointOp| PointStep {
            label: label.to_string(),
            op,
            style: PointStyle::default(),
        };
        let points = vec![
            point("P", PointOp::Rotate { center: c, point: b, angle }),
            point("Q", PointOp::Rotate { center: a, point: c, angle }),
            point("R", PointOp::Rotate { center: b, point: a, angle }),
            point("F", PointOp::Intersect { a, b: p, c: b, d: q }),
        ];

        let shape = |label: &str, op: ShapeOp, color: Rgb, visibility: Visibility| ShapeStep {
            label: label.to_string(),
            op,
            stroke: Stroke { color, weight: 1.0 },
            visibility,
        };
        let circle = |label: &str, a, b, c| {
            shape(
                label,
                ShapeOp::Circumcircle { a, b, c },
                Rgb::ORANGE,
                Visibility::WithCircumcircles,
            )
        };
        let triangle = |label: &str, a, b, c| {
            shape(label, ShapeOp::Triangle { a, b, c }, Rgb::BLACK, Visibility::Always)
        };
        let line =
            |label: &str, a, b| shape(label, ShapeOp::Line { a, b }, Rgb::BLUE, Visibility::Always);
        let shapes = vec![
            circle("circumcircle BCP", b, c, p),
            circle("circumcircle CAQ", c, a, q),
            circle("circumcircle ABR", a, b, r),
            triangle("triangle BCP", b, c, p),
            triangle("triangle CAQ", c, a, q),
            triangle("triangle ABR", a, b, r),
            line("line AP", a, p),
            line("line BQ", b, q),
            line("line CR", c, r),
        ];
        Self { points, shapes }
    }

    /// Check that every reference resolves: free indices are in range and
    /// derived references point to earlier steps.
    pub fn validate(&self, free_len: usize) -> Result<(), ConstructionError> {
        let check = |step: &str, inputs: Vec<PointRef>, derived_len: usize| {
            for r in inputs {
                match r {
                    PointRef::Free(index) if index >= free_len => {
                        return Err(ConstructionError::UnknownFreePoint {
                            step: step.to_string(),
                            index,
                            len: free_len,
                        });
                    }
                    PointRef::Derived(index) if index >= derived_len => {
                        return Err(ConstructionError::ForwardReference {
                            step: step.to_string(),
                            index,
                        });
                    }
                    _ => {}
                }
            }
            Ok(())
        };
        for (k, s) in self.points.iter().enumerate() {
            check(&s.label, s.op.inputs(), k)?;
        }
        for s in &self.shapes {
            check(&s.label, s.op.inputs(), self.points.len())?;
        }
        Ok(())
    }
}
