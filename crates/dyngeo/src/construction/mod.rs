//! Construction pipeline: free-point positions → derived points and shapes.
//!
//! Purpose
//! - Re-evaluate a fixed, declared sequence of kernel calls once per frame.
//! - Turn kernel failures into per-element omissions: a failed step is left
//!   out of this frame's output (and so are elements depending on it), while
//!   everything else is still computed. The next frame starts from scratch,
//!   so recovery is automatic once the points leave the degenerate position.
//!
//! Evaluation is a pure function of the free-point positions and the
//! construction; two runs on identical input give bit-identical output.
//!
//! Code cross-refs: `steps::{Construction, PointStep, ShapeStep}`, `crate::geom2`.

mod shapes;
pub mod steps;

pub use shapes::{line_across_canvas, Geometry, Shape};
pub use steps::{
    Construction, PointOp, PointRef, PointStep, ShapeOp, ShapeStep, Stroke, Visibility,
};

use serde::Serialize;

use crate::config::Canvas;
use crate::error::StepError;
use crate::point::DerivedPoint;
use crate::Pt2;

/// Per-frame evaluation switches coming from outside the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvalOptions {
    pub canvas: Canvas,
    pub show_circumcircles: bool,
}

/// Everything the pipeline produced for one frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConstructionOutput {
    /// Successfully derived points, in step order.
    pub points: Vec<DerivedPoint>,
    pub shapes: Vec<Shape>,
    /// Elements left out of this frame, in evaluation order.
    pub omitted: Vec<StepError>,
}

impl ConstructionOutput {
    pub fn point(&self, label: &str) -> Option<&DerivedPoint> {
        self.points.iter().find(|p| p.label == label)
    }

    pub fn shape(&self, label: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.label == label)
    }

    pub fn is_omitted(&self, label: &str) -> bool {
        self.omitted.iter().any(|e| e.element() == label)
    }
}

/// Derived-point slots of the frame being evaluated.
struct Slots<'a> {
    free: &'a [Pt2],
    steps: &'a [PointStep],
    derived: Vec<Option<Pt2>>,
}

impl Slots<'_> {
    /// Panics on out-of-range references; `Construction::validate` rules those out.
    fn resolve(&self, element: &str, inputs: &[PointRef]) -> Result<Vec<Pt2>, StepError> {
        inputs
            .iter()
            .map(|r| match *r {
                PointRef::Free(i) => Ok(self.free[i]),
                PointRef::Derived(j) => self.derived[j].ok_or_else(|| StepError::Upstream {
                    element: element.to_string(),
                    missing: self.steps[j].label.clone(),
                }),
            })
            .collect()
    }
}

impl Construction {
    /// Evaluate all steps against the given free-point positions.
    pub fn evaluate(&self, free: &[Pt2], opts: EvalOptions) -> ConstructionOutput {
        let mut out = ConstructionOutput::default();
        let mut slots = Slots {
            free,
            steps: &self.points,
            derived: Vec::with_capacity(self.points.len()),
        };

        for step in &self.points {
            let result = slots.resolve(&step.label, &step.op.inputs()).and_then(|p| {
                step.op.apply(&p).map_err(|source| StepError::Geometry {
                    element: step.label.clone(),
                    source,
                })
            });
            match result {
                Ok(pos) => {
                    slots.derived.push(Some(pos));
                    out.points
                        .push(DerivedPoint::new(pos, step.label.as_str(), step.style));
                }
                Err(err) => {
                    tracing::debug!(element = %step.label, error = %err, "omitting point");
                    slots.derived.push(None);
                    out.omitted.push(err);
                }
            }
        }

        for step in &self.shapes {
            if step.visibility == Visibility::WithCircumcircles && !opts.show_circumcircles {
                continue;
            }
            let result = slots.resolve(&step.label, &step.op.inputs()).and_then(|p| {
                shapes::build(&step.op, &p, opts.canvas).map_err(|source| StepError::Geometry {
                    element: step.label.clone(),
                    source,
                })
            });
            match result {
                Ok(geometry) => out.shapes.push(Shape {
                    label: step.label.clone(),
                    geometry,
                    stroke: step.stroke,
                }),
                Err(err) => {
                    tracing::debug!(element = %step.label, error = %err, "omitting shape");
                    out.omitted.push(err);
                }
            }
        }
        out
    }
}
