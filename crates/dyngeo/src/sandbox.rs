//! Per-frame driver tying the free-point registry, focus and pipeline together.
//!
//! Ordering contract (single thread, no suspension points):
//! - `handle` applies pointer events immediately and never recomputes geometry.
//! - `frame` resolves hover (unless dragging), evaluates the construction once
//!   against the current free-point positions and returns everything the
//!   renderer needs. Results are therefore consistent within a frame.

use serde::Serialize;

use crate::config::{ConfigError, SandboxCfg};
use crate::construction::{Construction, ConstructionOutput, EvalOptions};
use crate::interaction::{Cursor, Focus, PointerEvent};
use crate::point::{FreePoint, FreePointView};
use crate::Pt2;

/// Renderer input for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub index: u64,
    pub focus: Focus,
    pub cursor: Cursor,
    pub free_points: Vec<FreePointView>,
    #[serde(flatten)]
    pub construction: ConstructionOutput,
}

#[derive(Clone, Debug)]
pub struct Sandbox {
    cfg: SandboxCfg,
    points: Vec<FreePoint>,
    construction: Construction,
    focus: Focus,
    pointer: Pt2,
    show_circumcircles: bool,
    frames: u64,
}

impl Sandbox {
    /// Sandbox running the rotated-triangles construction at `cfg.rotation_deg`.
    pub fn new(cfg: SandboxCfg) -> Result<Self, ConfigError> {
        let construction = Construction::rotation_triangles(cfg.rotation_rad());
        Self::with_construction(cfg, construction)
    }

    pub fn with_construction(
        cfg: SandboxCfg,
        construction: Construction,
    ) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let points = cfg.build_free_points();
        construction.validate(points.len())?;
        tracing::debug!(
            free = points.len(),
            derived = construction.points.len(),
            shapes = construction.shapes.len(),
            "sandbox ready"
        );
        Ok(Self {
            show_circumcircles: cfg.show_circumcircles,
            cfg,
            points,
            construction,
            focus: Focus::Idle,
            // off-canvas until the first pointer sample arrives
            pointer: Pt2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            frames: 0,
        })
    }

    #[inline]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[inline]
    pub fn free_points(&self) -> &[FreePoint] {
        &self.points
    }

    #[inline]
    pub fn pointer(&self) -> Pt2 {
        self.pointer
    }

    #[inline]
    pub fn cfg(&self) -> &SandboxCfg {
        &self.cfg
    }

    pub fn set_show_circumcircles(&mut self, on: bool) {
        self.show_circumcircles = on;
    }

    /// Apply a pointer event; geometry is recomputed on the next `frame`.
    pub fn handle(&mut self, event: PointerEvent) {
        self.pointer = event.position();
        self.focus = self
            .focus
            .on_event(&mut self.points, event, self.cfg.outer_radius);
    }

    /// Advance one frame and produce the renderer input.
    pub fn frame(&mut self) -> Frame {
        self.focus = self
            .focus
            .resolve(&self.points, self.pointer, self.cfg.outer_radius);
        let positions: Vec<Pt2> = self.points.iter().map(FreePoint::position).collect();
        let construction = self.construction.evaluate(
            &positions,
            EvalOptions {
                canvas: self.cfg.canvas,
                show_circumcircles: self.show_circumcircles,
            },
        );
        let current = self.focus.current();
        let free_points = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                p.view(
                    current == Some(i),
                    self.cfg.inner_radius,
                    self.cfg.outer_radius,
                )
            })
            .collect();
        let frame = Frame {
            index: self.frames,
            focus: self.focus,
            cursor: self.focus.cursor(),
            free_points,
            construction,
        };
        self.frames += 1;
        frame
    }
}
