//! Point model: free (user-draggable) points and derived (per-frame) points.
//!
//! - `FreePoint`: the only mutable geometry in a session. Its position changes
//!   exclusively through the drag protocol `begin_drag` → `update_drag`.
//! - `DerivedPoint`: output of the construction pipeline; rebuilt every frame,
//!   never mutated afterwards.
//! - `FreePointView`: what the renderer needs to draw a free point, including
//!   whether it is the focused one (focus itself lives in `interaction::Focus`).

use nalgebra::vector;
use serde::{Deserialize, Serialize};

use crate::geom2::distance;
use crate::Pt2;

/// Label anchor offset for free points (relative to the point).
const FREE_LABEL_OFFSET: [f64; 2] = [15.0, 20.0];
/// Label anchor offset for derived points.
const DERIVED_LABEL_OFFSET: [f64; 2] = [5.0, 15.0];

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const LIGHT_RED: Rgb = Rgb(255, 191, 191);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
}

/// Fill colour and disc radius of a derived point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub color: Rgb,
    pub radius: f64,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            radius: 2.0,
        }
    }
}

/// User-draggable point.
///
/// Invariant: while dragged, `position == pointer - drag_offset` after every
/// `update_drag`; nothing else writes `position`.
#[derive(Clone, Debug, PartialEq)]
pub struct FreePoint {
    position: Pt2,
    label: String,
    drag_offset: Pt2,
}

impl FreePoint {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self::at(vector![x, y], label)
    }

    pub fn at(position: Pt2, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
            drag_offset: Pt2::zeros(),
        }
    }

    #[inline]
    pub fn position(&self) -> Pt2 {
        self.position
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn drag_offset(&self) -> Pt2 {
        self.drag_offset
    }

    /// True iff the pointer lies strictly inside the hit radius.
    #[inline]
    pub fn hit_test(&self, pointer: Pt2, radius: f64) -> bool {
        distance(pointer, self.position) < radius
    }

    /// Record where inside the point the pointer grabbed it.
    pub fn begin_drag(&mut self, pointer: Pt2) {
        self.drag_offset = pointer - self.position;
    }

    pub fn update_drag(&mut self, pointer: Pt2) {
        self.position = pointer - self.drag_offset;
    }

    /// Render record; `focused` points draw their front disc at the outer radius.
    pub fn view(&self, focused: bool, inner_radius: f64, outer_radius: f64) -> FreePointView {
        FreePointView {
            position: self.position,
            label: self.label.clone(),
            focused,
            back_radius: outer_radius,
            front_radius: if focused { outer_radius } else { inner_radius },
            back_color: Rgb::LIGHT_RED,
            front_color: Rgb::RED,
            label_anchor: self.position + Pt2::from(FREE_LABEL_OFFSET),
        }
    }
}

/// Free point as handed to the renderer for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FreePointView {
    pub position: Pt2,
    pub label: String,
    pub focused: bool,
    pub back_radius: f64,
    pub front_radius: f64,
    pub back_color: Rgb,
    pub front_color: Rgb,
    pub label_anchor: Pt2,
}

/// Point computed by the construction pipeline for the current frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedPoint {
    pub position: Pt2,
    pub label: String,
    pub style: PointStyle,
    pub label_anchor: Pt2,
}

impl DerivedPoint {
    pub fn new(position: Pt2, label: impl Into<String>, style: PointStyle) -> Self {
        Self {
            position,
            label: label.into(),
            style,
            label_anchor: position + Pt2::from(DERIVED_LABEL_OFFSET),
        }
    }
}
