//! Interaction state machine: hover, drag and pointer events over free points.
//!
//! States
//! - `Idle`: pointer over no free point, no drag.
//! - `Hovering(i)`: pointer over free point `i` (first match in registry order).
//! - `Dragging(i)`: drag in progress; the pointer may leave the hit radius.
//!
//! `Focus` is a plain value: every transition takes the current state and
//! returns the next one, so the owner (see `crate::sandbox`) decides where it
//! lives. Point indices refer to the free-point registry passed alongside.
//! An out-of-range index is a programming error and panics.

use serde::{Deserialize, Serialize};

use crate::point::FreePoint;
use crate::Pt2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "point", rename_all = "snake_case")]
pub enum Focus {
    #[default]
    Idle,
    Hovering(usize),
    Dragging(usize),
}

/// Pointer input, in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvent {
    Move(Pt2),
    Down(Pt2),
    Up(Pt2),
}

impl PointerEvent {
    #[inline]
    pub fn position(&self) -> Pt2 {
        match *self {
            PointerEvent::Move(p) | PointerEvent::Down(p) | PointerEvent::Up(p) => p,
        }
    }
}

/// Cursor affordance for the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    Arrow,
    Move,
}

/// First free point (registry order) whose hit radius contains `pointer`.
pub fn hovered(points: &[FreePoint], pointer: Pt2, hit_radius: f64) -> Option<usize> {
    points.iter().position(|p| p.hit_test(pointer, hit_radius))
}

impl Focus {
    /// The focused (hovered or dragged) point, if any.
    #[inline]
    pub fn current(self) -> Option<usize> {
        match self {
            Focus::Idle => None,
            Focus::Hovering(i) | Focus::Dragging(i) => Some(i),
        }
    }

    #[inline]
    pub fn is_dragging(self) -> bool {
        matches!(self, Focus::Dragging(_))
    }

    #[inline]
    pub fn cursor(self) -> Cursor {
        match self.current() {
            Some(_) => Cursor::Move,
            None => Cursor::Arrow,
        }
    }

    /// Per-frame hover resolution. Suppressed while dragging so the focus
    /// does not jump to other points the pointer passes over.
    pub fn resolve(self, points: &[FreePoint], pointer: Pt2, hit_radius: f64) -> Focus {
        if self.is_dragging() {
            return self;
        }
        match hovered(points, pointer, hit_radius) {
            Some(i) => Focus::Hovering(i),
            None => Focus::Idle,
        }
    }

    /// Apply one pointer event. Only `Dragging` writes free-point positions.
    pub fn on_event(
        self,
        points: &mut [FreePoint],
        event: PointerEvent,
        hit_radius: f64,
    ) -> Focus {
        let next = match (self, event) {
            // a second down mid-drag (lost up) re-anchors the offset
            (Focus::Hovering(i) | Focus::Dragging(i), PointerEvent::Down(p)) => {
                points[i].begin_drag(p);
                Focus::Dragging(i)
            }
            (Focus::Dragging(i), PointerEvent::Move(p)) => {
                points[i].update_drag(p);
                Focus::Dragging(i)
            }
            (_, PointerEvent::Up(p)) => Focus::Idle.resolve(points, p, hit_radius),
            // down over nothing, or moves without a drag: hover is refreshed next frame
            (state, _) => state,
        };
        if next != self {
            tracing::trace!(from = ?self, to = ?next, "focus transition");
        }
        next
    }
}
