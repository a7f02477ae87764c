//! Interactive plane-geometry sandbox core.
//!
//! A handful of user-draggable free points feed a fixed construction (rotations,
//! intersections, projections, circumcircles) that is re-evaluated every frame.
//! This crate holds the math and the interaction state; drawing is left to the
//! caller, which receives plain render records per frame.
//!
//! Layout
//! - `geom2`: stateless kernel over `Pt2` with explicit degeneracy errors.
//! - `point`: free and derived points, render records.
//! - `construction`: declarative steps and the per-frame pipeline.
//! - `interaction`: hover/drag state machine.
//! - `sandbox`: per-frame driver; `config`: session configuration.

pub mod config;
pub mod construction;
pub mod error;
pub mod geom2;
pub mod interaction;
pub mod point;
pub mod sandbox;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Point/vector in canvas coordinates (y grows downward).
pub type Pt2 = nalgebra::Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::config::{Canvas, ConfigError, FreePointCfg, SandboxCfg};
    pub use crate::construction::{
        Construction, ConstructionOutput, EvalOptions, Geometry, PointOp, PointRef, Shape,
        ShapeOp, Visibility,
    };
    pub use crate::error::{GeomError, StepError};
    pub use crate::interaction::{Cursor, Focus, PointerEvent};
    pub use crate::point::{DerivedPoint, FreePoint, PointStyle, Rgb};
    pub use crate::sandbox::{Frame, Sandbox};
    pub use crate::Pt2;
}
