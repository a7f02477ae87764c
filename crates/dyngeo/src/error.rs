//! Failure taxonomy for the kernel and the construction pipeline.
//!
//! None of these are fatal. They describe point arrangements a user can drag
//! into (collinear vertices, parallel lines, coincident points) and are
//! resolved per element, per frame.

use serde::Serialize;
use thiserror::Error;

/// Kernel failure for an input arrangement with no finite answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum GeomError {
    /// Triangle vertices are collinear (or coincide).
    #[error("degenerate configuration: triangle vertices are collinear")]
    DegenerateConfiguration,
    /// The two lines have the same direction (includes two vertical lines).
    #[error("parallel lines have no unique intersection")]
    ParallelLines,
    /// The reference segment has zero length, so its direction is undefined.
    #[error("zero-length reference segment")]
    ZeroLengthReference,
}

/// Why a single pipeline element was omitted from a frame.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum StepError {
    #[error("{element}: {source}")]
    Geometry {
        element: String,
        #[source]
        source: GeomError,
    },
    /// An input of `element` is a derived point that was omitted earlier in the same frame.
    #[error("{element}: input {missing} unavailable this frame")]
    Upstream { element: String, missing: String },
}

impl StepError {
    /// Label of the omitted element.
    pub fn element(&self) -> &str {
        match self {
            StepError::Geometry { element, .. } | StepError::Upstream { element, .. } => element,
        }
    }
}

/// Structural problem in a construction (bad point reference).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("step {step}: free point index {index} out of range (registry has {len})")]
    UnknownFreePoint { step: String, index: usize, len: usize },
    #[error("step {step}: derived point {index} is not declared before this step")]
    ForwardReference { step: String, index: usize },
}
