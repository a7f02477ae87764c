//! Session configuration (canvas, point radii, construction parameters).
//!
//! Loaded by callers from JSON (see the `cli` crate); every field has a
//! default so partial files are accepted. Defaults reproduce the reference
//! sketch: a 600×600 canvas, free points A(200,150), B(150,250), C(450,260),
//! hit radius 12 and a 60° rotation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ConstructionError;
use crate::point::FreePoint;

/// Drawing surface size in canvas units; lines are clipped to it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
        }
    }
}

/// Initial placement of one free point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FreePointCfg {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl FreePointCfg {
    fn new(label: &str, x: f64, y: f64) -> Self {
        Self {
            label: label.to_string(),
            x,
            y,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxCfg {
    pub canvas: Canvas,
    /// Front-disc radius of an unfocused free point.
    pub inner_radius: f64,
    /// Hit radius; also the back-disc radius and the focused front-disc radius.
    pub outer_radius: f64,
    /// Rotation angle of the reference construction, degrees counter-clockwise.
    pub rotation_deg: f64,
    pub show_circumcircles: bool,
    pub free_points: Vec<FreePointCfg>,
}

impl Default for SandboxCfg {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            inner_radius: 4.0,
            outer_radius: 12.0,
            rotation_deg: 60.0,
            show_circumcircles: false,
            free_points: vec![
                FreePointCfg::new("A", 200.0, 150.0),
                FreePointCfg::new("B", 150.0, 250.0),
                FreePointCfg::new("C", 450.0, 260.0),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("canvas must have positive finite size, got {width}x{height}")]
    Canvas { width: f64, height: f64 },
    #[error("radii must be positive and finite with inner <= outer (inner {inner}, outer {outer})")]
    Radii { inner: f64, outer: f64 },
    #[error("rotation angle must be finite, got {0}")]
    Rotation(f64),
    #[error("free point {0} has a non-finite coordinate")]
    FreePoint(String),
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

impl SandboxCfg {
    /// Reject values that would make hit-testing or clipping meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Canvas { width, height } = self.canvas;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::Canvas { width, height });
        }
        let (inner, outer) = (self.inner_radius, self.outer_radius);
        if !(inner.is_finite() && outer.is_finite() && inner > 0.0 && inner <= outer) {
            return Err(ConfigError::Radii { inner, outer });
        }
        if !self.rotation_deg.is_finite() {
            return Err(ConfigError::Rotation(self.rotation_deg));
        }
        if let Some(bad) = self
            .free_points
            .iter()
            .find(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(ConfigError::FreePoint(bad.label.clone()));
        }
        Ok(())
    }

    #[inline]
    pub fn rotation_rad(&self) -> f64 {
        self.rotation_deg.to_radians()
    }

    /// Free-point registry in declaration order (this order is the hit-test priority).
    pub fn build_free_points(&self) -> Vec<FreePoint> {
        self.free_points
            .iter()
            .map(|p| FreePoint::new(p.x, p.y, p.label.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_and_match_reference() {
        let cfg = SandboxCfg::default();
        cfg.validate().unwrap();
        let pts = cfg.build_free_points();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[2].label(), "C");
        assert_eq!(pts[2].position(), nalgebra::vector![450.0, 260.0]);
        assert!((cfg.rotation_rad() - std::f64::consts::FRAC_PI_3).abs() < 1e-15);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: SandboxCfg =
            serde_json::from_str(r#"{ "outer_radius": 20.0, "show_circumcircles": true }"#)
                .unwrap();
        assert_eq!(cfg.outer_radius, 20.0);
        assert!(cfg.show_circumcircles);
        assert_eq!(cfg.inner_radius, 4.0);
        assert_eq!(cfg.free_points.len(), 3);
    }

    #[test]
    fn invalid_values_are_reported() {
        let mut cfg = SandboxCfg::default();
        cfg.inner_radius = 30.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::Radii { .. })));

        let mut cfg = SandboxCfg::default();
        cfg.canvas.width = 0.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::Canvas { .. })));

        let mut cfg = SandboxCfg::default();
        cfg.free_points[1].y = f64::NAN;
        assert_eq!(cfg.validate(), Err(ConfigError::FreePoint("B".into())));
    }
}
