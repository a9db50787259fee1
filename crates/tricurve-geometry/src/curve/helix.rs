//! Helix curve.

use serde::Serialize;
use tricurve_core::error::{ensure_positive, Result};
use tricurve_math::{DVec3, Point3, Vector3, FULL_TURN};

use super::Curve;

/// A circular helix around the Z axis.
///
/// The curve rises by `step` along Z for every full turn of `t`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Helix {
    radius: f64,
    step: f64,
}

impl Helix {
    pub fn new(radius: f64, step: f64) -> Result<Self> {
        Ok(Self {
            radius: ensure_positive("radius", radius)?,
            step: ensure_positive("step", step)?,
        })
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Curve for Helix {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn point(&self, t: f64) -> Point3 {
        DVec3::new(
            self.radius * t.cos(),
            self.radius * t.sin(),
            self.step * t / FULL_TURN,
        )
    }

    fn derivative(&self, t: f64) -> Vector3 {
        DVec3::new(
            -self.radius * t.sin(),
            self.radius * t.cos(),
            self.step / FULL_TURN,
        )
    }

    fn describe(&self) -> String {
        format!("Helix with r = {:.6}, s = {:.6}", self.radius, self.step)
    }
}
