//! Circle curve.

use serde::Serialize;
use tricurve_core::error::{ensure_positive, Result};
use tricurve_math::{DVec3, Point3, Vector3};

use super::Curve;

/// A circle of radius `radius` centered at the origin in the XY plane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Self {
            radius: ensure_positive("radius", radius)?,
        })
    }
}

impl Curve for Circle {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn point(&self, t: f64) -> Point3 {
        DVec3::new(self.radius * t.cos(), self.radius * t.sin(), 0.0)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        DVec3::new(-self.radius * t.sin(), self.radius * t.cos(), 0.0)
    }

    fn describe(&self) -> String {
        format!("Circle with r = {:.6}", self.radius)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
