//! Ellipse curve.

use serde::Serialize;
use tricurve_core::error::{ensure_positive, Result};
use tricurve_math::{DVec3, Point3, Vector3};

use super::Curve;

/// An axis-aligned ellipse centered at the origin in the XY plane.
///
/// `radius_x` is the semi-axis along X and `radius_y` the semi-axis along Y.
/// Either may be the larger one; [`Curve::radius`] reports the larger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ellipse {
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    pub fn new(radius_x: f64, radius_y: f64) -> Result<Self> {
        Ok(Self {
            radius_x: ensure_positive("radius_x", radius_x)?,
            radius_y: ensure_positive("radius_y", radius_y)?,
        })
    }

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }
}

impl Curve for Ellipse {
    fn radius(&self) -> f64 {
        self.radius_x.max(self.radius_y)
    }

    fn point(&self, t: f64) -> Point3 {
        DVec3::new(self.radius_x * t.cos(), self.radius_y * t.sin(), 0.0)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        DVec3::new(-self.radius_x * t.sin(), self.radius_y * t.cos(), 0.0)
    }

    fn describe(&self) -> String {
        format!(
            "Ellipse with rx = {:.6}, ry = {:.6}",
            self.radius_x, self.radius_y
        )
    }

    fn is_closed(&self) -> bool {
        true
    }
}
