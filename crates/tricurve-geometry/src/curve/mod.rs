//! Curve traits and implementations.

mod circle;
mod ellipse;
mod helix;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tricurve_core::CurveError;
use tricurve_math::{Point3, Vector3, FULL_TURN};

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

/// Trait for parametric curves in 3D space.
///
/// Every method is a pure read of the curve's parameters.
pub trait Curve: Send + Sync {
    /// Scalar size descriptor of the curve.
    fn radius(&self) -> f64;

    /// Evaluate the curve at parameter `t` (radians).
    fn point(&self, t: f64) -> Point3;

    /// First derivative of [`Curve::point`] with respect to `t`.
    fn derivative(&self, t: f64) -> Vector3;

    /// Human-readable label with the kind name and parameter values.
    fn describe(&self) -> String;

    /// Return the parameter domain `(t_min, t_max)` covering one turn.
    fn domain(&self) -> (f64, f64) {
        (0.0, FULL_TURN)
    }

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}

/// Discriminant of the closed curve variant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Circle,
    Ellipse,
    Helix,
}

impl CurveKind {
    pub const ALL: [CurveKind; 3] = [CurveKind::Circle, CurveKind::Ellipse, CurveKind::Helix];

    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Circle => "circle",
            CurveKind::Ellipse => "ellipse",
            CurveKind::Helix => "helix",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveKind {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CurveError::Config(format!("unknown curve kind `{s}`")))
    }
}

/// A curve of any supported kind, owned by value.
///
/// The variant tag doubles as the kind discriminant, so filtering by kind
/// is a `match` rather than a downcast.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnyCurve {
    Circle(Circle),
    Ellipse(Ellipse),
    Helix(Helix),
}

impl AnyCurve {
    pub fn kind(&self) -> CurveKind {
        match self {
            AnyCurve::Circle(_) => CurveKind::Circle,
            AnyCurve::Ellipse(_) => CurveKind::Ellipse,
            AnyCurve::Helix(_) => CurveKind::Helix,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            AnyCurve::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match self {
            AnyCurve::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_helix(&self) -> Option<&Helix> {
        match self {
            AnyCurve::Helix(h) => Some(h),
            _ => None,
        }
    }
}

/// Forward a call to the curve held by every variant.
macro_rules! each_variant {
    ($self:expr, $curve:ident => $body:expr) => {
        match $self {
            AnyCurve::Circle($curve) => $body,
            AnyCurve::Ellipse($curve) => $body,
            AnyCurve::Helix($curve) => $body,
        }
    };
}

impl Curve for AnyCurve {
    fn radius(&self) -> f64 {
        each_variant!(self, c => c.radius())
    }

    fn point(&self, t: f64) -> Point3 {
        each_variant!(self, c => c.point(t))
    }

    fn derivative(&self, t: f64) -> Vector3 {
        each_variant!(self, c => c.derivative(t))
    }

    fn describe(&self) -> String {
        each_variant!(self, c => c.describe())
    }

    fn domain(&self) -> (f64, f64) {
        each_variant!(self, c => c.domain())
    }

    fn is_closed(&self) -> bool {
        each_variant!(self, c => c.is_closed())
    }
}

impl From<Circle> for AnyCurve {
    fn from(c: Circle) -> Self {
        AnyCurve::Circle(c)
    }
}

impl From<Ellipse> for AnyCurve {
    fn from(e: Ellipse) -> Self {
        AnyCurve::Ellipse(e)
    }
}

impl From<Helix> for AnyCurve {
    fn from(h: Helix) -> Self {
        AnyCurve::Helix(h)
    }
}
