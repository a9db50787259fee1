//! tricurve geometry: parametric curves, curve collections, and radius reduction.

pub mod collection;
pub mod curve;
pub mod reduce;
pub mod tessellate;

pub use collection::{sort_by_radius, CurveSet};
pub use curve::{AnyCurve, Circle, Curve, CurveKind, Ellipse, Helix};
pub use reduce::{sum_sequential, RadiusReducer};
