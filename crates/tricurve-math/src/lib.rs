//! Point and vector types shared by every tricurve crate.

pub use glam::DVec3;

/// A position in 3D space.
pub type Point3 = DVec3;
/// A direction or derivative in 3D space.
pub type Vector3 = DVec3;

/// One full turn, in radians.
pub const FULL_TURN: f64 = std::f64::consts::TAU;
