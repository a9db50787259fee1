//! Run configuration.
//!
//! Values come from [`RunConfig::default`], optionally replaced by a JSON
//! file, and finally overridden by command-line flags.

use std::f64::consts::FRAC_PI_4;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tricurve_core::traits::Validate;
use tricurve_core::{CurveError, Result};
use tricurve_geometry::{CurveKind, RadiusReducer};

use crate::source::positive_range;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Number of curves to generate
    pub count: usize,
    /// Parameter value every curve is evaluated at
    pub parameter: f64,
    /// Worker threads used for the radius sum
    pub workers: usize,
    /// Curve kind selected for sorting and aggregation
    pub kind: CurveKind,
    /// Seed for reproducible generation; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Half-open `[min, max)` range for generated radii
    pub radius_range: [f64; 2],
    /// Half-open `[min, max)` range for generated helix steps
    pub step_range: [f64; 2],
    /// Polyline chord tolerance; polylines are skipped when absent
    pub tolerance: Option<f64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: 10,
            parameter: FRAC_PI_4,
            workers: RadiusReducer::DEFAULT_WORKERS,
            kind: CurveKind::Circle,
            seed: None,
            radius_range: [0.1, 100.0],
            step_range: [0.1, 100.0],
            tolerance: None,
        }
    }
}

impl RunConfig {
    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(CurveError::Config("count must be at least 1".into()));
        }
        RadiusReducer::check_workers(self.workers)?;
        if !self.parameter.is_finite() {
            return Err(CurveError::Config(format!(
                "parameter must be finite, got {}",
                self.parameter
            )));
        }
        positive_range("radius", self.radius_range)?;
        positive_range("step", self.step_range)?;
        if let Some(tol) = self.tolerance {
            if !(tol.is_finite() && tol > 0.0) {
                return Err(CurveError::Config(format!(
                    "tolerance must be positive, got {tol}"
                )));
            }
        }
        Ok(())
    }
}
