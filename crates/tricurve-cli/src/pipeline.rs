//! Generate, evaluate, filter, sort, and reduce.

use serde::Serialize;
use tracing::{debug, info};
use tricurve_core::traits::Validate;
use tricurve_core::Result;
use tricurve_geometry::tessellate::curve_to_polyline;
use tricurve_geometry::{
    sort_by_radius, AnyCurve, Curve, CurveKind, CurveSet, RadiusReducer,
};
use tricurve_math::{Point3, Vector3};

use crate::config::RunConfig;
use crate::source::{populate, ParamSource};

/// One curve evaluated at the run parameter.
#[derive(Debug, Clone, Serialize)]
pub struct CurveEvaluation {
    pub description: String,
    pub curve: AnyCurve,
    pub point: Point3,
    pub derivative: Vector3,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polyline_vertices: Option<usize>,
}

/// Everything a run produces, in the order it was computed.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub parameter: f64,
    pub evaluations: Vec<CurveEvaluation>,
    pub kind: CurveKind,
    pub sorted_radii: Vec<f64>,
    pub workers: usize,
    pub radius_sum: f64,
}

/// Evaluate every curve of `curves` at `t`, in collection order.
pub fn evaluate(curves: &CurveSet, t: f64, tolerance: Option<f64>) -> Vec<CurveEvaluation> {
    curves
        .iter()
        .map(|curve| CurveEvaluation {
            description: curve.describe(),
            curve: curve.clone(),
            point: curve.point(t),
            derivative: curve.derivative(t),
            polyline_vertices: tolerance.map(|tol| curve_to_polyline(curve, tol).len()),
        })
        .collect()
}

/// Filter `curves` to `kind`, sort the view by radius, and sum the radii.
///
/// Returns the sorted radii together with their sum.
pub fn aggregate(curves: &CurveSet, kind: CurveKind, reducer: &RadiusReducer) -> (Vec<f64>, f64) {
    let mut selected = curves.filter_kind(kind);
    sort_by_radius(&mut selected);
    debug!(%kind, selected = selected.len(), "filtered and sorted curves");

    let radii = selected.iter().map(|c| c.radius()).collect();
    let sum = reducer.sum(&selected);
    (radii, sum)
}

/// Run the whole pipeline over curves drawn from `source`.
pub fn run(config: &RunConfig, source: &mut dyn ParamSource) -> Result<RunReport> {
    config.validate()?;
    let curves = populate(source, config.count)?;
    let evaluations = evaluate(&curves, config.parameter, config.tolerance);

    let reducer = RadiusReducer::new(config.workers)?;
    let (sorted_radii, radius_sum) = aggregate(&curves, config.kind, &reducer);
    info!(
        curves = curves.len(),
        kind = %config.kind,
        selected = sorted_radii.len(),
        radius_sum,
        "aggregation complete"
    );

    Ok(RunReport {
        parameter: config.parameter,
        evaluations,
        kind: config.kind,
        sorted_radii,
        workers: reducer.workers(),
        radius_sum,
    })
}
