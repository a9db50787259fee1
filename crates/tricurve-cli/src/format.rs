//! Plain-text rendering of run reports.

use std::fmt;
use std::io::{self, Write};

use tricurve_math::Point3;

use crate::pipeline::RunReport;

/// Displays a point as `(x, y, z)` with six decimal places.
pub struct PointDisplay(pub Point3);

impl fmt::Display for PointDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        write!(f, "({:.6}, {:.6}, {:.6})", p.x, p.y, p.z)
    }
}

pub fn write_report(out: &mut impl Write, report: &RunReport) -> io::Result<()> {
    for eval in &report.evaluations {
        writeln!(out, "{}", eval.description)?;
        writeln!(
            out,
            "Point at t = {:.6}: {}",
            report.parameter,
            PointDisplay(eval.point)
        )?;
        writeln!(
            out,
            "Derivative at t = {:.6}: {}",
            report.parameter,
            PointDisplay(eval.derivative)
        )?;
        if let Some(n) = eval.polyline_vertices {
            writeln!(out, "Polyline vertices: {n}")?;
        }
        writeln!(out)?;
    }

    writeln!(
        out,
        "Sorted radii of {} {} curve(s): {}",
        report.sorted_radii.len(),
        report.kind,
        report
            .sorted_radii
            .iter()
            .map(|r| format!("{r:.6}"))
            .collect::<Vec<_>>()
            .join(", ")
    )?;
    writeln!(
        out,
        "Total sum of radii of the {} curves ({} workers): {:.6}",
        report.kind, report.workers, report.radius_sum
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::CurveEvaluation;
    use tricurve_geometry::{Circle, Curve, CurveKind};

    #[test]
    fn test_point_display() {
        let p = Point3::new(1.0, -0.5, 0.0);
        assert_eq!(PointDisplay(p).to_string(), "(1.000000, -0.500000, 0.000000)");
    }

    #[test]
    fn test_write_report() {
        let circle = Circle::new(2.0).unwrap();
        let report = RunReport {
            parameter: 0.0,
            evaluations: vec![CurveEvaluation {
                description: circle.describe(),
                curve: circle.clone().into(),
                point: circle.point(0.0),
                derivative: circle.derivative(0.0),
                polyline_vertices: None,
            }],
            kind: CurveKind::Circle,
            sorted_radii: vec![2.0],
            workers: 4,
            radius_sum: 2.0,
        };

        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Circle with r = 2.000000\n"));
        assert!(text.contains("Point at t = 0.000000: (2.000000, 0.000000, 0.000000)"));
        assert!(text.contains("Derivative at t = 0.000000: ("));
        assert!(text.ends_with("Total sum of radii of the circle curves (4 workers): 2.000000\n"));
    }
}
