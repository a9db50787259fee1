//! Curve parameter sources and collection population.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use tricurve_core::{CurveError, Result};
use tricurve_geometry::{AnyCurve, Circle, CurveKind, CurveSet, Ellipse, Helix};

/// Supplies the kind selectors and real parameters curves are built from.
pub trait ParamSource {
    fn next_kind(&mut self) -> CurveKind;
    fn next_radius(&mut self) -> f64;
    fn next_step(&mut self) -> f64;
}

/// Uniform random parameters drawn from a [`StdRng`].
pub struct RandomSource {
    rng: StdRng,
    radius: Range<f64>,
    step: Range<f64>,
}

impl RandomSource {
    /// Build a source over `[min, max)` ranges. A `seed` makes the sequence
    /// reproducible; otherwise the generator is seeded from the OS.
    pub fn new(radius: [f64; 2], step: [f64; 2], seed: Option<u64>) -> Result<Self> {
        let radius = positive_range("radius", radius)?;
        let step = positive_range("step", step)?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { rng, radius, step })
    }
}

/// Validate a `[min, max)` pair with `0 < min < max` and convert it to a range.
pub fn positive_range(name: &str, [lo, hi]: [f64; 2]) -> Result<Range<f64>> {
    if lo.is_finite() && hi.is_finite() && lo > 0.0 && lo < hi {
        Ok(lo..hi)
    } else {
        Err(CurveError::Config(format!(
            "{name} range must satisfy 0 < min < max, got [{lo}, {hi}]"
        )))
    }
}

impl ParamSource for RandomSource {
    fn next_kind(&mut self) -> CurveKind {
        CurveKind::ALL[self.rng.random_range(0..CurveKind::ALL.len())]
    }

    fn next_radius(&mut self) -> f64 {
        self.rng.random_range(self.radius.clone())
    }

    fn next_step(&mut self) -> f64 {
        self.rng.random_range(self.step.clone())
    }
}

/// Build one curve from the next values of `source`.
pub fn next_curve(source: &mut dyn ParamSource) -> Result<AnyCurve> {
    let curve = match source.next_kind() {
        CurveKind::Circle => Circle::new(source.next_radius())?.into(),
        CurveKind::Ellipse => {
            let rx = source.next_radius();
            let ry = source.next_radius();
            Ellipse::new(rx, ry)?.into()
        }
        CurveKind::Helix => {
            let r = source.next_radius();
            let s = source.next_step();
            Helix::new(r, s)?.into()
        }
    };
    Ok(curve)
}

/// Fill a new collection with `count` curves drawn from `source`.
pub fn populate(source: &mut dyn ParamSource, count: usize) -> Result<CurveSet> {
    let mut curves = CurveSet::with_capacity(count);
    for _ in 0..count {
        curves.push(next_curve(source)?);
    }
    debug!(
        count,
        circles = curves.count_kind(CurveKind::Circle),
        ellipses = curves.count_kind(CurveKind::Ellipse),
        helices = curves.count_kind(CurveKind::Helix),
        "populated curve collection"
    );
    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tricurve_geometry::Curve;

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = RandomSource::new([0.1, 100.0], [0.1, 100.0], Some(42)).unwrap();
        let mut b = RandomSource::new([0.1, 100.0], [0.1, 100.0], Some(42)).unwrap();
        assert_eq!(populate(&mut a, 20).unwrap(), populate(&mut b, 20).unwrap());
    }

    #[test]
    fn test_parameters_within_range() {
        let mut source = RandomSource::new([2.0, 3.0], [5.0, 6.0], Some(1)).unwrap();
        let curves = populate(&mut source, 200).unwrap();
        assert_eq!(curves.len(), 200);
        for curve in &curves {
            assert!((2.0..3.0).contains(&curve.radius()));
            if let Some(h) = curve.as_helix() {
                assert!((5.0..6.0).contains(&h.step()));
            }
        }
    }

    #[test]
    fn test_all_kinds_drawn() {
        let mut source = RandomSource::new([0.1, 100.0], [0.1, 100.0], Some(9)).unwrap();
        let curves = populate(&mut source, 300).unwrap();
        for kind in CurveKind::ALL {
            assert!(curves.count_kind(kind) > 0, "no {kind} generated");
        }
    }

    #[test]
    fn test_invalid_range_rejected() {
        assert!(RandomSource::new([0.0, 1.0], [0.1, 1.0], None).is_err());
        assert!(RandomSource::new([1.0, 1.0], [0.1, 1.0], None).is_err());
        assert!(RandomSource::new([0.1, 1.0], [3.0, 2.0], None).is_err());
    }
}
