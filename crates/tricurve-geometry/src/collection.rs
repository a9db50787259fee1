//! Owned curve collections and borrowed, kind-filtered views over them.

use crate::curve::{AnyCurve, Circle, Curve, CurveKind, Ellipse, Helix};

/// An ordered collection that owns curves of mixed kind.
///
/// Insertion order is preserved. Every view produced by the filter methods
/// borrows from the set and cannot outlive it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSet {
    curves: Vec<AnyCurve>,
}

impl CurveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            curves: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, curve: impl Into<AnyCurve>) {
        self.curves.push(curve.into());
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnyCurve> {
        self.curves.iter()
    }

    pub fn as_slice(&self) -> &[AnyCurve] {
        &self.curves
    }

    /// References to every curve of `kind`, in collection order.
    ///
    /// Returns an empty vector when no curve of that kind is present.
    pub fn filter_kind(&self, kind: CurveKind) -> Vec<&AnyCurve> {
        self.curves.iter().filter(|c| c.kind() == kind).collect()
    }

    pub fn count_kind(&self, kind: CurveKind) -> usize {
        self.curves.iter().filter(|c| c.kind() == kind).count()
    }

    /// Typed references to every circle, in collection order.
    pub fn circles(&self) -> Vec<&Circle> {
        self.curves.iter().filter_map(AnyCurve::as_circle).collect()
    }

    pub fn ellipses(&self) -> Vec<&Ellipse> {
        self.curves.iter().filter_map(AnyCurve::as_ellipse).collect()
    }

    pub fn helices(&self) -> Vec<&Helix> {
        self.curves.iter().filter_map(AnyCurve::as_helix).collect()
    }
}

impl<'a> IntoIterator for &'a CurveSet {
    type Item = &'a AnyCurve;
    type IntoIter = std::slice::Iter<'a, AnyCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

impl FromIterator<AnyCurve> for CurveSet {
    fn from_iter<I: IntoIterator<Item = AnyCurve>>(iter: I) -> Self {
        Self {
            curves: iter.into_iter().collect(),
        }
    }
}

impl Extend<AnyCurve> for CurveSet {
    fn extend<I: IntoIterator<Item = AnyCurve>>(&mut self, iter: I) {
        self.curves.extend(iter);
    }
}

/// Sort borrowed curves by ascending radius.
///
/// Ties may land in any order.
pub fn sort_by_radius<C: Curve + ?Sized>(curves: &mut [&C]) {
    curves.sort_unstable_by(|a, b| a.radius().total_cmp(&b.radius()));
}
