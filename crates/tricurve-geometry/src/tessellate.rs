//! Polyline sampling of curves.

use tricurve_math::Point3;

use crate::curve::Curve;

/// Subdivision stops at this depth even if the span is still too coarse.
const MAX_DEPTH: u32 = 12;

/// Every span is split at least this many times before its sag is checked.
///
/// Over one full turn a closed curve starts and ends at the same point, so
/// the first few spans have to be split no matter what their sag is.
const MIN_DEPTH: u32 = 2;

/// Sample one turn of `curve` into a polyline whose spans sag at most
/// `tolerance` away from the curve at their parameter midpoint.
///
/// The first vertex is at the start of [`Curve::domain`] and the last at its
/// end. Vertices are ordered by increasing parameter.
pub fn curve_to_polyline(curve: &dyn Curve, tolerance: f64) -> Vec<Point3> {
    let (t_start, t_end) = curve.domain();
    let mut vertices = vec![curve.point(t_start)];

    // Spans still to be examined, the leftmost on top of the stack.
    let mut pending = vec![(t_start, t_end, 0u32)];
    while let Some((a, b, depth)) = pending.pop() {
        let end = curve.point(b);
        if depth < MAX_DEPTH {
            let mid_t = 0.5 * (a + b);
            let sag = curve.point(mid_t).distance(curve.point(a).lerp(end, 0.5));
            if depth < MIN_DEPTH || sag > tolerance {
                pending.push((mid_t, b, depth + 1));
                pending.push((a, mid_t, depth + 1));
                continue;
            }
        }
        vertices.push(end);
    }
    vertices
}
