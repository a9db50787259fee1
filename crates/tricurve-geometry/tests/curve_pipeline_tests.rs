use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use tricurve_math::Point3;
use tricurve_geometry::{
    sort_by_radius, sum_sequential, AnyCurve, Circle, Curve, CurveKind, CurveSet, Ellipse, Helix,
    RadiusReducer,
};

fn planar_length(p: Point3) -> f64 {
    p.x.hypot(p.y)
}

fn is_finite_point(p: Point3) -> bool {
    p.x.is_finite() && p.y.is_finite() && p.z.is_finite()
}

fn sample_parameters() -> impl Iterator<Item = f64> {
    (-20..=20).map(|i| i as f64 * 0.37)
}

#[test]
fn test_circle_distance_and_orthogonality() {
    for r in [0.1, 1.0, 17.5, 99.9] {
        let circle = Circle::new(r).unwrap();
        for t in sample_parameters() {
            let p = circle.point(t);
            let d = circle.derivative(t);
            assert_relative_eq!(p.length(), r, max_relative = 1e-12);
            assert_eq!(p.z, 0.0);
            assert_abs_diff_eq!(p.dot(d), 0.0, epsilon = 1e-9 * r * r);
        }
    }
}

#[test]
fn test_ellipse_unit_equation() {
    for (rx, ry) in [(3.0, 7.0), (9.0, 2.0), (0.5, 0.5)] {
        let ellipse = Ellipse::new(rx, ry).unwrap();
        for t in sample_parameters() {
            let p = ellipse.point(t);
            assert_abs_diff_eq!((p.x / rx).powi(2) + (p.y / ry).powi(2), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_helix_matches_circle_with_linear_rise() {
    let (r, s) = (4.0, 12.5);
    let helix = Helix::new(r, s).unwrap();
    let circle = Circle::new(r).unwrap();
    for t in sample_parameters() {
        let hp = helix.point(t);
        let cp = circle.point(t);
        assert_eq!(hp.z, s * t / (2.0 * PI));
        assert_eq!((hp.x, hp.y), (cp.x, cp.y));
        assert_relative_eq!(planar_length(hp), r, max_relative = 1e-12);
        assert!(is_finite_point(helix.derivative(t)));
    }
}

#[test]
fn test_ellipse_radius_descriptor() {
    assert_eq!(Ellipse::new(3.0, 7.0).unwrap().radius(), 7.0);
    assert_eq!(Ellipse::new(9.0, 2.0).unwrap().radius(), 9.0);
}

#[test]
fn test_sort_and_sum_three_circles() {
    let set: CurveSet = [5.0, 1.0, 3.0]
        .into_iter()
        .map(|r| AnyCurve::from(Circle::new(r).unwrap()))
        .collect();
    let mut circles = set.circles();
    sort_by_radius(&mut circles);
    let radii: Vec<f64> = circles.iter().map(|c| c.radius()).collect();
    assert_eq!(radii, vec![1.0, 3.0, 5.0]);

    let reducer = RadiusReducer::with_default_workers().unwrap();
    assert_eq!(reducer.sum(&circles), 9.0);
}

#[test]
fn test_parallel_sum_of_thousand_circles() {
    let set: CurveSet = (1..=1000)
        .map(|i| AnyCurve::from(Circle::new(i as f64 / 7.0).unwrap()))
        .collect();
    let mut circles = set.circles();
    sort_by_radius(&mut circles);

    let sequential = sum_sequential(&circles);
    let reducer = RadiusReducer::new(4).unwrap();
    let parallel = reducer.sum(&circles);
    assert_relative_eq!(parallel, sequential, max_relative = 1e-9);
    assert_relative_eq!(parallel, 1000.0 * 1001.0 / 2.0 / 7.0, max_relative = 1e-9);
}

#[test]
fn test_empty_and_absent_kind() {
    let reducer = RadiusReducer::new(4).unwrap();

    let empty = CurveSet::new();
    let view = empty.filter_kind(CurveKind::Circle);
    assert!(view.is_empty());
    assert_eq!(reducer.sum(&view), 0.0);

    let mut no_circles = CurveSet::new();
    no_circles.push(Ellipse::new(1.0, 2.0).unwrap());
    no_circles.push(Helix::new(1.0, 2.0).unwrap());
    let view = no_circles.filter_kind(CurveKind::Circle);
    assert!(view.is_empty());
    assert_eq!(reducer.sum(&view), 0.0);
}

#[test]
fn test_end_to_end_scenario() {
    let mut set = CurveSet::new();
    set.push(Circle::new(2.0).unwrap());
    set.push(Helix::new(5.0, 10.0).unwrap());
    set.push(Circle::new(4.0).unwrap());

    let mut circles = set.filter_kind(CurveKind::Circle);
    assert_eq!(circles.len(), 2);
    sort_by_radius(&mut circles);
    assert_eq!(circles[0], &AnyCurve::from(Circle::new(2.0).unwrap()));
    assert_eq!(circles[1], &AnyCurve::from(Circle::new(4.0).unwrap()));

    let reducer = RadiusReducer::new(4).unwrap();
    assert_eq!(reducer.sum(&circles), 6.0);
}
