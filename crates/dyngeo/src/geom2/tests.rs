use super::*;
use crate::error::GeomError;
use crate::Pt2;
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI, TAU};

fn dist_to_line(a: Pt2, b: Pt2, p: Pt2) -> f64 {
    let u = b - a;
    let w = p - a;
    (u.x * w.y - u.y * w.x).abs() / u.norm()
}

fn close(p: Pt2, q: Pt2, tol: f64) -> bool {
    (p - q).norm() <= tol
}

#[test]
fn slope_and_intercept_basic() {
    let a = vector![0.0, 1.0];
    let b = vector![2.0, 5.0];
    assert_eq!(slope(a, b), Some(2.0));
    assert_eq!(y_intercept(a, b), Some(1.0));
    // vertical: undefined, caller must special-case
    assert_eq!(slope(a, vector![0.0, 7.0]), None);
    assert_eq!(y_intercept(a, vector![0.0, 7.0]), None);
}

#[test]
fn line_through_vertical_and_coincident() {
    let l = Line2::through(vector![3.0, 0.0], vector![3.0, 10.0]).unwrap();
    assert_eq!(l, Line2::Vertical { x: 3.0 });
    assert_eq!(l.y_at(3.0), None);
    assert_eq!(
        Line2::through(vector![1.0, 1.0], vector![1.0, 1.0]),
        Err(GeomError::ZeroLengthReference)
    );
}

#[test]
fn intersect_axis_lines_and_one_vertical() {
    let p = line_line_intersect(
        vector![0.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![2.0, 0.0],
    )
    .unwrap();
    assert!(close(p, vector![1.0, 1.0], 1e-12));

    // AB vertical at x = 4, CD is y = x
    let q = line_line_intersect(
        vector![4.0, -1.0],
        vector![4.0, 9.0],
        vector![0.0, 0.0],
        vector![1.0, 1.0],
    )
    .unwrap();
    assert!(close(q, vector![4.0, 4.0], 1e-12));
}

#[test]
fn intersect_parallel_is_explicit() {
    let r = line_line_intersect(
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
        vector![1.0, 2.0],
    );
    assert_eq!(r, Err(GeomError::ParallelLines));
    // two vertical lines
    let v = line_line_intersect(
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![5.0, 0.0],
        vector![5.0, 3.0],
    );
    assert_eq!(v, Err(GeomError::ParallelLines));
    // coincident
    let c = line_line_intersect(
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![2.0, 2.0],
        vector![3.0, 3.0],
    );
    assert_eq!(c, Err(GeomError::ParallelLines));
}

#[test]
fn interp_endpoints_midpoint_and_extrapolation() {
    let a = vector![1.0, -2.0];
    let b = vector![5.0, 6.0];
    assert_eq!(interp_point(a, b, 0.0), a);
    assert!(close(interp_point(a, b, 1.0), b, 1e-12));
    assert!(close(interp_point(a, b, 0.5), vector![3.0, 2.0], 1e-12));
    assert!(close(interp_point(a, b, -1.0), vector![-3.0, -10.0], 1e-12));
    assert!(close(interp_point(a, b, 2.0), vector![9.0, 14.0], 1e-12));
}

#[test]
fn project_and_reflect_onto_diagonal() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 1.0];
    let c = vector![2.0, 0.0];
    assert!(close(project_point(a, b, c).unwrap(), vector![1.0, 1.0], 1e-12));
    assert!(close(reflect_point(a, b, c).unwrap(), vector![0.0, 2.0], 1e-12));
    assert_eq!(
        project_point(a, a, c),
        Err(GeomError::ZeroLengthReference)
    );
    assert_eq!(
        reflect_point(b, b, c),
        Err(GeomError::ZeroLengthReference)
    );
}

#[test]
fn rotation_is_counter_clockwise_on_canvas() {
    // y grows downward: a quarter turn CCW sends “right” to “up”, i.e. negative y.
    let p = rotate_point(vector![0.0, 0.0], FRAC_PI_2, vector![1.0, 0.0]);
    assert!(close(p, vector![0.0, -1.0], 1e-12));
    let q = rotate_point(vector![10.0, 10.0], PI, vector![12.0, 10.0]);
    assert!(close(q, vector![8.0, 10.0], 1e-12));
}

#[test]
fn signed_area_agrees_with_rotation_sense() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    let c = rotate_point(a, FRAC_PI_2, b);
    assert!((signed_area(a, b, c) - 0.5).abs() < 1e-12);
    assert!((signed_area(a, c, b) + 0.5).abs() < 1e-12);
    let p = rotate_point(b, FRAC_PI_3, a);
    assert!(signed_area(a, b, p) < 0.0);
    assert!(signed_area(b, a, p) > 0.0);
}

#[test]
fn line_through_nearly_vertical_points_is_vertical() {
    let l = Line2::through(vector![0.0, 0.0], vector![1e-304, 100.0]).unwrap();
    assert_eq!(l, Line2::Vertical { x: 0.0 });
    let s = Line2::through(vector![0.0, 0.0], vector![1e-3, 100.0]).unwrap();
    assert!(matches!(s, Line2::Sloped { .. }));
    assert!((s.y_at(1e-3).unwrap() - 100.0).abs() < 1e-9);
}

#[test]
fn equilateral_rotation_gives_equal_sides() {
    let b = vector![150.0, 250.0];
    let c = vector![450.0, 260.0];
    let p = rotate_point(c, FRAC_PI_3, b);
    let bc = distance(b, c);
    assert!((distance(c, p) - bc).abs() < 1e-9);
    assert!((distance(b, p) - bc).abs() < 1e-9);
}

#[test]
fn triangle_metrics() {
    let a = vector![0.0, 0.0];
    let b = vector![4.0, 0.0];
    let c = vector![0.0, 3.0];
    // right, then down-left: clockwise on the y-down canvas
    assert!((signed_area(a, b, c) + 6.0).abs() < 1e-12);
    assert!((signed_area(a, c, b) - 6.0).abs() < 1e-12);
    assert!((area(a, c, b) - 6.0).abs() < 1e-12);
    assert!((perimeter(a, b, c) - 12.0).abs() < 1e-12);
    assert!((semiperimeter(a, b, c) - 6.0).abs() < 1e-12);
    assert!((angle_at(b, a, c).unwrap() - FRAC_PI_2).abs() < 1e-12);
    assert!((angle_at(a, b, vector![8.0, 0.0]).unwrap() - PI).abs() < 1e-12);
    assert_eq!(angle_at(a, a, c), Err(GeomError::ZeroLengthReference));
}

#[test]
fn right_triangle_centers() {
    // right angle at A: orthocenter is A, circumcenter is the hypotenuse midpoint
    let a = vector![0.0, 0.0];
    let b = vector![4.0, 0.0];
    let c = vector![0.0, 3.0];
    assert!(close(orthocenter(a, b, c).unwrap(), a, 1e-9));
    assert!(close(circumcenter(a, b, c).unwrap(), vector![2.0, 1.5], 1e-9));
    assert!((circumradius(a, b, c).unwrap() - 2.5).abs() < 1e-9);
}

#[test]
fn degenerate_triangles_are_rejected() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 1.0];
    let c = vector![2.0, 2.0];
    assert!(is_degenerate(a, b, c));
    assert_eq!(orthocenter(a, b, c), Err(GeomError::DegenerateConfiguration));
    assert_eq!(circumcenter(a, b, c), Err(GeomError::DegenerateConfiguration));
    assert_eq!(circumradius(a, b, c), Err(GeomError::DegenerateConfiguration));
    // coincident vertices
    assert_eq!(circumradius(a, a, c), Err(GeomError::DegenerateConfiguration));
    assert!(is_degenerate(a, a, a));
}

#[test]
fn circumcenter_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut checked = 0;
    for _ in 0..200 {
        let a = vector![rng.gen_range(0.0..600.0), rng.gen_range(0.0..600.0)];
        let b = vector![rng.gen_range(0.0..600.0), rng.gen_range(0.0..600.0)];
        let c = vector![rng.gen_range(0.0..600.0), rng.gen_range(0.0..600.0)];
        let longest = distance(a, b).max(distance(b, c)).max(distance(c, a));
        if 2.0 * area(a, b, c) < 0.05 * longest * longest {
            continue;
        }
        let o = circumcenter(a, b, c).unwrap();
        let r = circumradius(a, b, c).unwrap();
        let tol = 1e-7 * (1.0 + r);
        assert!((distance(o, a) - r).abs() < tol);
        assert!((distance(o, b) - r).abs() < tol);
        assert!((distance(o, c) - r).abs() < tol);
        checked += 1;
    }
    assert!(checked > 50, "too few well-shaped samples: {checked}");
}

fn coord() -> impl Strategy<Value = f64> {
    -500.0..500.0f64
}

fn point() -> impl Strategy<Value = Pt2> {
    (coord(), coord()).prop_map(|(x, y)| vector![x, y])
}

proptest! {
    #[test]
    fn prop_line_equation_round_trip(a in point(), b in point()) {
        prop_assume!((a.x - b.x).abs() > 1.0);
        let m = slope(a, b).unwrap();
        let k = y_intercept(a, b).unwrap();
        let tol = 1e-9 * (1.0 + (m * a.x).abs() + k.abs() + (m * b.x).abs());
        prop_assert!((m * a.x + k - a.y).abs() <= tol);
        prop_assert!((m * b.x + k - b.y).abs() <= tol);
    }

    #[test]
    fn prop_intersection_lies_on_both_lines(
        a in point(), b in point(), c in point(), d in point()
    ) {
        let (u, v) = (b - a, d - c);
        prop_assume!(u.norm() > 1.0 && v.norm() > 1.0);
        prop_assume!(u.x.abs() > 0.2 * u.norm() && v.x.abs() > 0.2 * v.norm());
        prop_assume!((u.x * v.y - u.y * v.x).abs() > 0.1 * u.norm() * v.norm());
        let p = line_line_intersect(a, b, c, d).unwrap();
        let tol = 1e-7 * (1.0 + p.norm());
        prop_assert!(dist_to_line(a, b, p) <= tol);
        prop_assert!(dist_to_line(c, d, p) <= tol);
    }

    #[test]
    fn prop_projection_is_orthogonal(a in point(), b in point(), c in point()) {
        prop_assume!((b - a).norm() > 1.0);
        let p = project_point(a, b, c).unwrap();
        let u = (b - a).normalize();
        prop_assert!(dist_to_line(a, b, p) <= 1e-8);
        prop_assert!((c - p).dot(&u).abs() <= 1e-8 * (1.0 + (c - a).norm()));
    }

    #[test]
    fn prop_reflection_is_involution(a in point(), b in point(), c in point()) {
        prop_assume!((b - a).norm() > 1.0);
        let once = reflect_point(a, b, c).unwrap();
        let twice = reflect_point(a, b, once).unwrap();
        prop_assert!(close(twice, c, 1e-7));
    }

    #[test]
    fn prop_rotation_preserves_distance_and_inverts(
        center in point(), p in point(), theta in -TAU..TAU
    ) {
        let r = rotate_point(center, theta, p);
        let tol = 1e-9 * (1.0 + (p - center).norm());
        prop_assert!((distance(center, r) - distance(center, p)).abs() <= tol);
        prop_assert!(close(rotate_point(center, -theta, r), p, 1e-8));
        prop_assert!(close(rotate_point(center, TAU, p), p, 1e-8));
    }

    #[test]
    fn prop_collinear_inputs_fail_explicitly(
        ax in -100i32..100, ay in -100i32..100,
        dx in -20i32..20, dy in -20i32..20,
        k1 in 1i32..10, k2 in -10i32..10,
    ) {
        prop_assume!(dx != 0 || dy != 0);
        let a = vector![f64::from(ax), f64::from(ay)];
        let dir = vector![f64::from(dx), f64::from(dy)];
        let b = a + dir * f64::from(k1);
        let c = a + dir * f64::from(k2);
        prop_assert_eq!(orthocenter(a, b, c), Err(GeomError::DegenerateConfiguration));
        prop_assert_eq!(circumcenter(a, b, c), Err(GeomError::DegenerateConfiguration));
        prop_assert_eq!(circumradius(a, b, c), Err(GeomError::DegenerateConfiguration));
    }
}
