//! Tests for the free-function aliases.

use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn create_and_zero() {
    assert_eq!(create(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(zero(), create(0.0, 0.0, 0.0));
}

#[test]
fn dot_scenario() {
    assert_eq!(dot(create(1.0, 2.0, 3.0), create(4.0, 5.0, 6.0)), 32.0);
}

#[test]
fn length_scenario() {
    let v = create(3.0, 4.0, 0.0);
    assert_eq!(length_squared(v), 25.0);
    assert_eq!(length(v), 5.0);
}

#[test]
fn normalize_scenarios() {
    assert_eq!(normalize(create(5.0, 0.0, 0.0)), create(1.0, 0.0, 0.0));
    assert_eq!(normalize(zero()), zero());

    let n = normalize(create(1.0, 1.0, 1.0));
    assert_abs_diff_eq!(n.x, 1.0 / 3.0_f64.sqrt(), epsilon = 1e-15);
    assert_abs_diff_eq!(length(n), 1.0, epsilon = 1e-15);
}

#[test]
fn subtract_scenario() {
    let ones = create(1.0, 1.0, 1.0);
    assert_eq!(subtract(ones, ones), zero());
}

#[test]
fn add_and_multiply() {
    let a = create(1.0, -2.0, 0.5);
    assert_eq!(add(a, a), multiply(a, 2.0));
    assert_eq!(multiply(a, 0.0), zero());
}

#[test]
fn non_finite_inputs_propagate() {
    let inf = create(f64::INFINITY, 0.0, 0.0);
    assert_eq!(add(inf, create(1.0, 0.0, 0.0)).x, f64::INFINITY);
    assert!(subtract(inf, inf).x.is_nan());
    assert!(length(create(f64::NAN, 0.0, 0.0)).is_nan());
}
