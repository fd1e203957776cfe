//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of the precision constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_unit_length_epsilon_larger_than_epsilon() {
    assert!(
        UNIT_LENGTH_EPSILON >= EPSILON,
        "UNIT_LENGTH_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_epsilon_detects_sub_tolerance_noise() {
    // 0.1 + 0.2 differs from 0.3 by a single ulp-scale error
    assert!(((0.1 + 0.2) - 0.3_f64).abs() < EPSILON);
}
