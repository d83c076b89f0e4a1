//! Testing helpers.

use assert_float_eq::*;

fn assert_same_len(expected: &[f64], actual: &[f64]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
}

/// Asserts that each element of `actual` is within a relative `epsilon` of its counterpart in `expected`.
pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_same_len(expected, actual);
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// Asserts that each element of `actual` is within an absolute `tolerance` of its counterpart in `expected`.
/// Suited to comparing sampled proportions against their exact values.
pub fn assert_slice_f64_absolute(expected: &[f64], actual: &[f64], tolerance: f64) {
    assert_same_len(expected, actual);
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_absolute_eq!(expected, actual, tolerance);
        }
    }
}
