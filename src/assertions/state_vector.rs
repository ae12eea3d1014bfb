// src/assertions/state_vector.rs

//! Elementwise equality and normalization checks for state vectors.

use super::{compare_rounded, format_failure, remove_global_phase, round_complex};
use crate::core::{StateVector, VeriqError};
use num_complex::Complex;

/// Compares two state vectors for equality after decimal rounding.
///
/// Mismatched lengths fail with `ShapeMismatch` before any elementwise
/// work. With `up_to_global_phase` set, a global phase is removed from each
/// operand independently (pivoting on the largest-magnitude amplitude of
/// `a`), making the comparison invariant to an overall phase difference.
///
/// # Returns
/// * `Ok(())` when all rounded amplitudes agree.
/// * `Err(VeriqError::AssertionMismatch)` listing every differing index with
///   both rounded values, in ascending index order.
pub fn assert_equal(
    a: &StateVector,
    b: &StateVector,
    decimal_places: usize,
    up_to_global_phase: bool,
    message: Option<&str>,
) -> Result<(), VeriqError> {
    if a.dim() != b.dim() {
        return Err(VeriqError::ShapeMismatch {
            message: format!(
                "The shapes of the state vectors must be the same: {} vs {}",
                a.dim(),
                b.dim()
            ),
        });
    }

    let mut a_amplitudes = a.amplitudes().to_vec();
    let mut b_amplitudes = b.amplitudes().to_vec();
    if up_to_global_phase {
        remove_global_phase(&mut a_amplitudes, &mut b_amplitudes);
    }

    let mismatches = compare_rounded(&a_amplitudes, &b_amplitudes, decimal_places);
    if mismatches.is_empty() {
        return Ok(());
    }

    let mut diagnostic = String::new();
    for m in &mismatches {
        diagnostic.push_str(&format!(
            "\nelement {}:\na: {}\nb: {}",
            m.index, m.a_value, m.b_value
        ));
    }
    Err(VeriqError::AssertionMismatch {
        message: format_failure(message, &diagnostic),
    })
}

/// Checks that the vector's Euclidean norm rounds to exactly 1.0.
///
/// The norm is `sqrt(sum(v_i * conj(v_i)))`, taken as a real value, rounded
/// to `decimal_places` before the comparison.
pub fn assert_is_normalized(
    vector: &StateVector,
    decimal_places: usize,
    message: Option<&str>,
) -> Result<(), VeriqError> {
    let norm = vector.norm();
    let rounded = round_complex(Complex::new(norm, 0.0), decimal_places).re;
    if rounded == 1.0 {
        return Ok(());
    }
    let diagnostic = format!("The state vector is not normalized.\nNorm: {}", rounded);
    Err(VeriqError::AssertionMismatch {
        message: format_failure(message, &diagnostic),
    })
}
