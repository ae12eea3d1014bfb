// src/assertions/operator.rs

//! Elementwise equality for circuit-level operators.

use super::{compare_rounded, format_failure, remove_global_phase};
use crate::core::{OperatorMatrix, VeriqError};

/// Compares two operators for equality after decimal rounding.
///
/// Mismatched dimensions fail with `ShapeMismatch` before any elementwise
/// work. With `up_to_global_phase` set, a global phase is removed from each
/// operand independently using the largest-magnitude entry of `a` over
/// row-major iteration as the pivot, making the comparison invariant to an
/// overall phase difference.
///
/// # Returns
/// * `Ok(())` when all rounded entries agree.
/// * `Err(VeriqError::AssertionMismatch)` listing every differing entry as
///   `(row, col)` with both rounded values, in ascending row-major order.
pub fn assert_equal(
    a: &OperatorMatrix,
    b: &OperatorMatrix,
    decimal_places: usize,
    up_to_global_phase: bool,
    message: Option<&str>,
) -> Result<(), VeriqError> {
    if a.dim() != b.dim() {
        return Err(VeriqError::ShapeMismatch {
            message: format!(
                "The shapes of the operators must be the same: {}x{} vs {}x{}",
                a.dim(),
                a.dim(),
                b.dim(),
                b.dim()
            ),
        });
    }

    let mut a_elements = a.elements().to_vec();
    let mut b_elements = b.elements().to_vec();
    if up_to_global_phase {
        remove_global_phase(&mut a_elements, &mut b_elements);
    }

    let mismatches = compare_rounded(&a_elements, &b_elements, decimal_places);
    if mismatches.is_empty() {
        return Ok(());
    }

    let dim = a.dim();
    let mut diagnostic = String::new();
    for m in &mismatches {
        let (row, col) = (m.index / dim, m.index % dim);
        diagnostic.push_str(&format!(
            "\nentry ({}, {}):\na: {}\nb: {}",
            row, col, m.a_value, m.b_value
        ));
    }
    Err(VeriqError::AssertionMismatch {
        message: format_failure(message, &diagnostic),
    })
}
