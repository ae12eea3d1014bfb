// src/assertions/mod.rs

//! Equality verification for operators and state vectors.
//!
//! The comparison rules are identical in spirit for vectors and matrices:
//! validate shapes, optionally strip a global phase from each operand,
//! round elementwise to a decimal precision, then compare exactly and
//! report every mismatched element. This module holds the shared machinery
//! plus the public comparison entry points; the per-shape fronts live in
//! `operator` and `state_vector`.

pub mod operator;
pub mod state_vector;

use crate::circuits::CircuitModel;
use crate::core::{OperatorMatrix, StateVector, VeriqError};
use crate::embedding;
use num_complex::Complex;

/// Default rounding precision for all equality checks.
pub const DEFAULT_DECIMAL_PLACES: usize = 5;
/// Amplitudes below this magnitude are treated as zero when normalizing a
/// global phase (a zero entry carries no phase to remove).
const PHASE_MAGNITUDE_TOLERANCE: f64 = 1e-15;

/// One differing element found by an equality check, in canonical
/// (row-major / ascending index) iteration order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Mismatch {
    /// Flat index into the canonical iteration order.
    pub index: usize,
    /// Rounded value from the first operand.
    pub a_value: Complex<f64>,
    /// Rounded value from the second operand.
    pub b_value: Complex<f64>,
}

/// Rounds real and imaginary parts independently to `decimal_places` digits.
pub(crate) fn round_complex(value: Complex<f64>, decimal_places: usize) -> Complex<f64> {
    let factor = 10f64.powi(decimal_places as i32);
    Complex::new(
        (value.re * factor).round() / factor,
        (value.im * factor).round() / factor,
    )
}

/// Removes the global phase from each operand independently.
///
/// Locates the largest-magnitude entry of `a` (first occurrence wins ties in
/// canonical order), divides all of `a` by that entry's phase factor, then
/// divides all of `b` by the phase factor of `b`'s entry at the same index.
/// This makes the subsequent comparison invariant to a global phase
/// difference between the operands.
///
/// An all-zero `a`, or a zero `b` entry at the pivot index, carries no phase
/// and leaves the respective operand untouched.
pub(crate) fn remove_global_phase(a: &mut [Complex<f64>], b: &mut [Complex<f64>]) {
    let mut max_index = 0;
    let mut max_norm = 0.0f64;
    for (i, value) in a.iter().enumerate() {
        let norm = value.norm();
        if norm > max_norm {
            max_norm = norm;
            max_index = i;
        }
    }
    if max_norm < PHASE_MAGNITUDE_TOLERANCE {
        return;
    }

    let a_phase = a[max_index] / max_norm;
    for value in a.iter_mut() {
        *value *= a_phase.conj();
    }

    let b_norm = b[max_index].norm();
    if b_norm >= PHASE_MAGNITUDE_TOLERANCE {
        let b_phase = b[max_index] / b_norm;
        for value in b.iter_mut() {
            *value *= b_phase.conj();
        }
    }
}

/// Rounds both operands and collects every differing element in ascending
/// index order. Callers are responsible for the shape check.
pub(crate) fn compare_rounded(
    a: &[Complex<f64>],
    b: &[Complex<f64>],
    decimal_places: usize,
) -> Vec<Mismatch> {
    a.iter()
        .zip(b.iter())
        .enumerate()
        .filter_map(|(index, (&va, &vb))| {
            let ra = round_complex(va, decimal_places);
            let rb = round_complex(vb, decimal_places);
            if ra == rb {
                None
            } else {
                Some(Mismatch { index, a_value: ra, b_value: rb })
            }
        })
        .collect()
}

/// Composes the final failure message from an optional caller-supplied
/// prefix and the computed diagnostic. Pure; no process-wide state.
pub(crate) fn format_failure(message: Option<&str>, diagnostic: &str) -> String {
    match message {
        Some(prefix) => format!("{} : {}", prefix, diagnostic),
        None => diagnostic.to_string(),
    }
}

//-------------------------------------------------------------------------
// Comparison entry points
//-------------------------------------------------------------------------

/// Verifies that a circuit (or a precomputed operator) implements the
/// expected matrix.
///
/// Exactly one of `circuit` and `actual` must be supplied: the circuit is
/// composed into its operator via `embedding::circuit_operator`, while a
/// precomputed operator is compared as-is.
///
/// # Arguments
/// * `expected` - The expected circuit-level operator.
/// * `circuit` - Circuit to compose and compare, or `None`.
/// * `actual` - Precomputed operator to compare, or `None`.
/// * `decimal_places` - Rounding precision (`DEFAULT_DECIMAL_PLACES` = 5).
/// * `include_global_phase` - When `false`, a global phase difference
///   between the operands is ignored.
/// * `message` - Optional prefix composed into the failure message.
///
/// # Returns
/// * `Err(VeriqError::Configuration)` if both or neither circuit source is
///   given.
/// * `Err(VeriqError::AssertionMismatch)` listing every differing entry.
pub fn assert_operator_equals(
    expected: &OperatorMatrix,
    circuit: Option<&CircuitModel>,
    actual: Option<&OperatorMatrix>,
    decimal_places: usize,
    include_global_phase: bool,
    message: Option<&str>,
) -> Result<(), VeriqError> {
    let composed;
    let subject = match (circuit, actual) {
        (None, None) => {
            return Err(VeriqError::Configuration {
                message: "Missing circuit or operator.".to_string(),
            });
        }
        (Some(_), Some(_)) => {
            return Err(VeriqError::Configuration {
                message: "Circuit and operator must not both be given.".to_string(),
            });
        }
        (Some(circuit), None) => {
            composed = embedding::circuit_operator(circuit)?;
            &composed
        }
        (None, Some(op)) => op,
    };

    operator::assert_equal(subject, expected, decimal_places, !include_global_phase, message)
}

/// Verifies that two state vectors are equal after rounding.
///
/// See `state_vector::assert_equal` for the comparison rules.
pub fn assert_state_vector_equals(
    a: &StateVector,
    b: &StateVector,
    decimal_places: usize,
    up_to_global_phase: bool,
    message: Option<&str>,
) -> Result<(), VeriqError> {
    state_vector::assert_equal(a, b, decimal_places, up_to_global_phase, message)
}

/// Verifies that a state vector has unit Euclidean norm at the requested
/// precision.
pub fn assert_state_vector_is_normalized(
    vector: &StateVector,
    decimal_places: usize,
    message: Option<&str>,
) -> Result<(), VeriqError> {
    state_vector::assert_is_normalized(vector, decimal_places, message)
}
