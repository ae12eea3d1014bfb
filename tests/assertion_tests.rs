// tests/assertion_tests.rs

// Import necessary types from the veriq crate
use veriq::{
    CircuitBuilder, DEFAULT_DECIMAL_PLACES, GateKind, GateSpec, OperatorMatrix, StateVector,
    VeriqError,
    assertions::{operator, state_vector},
    assert_operator_equals, assert_state_vector_equals, assert_state_vector_is_normalized,
    circuit_operator, converter,
};

use num_complex::Complex;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

// Helper to build a complex number from a real value
fn r(x: f64) -> Complex<f64> {
    Complex::new(x, 0.0)
}

// Helper to pull the diagnostic out of an AssertionMismatch result
fn mismatch_message(result: Result<(), VeriqError>) -> String {
    match result {
        Err(VeriqError::AssertionMismatch { message }) => message,
        other => panic!("Expected AssertionMismatch, got {:?}", other),
    }
}

#[test]
fn test_state_vector_equal_is_reflexive() -> Result<(), VeriqError> {
    let v = StateVector::new(vec![r(0.6), r(0.0), Complex::new(0.0, 0.8), r(0.0)]);
    assert_state_vector_equals(&v, &v, 5, false, None)?;
    assert_state_vector_equals(&v, &v, 5, true, None)?;
    Ok(())
}

#[test]
fn test_operator_equal_is_reflexive() -> Result<(), VeriqError> {
    let m = OperatorMatrix::from_rows(vec![
        vec![r(0.0), Complex::new(0.0, -1.0)],
        vec![Complex::new(0.0, 1.0), r(0.0)],
    ])?;
    operator::assert_equal(&m, &m, 5, false, None)?;
    operator::assert_equal(&m, &m, 5, true, None)?;
    Ok(())
}

#[test]
fn test_state_vector_global_phase_invariance() -> Result<(), VeriqError> {
    let v = StateVector::new(vec![r(FRAC_1_SQRT_2), r(FRAC_1_SQRT_2)]);
    let phase = Complex::from_polar(1.0, 1.234);

    // Scaling either operand by a unit-magnitude scalar is invisible when
    // the comparison is phase-invariant, and visible otherwise.
    let scaled = StateVector::new(v.amplitudes().iter().map(|a| a * phase).collect());
    assert_state_vector_equals(&v, &scaled, 5, true, None)?;
    assert_state_vector_equals(&scaled, &v, 5, true, None)?;
    assert!(assert_state_vector_equals(&v, &scaled, 5, false, None).is_err());
    Ok(())
}

#[test]
fn test_operator_global_phase_invariance() -> Result<(), VeriqError> {
    let circuit = CircuitBuilder::new(2)?
        .add_gate(GateSpec::new(GateKind::Hadamard, vec![0], vec![]))?
        .add_gate(GateSpec::controlled(GateKind::PauliX, vec![0], vec![1], vec![1], vec![]))?
        .build();
    let u = circuit_operator(&circuit)?;

    let phase = Complex::from_polar(1.0, 0.4);
    let scaled = OperatorMatrix::from_elements(
        u.dim(),
        u.elements().iter().map(|e| e * phase).collect(),
    )?;

    // include_global_phase = false ignores the overall phase factor.
    assert_operator_equals(&scaled, None, Some(&u), 5, false, None)?;
    assert!(assert_operator_equals(&scaled, None, Some(&u), 5, true, None).is_err());
    Ok(())
}

#[test]
fn test_rounding_absorbs_sub_tolerance_noise() -> Result<(), VeriqError> {
    let a = StateVector::new(vec![r(1.0), r(0.0)]);
    let b = StateVector::new(vec![r(1.0 + 1e-7), r(-1e-7)]);
    assert_state_vector_equals(&a, &b, 5, false, None)?;
    // At a stricter precision the same noise is a mismatch.
    assert!(assert_state_vector_equals(&a, &b, 8, false, None).is_err());
    Ok(())
}

#[test]
fn test_diagnostic_lists_every_mismatched_index() {
    let a = StateVector::new(vec![r(1.0), r(0.0), r(0.5), r(0.0)]);
    let b = StateVector::new(vec![r(1.0), r(0.25), r(0.5), r(-0.25)]);

    let message = mismatch_message(assert_state_vector_equals(&a, &b, 5, false, None));
    assert!(message.contains("element 1:"), "missing index 1 in: {}", message);
    assert!(message.contains("element 3:"), "missing index 3 in: {}", message);
    assert!(!message.contains("element 0:"), "index 0 matched but is listed: {}", message);
    assert!(!message.contains("element 2:"), "index 2 matched but is listed: {}", message);
}

#[test]
fn test_diagnostic_lists_single_mismatch_only() {
    let a = StateVector::new(vec![r(1.0), r(0.0)]);
    let b = StateVector::new(vec![r(1.0), r(0.5)]);
    let message = mismatch_message(assert_state_vector_equals(&a, &b, 5, false, None));
    assert!(message.contains("element 1:"), "missing index 1 in: {}", message);
    assert!(!message.contains("element 0:"), "index 0 listed spuriously: {}", message);
}

#[test]
fn test_operator_diagnostic_reports_row_and_column() -> Result<(), VeriqError> {
    let a = OperatorMatrix::identity(2)?;
    let b = OperatorMatrix::from_rows(vec![
        vec![r(1.0), r(0.0)],
        vec![r(0.0), r(-1.0)],
    ])?;
    let message = mismatch_message(operator::assert_equal(&a, &b, 5, false, None));
    assert!(message.contains("entry (1, 1):"), "missing entry (1, 1) in: {}", message);
    Ok(())
}

#[test]
fn test_custom_message_prefixes_diagnostic() {
    let a = StateVector::new(vec![r(1.0)]);
    let b = StateVector::new(vec![r(0.0)]);
    let message =
        mismatch_message(assert_state_vector_equals(&a, &b, 5, false, Some("after H layer")));
    assert!(message.starts_with("after H layer : "), "prefix missing in: {}", message);
}

#[test]
fn test_shape_mismatch_fails_before_comparison() -> Result<(), VeriqError> {
    let a = StateVector::new(vec![r(1.0), r(0.0)]);
    let b = StateVector::new(vec![r(1.0), r(0.0), r(0.0)]);
    assert!(matches!(
        assert_state_vector_equals(&a, &b, 5, false, None),
        Err(VeriqError::ShapeMismatch { .. })
    ));

    let m2 = OperatorMatrix::identity(2)?;
    let m4 = OperatorMatrix::identity(4)?;
    assert!(matches!(
        operator::assert_equal(&m2, &m4, 5, false, None),
        Err(VeriqError::ShapeMismatch { .. })
    ));
    Ok(())
}

#[test]
fn test_is_normalized_accepts_unit_norm() -> Result<(), VeriqError> {
    let v = StateVector::new(vec![r(FRAC_1_SQRT_2), r(FRAC_1_SQRT_2)]);
    assert_state_vector_is_normalized(&v, 5, None)?;
    Ok(())
}

#[test]
fn test_is_normalized_rejects_unnormalized_vector() {
    let v = StateVector::new(vec![r(1.0), r(1.0)]);
    let message = mismatch_message(state_vector::assert_is_normalized(&v, 5, None));
    assert!(message.contains("not normalized"), "unexpected message: {}", message);
    assert!(message.contains("Norm: 1.41421"), "norm missing in: {}", message);
}

#[test]
fn test_operator_entry_point_requires_exactly_one_source() -> Result<(), VeriqError> {
    let expected = OperatorMatrix::identity(2)?;
    let circuit = CircuitBuilder::new(1)?.build();
    let actual = OperatorMatrix::identity(2)?;

    assert!(matches!(
        assert_operator_equals(&expected, None, None, 5, true, None),
        Err(VeriqError::Configuration { .. })
    ));
    assert!(matches!(
        assert_operator_equals(&expected, Some(&circuit), Some(&actual), 5, true, None),
        Err(VeriqError::Configuration { .. })
    ));

    // Exactly one source succeeds either way.
    assert_operator_equals(&expected, Some(&circuit), None, 5, true, None)?;
    assert_operator_equals(&expected, None, Some(&actual), 5, true, None)?;
    Ok(())
}

#[test]
fn test_operator_entry_point_verifies_cry_circuit() -> Result<(), VeriqError> {
    let theta = PI / 8.0;
    let circuit = CircuitBuilder::new(2)?
        .add_gate(GateSpec::controlled(
            GateKind::RotationY,
            vec![0],
            vec![1],
            vec![1],
            vec![theta],
        ))?
        .build();

    let (c, s) = ((theta / 2.0).cos(), (theta / 2.0).sin());
    let expected = OperatorMatrix::from_rows(vec![
        vec![r(1.0), r(0.0), r(0.0), r(0.0)],
        vec![r(0.0), r(1.0), r(0.0), r(0.0)],
        vec![r(0.0), r(0.0), r(c), r(-s)],
        vec![r(0.0), r(0.0), r(s), r(c)],
    ])?;

    assert_operator_equals(&expected, Some(&circuit), None, DEFAULT_DECIMAL_PLACES, true, None)?;

    // A wrong expectation is itemized, not silently accepted.
    let wrong = OperatorMatrix::identity(4)?;
    assert!(matches!(
        assert_operator_equals(&wrong, Some(&circuit), None, 5, true, None),
        Err(VeriqError::AssertionMismatch { .. })
    ));
    Ok(())
}

#[test]
fn test_qasm_loading_is_unsupported() {
    assert!(matches!(
        converter::circuit_from_qasm("OPENQASM 2.0; qreg q[2];"),
        Err(VeriqError::Unsupported { .. })
    ));
}
