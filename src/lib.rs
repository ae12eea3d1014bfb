// src/lib.rs

//! `veriq` - Operator construction and equality verification for quantum circuits
//!
//! This library builds the exact unitary matrix that a sequence of gate
//! operations implements on an n-qubit register and compares that operator,
//! or a state vector, against an expected value under configurable decimal
//! rounding and an optional global-phase-invariance rule.

pub mod core;
pub mod gates;
pub mod circuits;
pub mod embedding;
pub mod assertions;
pub mod converter;

// Re-export the most common types for easier top-level use
pub use core::{OperatorMatrix, QubitOrdering, QubitRegister, StateVector, VeriqError};
pub use gates::{GateKind, GateSpec};
pub use circuits::{CircuitBuilder, CircuitModel};
pub use embedding::{circuit_operator, embed_gate};
pub use assertions::{
    DEFAULT_DECIMAL_PLACES,
    assert_operator_equals,
    assert_state_vector_equals,
    assert_state_vector_is_normalized,
};

// Example 1: Verifying a controlled-Ry circuit against its expected operator.
// A CRY(pi/8) with control qubit 0 and target qubit 1 places the rotation
// block in the control-satisfied subspace and identity elsewhere.
/// ```
/// use veriq::{CircuitBuilder, GateKind, GateSpec, OperatorMatrix, assert_operator_equals};
/// use num_complex::Complex;
/// use std::f64::consts::PI;
///
/// let theta = PI / 8.0;
/// let circuit = CircuitBuilder::new(2)?
///     .add_gate(GateSpec::controlled(
///         GateKind::RotationY,
///         vec![0],      // control qubit
///         vec![1],      // required control value
///         vec![1],      // target qubit
///         vec![theta],
///     ))?
///     .build();
///
/// let (c, s) = ((theta / 2.0).cos(), (theta / 2.0).sin());
/// let r = |x: f64| Complex::new(x, 0.0);
/// let expected = OperatorMatrix::from_rows(vec![
///     vec![r(1.0), r(0.0), r(0.0), r(0.0)],
///     vec![r(0.0), r(1.0), r(0.0), r(0.0)],
///     vec![r(0.0), r(0.0), r(c),   r(-s) ],
///     vec![r(0.0), r(0.0), r(s),   r(c)  ],
/// ])?;
///
/// assert_operator_equals(&expected, Some(&circuit), None, 5, true, None)?;
/// # Ok::<(), veriq::VeriqError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: State-vector equality up to a global phase.
// Multiplying one operand by a unit-magnitude scalar must not matter when
// the comparison is phase-invariant.
/// ```
/// use veriq::{StateVector, assert_state_vector_equals, assert_state_vector_is_normalized};
/// use num_complex::Complex;
/// use std::f64::consts::FRAC_1_SQRT_2;
///
/// let plus = StateVector::new(vec![
///     Complex::new(FRAC_1_SQRT_2, 0.0),
///     Complex::new(FRAC_1_SQRT_2, 0.0),
/// ]);
/// let phase = Complex::from_polar(1.0, 0.7);
/// let rotated = StateVector::new(
///     plus.amplitudes().iter().map(|a| a * phase).collect(),
/// );
///
/// assert_state_vector_is_normalized(&plus, 5, None)?;
/// assert_state_vector_equals(&plus, &rotated, 5, true, None)?;
/// assert!(assert_state_vector_equals(&plus, &rotated, 5, false, None).is_err());
/// # Ok::<(), veriq::VeriqError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
