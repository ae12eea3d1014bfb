// src/embedding/mod.rs

//! Expands small gate matrices into full-register operators and composes
//! gate sequences into one circuit-level operator.
//!
//! This is the algorithmic core of the crate: control-conditioned basis-pair
//! substitution over the `2^n` basis, driven by explicit bit manipulation
//! per the register's ordering convention.

use crate::circuits::CircuitModel;
use crate::core::{OperatorMatrix, QubitRegister, VeriqError};
use crate::gates::GateSpec;
use num_complex::Complex;
use num_traits::Zero;

/// Embeds one `GateSpec` into the full `2^n x 2^n` operator space.
///
/// The spec is validated against the register first. For a single target the
/// result places the 2x2 base matrix on every basis pair whose control bits
/// all match, and the identity elsewhere. A spec with several targets is
/// handled as independent sequential applications, one per target with the
/// identical control set, composed by matrix multiplication in target-list
/// order.
///
/// # Arguments
/// * `gate` - The gate to embed.
/// * `register` - The register defining size and ordering convention.
///
/// # Returns
/// * `Ok(OperatorMatrix)` of dimension `2^n`.
/// * `Err(VeriqError::Configuration)` if the spec does not fit the register.
pub fn embed_gate(gate: &GateSpec, register: &QubitRegister) -> Result<OperatorMatrix, VeriqError> {
    gate.validate(register)?;
    let base = gate.kind.base_matrix(&gate.parameters)?;

    let mut total = embed_single_target(
        &base,
        &gate.control_qubits,
        &gate.control_values,
        gate.target_qubits[0],
        register,
    )?;
    // Independent per-target applications; the factors commute since the
    // targets are distinct and the control set is shared.
    for &target in &gate.target_qubits[1..] {
        let next = embed_single_target(
            &base,
            &gate.control_qubits,
            &gate.control_values,
            target,
            register,
        )?;
        total = total.matmul(&next)?;
    }
    Ok(total)
}

/// Composes a whole circuit into one operator.
///
/// Embeds every gate in sequence and folds them by matrix multiplication,
/// with the gate appended last as the leftmost factor:
/// `Total = G_last * ... * G_first`. An empty circuit yields the `2^n`
/// identity. Pure and deterministic; no simplification or caching.
pub fn circuit_operator(circuit: &CircuitModel) -> Result<OperatorMatrix, VeriqError> {
    let register = circuit.register();
    let mut total = OperatorMatrix::identity(register.dim())?;
    for gate in circuit.gates() {
        let embedded = embed_gate(gate, register)?;
        // Later gates multiply from the left: apply-first ends up rightmost.
        total = embedded.matmul(&total)?;
    }
    Ok(total)
}

/// Embeds a 2x2 matrix acting on one target qubit, gated by the control
/// pattern. (Internal: `embed_gate` handles validation and multi-target
/// dispatch.)
///
/// Enumerates every basis pair `(i0, i1)` differing only in the target
/// qubit's bit position. A pair whose control bits all equal their required
/// values receives the four entries of `base`; every other pair receives the
/// 2x2 identity. Each basis state belongs to exactly one pair, so the result
/// is fully populated.
fn embed_single_target(
    base: &[[Complex<f64>; 2]; 2],
    control_qubits: &[usize],
    control_values: &[u8],
    target: usize,
    register: &QubitRegister,
) -> Result<OperatorMatrix, VeriqError> {
    let dim = register.dim();
    let target_mask = 1usize << register.bit_position(target);

    let mut op = OperatorMatrix::from_elements(dim, vec![Complex::zero(); dim * dim])?;

    for i0 in 0..dim {
        if i0 & target_mask != 0 {
            continue; // Visit each pair once, via its target-bit-clear member.
        }
        let i1 = i0 | target_mask;

        // Controls agree between i0 and i1 (the pair differs only at the
        // target bit), so checking i0 is sufficient.
        let controls_match = control_qubits
            .iter()
            .zip(control_values.iter())
            .all(|(&q, &v)| register.bit_value(i0, q) == v);

        if controls_match {
            op.set(i0, i0, base[0][0]);
            op.set(i0, i1, base[0][1]);
            op.set(i1, i0, base[1][0]);
            op.set(i1, i1, base[1][1]);
        } else {
            op.set(i0, i0, Complex::new(1.0, 0.0));
            op.set(i1, i1, Complex::new(1.0, 0.0));
        }
    }
    Ok(op)
}
