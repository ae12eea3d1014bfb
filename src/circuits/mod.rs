// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! gate operations (`veriq::gates::GateSpec`) over a fixed qubit register.
//!
//! A `CircuitModel` is a read-only input to the operator composer: it is
//! built once (by a caller or an external converter) and never mutated by
//! the verification core.

use crate::core::{QubitOrdering, QubitRegister, VeriqError};
use crate::gates::GateSpec;
use std::fmt;

/// An ordered sequence of gate operations applied to an n-qubit register.
///
/// Gates are applied in sequence order, first gate applied first. In the
/// composed circuit operator the last-appended gate is therefore the
/// leftmost matrix factor (standard right-to-left time ordering).
///
/// Analogy: similar to `cirq.Circuit` or `qiskit.QuantumCircuit`, but purely
/// descriptive; the matrix semantics live in `veriq::embedding`.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitModel {
    /// The register every gate in the sequence addresses.
    register: QubitRegister,
    /// The ordered sequence of gates defining the circuit's logic.
    gates: Vec<GateSpec>,
}

impl CircuitModel {
    /// The register this circuit is defined over.
    pub fn register(&self) -> &QubitRegister {
        &self.register
    }

    /// The ordered sequence of gates in this circuit.
    pub fn gates(&self) -> &[GateSpec] {
        &self.gates
    }

    /// Total number of gates in the circuit.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `CircuitModel`
/// instances using method chaining.
///
/// Each appended gate is validated against the register immediately, so a
/// successfully built circuit is structurally sound by construction.
pub struct CircuitBuilder {
    register: QubitRegister,
    gates: Vec<GateSpec>,
}

impl CircuitBuilder {
    /// Creates a builder over a register of `num_qubits` qubits with the
    /// default (msb-first) ordering.
    ///
    /// # Returns
    /// * `Err(VeriqError::Configuration)` if the register is invalid.
    pub fn new(num_qubits: usize) -> Result<Self, VeriqError> {
        Self::with_ordering(num_qubits, QubitOrdering::MsbFirst)
    }

    /// Creates a builder over a register with an explicit ordering
    /// convention.
    pub fn with_ordering(num_qubits: usize, ordering: QubitOrdering) -> Result<Self, VeriqError> {
        let register = QubitRegister::new(num_qubits, ordering)?;
        Ok(Self { register, gates: Vec::new() })
    }

    /// Appends a single gate to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    ///
    /// # Returns
    /// * `Err(VeriqError::Configuration)` if the gate does not fit the
    ///   register (out-of-range index, overlapping control/target sets,
    ///   wrong parameter arity, ...).
    pub fn add_gate(mut self, gate: GateSpec) -> Result<Self, VeriqError> {
        gate.validate(&self.register)?;
        self.gates.push(gate);
        Ok(self)
    }

    /// Appends multiple gates from an iterator to the circuit being built.
    pub fn add_gates<I>(mut self, gates: I) -> Result<Self, VeriqError>
    where
        I: IntoIterator<Item = GateSpec>,
    {
        for gate in gates {
            self = self.add_gate(gate)?;
        }
        Ok(self)
    }

    /// Finalizes the construction process and returns the built circuit.
    pub fn build(self) -> CircuitModel {
        CircuitModel { register: self.register, gates: self.gates }
    }
}

impl fmt::Display for CircuitModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "veriq::CircuitModel[{} gate(s) on {}]",
            self.gates.len(),
            self.register
        )?;
        for (i, gate) in self.gates.iter().enumerate() {
            writeln!(f, "  {:>3}: {}", i, gate)?;
        }
        Ok(())
    }
}
