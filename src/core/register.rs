// src/core/register.rs

use super::error::VeriqError;
use std::fmt;

/// Selects how a logical qubit index maps to a bit position inside a
/// basis-state integer in `[0, 2^n)`.
///
/// The embedding logic is otherwise convention-independent; this flag only
/// changes which physical bit a given qubit index addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QubitOrdering {
    /// Qubit 0 occupies the most significant bit of the basis-state integer,
    /// so `|q0 q1 ... q(n-1)>` reads left to right. Textbook convention.
    #[default]
    MsbFirst,
    /// Qubit 0 occupies the least significant bit, so basis-state integers
    /// read `|q(n-1) ... q1 q0>`. Matches hardware-style (Qiskit) ordering.
    LsbFirst,
}

/// An n-qubit register: a qubit count together with the ordering convention
/// used to index basis states. Immutable once a circuit is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QubitRegister {
    num_qubits: usize,
    ordering: QubitOrdering,
}

impl QubitRegister {
    /// Creates a register of `num_qubits` qubits with the given ordering.
    ///
    /// # Arguments
    /// * `num_qubits` - Number of qubits, must be at least 1.
    /// * `ordering` - The qubit-to-bit assignment convention.
    ///
    /// # Returns
    /// * `Ok(QubitRegister)` on success.
    /// * `Err(VeriqError::Configuration)` if `num_qubits` is zero or large
    ///   enough that the state-space dimension `2^n` overflows `usize`.
    pub fn new(num_qubits: usize, ordering: QubitOrdering) -> Result<Self, VeriqError> {
        if num_qubits == 0 {
            return Err(VeriqError::Configuration {
                message: "A qubit register must contain at least one qubit".to_string(),
            });
        }
        // Reject registers whose 2^n dimension cannot be represented.
        1usize.checked_shl(num_qubits as u32).ok_or_else(|| VeriqError::Configuration {
            message: format!(
                "Register of {} qubits is too large: state-space dimension overflows usize",
                num_qubits
            ),
        })?;
        Ok(Self { num_qubits, ordering })
    }

    /// Number of qubits in the register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The ordering convention in effect for this register.
    pub fn ordering(&self) -> QubitOrdering {
        self.ordering
    }

    /// Dimension of the register's state space, `2^n`.
    pub fn dim(&self) -> usize {
        1usize << self.num_qubits
    }

    /// Returns the bit position (0-based, counted from the least significant
    /// bit) that logical `qubit` occupies inside a basis-state integer.
    pub fn bit_position(&self, qubit: usize) -> usize {
        match self.ordering {
            QubitOrdering::MsbFirst => self.num_qubits - 1 - qubit,
            QubitOrdering::LsbFirst => qubit,
        }
    }

    /// Extracts the value (0 or 1) of `qubit` within basis state `basis`.
    pub fn bit_value(&self, basis: usize, qubit: usize) -> u8 {
        ((basis >> self.bit_position(qubit)) & 1) as u8
    }
}

impl fmt::Display for QubitRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.ordering {
            QubitOrdering::MsbFirst => "msb-first",
            QubitOrdering::LsbFirst => "lsb-first",
        };
        write!(f, "Register({} qubits, {})", self.num_qubits, tag)
    }
}
