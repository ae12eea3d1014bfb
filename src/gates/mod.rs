// src/gates/mod.rs

//! Defines the gate alphabet and the descriptive record for one circuit
//! operation (`GateSpec`).
//!
//! A `GateKind` is a closed variant mapping parameters to a small base
//! matrix; any kind becomes a controlled gate by attaching control qubits
//! to its `GateSpec`. Adding a gate kind extends the variant and its single
//! evaluation function, never scattered conditionals.

use crate::core::{QubitRegister, VeriqError};
use num_complex::Complex;
use num_traits::Zero;
use std::collections::HashSet;
use std::fmt;

/// The supported base gates. All kinds are single-target: a `GateSpec`
/// listing several targets applies the gate to each target independently
/// (see `embedding`), it never forms a joint multi-qubit matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Bit flip, `X`.
    PauliX,
    /// Combined flip/phase, `Y`.
    PauliY,
    /// Phase flip, `Z`.
    PauliZ,
    /// Equal superposition, `H`.
    Hadamard,
    /// Quarter-turn phase, `S` = diag(1, i).
    Phase,
    /// Eighth-turn phase, `T` = diag(1, e^(i*pi/4)).
    PhaseQuarter,
    /// X-axis rotation `Rx(theta)`, one parameter.
    RotationX,
    /// Y-axis rotation `Ry(theta)`, one parameter.
    RotationY,
    /// Z-axis rotation `Rz(theta)`, one parameter.
    RotationZ,
    /// Arbitrary phase `P(lambda)` = diag(1, e^(i*lambda)), one parameter.
    PhaseShift,
}

impl GateKind {
    /// Number of real-valued parameters the kind expects.
    pub fn parameter_arity(&self) -> usize {
        match self {
            GateKind::PauliX
            | GateKind::PauliY
            | GateKind::PauliZ
            | GateKind::Hadamard
            | GateKind::Phase
            | GateKind::PhaseQuarter => 0,
            GateKind::RotationX
            | GateKind::RotationY
            | GateKind::RotationZ
            | GateKind::PhaseShift => 1,
        }
    }

    /// Evaluates the 2x2 base matrix for this kind.
    ///
    /// # Arguments
    /// * `parameters` - Real parameters; length must equal `parameter_arity`.
    ///
    /// # Returns
    /// * `Ok` with the matrix in row-major `[[row0], [row1]]` form.
    /// * `Err(VeriqError::Configuration)` on parameter arity mismatch.
    pub fn base_matrix(&self, parameters: &[f64]) -> Result<[[Complex<f64>; 2]; 2], VeriqError> {
        use std::f64::consts::FRAC_1_SQRT_2;

        if parameters.len() != self.parameter_arity() {
            return Err(VeriqError::Configuration {
                message: format!(
                    "Gate {} expects {} parameter(s), got {}",
                    self,
                    self.parameter_arity(),
                    parameters.len()
                ),
            });
        }

        let one = Complex::new(1.0, 0.0);
        let i = Complex::i();

        let matrix = match self {
            GateKind::PauliX => [
                [Complex::zero(), one],
                [one, Complex::zero()],
            ],
            GateKind::PauliY => [
                [Complex::zero(), -i],
                [i, Complex::zero()],
            ],
            GateKind::PauliZ => [
                [one, Complex::zero()],
                [Complex::zero(), -one],
            ],
            GateKind::Hadamard => [
                [Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(FRAC_1_SQRT_2, 0.0)],
                [Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(-FRAC_1_SQRT_2, 0.0)],
            ],
            GateKind::Phase => [
                [one, Complex::zero()],
                [Complex::zero(), i], // e^(i*pi/2) = i
            ],
            GateKind::PhaseQuarter => [
                [one, Complex::zero()],
                [Complex::zero(), Complex::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)], // e^(i*pi/4)
            ],
            GateKind::RotationX => {
                // Rx(theta) = [[cos(a), -i*sin(a)], [-i*sin(a), cos(a)]] where a = theta/2
                let a = parameters[0] / 2.0;
                let (cos_a, sin_a) = (a.cos(), a.sin());
                [
                    [Complex::new(cos_a, 0.0), -i * sin_a],
                    [-i * sin_a, Complex::new(cos_a, 0.0)],
                ]
            }
            GateKind::RotationY => {
                // Ry(theta) = [[cos(a), -sin(a)], [sin(a), cos(a)]] where a = theta/2
                let a = parameters[0] / 2.0;
                let (cos_a, sin_a) = (a.cos(), a.sin());
                [
                    [Complex::new(cos_a, 0.0), Complex::new(-sin_a, 0.0)],
                    [Complex::new(sin_a, 0.0), Complex::new(cos_a, 0.0)],
                ]
            }
            GateKind::RotationZ => {
                // Rz(theta) = diag(e^(-i*a), e^(i*a)) where a = theta/2
                let a = parameters[0] / 2.0;
                [
                    [Complex::new(a.cos(), -a.sin()), Complex::zero()],
                    [Complex::zero(), Complex::new(a.cos(), a.sin())],
                ]
            }
            GateKind::PhaseShift => {
                let lambda = parameters[0];
                [
                    [one, Complex::zero()],
                    [Complex::zero(), Complex::new(lambda.cos(), lambda.sin())],
                ]
            }
        };
        Ok(matrix)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            GateKind::PauliX => "X",
            GateKind::PauliY => "Y",
            GateKind::PauliZ => "Z",
            GateKind::Hadamard => "H",
            GateKind::Phase => "S",
            GateKind::PhaseQuarter => "T",
            GateKind::RotationX => "Rx",
            GateKind::RotationY => "Ry",
            GateKind::RotationZ => "Rz",
            GateKind::PhaseShift => "P",
        };
        write!(f, "{}", symbol)
    }
}

/// One operation within a circuit: a base gate kind, the qubits it acts on,
/// and the control pattern gating its application.
///
/// A spec with an empty control list applies the gate unconditionally. With
/// controls present, the base matrix acts on a basis state only when every
/// control qubit's bit equals its required value (logical AND); otherwise
/// the gate acts as identity on that state.
#[derive(Debug, Clone, PartialEq)]
pub struct GateSpec {
    /// The base gate applied to each target.
    pub kind: GateKind,
    /// Ordered control-qubit indices; no duplicates.
    pub control_qubits: Vec<usize>,
    /// Required control values, parallel to `control_qubits`; each 0 or 1.
    pub control_values: Vec<u8>,
    /// Ordered target-qubit indices; no duplicates, disjoint from controls.
    pub target_qubits: Vec<usize>,
    /// Real-valued parameters (e.g., a rotation angle).
    pub parameters: Vec<f64>,
}

impl GateSpec {
    /// Convenience constructor for an uncontrolled gate.
    pub fn new(kind: GateKind, target_qubits: Vec<usize>, parameters: Vec<f64>) -> Self {
        Self {
            kind,
            control_qubits: Vec::new(),
            control_values: Vec::new(),
            target_qubits,
            parameters,
        }
    }

    /// Convenience constructor for a controlled gate.
    pub fn controlled(
        kind: GateKind,
        control_qubits: Vec<usize>,
        control_values: Vec<u8>,
        target_qubits: Vec<usize>,
        parameters: Vec<f64>,
    ) -> Self {
        Self { kind, control_qubits, control_values, target_qubits, parameters }
    }

    /// Validates this spec against a register.
    ///
    /// Checks, in order: at least one target; every control/target index in
    /// range; no duplicate controls; no duplicate targets; control and
    /// target sets disjoint; `control_values` parallel to `control_qubits`
    /// with each value 0 or 1; parameter arity matching the gate kind.
    ///
    /// # Returns
    /// * `Err(VeriqError::Configuration)` naming the first violation found.
    pub fn validate(&self, register: &QubitRegister) -> Result<(), VeriqError> {
        let n = register.num_qubits();

        if self.target_qubits.is_empty() {
            return Err(VeriqError::Configuration {
                message: format!("Gate {} has no target qubits", self.kind),
            });
        }

        for &q in self.control_qubits.iter().chain(self.target_qubits.iter()) {
            if q >= n {
                return Err(VeriqError::Configuration {
                    message: format!(
                        "Qubit index {} is out of range for a register of {} qubits",
                        q, n
                    ),
                });
            }
        }

        let controls: HashSet<usize> = self.control_qubits.iter().cloned().collect();
        if controls.len() != self.control_qubits.len() {
            return Err(VeriqError::Configuration {
                message: format!("Gate {} lists a duplicate control qubit", self.kind),
            });
        }
        let targets: HashSet<usize> = self.target_qubits.iter().cloned().collect();
        if targets.len() != self.target_qubits.len() {
            return Err(VeriqError::Configuration {
                message: format!("Gate {} lists a duplicate target qubit", self.kind),
            });
        }
        if !controls.is_disjoint(&targets) {
            return Err(VeriqError::Configuration {
                message: format!(
                    "Gate {} uses the same qubit as both control and target",
                    self.kind
                ),
            });
        }

        if self.control_values.len() != self.control_qubits.len() {
            return Err(VeriqError::Configuration {
                message: format!(
                    "Gate {} has {} control value(s) for {} control qubit(s)",
                    self.kind,
                    self.control_values.len(),
                    self.control_qubits.len()
                ),
            });
        }
        for &v in &self.control_values {
            if v > 1 {
                return Err(VeriqError::Configuration {
                    message: format!("Control value {} is not a bit (must be 0 or 1)", v),
                });
            }
        }

        if self.parameters.len() != self.kind.parameter_arity() {
            return Err(VeriqError::Configuration {
                message: format!(
                    "Gate {} expects {} parameter(s), got {}",
                    self.kind,
                    self.kind.parameter_arity(),
                    self.parameters.len()
                ),
            });
        }

        Ok(())
    }
}

impl fmt::Display for GateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.control_qubits.is_empty() {
            write!(f, "{} targets={:?}", self.kind, self.target_qubits)?;
        } else {
            write!(
                f,
                "C{} controls={:?} values={:?} targets={:?}",
                self.kind, self.control_qubits, self.control_values, self.target_qubits
            )?;
        }
        if !self.parameters.is_empty() {
            write!(f, " params={:?}", self.parameters)?;
        }
        Ok(())
    }
}
