// src/core/state.rs

use num_complex::Complex;
use std::fmt;

/// A complex state vector over `2^k` basis amplitudes.
///
/// Equality checks do not require the vector to be normalized; a vector is
/// only called "normalized" when its Euclidean norm rounds to exactly 1.0
/// at the requested precision (see `assertions::state_vector`).
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// Creates a state vector from the given amplitudes.
    /// No normalization is enforced here; validation happens in the
    /// assertion layer where a tolerance is available.
    pub fn new(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Read-only access to the amplitude vector.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Number of basis amplitudes.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Euclidean norm, `sqrt(sum(v_i * conj(v_i)))`, taken as a real value.
    pub fn norm(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }
}

impl From<Vec<Complex<f64>>> for StateVector {
    fn from(amplitudes: Vec<Complex<f64>>) -> Self {
        Self::new(amplitudes)
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
