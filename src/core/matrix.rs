// src/core/matrix.rs

use super::error::VeriqError;
use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// A square complex matrix over the full register state space.
///
/// The dimension is always a power of two, `2^n` for an n-qubit register.
/// Entries are stored row-major. Instances are produced fresh per call by
/// the embedder/composer and never cached or shared.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex entries
pub struct OperatorMatrix {
    dim: usize,
    /// Row-major entries, `elements[row * dim + col]`.
    elements: Vec<Complex<f64>>,
}

impl OperatorMatrix {
    /// Creates a matrix from row-major elements.
    ///
    /// # Returns
    /// * `Err(VeriqError::Configuration)` if `dim` is not a power of two or
    ///   `elements.len() != dim * dim`.
    pub fn from_elements(dim: usize, elements: Vec<Complex<f64>>) -> Result<Self, VeriqError> {
        if !dim.is_power_of_two() {
            return Err(VeriqError::Configuration {
                message: format!("Operator dimension {} is not a power of two", dim),
            });
        }
        if elements.len() != dim * dim {
            return Err(VeriqError::Configuration {
                message: format!(
                    "Operator backing store has {} elements, expected {} for dimension {}",
                    elements.len(),
                    dim * dim,
                    dim
                ),
            });
        }
        Ok(Self { dim, elements })
    }

    /// Creates a matrix from nested rows. Rows must be equally sized and
    /// form a square, power-of-two-dimensional matrix.
    pub fn from_rows(rows: Vec<Vec<Complex<f64>>>) -> Result<Self, VeriqError> {
        let dim = rows.len();
        for row in &rows {
            if row.len() != dim {
                return Err(VeriqError::Configuration {
                    message: format!(
                        "Operator row has {} entries, expected {} for a square matrix",
                        row.len(),
                        dim
                    ),
                });
            }
        }
        Self::from_elements(dim, rows.into_iter().flatten().collect())
    }

    /// The `dim x dim` identity operator.
    pub fn identity(dim: usize) -> Result<Self, VeriqError> {
        let mut elements = vec![Complex::zero(); dim * dim];
        for i in 0..dim {
            elements[i * dim + i] = Complex::new(1.0, 0.0);
        }
        Self::from_elements(dim, elements)
    }

    /// Matrix dimension (number of rows = number of columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Read-only access to the row-major backing store.
    pub fn elements(&self) -> &[Complex<f64>] {
        &self.elements
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Complex<f64> {
        self.elements[row * self.dim + col]
    }

    /// Overwrites the entry at `(row, col)`. (Internal visibility: matrices
    /// are immutable once they leave the embedder.)
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Complex<f64>) {
        self.elements[row * self.dim + col] = value;
    }

    /// Ordinary matrix product `self * rhs`.
    ///
    /// # Returns
    /// * `Err(VeriqError::ShapeMismatch)` if the dimensions differ.
    pub fn matmul(&self, rhs: &OperatorMatrix) -> Result<OperatorMatrix, VeriqError> {
        if self.dim != rhs.dim {
            return Err(VeriqError::ShapeMismatch {
                message: format!(
                    "Cannot multiply operators of dimension {} and {}",
                    self.dim, rhs.dim
                ),
            });
        }
        let dim = self.dim;
        let mut elements = vec![Complex::zero(); dim * dim];
        for row in 0..dim {
            for k in 0..dim {
                let lhs_entry = self.elements[row * dim + k];
                if lhs_entry.is_zero() {
                    continue; // Embedded operators are sparse; skip zero rows cheaply.
                }
                for col in 0..dim {
                    elements[row * dim + col] += lhs_entry * rhs.elements[k * dim + col];
                }
            }
        }
        OperatorMatrix::from_elements(dim, elements)
    }

    /// Conjugate transpose of the operator.
    pub fn dagger(&self) -> OperatorMatrix {
        let dim = self.dim;
        let mut elements = vec![Complex::zero(); dim * dim];
        for row in 0..dim {
            for col in 0..dim {
                elements[col * dim + row] = self.elements[row * dim + col].conj();
            }
        }
        Self { dim, elements }
    }
}

impl fmt::Display for OperatorMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Operator[{}x{}]", self.dim, self.dim)?;
        for row in 0..self.dim {
            write!(f, "  [")?;
            for col in 0..self.dim {
                let c = self.get(row, col);
                write!(f, "{}{:.4}", if col > 0 { ", " } else { "" }, c)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
