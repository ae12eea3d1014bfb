// src/converter/mod.rs

//! Conversion boundary between external circuit descriptions and the
//! internal `CircuitModel`.
//!
//! Converters are collaborators of the verification core: the core consumes
//! only fully built circuits and never parses external formats itself.
//! Loading the textual (OpenQASM) format is not implemented yet; the stub
//! below surfaces that clearly instead of guessing at a grammar.

use crate::circuits::CircuitModel;
use crate::core::VeriqError;

/// Builds a `CircuitModel` from an OpenQASM source string.
///
/// # Returns
/// * `Err(VeriqError::Unsupported)` — always, until a qasm front end
///   exists. Callers must not fall back to an incorrect circuit.
pub fn circuit_from_qasm(_source: &str) -> Result<CircuitModel, VeriqError> {
    Err(VeriqError::Unsupported {
        message: "Loading OpenQASM is not yet implemented.".to_string(),
    })
}
