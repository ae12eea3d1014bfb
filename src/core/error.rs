//! Error handling logic

use std::fmt;

/// Error types covering every failure mode of the verification engine.
///
/// All errors are fatal to the call that produced them and propagate
/// synchronously; the engine performs no local recovery or retries.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum VeriqError {
    /// Invalid or contradictory call arguments: out-of-range qubit indices,
    /// overlapping control/target sets, mismatched parameter arity, or a
    /// comparison entry point given both (or neither) of its circuit sources.
    Configuration {
        /// Configuration failure message
        message: String
    },

    /// Operands to an equality check have incompatible dimensions.
    /// Detected before any elementwise comparison takes place.
    ShapeMismatch {
        /// ShapeMismatch failure message
        message: String
    },

    /// A collaborator path was invoked before it is implemented
    /// (e.g., loading a circuit from its textual description format).
    Unsupported {
        /// Unsupported failure message
        message: String
    },

    /// The domain-level verification failure: values differ beyond the
    /// requested tolerance. Carries an itemized diagnostic listing every
    /// mismatched index together with both values.
    AssertionMismatch {
        /// Itemized mismatch diagnostic
        message: String
    },
}

impl fmt::Display for VeriqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VeriqError::Configuration { message } => write!(f, "Configuration Error: {}", message),
            VeriqError::ShapeMismatch { message } => write!(f, "Shape Mismatch: {}", message),
            VeriqError::Unsupported { message } => write!(f, "Unsupported Operation: {}", message),
            VeriqError::AssertionMismatch { message } => write!(f, "Assertion Mismatch: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for VeriqError {}
