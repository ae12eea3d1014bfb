// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod register;
pub mod matrix;
pub mod state;

// Re-export public types for convenient access via `veriq::core::TypeName`
pub use error::VeriqError;
pub use register::{QubitOrdering, QubitRegister};
pub use matrix::OperatorMatrix;
pub use state::StateVector;
