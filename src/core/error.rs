// src/core/error.rs

//! Error handling logic

use std::fmt;

/// Error types for the formatting and state-vector helpers.
///
/// Every fallible function in this crate fails synchronously with one of
/// these variants; nothing is retried or recovered internally, since all
/// operations are pure computations over immutable inputs.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum KetError {
    /// A scalar argument is outside its domain, e.g. a negative or
    /// non-finite tolerance, a zero-norm vector passed to `normalize`,
    /// or a character outside `I`/`X`/`Y`/`Z` in a Pauli string.
    InvalidArgument {
        /// InvalidArgument failure message
        message: String,
    },

    /// A state vector has an unusable shape: empty, or a length that is
    /// not a power of two (so it cannot describe a whole number of qubits).
    InvalidShape {
        /// InvalidShape failure message
        message: String,
    },
}

impl fmt::Display for KetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KetError::InvalidArgument { message } => write!(f, "Invalid Argument: {}", message),
            KetError::InvalidShape { message } => write!(f, "Invalid Shape: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for KetError {}
