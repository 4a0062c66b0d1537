// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod config;
pub mod constants;
pub mod error;

// Re-export public types for convenient access via `ketform::core::TypeName`
pub use config::{Precision, default_precision, init_default_precision};
pub use constants::{DEFAULT_ATOL, DEFAULT_KET_TOLERANCE, reference::REFERENCE_CONSTANTS};
pub use error::KetError;
