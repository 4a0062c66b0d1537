// src/format/mod.rs

//! The symbolic-expression engine: tolerance-based closeness, the
//! pretty-fraction search, recursive complex rendering, and ket assembly.
//!
//! Data flows strictly bottom-up through this module: [`is_close`] feeds
//! [`expression`]'s zero detection, [`real_expression`] supplies the
//! real-axis renderings, and [`ket_strings`] composes the final per-basis
//! output strings.

pub mod expr;
pub mod fraction;
pub mod ket;
pub mod tolerance;

pub use expr::expression;
pub use fraction::real_expression;
pub use ket::{BitOrder, index_to_bitstring, ket_strings, ket_strings_ordered};
pub use tolerance::is_close;
