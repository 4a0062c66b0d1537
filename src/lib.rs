// src/lib.rs

//! `ketform` - symbolic ket-notation formatting for quantum state vectors
//!
//! This library renders numeric amplitudes and real coefficients as
//! human-readable symbolic expressions, recognising that a float like
//! `0.7071067811865476` is really `√2/2`, and assembles those expressions
//! into the ket form of a state vector (`√2/2¦0⟩`). It is aimed at
//! inspecting circuits and states in a REPL or a log, not at symbolic
//! computation: expressions are never parsed back into numbers.

pub mod core;
pub mod format;
pub mod linalg;
pub mod pauli;
pub mod random;
pub mod text;

// Re-export the most common types for easier top-level use
pub use core::{KetError, Precision, default_precision, init_default_precision};
pub use format::{
    BitOrder, expression, index_to_bitstring, is_close, ket_strings, ket_strings_ordered,
    real_expression,
};
pub use linalg::{norm, normalize};
pub use pauli::{PauliMatrices, SquareMatrix};
pub use random::random_state;

// Example 1: Rendering a Bell-like state
// Shows the pretty-fraction recognition and the per-basis ket assembly.
/// ```
/// use num_complex::Complex;
/// use ketform::ket_strings;
///
/// let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
/// let state = [
///     Complex::new(inv_sqrt2, 0.0),
///     Complex::new(0.0, 0.0),
///     Complex::new(0.0, 0.0),
///     Complex::new(-inv_sqrt2, 0.0),
/// ];
///
/// let kets = ket_strings(&state, None).unwrap();
/// assert_eq!(kets, vec!["√2/2¦00⟩", "-√2/2¦11⟩"]);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Scalar expressions
// The same engine works on bare reals and complex scalars.
/// ```
/// use num_complex::Complex;
/// use ketform::{expression, real_expression};
///
/// assert_eq!(real_expression(std::f64::consts::PI / 2.0, None), "π/2");
/// assert_eq!(expression(Complex::new(0.5, -0.5)), "1/2-1/2j");
///
/// // No pretty form exists, so the decimal fallback kicks in.
/// assert_eq!(real_expression(7.0 / 11.0, Some(4)), "0.6364");
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
