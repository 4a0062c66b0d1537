// src/format/ket.rs

//! Ket-basis rendering of dense state vectors.

use crate::core::constants::DEFAULT_KET_TOLERANCE;
use crate::core::{KetError, Precision};
use crate::format::expr::expression;
use crate::format::fraction::real_expression;
use num_complex::Complex;

/// Digit order for rendered basis bitstrings.
///
/// The conventional reading is most-significant-bit first (`index 2` of a
/// two-qubit state is `¦10⟩`). Some hardware-facing layouts label qubit 0
/// on the left instead; [`BitOrder::LeastSignificantFirst`] reverses the
/// string for those. Both orderings are explicit because the boolean flag
/// this replaces was named backwards from its effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// Natural binary order: the leftmost digit is the highest bit.
    #[default]
    MostSignificantFirst,
    /// Reversed order: the leftmost digit is the lowest bit.
    LeastSignificantFirst,
}

/// Renders a basis index as a zero-padded bitstring of `width` digits.
///
/// # Examples
/// ```
/// use ketform::format::{BitOrder, index_to_bitstring};
///
/// assert_eq!(index_to_bitstring(2, 3, BitOrder::MostSignificantFirst), "010");
/// assert_eq!(index_to_bitstring(2, 3, BitOrder::LeastSignificantFirst), "010");
/// assert_eq!(index_to_bitstring(1, 3, BitOrder::LeastSignificantFirst), "100");
/// ```
pub fn index_to_bitstring(index: usize, width: u32, order: BitOrder) -> String {
    let bits = format!("{index:0width$b}", width = width as usize);
    match order {
        BitOrder::MostSignificantFirst => bits,
        BitOrder::LeastSignificantFirst => bits.chars().rev().collect(),
    }
}

/// Renders the ket format of a quantum state, most-significant-bit first.
///
/// One string is produced per amplitude whose magnitude reaches `tol`
/// (default `1e-7`), in ascending basis-index order; below-tolerance
/// amplitudes are omitted entirely rather than emitted as zero kets.
///
/// # Errors
/// * `InvalidShape` if the vector length is not a positive power of two.
/// * `InvalidArgument` if a provided `tol` is negative or non-finite.
///
/// # Examples
/// ```
/// use num_complex::Complex;
/// use ketform::format::ket_strings;
///
/// let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
/// let state = [
///     Complex::new(inv_sqrt2, 0.0),
///     Complex::new(0.0, -inv_sqrt2),
/// ];
/// let kets = ket_strings(&state, None).unwrap();
/// assert_eq!(kets, vec!["√2/2¦0⟩", "-√2/2j¦1⟩"]);
/// ```
pub fn ket_strings(state: &[Complex<f64>], tol: Option<f64>) -> Result<Vec<String>, KetError> {
    ket_strings_ordered(state, tol, BitOrder::MostSignificantFirst)
}

/// [`ket_strings`] with an explicit bitstring digit order.
pub fn ket_strings_ordered(
    state: &[Complex<f64>],
    tol: Option<f64>,
    order: BitOrder,
) -> Result<Vec<String>, KetError> {
    let tol = match tol {
        Some(tolerance) => Precision::new(tolerance)?.atol(),
        None => DEFAULT_KET_TOLERANCE,
    };
    if state.is_empty() || !state.len().is_power_of_two() {
        return Err(KetError::InvalidShape {
            message: format!(
                "state vector length must be a positive power of two, got {}",
                state.len()
            ),
        });
    }
    let width = state.len().trailing_zeros();

    let mut kets = Vec::new();
    for (index, amplitude) in state.iter().enumerate() {
        if amplitude.norm() < tol {
            continue;
        }
        let bits = index_to_bitstring(index, width, order);
        let entry = if amplitude.re.abs() < tol {
            format!("{}j¦{bits}⟩", expression(amplitude.im))
        } else if amplitude.im.abs() < tol {
            format!("{}¦{bits}⟩", expression(amplitude.re))
        } else {
            let re = real_expression(amplitude.re, None);
            let im = real_expression(amplitude.im, None);
            if im.starts_with('-') {
                format!("({re}{im}j)¦{bits}⟩")
            } else {
                format!("({re}+{im}j)¦{bits}⟩")
            }
        };
        kets.push(entry);
    }
    Ok(kets)
}
