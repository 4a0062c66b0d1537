// src/pauli/mod.rs

//! Pauli-string matrices built by recursive Kronecker products.
//!
//! A pauli string such as `"XYZ"` names the operator `Z ⊗ Y ⊗ X`: the
//! first character acts on the lowest qubit, and each following character
//! is tensored on from the left. Construction is memoized through an
//! explicit table the caller owns ([`PauliMatrices`]) rather than any
//! hidden global cache.

use crate::core::KetError;
use num_complex::Complex;
use num_traits::{One, Zero};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A dense square matrix of complex amplitudes, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    dim: usize,
    data: Vec<Complex<f64>>,
}

impl SquareMatrix {
    /// Builds a 2x2 matrix from its rows.
    pub fn from_rows_2x2(rows: [[Complex<f64>; 2]; 2]) -> Self {
        Self {
            dim: 2,
            data: rows.into_iter().flatten().collect(),
        }
    }

    /// The number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The entry at `(row, col)`. Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Complex<f64> {
        assert!(row < self.dim && col < self.dim, "matrix index out of range");
        self.data[row * self.dim + col]
    }

    /// Row-major view of all entries.
    pub fn entries(&self) -> &[Complex<f64>] {
        &self.data
    }

    /// Kronecker product `self ⊗ other`.
    pub fn kron(&self, other: &SquareMatrix) -> SquareMatrix {
        let dim = self.dim * other.dim;
        let mut data = vec![Complex::zero(); dim * dim];
        for row_a in 0..self.dim {
            for col_a in 0..self.dim {
                let factor = self.get(row_a, col_a);
                for row_b in 0..other.dim {
                    for col_b in 0..other.dim {
                        let row = row_a * other.dim + row_b;
                        let col = col_a * other.dim + col_b;
                        data[row * dim + col] = factor * other.get(row_b, col_b);
                    }
                }
            }
        }
        SquareMatrix { dim, data }
    }
}

/// The 2x2 matrix for a single pauli character.
fn base_matrix(pauli: char) -> Result<SquareMatrix, KetError> {
    let one = Complex::<f64>::one;
    let zero = Complex::<f64>::zero;
    let i = || Complex::new(0.0, 1.0);
    let rows = match pauli {
        'I' => [[one(), zero()], [zero(), one()]],
        'X' => [[zero(), one()], [one(), zero()]],
        'Y' => [[zero(), -i()], [i(), zero()]],
        'Z' => [[one(), zero()], [zero(), -one()]],
        other => {
            return Err(KetError::InvalidArgument {
                message: format!("pauli string may only contain I, X, Y, Z, got '{other}'"),
            });
        }
    };
    Ok(SquareMatrix::from_rows_2x2(rows))
}

/// Memo table for pauli-string matrices.
///
/// # Examples
/// ```
/// use ketform::pauli::PauliMatrices;
///
/// let mut table = PauliMatrices::new();
/// let xx = table.matrix("XX").unwrap();
/// assert_eq!(xx.dim(), 4);
/// assert_eq!(xx.get(0, 3).re, 1.0);
/// ```
#[derive(Debug, Default)]
pub struct PauliMatrices {
    cache: HashMap<String, SquareMatrix>,
}

impl PauliMatrices {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The matrix for `pauli_string`, built on first request and served
    /// from the table afterwards.
    ///
    /// # Errors
    /// * `InvalidArgument` for an empty string or any character outside
    ///   `I`/`X`/`Y`/`Z`.
    pub fn matrix(&mut self, pauli_string: &str) -> Result<&SquareMatrix, KetError> {
        match self.cache.entry(pauli_string.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(build_matrix(pauli_string)?)),
        }
    }

    /// Number of distinct pauli strings built so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether no matrix has been built yet.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Pure recursive construction: later characters are tensored on from the
/// left, so `"XYZ"` yields `Z ⊗ Y ⊗ X`.
fn build_matrix(pauli_string: &str) -> Result<SquareMatrix, KetError> {
    let mut chars = pauli_string.chars();
    let first = chars.next().ok_or_else(|| KetError::InvalidArgument {
        message: "pauli string must not be empty".to_string(),
    })?;
    let mut matrix = base_matrix(first)?;
    for pauli in chars {
        matrix = base_matrix(pauli)?.kron(&matrix);
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character_strings_are_the_base_matrices() {
        let mut table = PauliMatrices::new();
        let z = table.matrix("Z").unwrap();
        assert_eq!(z.get(0, 0), Complex::new(1.0, 0.0));
        assert_eq!(z.get(1, 1), Complex::new(-1.0, 0.0));
        assert_eq!(z.get(0, 1), Complex::zero());
    }

    #[test]
    fn later_characters_tensor_from_the_left() {
        let mut table = PauliMatrices::new();
        // "IZ" is Z ⊗ I: diag(1, 1, -1, -1).
        let zi = table.matrix("IZ").unwrap().clone();
        for (index, expected) in [1.0, 1.0, -1.0, -1.0].into_iter().enumerate() {
            assert_eq!(zi.get(index, index), Complex::new(expected, 0.0));
        }
    }

    #[test]
    fn matrices_are_served_from_the_table_on_repeat() {
        let mut table = PauliMatrices::new();
        table.matrix("XY").unwrap();
        table.matrix("XY").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn invalid_characters_are_rejected() {
        let mut table = PauliMatrices::new();
        assert!(matches!(
            table.matrix("XQ"),
            Err(KetError::InvalidArgument { .. })
        ));
        assert!(matches!(
            table.matrix(""),
            Err(KetError::InvalidArgument { .. })
        ));
    }
}
