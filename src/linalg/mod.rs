// src/linalg/mod.rs

//! Norm and normalization helpers for dense complex vectors.

use crate::core::KetError;
use num_complex::Complex;

/// Euclidean norm of a complex vector: `sqrt(Σ |c_i|^2)`.
///
/// # Examples
/// ```
/// use num_complex::Complex;
/// use ketform::linalg::norm;
///
/// let vec = [Complex::new(3.0, 0.0), Complex::new(0.0, 4.0)];
/// assert_eq!(norm(&vec), 5.0);
/// ```
pub fn norm(vec: &[Complex<f64>]) -> f64 {
    vec.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
}

/// Scales a complex vector to unit norm.
///
/// # Errors
/// * `InvalidArgument` if the vector is empty or its norm is zero or
///   non-finite, since no unit-norm rescaling exists for it.
pub fn normalize(vec: &[Complex<f64>]) -> Result<Vec<Complex<f64>>, KetError> {
    if vec.is_empty() {
        return Err(KetError::InvalidArgument {
            message: "cannot normalize an empty vector".to_string(),
        });
    }
    let length = norm(vec);
    if length == 0.0 || !length.is_finite() {
        return Err(KetError::InvalidArgument {
            message: format!("cannot normalize a vector with norm {length}"),
        });
    }
    Ok(vec.iter().map(|c| c / length).collect())
}
