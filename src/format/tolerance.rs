// src/format/tolerance.rs

//! Absolute-tolerance closeness checks for real and complex scalars.

use crate::core::{KetError, Precision, default_precision};
use num_complex::Complex;

/// Checks whether two numbers are equal within an absolute tolerance.
///
/// Both operands are treated as complex, so the same comparison covers
/// real and complex inputs uniformly via `|a - b| <= atol`. There is no
/// relative-tolerance component. When `atol` is `None` the process-wide
/// default precision is used (see [`crate::core::default_precision`]).
///
/// # Errors
/// * `InvalidArgument` if a provided `atol` is negative or non-finite.
///
/// # Examples
/// ```
/// use num_complex::Complex;
/// use ketform::format::is_close;
///
/// assert!(is_close(Complex::new(1.0, 1.0), Complex::new(1.0, 1.0), None).unwrap());
/// assert!(is_close(0.0, 1e-9, Some(1e-7)).unwrap());
/// assert!(!is_close(0.0, 1e-5, Some(1e-7)).unwrap());
/// ```
pub fn is_close<A, B>(a: A, b: B, atol: Option<f64>) -> Result<bool, KetError>
where
    A: Into<Complex<f64>>,
    B: Into<Complex<f64>>,
{
    let precision = match atol {
        Some(tolerance) => Precision::new(tolerance)?,
        None => default_precision(),
    };
    Ok(precision.is_close(a, b))
}
