// src/format/expr.rs

//! Recursive symbolic rendering of real and complex scalars.

use crate::core::constants::FALLBACK_DIGITS;
use crate::core::{Precision, default_precision};
use crate::format::fraction::{round_to, symbolic_expression};
use num_complex::Complex;

/// Converts a number, complex numbers included, to its string expression.
///
/// Zero detection uses the process-wide default precision. An effectively
/// real value is rendered through the pretty-fraction search, falling back
/// to the value rounded to four decimal places when no symbolic form
/// exists; a pure imaginary value is the real rendering of its imaginary
/// part with a trailing `j`; a mixed value joins both renderings with
/// `" + "` unless the imaginary half already carries its own minus sign.
///
/// # Examples
/// ```
/// use num_complex::Complex;
/// use ketform::format::expression;
///
/// assert_eq!(expression(0.0), "0");
/// assert_eq!(expression(Complex::new(1.0, 1.0)), "1 + 1j");
/// assert_eq!(expression(Complex::new(0.0, -1.0)), "-1j");
/// assert_eq!(expression(Complex::new(0.5, -0.5)), "1/2-1/2j");
/// ```
pub fn expression<N>(x: N) -> String
where
    N: Into<Complex<f64>>,
{
    format_complex(x.into(), default_precision())
}

/// Two-branch recursion over the real/imaginary case split. The mixed
/// case re-enters with `0 + im·i` so the imaginary half picks up its `j`
/// suffix from the pure-imaginary branch.
fn format_complex(x: Complex<f64>, precision: Precision) -> String {
    let (re, im) = (x.re, x.im);
    if precision.is_close(x, 0.0) {
        return "0".to_string();
    }
    if precision.is_close(im, 0.0) {
        // No symbolic match: print a truncated decimal rather than the
        // full shortest-roundtrip float.
        return match symbolic_expression(re) {
            Some(expr) => expr,
            None => round_to(re, FALLBACK_DIGITS).to_string(),
        };
    }
    if precision.is_close(re, 0.0) {
        return format!("{}j", format_complex(Complex::new(im, 0.0), precision));
    }
    let real_part = format_complex(Complex::new(re, 0.0), precision);
    let imag_part = format_complex(Complex::new(0.0, im), precision);
    if imag_part.starts_with('-') {
        format!("{real_part}{imag_part}")
    } else {
        format!("{real_part} + {imag_part}")
    }
}
