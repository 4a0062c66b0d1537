// src/format/fraction.rs

//! Pretty-fraction recognition for real coefficients.
//!
//! Turns a float such as `0.7071067811865476` back into `√2/2` by probing
//! a small ordered table of reference constants and checking whether the
//! ratio reduces to a short fraction. This is a heuristic display search,
//! not a canonical rational approximation: the acceptance thresholds below
//! are load-bearing for output stability and must not be "improved".

use crate::core::constants::{RATIO_DIGITS, reference::REFERENCE_CONSTANTS};
use num_rational::Ratio;

/// Converts a real number to its symbolic string expression.
///
/// Returns the first accepted fraction over the reference-constant table,
/// otherwise the plain decimal rendering of `num` (rounded to
/// `round_digits` decimal places first when given).
///
/// # Examples
/// ```
/// use ketform::format::real_expression;
///
/// assert_eq!(real_expression(0.0, None), "0");
/// assert_eq!(real_expression(std::f64::consts::PI, None), "π");
/// assert_eq!(real_expression(-std::f64::consts::FRAC_PI_2, None), "-π/2");
/// assert_eq!(real_expression(0.5, None), "1/2");
/// assert_eq!(real_expression(std::f64::consts::FRAC_1_SQRT_2, None), "√2/2");
/// ```
pub fn real_expression(num: f64, round_digits: Option<u32>) -> String {
    if let Some(expr) = symbolic_expression(num) {
        return expr;
    }
    match round_digits {
        Some(digits) => round_to(num, digits).to_string(),
        None => num.to_string(),
    }
}

/// The search core behind [`real_expression`]: `Some(expr)` when one of
/// the reference constants yields an acceptable fraction, `None` when the
/// caller must fall back to a decimal rendering.
pub(crate) fn symbolic_expression(num: f64) -> Option<String> {
    if num == 0.0 {
        return Some("0".to_string());
    }
    for (label, value) in REFERENCE_CONSTANTS {
        let Some(fraction) = decimal_fraction(num / value) else {
            continue;
        };
        let numer = *fraction.numer();
        let denom = *fraction.denom();
        // Accept short fractions, whole numbers, and unit numerators.
        let plain = plain_text(numer, denom);
        if plain.len() >= 5 && denom != 1 && numer != 1 && numer != -1 {
            continue;
        }
        // Ugly-fraction rule: a two-part fraction with both sides above 5
        // (7/11, -8/13, ...) reads worse than the raw decimal.
        if denom != 1 && numer.abs() > 5 && denom > 5 {
            continue;
        }
        return Some(render(numer, denom, label));
    }
    None
}

/// Rounds `ratio` to nine decimal digits and interprets the result as the
/// exact rational `scaled / 10^9`, reduced to lowest terms. Not a
/// continued-fraction search: the denominator comes purely from the
/// decimal's significant digits.
fn decimal_fraction(ratio: f64) -> Option<Ratio<i128>> {
    const SCALE: i128 = 10i128.pow(RATIO_DIGITS);
    if !ratio.is_finite() {
        return None;
    }
    let scaled = (ratio * SCALE as f64).round();
    // Past this magnitude the i128 cast would wrap; such values have no
    // nine-digit decimal representation worth reducing anyway.
    if scaled.abs() >= i128::MAX as f64 {
        return None;
    }
    Some(Ratio::new(scaled as i128, SCALE))
}

/// The unsigned-glyph rendering used for the length check: `n` or `n/d`.
fn plain_text(numer: i128, denom: i128) -> String {
    if denom == 1 {
        numer.to_string()
    } else {
        format!("{numer}/{denom}")
    }
}

/// Assembles the final expression: a `1`/`-1` numerator collapses into the
/// constant's label (`√2/2`, `-π/2`), any other numerator is prefixed to
/// it (`3π/4`), and a non-trivial denominator is appended.
fn render(numer: i128, denom: i128, label: &str) -> String {
    let head = match numer {
        1 if !label.is_empty() => label.to_string(),
        -1 if !label.is_empty() => format!("-{label}"),
        n => format!("{n}{label}"),
    };
    if denom == 1 {
        head
    } else {
        format!("{head}/{denom}")
    }
}

/// Rounds `x` to `digits` decimal places.
pub(crate) fn round_to(x: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (x * factor).round() / factor
}
