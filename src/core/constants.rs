// src/core/constants.rs

//! Numeric constants shared by the formatting core.

/// Reference constants the pretty-fraction search recognises.
///
/// The order of this table is load-bearing: candidates are tried first to
/// last, so plain rationals (the empty label) win over irrational
/// multiples, and `π` wins over the square roots.
pub mod reference {
    /// A `(label, value)` pair recognised by the fraction search.
    pub type ReferenceConstant = (&'static str, f64);

    /// The fixed, ordered candidate set. Immutable by construction.
    pub const REFERENCE_CONSTANTS: [ReferenceConstant; 5] = [
        ("", 1.0),
        ("π", std::f64::consts::PI),
        ("√2", std::f64::consts::SQRT_2),
        ("√3", 1.732_050_807_568_877_2),
        ("√5", 2.236_067_977_499_79),
    ];
}

/// Default absolute tolerance for scalar closeness checks, matching the
/// process-wide precision a fresh [`crate::core::Precision`] carries.
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Default amplitude cutoff below which `ket_strings` drops a basis state.
pub const DEFAULT_KET_TOLERANCE: f64 = 1e-7;

/// Number of decimal digits the fraction search rounds a ratio to before
/// treating it as an exact rational.
pub(crate) const RATIO_DIGITS: u32 = 9;

/// Number of decimal digits used when a real value has no symbolic form
/// and must be printed as a truncated decimal.
pub(crate) const FALLBACK_DIGITS: u32 = 4;
