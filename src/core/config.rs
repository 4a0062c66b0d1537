// src/core/config.rs

//! Process-wide numeric precision.
//!
//! The formatting core needs one piece of ambient configuration: the
//! default absolute tolerance used when a caller does not supply one.
//! It is modelled as an explicit [`Precision`] value so components can be
//! constructed with their own precision in tests, plus a process-wide
//! default that is initialized once at startup and read-only afterwards.

use crate::core::constants::DEFAULT_ATOL;
use crate::core::error::KetError;
use num_complex::Complex;
use std::sync::OnceLock;

/// A validated absolute tolerance for closeness checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision {
    atol: f64,
}

impl Precision {
    /// Creates a precision with the given absolute tolerance.
    ///
    /// The tolerance must be a non-negative finite value; anything else is
    /// rejected up front so closeness checks never have to re-validate.
    pub fn new(atol: f64) -> Result<Self, KetError> {
        if !atol.is_finite() || atol < 0.0 {
            return Err(KetError::InvalidArgument {
                message: format!("atol must be a non-negative finite value, got {atol}"),
            });
        }
        Ok(Self { atol })
    }

    /// The absolute tolerance this precision represents.
    pub fn atol(&self) -> f64 {
        self.atol
    }

    /// Checks whether `|a - b| <= atol`, treating both operands as complex.
    ///
    /// This is the constructor-injected form of [`crate::format::is_close`]:
    /// the tolerance was validated at construction, so the check itself
    /// cannot fail. `NaN` operands compare unequal to everything.
    pub fn is_close<A, B>(&self, a: A, b: B) -> bool
    where
        A: Into<Complex<f64>>,
        B: Into<Complex<f64>>,
    {
        let diff: Complex<f64> = a.into() - b.into();
        diff.norm() <= self.atol
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self { atol: DEFAULT_ATOL }
    }
}

static DEFAULT_PRECISION: OnceLock<Precision> = OnceLock::new();

/// Installs the process-wide default precision.
///
/// May be called at most once, before any formatting call reads the
/// default; afterwards the stored value is frozen and this returns
/// `InvalidArgument`.
pub fn init_default_precision(precision: Precision) -> Result<(), KetError> {
    DEFAULT_PRECISION
        .set(precision)
        .map_err(|_| KetError::InvalidArgument {
            message: "default precision is already initialized".to_string(),
        })
}

/// Reads the process-wide default precision, installing the built-in
/// default (`atol = 1e-8`) on first use if none was configured.
pub fn default_precision() -> Precision {
    *DEFAULT_PRECISION.get_or_init(Precision::default)
}
