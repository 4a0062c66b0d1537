// src/random/mod.rs

//! Random normalized state vectors, mainly for demos and tests.

use crate::core::KetError;
use crate::linalg::normalize;
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Generates a normalized random state vector of dimension `dim`.
///
/// Amplitudes are drawn uniformly from `[0, 1)`; when
/// `complex_amplitudes` is set the imaginary parts are drawn the same
/// way, otherwise they stay zero. A `seed` makes the output
/// deterministic; without one the generator is seeded from OS entropy.
///
/// # Errors
/// * `InvalidShape` unless `dim` is a positive power of two, so the
///   result always describes a whole number of qubits.
///
/// # Examples
/// ```
/// use ketform::random::random_state;
/// use ketform::linalg::norm;
///
/// let state = random_state(4, true, Some(42)).unwrap();
/// assert_eq!(state.len(), 4);
/// assert!((norm(&state) - 1.0).abs() < 1e-12);
/// assert_eq!(state, random_state(4, true, Some(42)).unwrap());
/// ```
pub fn random_state(
    dim: usize,
    complex_amplitudes: bool,
    seed: Option<u64>,
) -> Result<Vec<Complex<f64>>, KetError> {
    if dim == 0 || !dim.is_power_of_two() {
        return Err(KetError::InvalidShape {
            message: format!("state dimension must be a positive power of two, got {dim}"),
        });
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let amplitudes: Vec<Complex<f64>> = (0..dim)
        .map(|_| {
            let re: f64 = rng.random();
            let im: f64 = if complex_amplitudes { rng.random() } else { 0.0 };
            Complex::new(re, im)
        })
        .collect();
    normalize(&amplitudes)
}
