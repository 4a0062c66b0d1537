// tests/state_tests.rs

// State-vector helpers around the formatting core: norms, random state
// generation, pauli-string matrices, and the pluralization utilities.

use ketform::pauli::PauliMatrices;
use ketform::text::{es_quantifier, quantifier_selector, s_quantifier};
use ketform::{KetError, ket_strings, norm, normalize, random_state};
use num_complex::Complex;

fn c(re: f64, im: f64) -> Complex<f64> {
    Complex::new(re, im)
}

#[test]
fn norm_is_the_euclidean_length() {
    assert_eq!(norm(&[c(3.0, 0.0), c(0.0, 4.0)]), 5.0);
    assert_eq!(norm(&[]), 0.0);
}

#[test]
fn normalize_scales_to_unit_norm() -> Result<(), KetError> {
    let state = normalize(&[c(1.0, 1.0), c(2.0, -1.0), c(0.0, 3.0)])?;
    assert!((norm(&state) - 1.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn normalize_rejects_degenerate_vectors() {
    assert!(matches!(
        normalize(&[]),
        Err(KetError::InvalidArgument { .. })
    ));
    assert!(matches!(
        normalize(&[c(0.0, 0.0), c(0.0, 0.0)]),
        Err(KetError::InvalidArgument { .. })
    ));
}

#[test]
fn random_state_is_normalized_and_seed_deterministic() -> Result<(), KetError> {
    let state = random_state(8, true, Some(7))?;
    assert_eq!(state.len(), 8);
    assert!((norm(&state) - 1.0).abs() < 1e-12);
    assert_eq!(state, random_state(8, true, Some(7))?);
    Ok(())
}

#[test]
fn unseeded_random_state_is_still_normalized() -> Result<(), KetError> {
    let state = random_state(8, true, None)?;
    assert_eq!(state.len(), 8);
    assert!((norm(&state) - 1.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn random_state_can_stay_real() -> Result<(), KetError> {
    let state = random_state(4, false, Some(3))?;
    assert!(state.iter().all(|amp| amp.im == 0.0));
    Ok(())
}

#[test]
fn random_state_rejects_non_power_of_two_dimensions() {
    for dim in [0usize, 3, 7, 12] {
        assert!(matches!(
            random_state(dim, true, Some(1)),
            Err(KetError::InvalidShape { .. })
        ));
    }
}

#[test]
fn random_states_feed_straight_into_ket_rendering() -> Result<(), KetError> {
    let state = random_state(4, true, Some(11))?;
    let kets = ket_strings(&state, None)?;
    // A normalized uniform draw has four nonzero amplitudes.
    assert_eq!(kets.len(), 4);
    Ok(())
}

#[test]
fn pauli_string_matrices_match_the_kron_convention() -> Result<(), KetError> {
    let mut table = PauliMatrices::new();

    // "XX" is X ⊗ X: the anti-diagonal of ones.
    let xx = table.matrix("XX")?.clone();
    assert_eq!(xx.dim(), 4);
    for row in 0..4 {
        for col in 0..4 {
            let expected = if row + col == 3 { 1.0 } else { 0.0 };
            assert_eq!(xx.get(row, col), c(expected, 0.0), "entry ({row}, {col})");
        }
    }

    // "XZ" is Z ⊗ X: X on the low qubit, signs from Z on the high one.
    let xz = table.matrix("XZ")?.clone();
    assert_eq!(xz.get(0, 1), c(1.0, 0.0));
    assert_eq!(xz.get(2, 3), c(-1.0, 0.0));
    Ok(())
}

#[test]
fn pauli_y_carries_the_imaginary_entries() -> Result<(), KetError> {
    let mut table = PauliMatrices::new();
    let y = table.matrix("Y")?;
    assert_eq!(y.get(0, 1), c(0.0, -1.0));
    assert_eq!(y.get(1, 0), c(0.0, 1.0));
    Ok(())
}

#[test]
fn pauli_table_memoizes_per_string() -> Result<(), KetError> {
    let mut table = PauliMatrices::new();
    assert!(table.is_empty());
    table.matrix("IZ")?;
    table.matrix("IZ")?;
    table.matrix("ZI")?;
    assert_eq!(table.len(), 2);
    Ok(())
}

#[test]
fn quantifiers_pick_the_plural_form_above_one() {
    assert_eq!(quantifier_selector(1, "state", "states"), "1 state");
    assert_eq!(quantifier_selector(2, "state", "states"), "2 states");
    assert_eq!(s_quantifier(1, "qubit"), "1 qubit");
    assert_eq!(s_quantifier(3, "qubit"), "3 qubits");
    assert_eq!(es_quantifier(2, "switch"), "2 switches");
    assert_eq!(es_quantifier(0, "switch"), "0 switch");
}
