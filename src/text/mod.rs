// src/text/mod.rs

//! Small pluralization helpers for display messages. Colocated with the
//! formatting core but logically independent of it.

/// Picks the singular or plural noun form for a count: `"1 qubit"`,
/// `"3 qubits"`. Zero takes the singular form.
pub fn quantifier_selector(num: u64, single: &str, plural: &str) -> String {
    if num > 1 {
        format!("{num} {plural}")
    } else {
        format!("{num} {single}")
    }
}

/// Pluralizes by appending `s`: `"2 gates"`.
pub fn s_quantifier(num: u64, quantifier: &str) -> String {
    quantifier_selector(num, quantifier, &format!("{quantifier}s"))
}

/// Pluralizes by appending `es`: `"2 switches"`.
pub fn es_quantifier(num: u64, quantifier: &str) -> String {
    quantifier_selector(num, quantifier, &format!("{quantifier}es"))
}
