// crates/gaul-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// # Examples
///
/// ```rust
/// use gaul_core::equals_folded;
///
/// assert!(equals_folded("Łódź", "lodz"));
/// assert!(equals_folded("SINGAPORE", "singapore"));
/// assert!(!equals_folded("France", "Germany"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Re-case a folded value the way names are shown in suggestion lists:
/// first character uppercase, the rest left as-is (already lowercase).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
