// crates/gaul-core/src/suggest.rs

//! Close-match suggestions for failed lookups.

use strsim::jaro_winkler;

/// Return the `n` candidates most similar to `query`.
///
/// Both sides are expected to be folded already (see [`fold_key`]). Ranking
/// is Jaro-Winkler similarity; the sort is stable so ties keep the
/// candidates' original (table) order.
///
/// [`fold_key`]: crate::text::fold_key
pub fn close_matches(query: &str, candidates: &[String], n: usize) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .map(|c| (jaro_winkler(query, c), c))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(n).map(|(_, c)| c.clone()).collect()
}
