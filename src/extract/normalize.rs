// Candidate normalization — the one gate every keyword list passes through.
//
// Whatever produced the candidates (statistical backend or frequency
// fallback), the envelope invariants are enforced here: trimmed, non-empty,
// no duplicates, at most top_k entries, original order preserved.

use std::collections::HashSet;

/// Trim candidates, drop empties, dedup keeping the first occurrence, and
/// truncate to `top_k`. Pure and infallible.
pub fn normalize<I>(candidates: I, top_k: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut keywords = Vec::new();

    for candidate in candidates {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !seen.insert(trimmed.to_string()) {
            continue;
        }
        keywords.push(trimmed.to_string());
        if keywords.len() == top_k {
            break;
        }
    }

    keywords
}
