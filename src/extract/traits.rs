// Keyword extractor trait — swap-ready abstraction.
//
// The pipeline only depends on this seam, so the statistical backend can be
// swapped (or compiled out entirely) without touching the orchestration.
// The frequency fallback deliberately does not implement it: the fallback
// is infallible and unranked, which is a different contract.

use anyhow::Result;

/// A scored candidate from a statistical extractor.
///
/// Orientation is fixed: keyword first, relevance score second. The score is
/// only used for diagnostics — ranking is the extractor's job and the pairs
/// arrive already ordered, most relevant first.
pub type ScoredKeyword = (String, f32);

/// Trait for extracting ranked keywords from a single text.
pub trait KeywordExtractor {
    /// Analyze `text` and return up to `top_k` scored keywords, best first.
    fn extract(&self, text: &str, top_k: usize) -> Result<Vec<ScoredKeyword>>;
}
