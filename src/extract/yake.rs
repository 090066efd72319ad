// YAKE statistical extraction — the primary backend.
//
// Uses the `keyword_extraction` crate's YAKE implementation: unsupervised,
// single-document, no training data, which fits the one-shot stdin contract.
// The crate ranks candidates itself; we only pick the stop-word list and
// forward the ranked pairs.

use anyhow::Result;
use keyword_extraction::yake::{Yake, YakeParams};
use stop_words::{get, LANGUAGE};
use tracing::info;

use super::traits::{KeywordExtractor, ScoredKeyword};
use crate::config::Language;

/// YAKE-based keyword extractor — the default backend.
///
/// Runs locally, no API calls. The pipeline treats it as replaceable via
/// the KeywordExtractor trait; compiling without the `yake` feature removes
/// it entirely and the frequency fallback takes over.
pub struct YakeExtractor {
    /// Which stop-word list to feed the ranker
    pub language: Language,
}

impl YakeExtractor {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl KeywordExtractor for YakeExtractor {
    fn extract(&self, text: &str, top_k: usize) -> Result<Vec<ScoredKeyword>> {
        let stop_words: Vec<String> = match self.language {
            Language::Ja => get(LANGUAGE::Japanese),
            Language::En => get(LANGUAGE::English),
        };

        // The crate handles tokenization, candidate generation, and scoring.
        let yake = Yake::new(YakeParams::WithDefaults(text, &stop_words));
        let ranked: Vec<ScoredKeyword> = yake.get_ranked_keyword_scores(top_k);

        if let Some((keyword, score)) = ranked.first() {
            info!(
                keywords = ranked.len(),
                top_keyword = keyword.as_str(),
                top_score = score,
                "Extracted YAKE keywords"
            );
        } else {
            info!("YAKE produced no keywords");
        }

        Ok(ranked)
    }
}
