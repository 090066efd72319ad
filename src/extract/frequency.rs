// Frequency-based fallback extraction.
//
// Used when the statistical backend is compiled out or fails at runtime.
// Pure word-frequency statistics: tokenize into script-class runs, drop
// short tokens, count, take the most frequent. Deterministic for a given
// input, including tie order.

use regex_lite::Regex;
use tracing::{debug, warn};

use crate::segment::SCRIPT_RUN_PATTERN;

/// Returned when tokenization itself cannot run. The output contract promises
/// a keywords array unconditionally, so the last resort is a fixed list that
/// reads as "keyword extraction error" rather than a propagated failure.
pub const SENTINEL_KEYWORDS: [&str; 3] = ["キーワード", "抽出", "エラー"];

/// The sentinel list as owned strings, ready for the envelope.
pub fn sentinel_list() -> Vec<String> {
    SENTINEL_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

/// Frequency fallback extractor — no statistical backend, no stop words.
///
/// Tokens shorter than `min_token_chars` are discarded, except single CJK
/// ideographs: one kanji is a content word (猫, 犬), while one kana, digit,
/// or Latin letter is noise. Ties in frequency are broken by first appearance
/// in the text, which keeps the result stable.
pub struct FrequencyExtractor {
    /// Minimum token length in characters (not bytes) — default 2, which
    /// filters out isolated digits, single kana, and stray Latin letters
    pub min_token_chars: usize,
}

impl Default for FrequencyExtractor {
    fn default() -> Self {
        Self { min_token_chars: 2 }
    }
}

/// A lone CJK ideograph carries meaning on its own; other single characters
/// don't survive the length filter.
fn is_cjk_ideograph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FAF}' | '\u{3400}'..='\u{4DBF}')
}

impl FrequencyExtractor {
    fn keeps(&self, token: &str) -> bool {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(first), None) => self.min_token_chars <= 1 || is_cjk_ideograph(first),
            (Some(_), Some(_)) => token.chars().count() >= self.min_token_chars,
            (None, _) => false,
        }
    }

    /// Return up to `top_k` tokens by descending frequency.
    ///
    /// Never errors: if the tokenizer cannot be constructed the fixed
    /// sentinel list comes back instead.
    pub fn extract(&self, text: &str, top_k: usize) -> Vec<String> {
        let re = match Regex::new(SCRIPT_RUN_PATTERN) {
            Ok(re) => re,
            Err(e) => {
                warn!(error = %e, "Token pattern failed to compile, returning sentinel list");
                return sentinel_list();
            }
        };

        // Tally in first-seen order so the later sort breaks ties stably.
        let mut order: Vec<String> = Vec::new();
        let mut counts: std::collections::HashMap<String, usize> =
            std::collections::HashMap::new();

        for m in re.find_iter(text) {
            let token = m.as_str();
            if !self.keeps(token) {
                continue;
            }
            if !counts.contains_key(token) {
                order.push(token.to_string());
            }
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }

        debug!(tokens = order.len(), "Frequency fallback tokenized input");

        // Stable sort: equal counts keep first-seen order.
        let mut ranked: Vec<(String, usize)> = order
            .into_iter()
            .map(|t| {
                let count = counts[&t];
                (t, count)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked.into_iter().take(top_k).map(|(t, _)| t).collect()
    }
}
