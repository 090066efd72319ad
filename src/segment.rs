// Pre-segmentation — whitespace word boundaries for Japanese input.
//
// Statistical extractors assume whitespace-delimited words. Japanese has
// none, so before handing text to the backend we split it into script-class
// runs (kanji, hiragana, katakana, Latin/digits) and join them with spaces.
// This is deliberately not a morphological analyzer: the contract is "some
// reasonable word boundaries, never fatal", and a dictionary dependency
// would be overkill for short snippets.

use regex_lite::Regex;
use tracing::warn;

/// One alternation arm per script class, so adjacent runs of different
/// scripts become separate matches. Shared with the frequency fallback,
/// which uses the same runs as its tokens.
pub(crate) const SCRIPT_RUN_PATTERN: &str = "[A-Za-z0-9]+\
    |[\\u{3040}-\\u{309F}]+\
    |[\\u{30A0}-\\u{30FF}]+\
    |[\\u{4E00}-\\u{9FAF}\\u{3400}-\\u{4DBF}]+";

/// Trait for pre-segmenting raw text into whitespace-delimited words.
pub trait Segmenter {
    /// Return `text` with word boundaries marked by single spaces.
    fn segment(&self, text: &str) -> String;
}

/// Script-class run splitter.
///
/// "Pythonは機械学習" becomes "Python は 機械学習". Punctuation and symbols
/// are dropped along the way — the downstream extractors treat them as
/// separators anyway.
pub struct ScriptSegmenter {
    runs: Regex,
}

impl ScriptSegmenter {
    /// Build the segmenter, or None if the pattern fails to compile.
    ///
    /// Absence of segmentation must not be fatal: the caller passes text
    /// through unchanged and the extractor does what it can.
    pub fn new() -> Option<Self> {
        match Regex::new(SCRIPT_RUN_PATTERN) {
            Ok(runs) => Some(Self { runs }),
            Err(e) => {
                warn!(error = %e, "Segmenter unavailable, passing text through unsegmented");
                None
            }
        }
    }
}

impl Segmenter for ScriptSegmenter {
    fn segment(&self, text: &str) -> String {
        let runs: Vec<&str> = self.runs.find_iter(text).map(|m| m.as_str()).collect();
        runs.join(" ")
    }
}
