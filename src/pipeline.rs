// Pipeline orchestration — segment, extract, normalize, fall back.
//
// Whether a statistical backend exists is resolved once at construction and
// held as a capability, not re-probed per call. run() never errors: a
// backend failure degrades to the frequency fallback, and the fallback
// itself degrades to a sentinel list, so a keyword array always comes back.

use tracing::{debug, warn};

use crate::config::Config;
use crate::extract::frequency::FrequencyExtractor;
use crate::extract::normalize::normalize;
use crate::extract::traits::KeywordExtractor;
use crate::segment::{ScriptSegmenter, Segmenter};

pub struct Pipeline {
    /// Statistical backend, when one is compiled in
    primary: Option<Box<dyn KeywordExtractor>>,
    /// Pre-segmentation for languages without whitespace word boundaries
    segmenter: Option<ScriptSegmenter>,
    fallback: FrequencyExtractor,
    top_k: usize,
}

impl Pipeline {
    /// Build the pipeline from configuration.
    ///
    /// The primary extractor is present only in `yake` builds; the segmenter
    /// only when the configured language needs it (and its construction
    /// succeeded — its absence is never fatal).
    pub fn from_config(config: &Config) -> Self {
        #[cfg(feature = "yake")]
        let primary: Option<Box<dyn KeywordExtractor>> = Some(Box::new(
            crate::extract::yake::YakeExtractor::new(config.language),
        ));
        #[cfg(not(feature = "yake"))]
        let primary: Option<Box<dyn KeywordExtractor>> = None;

        let segmenter = if config.language.needs_segmentation() {
            ScriptSegmenter::new()
        } else {
            None
        };

        Self {
            primary,
            segmenter,
            fallback: FrequencyExtractor::default(),
            top_k: config.top_k,
        }
    }

    /// Pipeline with an explicit primary extractor (or none), stripped of
    /// segmentation. Used by tests and by callers embedding their own backend.
    pub fn with_primary(primary: Option<Box<dyn KeywordExtractor>>, top_k: usize) -> Self {
        Self {
            primary,
            segmenter: None,
            fallback: FrequencyExtractor::default(),
            top_k,
        }
    }

    /// Extract up to top_k keywords from `text`. Infallible.
    ///
    /// An empty result from a healthy primary extractor stays empty — only a
    /// backend error (or no backend at all) reaches the fallback.
    pub fn run(&self, text: &str) -> Vec<String> {
        if let Some(primary) = &self.primary {
            let prepared = match &self.segmenter {
                Some(segmenter) => segmenter.segment(text),
                None => text.to_string(),
            };

            match primary.extract(&prepared, self.top_k) {
                Ok(ranked) => {
                    debug!(candidates = ranked.len(), "Primary extractor succeeded");
                    return normalize(ranked.into_iter().map(|(kw, _)| kw), self.top_k);
                }
                Err(e) => {
                    warn!(error = %e, "Primary extractor failed, using frequency fallback");
                }
            }
        } else {
            debug!("No statistical backend compiled in, using frequency fallback");
        }

        // The fallback tokenizes raw text itself; no pre-segmentation needed.
        normalize(self.fallback.extract(text, self.top_k), self.top_k)
    }
}
