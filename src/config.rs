use std::env;

use anyhow::Result;
use clap::ValueEnum;

/// Which language the input text is expected to be in.
///
/// Drives stop-word selection for the statistical extractor and decides
/// whether the input gets pre-segmented (Japanese has no whitespace word
/// boundaries, so the extractor needs help finding token edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    /// Japanese (default) — stop words for "ja", script-run pre-segmentation
    Ja,
    /// English — stop words for "en", no pre-segmentation
    En,
}

impl Language {
    /// Whether text in this language needs whitespace inserted before the
    /// statistical extractor can see word boundaries.
    pub fn needs_segmentation(&self) -> bool {
        matches!(self, Language::Ja)
    }
}

/// Central configuration loaded from environment variables.
///
/// CLI flags override these in main — env vars are the base layer so the
/// binary can be dropped into a workflow step without argument wiring.
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Expected input language (KOTOBA_LANG: "ja" or "en", default "ja")
    pub language: Language,
    /// Maximum number of keywords in the output (KOTOBA_TOP_K, default 3)
    pub top_k: usize,
}

impl Config {
    pub const DEFAULT_TOP_K: usize = 3;

    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable values fall back to defaults — a bad KOTOBA_TOP_K
    /// should degrade, not kill a workflow step that otherwise works.
    pub fn load() -> Result<Self> {
        let language = match env::var("KOTOBA_LANG").as_deref() {
            Ok("en") => Language::En,
            // "ja" or unset both default to Japanese
            _ => Language::Ja,
        };

        let top_k = env::var("KOTOBA_TOP_K")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&k| k > 0)
            .unwrap_or(Self::DEFAULT_TOP_K);

        Ok(Self { language, top_k })
    }

    /// Apply CLI overrides on top of the env-derived base. Flags win when
    /// present; a zero top-K is ignored like any other unusable value.
    pub fn apply_overrides(&mut self, language: Option<Language>, top_k: Option<usize>) {
        if let Some(language) = language {
            self.language = language;
        }
        if let Some(top_k) = top_k.filter(|&k| k > 0) {
            self.top_k = top_k;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::Ja,
            top_k: Self::DEFAULT_TOP_K,
        }
    }
}
