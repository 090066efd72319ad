// Keyword extraction — statistical backend, frequency fallback, normalization.

pub mod frequency;
pub mod normalize;
pub mod traits;

#[cfg(feature = "yake")]
pub mod yake;
