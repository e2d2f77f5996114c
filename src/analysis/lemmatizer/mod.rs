//! Lemmatizers that map a word and its grammatical category to a base form.

use crate::analysis::pos::PosCategory;

/// Trait for lemmatization algorithms.
///
/// Implementations are infallible: a word the lemmatizer cannot reduce is
/// returned as its own lemma.
pub trait Lemmatizer: Send + Sync {
    /// Reduce a lower-cased word to its base form for `category`.
    ///
    /// Words of [`PosCategory::Other`] are returned unchanged.
    fn lemmatize(&self, word: &str, category: PosCategory) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

pub mod morphy;

pub use morphy::MorphyLemmatizer;
