//! Part-of-speech taggers.
//!
//! A tagger receives the whole token sequence of one request and attaches a
//! Penn Treebank code to every token. Tagging sees the full sequence so that
//! contextual rules can look across element boundaries.

use crate::analysis::token::Token;
use crate::error::Result;

/// Trait for part-of-speech taggers.
pub trait Tagger: Send + Sync {
    /// Tag every token, preserving order.
    ///
    /// Implementations must return exactly one token per input token.
    fn tag(&self, tokens: Vec<Token>) -> Result<Vec<Token>>;

    /// Get the name of this tagger (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lexicon;

pub use lexicon::LexiconTagger;
