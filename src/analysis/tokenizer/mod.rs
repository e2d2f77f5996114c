//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the pipeline: they split one raw input
//! element into word and punctuation tokens. A tokenizer may produce more
//! tokens than it was given words ("don't" becomes "do" + "n't") or none at
//! all (blank input).
//!
//! # Examples
//!
//! ```
//! use standardize::analysis::tokenizer::Tokenizer;
//! use standardize::analysis::tokenizer::treebank::TreebankTokenizer;
//!
//! let tokenizer = TreebankTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Don't stop!").unwrap().collect();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["Do", "n't", "stop", "!"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared behind an
/// `Arc` by the normalizer.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// Offsets on the returned tokens are byte offsets into `text`.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod treebank;

pub use treebank::TreebankTokenizer;
