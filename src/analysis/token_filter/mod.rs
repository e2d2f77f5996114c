//! Token filter implementations for token transformation.
//!
//! Filters run after tagging, in the order they were added to the
//! normalizer:
//!
//! ```text
//! Tokenizer → Tagger → Lowercase → Pos → Lemma → output
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream, allowing
/// them to modify or drop tokens. The trait requires `Send + Sync` so
/// filters can be shared behind an `Arc`.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lemma;
pub mod lowercase;
pub mod pos;

pub use lemma::LemmaFilter;
pub use lowercase::LowercaseFilter;
pub use pos::PosFilter;
