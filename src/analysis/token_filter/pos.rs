//! Part-of-speech filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Keeps nouns, verbs and adjectives; drops every other token.
///
/// Untagged tokens count as [`PosCategory::Other`](crate::analysis::pos::PosCategory::Other)
/// and are dropped too.
#[derive(Clone, Debug, Default)]
pub struct PosFilter;

impl PosFilter {
    /// Create a new part-of-speech filter.
    pub fn new() -> Self {
        PosFilter
    }
}

impl Filter for PosFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .filter(|token| token.category().is_lemmatized())
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pos"
    }
}
