//! Lemma filter implementation.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use standardize::analysis::lemmatizer::MorphyLemmatizer;
//! use standardize::analysis::resources::ensure_resources_available;
//! use standardize::analysis::token::Token;
//! use standardize::analysis::token_filter::Filter;
//! use standardize::analysis::token_filter::lemma::LemmaFilter;
//!
//! let lemmatizer = MorphyLemmatizer::new(ensure_resources_available().unwrap());
//! let filter = LemmaFilter::new(Arc::new(lemmatizer));
//! let tokens = vec![Token::new("cats", 0).with_tag("NNS")];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//! assert_eq!(result[0].text, "cat");
//! ```

use std::sync::Arc;

use crate::analysis::lemmatizer::Lemmatizer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Replaces each token's text with its lemma under the token's category.
///
/// Tokens of category `Other` pass through unchanged.
#[derive(Clone)]
pub struct LemmaFilter {
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl LemmaFilter {
    /// Create a lemma filter with the given lemmatizer.
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }

    /// Get the lemmatizer used by this filter.
    pub fn lemmatizer(&self) -> &Arc<dyn Lemmatizer> {
        &self.lemmatizer
    }
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let category = token.category();
                if category.is_lemmatized() {
                    let lemma = self.lemmatizer.lemmatize(&token.text, category);
                    token.with_text(lemma)
                } else {
                    token
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
