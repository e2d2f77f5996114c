//! The normalization pipeline.
//!
//! A [`Normalizer`] turns an ordered sequence of raw words into the ordered
//! sequence of lemmas of its nouns, verbs and adjectives:
//!
//! 1. Tokenizer: each raw element is tokenized on its own and the tokens of
//!    all elements are concatenated in input order
//! 2. Tagger: the whole token sequence is tagged in one call
//! 3. Token filters, in the order they were added (by default lowercase,
//!    part-of-speech filter, lemma)
//!
//! # Examples
//!
//! ```
//! use standardize::normalizer::{Normalizer, NormalizerConfig};
//!
//! let normalizer = Normalizer::new(&NormalizerConfig::default()).unwrap();
//! let raw: Vec<String> = ["The", "cats", "are", "running", "quickly"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! assert_eq!(normalizer.normalize(&raw).unwrap(), ["cat", "be", "run"]);
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::lemmatizer::MorphyLemmatizer;
use crate::analysis::resources::{Resources, ensure_resources_available};
use crate::analysis::tagger::{LexiconTagger, Tagger};
use crate::analysis::token::{IntoTokenStream, Token};
use crate::analysis::token_filter::{Filter, LemmaFilter, LowercaseFilter, PosFilter};
use crate::analysis::tokenizer::{Tokenizer, TreebankTokenizer};
use crate::error::{Result, StandardizeError};

/// Configuration for the built-in normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Directory whose resource tables overlay the bundled ones
    pub resource_dir: Option<PathBuf>,

    /// Return unknown words unchanged instead of guessing their lemma
    pub strict: bool,
}

/// Tokenizer, tagger and filter chain applied to one request at a time.
#[derive(Clone)]
pub struct Normalizer {
    tokenizer: Arc<dyn Tokenizer>,
    tagger: Arc<dyn Tagger>,
    filters: Vec<Arc<dyn Filter>>,
}

impl Normalizer {
    /// Build the standard pipeline from a configuration.
    ///
    /// All resources are loaded here; [`Normalizer::normalize`] performs no
    /// I/O.
    pub fn new(config: &NormalizerConfig) -> Result<Self> {
        let resources = match &config.resource_dir {
            Some(dir) => Arc::new(Resources::load_dir(dir)?),
            None => ensure_resources_available()?,
        };

        let tokenizer = Arc::new(TreebankTokenizer::new()?);
        let tagger = Arc::new(LexiconTagger::new(Arc::clone(&resources))?);
        let lemmatizer = MorphyLemmatizer::new(resources).with_strict(config.strict);

        Ok(Self::from_parts(tokenizer, tagger)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(PosFilter::new()))
            .add_filter(Arc::new(LemmaFilter::new(Arc::new(lemmatizer)))))
    }

    /// Create a normalizer with no filters from a tokenizer and a tagger.
    pub fn from_parts(tokenizer: Arc<dyn Tokenizer>, tagger: Arc<dyn Tagger>) -> Self {
        Normalizer {
            tokenizer,
            tagger,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the end of the chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this normalizer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the tagger used by this normalizer.
    pub fn tagger(&self) -> &Arc<dyn Tagger> {
        &self.tagger
    }

    /// Get the filters used by this normalizer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Normalize raw words into lemmas.
    pub fn normalize(&self, raw: &[String]) -> Result<Vec<String>> {
        let tokens = self.tokenize(raw)?;
        let token_count = tokens.len();

        let tagged = self.tagger.tag(tokens)?;
        if tagged.len() != token_count {
            return Err(StandardizeError::capability_unavailable(format!(
                "tagger '{}' returned {} tags for {} tokens",
                self.tagger.name(),
                tagged.len(),
                token_count
            )));
        }
        debug!(
            "Tagged: {}",
            tagged
                .iter()
                .map(Token::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        );

        let mut stream = tagged.into_token_stream();
        for filter in &self.filters {
            stream = filter.filter(stream)?;
        }

        let lemmas: Vec<String> = stream.map(|token| token.text).collect();
        debug!(
            "Normalized {} elements into {} lemmas",
            raw.len(),
            lemmas.len()
        );

        Ok(lemmas)
    }

    /// Tokenize every element and renumber the tokens across elements.
    fn tokenize(&self, raw: &[String]) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        for (element, text) in raw.iter().enumerate() {
            for token in self.tokenizer.tokenize(text)? {
                let position = tokens.len();
                tokens.push(token.with_position(position).with_element(element));
            }
        }

        debug!(
            "Tokenizer '{}' produced {} tokens from {} elements",
            self.tokenizer.name(),
            tokens.len(),
            raw.len()
        );
        Ok(tokens)
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("tokenizer", &self.tokenizer().name())
            .field("tagger", &self.tagger().name())
            .field(
                "filters",
                &self.filters().iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Normalize raw words with the default configuration.
pub fn normalize(raw: &[String]) -> Result<Vec<String>> {
    Normalizer::new(&NormalizerConfig::default())?.normalize(raw)
}

/// Count occurrences of each lemma.
pub fn term_counts(lemmas: &[String]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for lemma in lemmas {
        *counts.entry(lemma.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenStream;

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn normalizer() -> Normalizer {
        Normalizer::new(&NormalizerConfig::default()).unwrap()
    }

    #[test]
    fn test_normalize_sentence() {
        let result = normalizer()
            .normalize(&words(&["The", "cats", "are", "running", "quickly"]))
            .unwrap();
        assert_eq!(result, ["cat", "be", "run"]);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalizer().normalize(&[]).unwrap().is_empty());
        assert!(normalizer().normalize(&words(&["", "  "])).unwrap().is_empty());
    }

    #[test]
    fn test_elements_are_split() {
        let result = normalizer()
            .normalize(&words(&["Dogs don't", "chase cats."]))
            .unwrap();
        assert_eq!(result, ["dog", "do", "chase", "cat"]);
    }

    #[test]
    fn test_strict_config() {
        let config = NormalizerConfig {
            strict: true,
            ..Default::default()
        };
        let result = Normalizer::new(&config)
            .unwrap()
            .normalize(&words(&["they", "zorbed"]))
            .unwrap();
        assert_eq!(result, ["zorbed"]);

        let result = normalizer()
            .normalize(&words(&["they", "zorbed"]))
            .unwrap();
        assert_eq!(result, ["zorb"]);
    }

    #[test]
    fn test_unknown_verbs_keep_final_e() {
        let normalizer = normalizer();
        assert_eq!(
            normalizer.normalize(&words(&["they", "completed"])).unwrap(),
            ["complete"]
        );
        assert_eq!(
            normalizer.normalize(&words(&["Amazing", "results"])).unwrap(),
            ["amaze", "result"]
        );
    }

    #[test]
    fn test_missing_resource_dir() {
        let config = NormalizerConfig {
            resource_dir: Some(PathBuf::from("/nonexistent/standardize/resources")),
            ..Default::default()
        };
        let err = Normalizer::new(&config).unwrap_err();
        assert!(matches!(err, StandardizeError::CapabilityUnavailable(_)));
    }

    #[test]
    fn test_tagger_count_mismatch() {
        struct DroppingTagger;

        impl Tagger for DroppingTagger {
            fn tag(&self, mut tokens: Vec<Token>) -> Result<Vec<Token>> {
                tokens.pop();
                Ok(tokens)
            }

            fn name(&self) -> &'static str {
                "dropping"
            }
        }

        let normalizer = Normalizer::from_parts(
            Arc::new(TreebankTokenizer::new().unwrap()),
            Arc::new(DroppingTagger),
        );
        let err = normalizer.normalize(&words(&["cats"])).unwrap_err();
        assert!(matches!(err, StandardizeError::CapabilityUnavailable(_)));
    }

    #[test]
    fn test_positions_and_elements() {
        struct Recorder;

        impl Filter for Recorder {
            fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
                let tokens: Vec<Token> = tokens
                    .map(|t| t.with_text(format!("{}:{}:{}", t.text, t.position, t.element)))
                    .collect();
                Ok(Box::new(tokens.into_iter()))
            }

            fn name(&self) -> &'static str {
                "recorder"
            }
        }

        let resources = ensure_resources_available().unwrap();
        let normalizer = Normalizer::from_parts(
            Arc::new(TreebankTokenizer::new().unwrap()),
            Arc::new(LexiconTagger::new(resources).unwrap()),
        )
        .add_filter(Arc::new(Recorder));

        let result = normalizer.normalize(&words(&["don't", "", "go"])).unwrap();
        assert_eq!(result, ["do:0:0", "n't:1:0", "go:2:2"]);
    }

    #[test]
    fn test_pipeline_parts() {
        let normalizer = normalizer();
        assert_eq!(normalizer.tokenizer().name(), "treebank");
        assert_eq!(normalizer.tagger().name(), "lexicon");
        let filters: Vec<&str> = normalizer.filters().iter().map(|f| f.name()).collect();
        assert_eq!(filters, ["lowercase", "pos", "lemma"]);
    }

    #[test]
    fn test_debug_lists_pipeline() {
        let debug = format!("{:?}", normalizer());
        assert!(debug.contains("treebank"));
        assert!(debug.contains("lexicon"));
        assert!(debug.contains("lemma"));
    }

    #[test]
    fn test_term_counts() {
        let counts = term_counts(&words(&["cat", "run", "cat"]));
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["cat"], 2);
        assert_eq!(counts["run"], 1);
        assert!(term_counts(&[]).is_empty());
    }
}
