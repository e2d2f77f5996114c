//! # standardize
//!
//! Normalizes words for indexing: a sequence of raw words is tokenized,
//! tagged with Penn Treebank part-of-speech codes, lower-cased, reduced to
//! its nouns, verbs and adjectives, and lemmatized.
//!
//! ## Features
//!
//! - Penn-Treebank-style tokenization (clitics, punctuation, abbreviations)
//! - Lexicon and context-rule part-of-speech tagging
//! - WordNet-morphy style lemmatization with bundled tables
//! - Pluggable tokenizer, tagger, lemmatizer and filters
//!
//! ```
//! let raw = vec!["RUNNING".to_string()];
//! assert_eq!(standardize::normalizer::normalize(&raw).unwrap(), ["run"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod normalizer;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
