//! Text analysis for the normalizer.
//!
//! This module holds the pieces the normalization pipeline is assembled
//! from: tokenizers, a part-of-speech tagger, lemmatizers, token filters and
//! the lexical resources the tagger and lemmatizer read.

pub mod lemmatizer;
pub mod orthography;
pub mod pos;
pub mod resources;
pub mod tagger;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use lemmatizer::*;
pub use pos::*;
pub use resources::*;
pub use tagger::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
