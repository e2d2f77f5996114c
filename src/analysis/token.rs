//! Token types for the normalization pipeline.
//!
//! A [`Token`] is the unit that flows from the tokenizer through the tagger
//! and the token filters. It remembers which raw input element it came from
//! and, once tagged, the part-of-speech code the tagger assigned.
//!
//! # Examples
//!
//! ```
//! use standardize::analysis::pos::PosCategory;
//! use standardize::analysis::token::Token;
//!
//! let token = Token::with_offsets("cats", 0, 0, 4).with_tag("NNS");
//! assert_eq!(token.text, "cats");
//! assert_eq!(token.tag(), Some("NNS"));
//! assert_eq!(token.category(), PosCategory::Noun);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::pos::PosCategory;

/// A token represents a single unit of text after tokenization.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Position in the token stream (0-based, across all elements)
/// - `start_offset` / `end_offset` - Byte offsets inside the source element
/// - `element` - Index of the raw input element the token came from
/// - `tag` - Part-of-speech code, set by the tagger
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in its source element
    pub start_offset: usize,

    /// The byte offset where this token ends in its source element
    pub end_offset: usize,

    /// Index of the raw input element this token was cut from
    pub element: usize,

    /// Part-of-speech tag code (Penn Treebank style), if tagged
    pub tag: Option<String>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            element: 0,
            tag: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            element: 0,
            tag: None,
        }
    }

    /// Set the source element index.
    pub fn with_element(mut self, element: usize) -> Self {
        self.element = element;
        self
    }

    /// Set the part-of-speech tag.
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Clone this token with updated position.
    pub fn with_position(&self, position: usize) -> Self {
        let mut token = self.clone();
        token.position = position;
        token
    }

    /// Get the part-of-speech tag, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Grammatical category of this token; untagged tokens are `Other`.
    pub fn category(&self) -> PosCategory {
        self.tag().map_or(PosCategory::Other, PosCategory::from_tag)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}/{}", self.text, tag),
            None => write!(f, "{}", self.text),
        }
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
