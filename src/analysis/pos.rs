//! Part-of-speech categories.
//!
//! Taggers emit raw Penn Treebank codes ("NN", "VBD", "JJ", ...). The rest of
//! the pipeline only cares about the coarse category a code belongs to, so
//! each code is mapped once through [`PosCategory::from_tag`] and everything
//! downstream switches on the enum.
//!
//! | Codes | Category |
//! |---|---|
//! | `NN NNS NNP NNPS` | [`PosCategory::Noun`] |
//! | `VB VBD VBG VBN VBP VBZ` | [`PosCategory::Verb`] |
//! | `JJ JJR JJS` | [`PosCategory::Adjective`] |
//! | anything else | [`PosCategory::Other`] |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Noun tag codes.
pub const NOUN_TAGS: &[&str] = &["NN", "NNS", "NNP", "NNPS"];

/// Verb tag codes.
pub const VERB_TAGS: &[&str] = &["VB", "VBD", "VBG", "VBN", "VBP", "VBZ"];

/// Adjective tag codes.
pub const ADJECTIVE_TAGS: &[&str] = &["JJ", "JJR", "JJS"];

/// Coarse grammatical category of a tagged token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosCategory {
    Noun,
    Verb,
    Adjective,
    /// Determiners, prepositions, adverbs, punctuation, ...
    Other,
}

impl PosCategory {
    /// Categories that survive normalization, in lookup order.
    pub const LEMMATIZED: [PosCategory; 3] =
        [PosCategory::Noun, PosCategory::Verb, PosCategory::Adjective];

    /// Map a raw tag code to its category.
    pub fn from_tag(tag: &str) -> Self {
        if NOUN_TAGS.contains(&tag) {
            PosCategory::Noun
        } else if VERB_TAGS.contains(&tag) {
            PosCategory::Verb
        } else if ADJECTIVE_TAGS.contains(&tag) {
            PosCategory::Adjective
        } else {
            PosCategory::Other
        }
    }

    /// Whether tokens of this category are lemmatized and kept.
    pub fn is_lemmatized(self) -> bool {
        self != PosCategory::Other
    }

    /// Tags whose presence in the lexicon marks a word as a base form.
    pub fn base_tags(self) -> &'static [&'static str] {
        match self {
            PosCategory::Noun => &["NN", "NNP"],
            PosCategory::Verb => &["VB"],
            PosCategory::Adjective => &["JJ"],
            PosCategory::Other => &[],
        }
    }

    /// File name of the exception list for this category.
    pub fn exception_file(self) -> Option<&'static str> {
        match self {
            PosCategory::Noun => Some("noun.exc"),
            PosCategory::Verb => Some("verb.exc"),
            PosCategory::Adjective => Some("adj.exc"),
            PosCategory::Other => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PosCategory::Noun => "noun",
            PosCategory::Verb => "verb",
            PosCategory::Adjective => "adjective",
            PosCategory::Other => "other",
        }
    }
}

impl fmt::Display for PosCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
