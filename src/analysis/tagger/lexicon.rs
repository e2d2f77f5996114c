//! Lexicon-driven part-of-speech tagger.
//!
//! Tagging is two passes over the token sequence:
//!
//! 1. every token gets its most likely tag on its own: punctuation and
//!    numerals by shape, known words from the lexicon, capitalized unknown
//!    words inside a sentence as proper nouns, anything else by suffix
//! 2. contextual rules revise a tag from the tag and word before it,
//!    choosing only among the alternatives the first pass allowed
//!    ("the run" → NN, "to run" → VB, "has walked" → VBN)
//!
//! # Examples
//!
//! ```
//! use standardize::analysis::resources::ensure_resources_available;
//! use standardize::analysis::tagger::{LexiconTagger, Tagger};
//! use standardize::analysis::token::Token;
//!
//! let tagger = LexiconTagger::new(ensure_resources_available().unwrap()).unwrap();
//! let tokens = ["The", "cats", "are", "running"]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, w)| Token::new(*w, i))
//!     .collect();
//!
//! let tags: Vec<String> = tagger
//!     .tag(tokens)
//!     .unwrap()
//!     .into_iter()
//!     .filter_map(|t| t.tag)
//!     .collect();
//! assert_eq!(tags, ["DT", "NNS", "VBP", "VBG"]);
//! ```

use std::sync::Arc;

use log::trace;
use regex::Regex;

use crate::analysis::orthography::undouble;
use crate::analysis::pos::PosCategory;
use crate::analysis::resources::{Resources, lookup_form};
use crate::analysis::tagger::Tagger;
use crate::analysis::token::Token;
use crate::error::{Result, StandardizeError};

const CARDINAL_PATTERN: &str = r"^[+-]?\d[\d,.:/-]*$";

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "able", "ible", "ful", "ous", "ive", "less", "ish", "ical", "ic", "al", "ary",
];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ist", "ance", "ence", "ship", "hood", "er",
    "or", "ure", "age",
];

const HAVE_FORMS: &[&str] = &["have", "has", "had", "having", "'ve"];

const BE_FORMS: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "'m", "'re", "'s",
];

/// Subjects taking the non-third-person present.
const PLURAL_SUBJECTS: &[&str] = &["i", "you", "we", "they"];

/// Subjects taking the third-person singular present.
const SINGULAR_SUBJECTS: &[&str] = &["he", "she", "it"];

/// Tags after which a verb reading gives way to a noun reading.
const NOMINAL_MODIFIERS: &[&str] = &["DT", "PRP$", "POS", "JJ", "JJR", "JJS", "CD"];

/// Working state for one token between the two passes.
#[derive(Clone, Debug)]
struct Candidate {
    /// Lookup form of the token text
    word: String,
    tag: String,
    /// Every tag the first pass considered possible
    alternatives: Vec<String>,
}

impl Candidate {
    fn new(word: String, alternatives: Vec<String>) -> Self {
        let tag = alternatives.first().cloned().unwrap_or_else(|| "NN".to_string());
        Candidate {
            word,
            tag,
            alternatives,
        }
    }

    fn single(word: String, tag: &str) -> Self {
        Self::new(word, vec![tag.to_string()])
    }

    fn allows(&self, tag: &str) -> bool {
        self.alternatives.iter().any(|t| t == tag)
    }

    fn retag(&mut self, tag: &str) {
        if self.tag != tag && self.allows(tag) {
            trace!("Retagged {:?} from {} to {}", self.word, self.tag, tag);
            self.tag = tag.to_string();
        }
    }
}

/// A tagger backed by the lexicon in [`Resources`].
#[derive(Clone, Debug)]
pub struct LexiconTagger {
    resources: Arc<Resources>,
    cardinal: Arc<Regex>,
}

impl LexiconTagger {
    /// Create a tagger over the given resources.
    pub fn new(resources: Arc<Resources>) -> Result<Self> {
        let cardinal = Regex::new(CARDINAL_PATTERN)
            .map_err(|e| StandardizeError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(LexiconTagger {
            resources,
            cardinal: Arc::new(cardinal),
        })
    }

    /// First-pass tag for a token seen in isolation.
    fn initial(&self, text: &str, sentence_start: bool) -> Candidate {
        let word = lookup_form(text);

        if !text.chars().any(char::is_alphanumeric) {
            return Candidate::single(word, punctuation_tag(text));
        }
        if word == "'s" {
            return Candidate::new(word, vec!["VBZ".to_string(), "POS".to_string()]);
        }
        if self.cardinal.is_match(&word) {
            return Candidate::single(word, "CD");
        }
        if let Some(tags) = self.resources.tags(&word)
            && !tags.is_empty()
        {
            let tags = tags.to_vec();
            return Candidate::new(word, tags);
        }
        if !sentence_start && text.chars().next().is_some_and(char::is_uppercase) {
            return Candidate::single(word, "NNP");
        }

        let tags = self.guess(&word).iter().map(|t| t.to_string()).collect();
        Candidate::new(word, tags)
    }

    /// Candidate tags for an unknown lower-cased word, judged by its suffix.
    fn guess(&self, word: &str) -> &'static [&'static str] {
        let len = word.chars().count();

        if len >= 5 && word.ends_with("ing") {
            &["VBG", "NN", "JJ"]
        } else if len >= 5 && word.ends_with("ed") {
            &["VBD", "VBN", "JJ"]
        } else if len >= 4 && word.ends_with("ly") {
            &["RB", "JJ"]
        } else if self.is_graded(word, "est") {
            &["JJS"]
        } else if self.is_graded(word, "er") {
            &["JJR"]
        } else if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            &["JJ"]
        } else if NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            &["NN"]
        } else if len >= 4 && word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
            &["NNS", "VBZ"]
        } else {
            &["NN", "VB", "VBP"]
        }
    }

    /// Whether the word is a comparative or superlative of a known adjective
    /// ("nicer", "biggest", "happiest").
    fn is_graded(&self, word: &str, suffix: &str) -> bool {
        let Some(stem) = word.strip_suffix(suffix) else {
            return false;
        };
        if stem.chars().count() < 2 {
            return false;
        }

        let mut bases = vec![stem.to_string(), format!("{stem}e")];
        bases.extend(undouble(stem));
        if let Some(head) = stem.strip_suffix('i') {
            bases.push(format!("{head}y"));
        }

        bases
            .iter()
            .any(|base| self.resources.is_base_form(base, PosCategory::Adjective))
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        let mut candidates: Vec<Candidate> = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let sentence_start = candidates.last().is_none_or(|prev| prev.tag == ".");
            candidates.push(self.initial(&token.text, sentence_start));
        }

        for i in 1..candidates.len() {
            let (before, after) = candidates.split_at_mut(i);
            apply_context(&before[i - 1], &mut after[0]);
        }

        Ok(tokens
            .into_iter()
            .zip(candidates)
            .map(|(token, candidate)| token.with_tag(candidate.tag))
            .collect())
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

/// Revise `current` from the token before it.
fn apply_context(prev: &Candidate, current: &mut Candidate) {
    let prev_tag = prev.tag.as_str();
    let prev_word = prev.word.as_str();

    if current.word == "'s" {
        let tag = if prev_tag.starts_with("NN") { "POS" } else { "VBZ" };
        current.retag(tag);
        return;
    }

    if matches!(prev_tag, "TO" | "MD") {
        current.retag("VB");
        return;
    }

    if current.tag == "VBD"
        && prev_tag.starts_with("VB")
        && (HAVE_FORMS.contains(&prev_word) || BE_FORMS.contains(&prev_word))
    {
        current.retag("VBN");
        return;
    }

    if NOMINAL_MODIFIERS.contains(&prev_tag) {
        match current.tag.as_str() {
            "VB" | "VBP" | "VBG" => current.retag("NN"),
            "VBZ" => current.retag("NNS"),
            _ => {}
        }
        return;
    }

    if PLURAL_SUBJECTS.contains(&prev_word) || matches!(prev_tag, "NNS" | "NNPS") {
        if matches!(current.tag.as_str(), "NN" | "VB") {
            current.retag("VBP");
        }
        return;
    }

    if (SINGULAR_SUBJECTS.contains(&prev_word) || matches!(prev_tag, "NN" | "NNP"))
        && current.tag == "NNS"
    {
        current.retag("VBZ");
    }
}

/// Penn Treebank tag for a token without letters or digits.
fn punctuation_tag(text: &str) -> &'static str {
    match text {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "-" | "--" | "..." => ":",
        "(" | "[" | "{" | "<" => "(",
        ")" | "]" | "}" | ">" => ")",
        "``" | "`" | "“" | "‘" | "«" => "``",
        "''" | "\"" | "'" | "”" | "’" | "»" => "''",
        "$" => "$",
        "#" => "#",
        _ if text.chars().all(|c| c == '.' || c == '-') => ":",
        _ => "SYM",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::resources::ensure_resources_available;

    fn tagger() -> LexiconTagger {
        LexiconTagger::new(ensure_resources_available().unwrap()).unwrap()
    }

    fn tags(words: &[&str]) -> Vec<String> {
        let tokens = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();
        tagger()
            .tag(tokens)
            .unwrap()
            .into_iter()
            .map(|t| t.tag.unwrap())
            .collect()
    }

    #[test]
    fn test_sentence() {
        assert_eq!(
            tags(&["The", "cats", "are", "running", "quickly"]),
            ["DT", "NNS", "VBP", "VBG", "RB"]
        );
        assert_eq!(
            tags(&["The", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog"]),
            ["DT", "JJ", "JJ", "NN", "VBZ", "IN", "DT", "JJ", "NN"]
        );
    }

    #[test]
    fn test_single_words() {
        assert_eq!(tags(&["running"]), ["VBG"]);
        assert_eq!(tags(&["RUNNING"]), ["VBG"]);
        assert_eq!(tags(&["run"]), ["VB"]);
        assert_eq!(tags(&["the", "of", "quickly"]), ["DT", "IN", "RB"]);
    }

    #[test]
    fn test_infinitive_and_modal() {
        assert_eq!(tags(&["to", "run"]), ["TO", "VB"]);
        assert_eq!(tags(&["can", "visit"]), ["MD", "VB"]);
    }

    #[test]
    fn test_noun_after_determiner() {
        assert_eq!(tags(&["the", "run"]), ["DT", "NN"]);
        assert_eq!(tags(&["a", "visit"]), ["DT", "NN"]);
    }

    #[test]
    fn test_participle_after_auxiliary() {
        assert_eq!(tags(&["I", "have", "zorbed"]), ["PRP", "VBP", "VBN"]);
        assert_eq!(tags(&["they", "were", "met"]), ["PRP", "VBD", "VBN"]);
    }

    #[test]
    fn test_agreement() {
        assert_eq!(tags(&["they", "visit"]), ["PRP", "VBP"]);
        assert_eq!(tags(&["it", "zorbs"]), ["PRP", "VBZ"]);
    }

    #[test]
    fn test_clitic_s() {
        assert_eq!(tags(&["it", "'s"]), ["PRP", "VBZ"]);
        assert_eq!(tags(&["the", "dog", "'s"]), ["DT", "NN", "POS"]);
    }

    #[test]
    fn test_proper_nouns() {
        assert_eq!(tags(&["the", "Zorblax"]), ["DT", "NNP"]);
        assert_eq!(tags(&["hello", ".", "Zorblax"]), ["UH", ".", "NN"]);
    }

    #[test]
    fn test_numbers_and_punctuation() {
        assert_eq!(tags(&["3.14", "1,000", "two"]), ["CD", "CD", "CD"]);
        assert_eq!(tags(&["(", ",", "!", "...", "$", "%"]), ["(", ",", ".", ":", "$", "SYM"]);
    }

    #[test]
    fn test_suffix_guesses() {
        let tagger = tagger();
        assert_eq!(tagger.guess("zorbing")[0], "VBG");
        assert_eq!(tagger.guess("zorbed")[0], "VBD");
        assert_eq!(tagger.guess("zorbly")[0], "RB");
        assert_eq!(tagger.guess("nicest")[0], "JJS");
        assert_eq!(tagger.guess("nicer")[0], "JJR");
        assert_eq!(tagger.guess("zorbable")[0], "JJ");
        assert_eq!(tagger.guess("zorbness")[0], "NN");
        assert_eq!(tagger.guess("zorber")[0], "NN");
        assert_eq!(tagger.guess("zorbs")[0], "NNS");
        assert_eq!(tagger.guess("zorb")[0], "NN");
        assert_eq!(tagger.guess("bus")[0], "NN");
    }

    #[test]
    fn test_preserves_tokens() {
        let tokens = vec![
            Token::with_offsets("Cats", 0, 0, 4).with_element(0),
            Token::with_offsets("run", 1, 0, 3).with_element(1),
        ];
        let tagged = tagger().tag(tokens).unwrap();

        assert_eq!(tagged.len(), 2);
        assert_eq!(tagged[0].text, "Cats");
        assert_eq!(tagged[1].element, 1);
        assert_eq!(tagged[1].end_offset, 3);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(tagger().tag(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_tagger_name() {
        assert_eq!(tagger().name(), "lexicon");
    }
}
