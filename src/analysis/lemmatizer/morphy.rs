//! WordNet-morphy style lemmatizer.
//!
//! Lemmatization of a lower-cased word for a category proceeds as:
//!
//! 1. irregular forms from the category's exception list (`ran` → `run`)
//! 2. the word itself, if the lexicon lists it as a base form
//! 3. suffix detachment rules, keeping the first candidate the lexicon
//!    lists as a base form (`cats` → `cat`, `makes` → `make`)
//! 4. for words the lexicon does not know, a spelling-based guess
//!    (`blogged` → `blog`), unless the lemmatizer is strict, in which case
//!    the word is its own lemma
//!
//! # Examples
//!
//! ```
//! use standardize::analysis::lemmatizer::Lemmatizer;
//! use standardize::analysis::lemmatizer::morphy::MorphyLemmatizer;
//! use standardize::analysis::pos::PosCategory;
//! use standardize::analysis::resources::ensure_resources_available;
//!
//! let lemmatizer = MorphyLemmatizer::new(ensure_resources_available().unwrap());
//!
//! assert_eq!(lemmatizer.lemmatize("cats", PosCategory::Noun), "cat");
//! assert_eq!(lemmatizer.lemmatize("are", PosCategory::Verb), "be");
//! assert_eq!(lemmatizer.lemmatize("better", PosCategory::Adjective), "good");
//! ```

use std::sync::Arc;

use log::trace;

use crate::analysis::lemmatizer::Lemmatizer;
use crate::analysis::orthography::restore_stem;
use crate::analysis::pos::PosCategory;
use crate::analysis::resources::{Resources, lookup_form};

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Sibilant endings that take `-es` in the plural / third person.
const SIBILANT_PLURALS: &[&str] = &["sses", "ches", "shes", "xes", "zzes"];

/// Lemmatizer driven by exception lists, detachment rules and the lexicon.
#[derive(Clone, Debug)]
pub struct MorphyLemmatizer {
    resources: Arc<Resources>,
    /// Return unknown words unchanged instead of guessing
    strict: bool,
}

impl MorphyLemmatizer {
    /// Create a guessing lemmatizer over the given resources.
    pub fn new(resources: Arc<Resources>) -> Self {
        MorphyLemmatizer {
            resources,
            strict: false,
        }
    }

    /// Enable or disable strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Check if this lemmatizer is strict.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn rules(category: PosCategory) -> &'static [(&'static str, &'static str)] {
        match category {
            PosCategory::Noun => NOUN_RULES,
            PosCategory::Verb => VERB_RULES,
            PosCategory::Adjective => ADJECTIVE_RULES,
            PosCategory::Other => &[],
        }
    }

    /// First detachment candidate the lexicon knows as a base form.
    fn morphy(&self, word: &str, category: PosCategory) -> Option<String> {
        Self::rules(category).iter().find_map(|(suffix, replacement)| {
            let stem = word.strip_suffix(suffix).filter(|stem| !stem.is_empty())?;
            let candidate = format!("{stem}{replacement}");
            self.resources
                .is_base_form(&candidate, category)
                .then_some(candidate)
        })
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str, category: PosCategory) -> String {
        if !category.is_lemmatized() {
            return word.to_string();
        }

        let form = lookup_form(word);

        if let Some(base) = self.resources.exception(&form, category) {
            return base.to_string();
        }
        if self.resources.is_base_form(&form, category) {
            return form;
        }
        if let Some(base) = self.morphy(&form, category) {
            return base;
        }
        if self.strict {
            return form;
        }

        match guess(&form, category) {
            Some(base) => {
                trace!("Guessed {category} lemma {base:?} for {form:?}");
                base
            }
            None => form,
        }
    }

    fn name(&self) -> &'static str {
        "morphy"
    }
}

/// Spelling-based reduction for words outside the lexicon.
fn guess(word: &str, category: PosCategory) -> Option<String> {
    let base = match category {
        PosCategory::Noun => guess_noun(word),
        PosCategory::Verb => guess_verb(word),
        PosCategory::Adjective => guess_adjective(word),
        PosCategory::Other => None,
    }?;

    (base.chars().count() >= 2).then_some(base)
}

fn guess_noun(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("ies") {
        return Some(format!("{stem}y"));
    }
    if let Some(base) = strip_sibilant_plural(word) {
        return Some(base);
    }
    strip_plain_s(word)
}

fn guess_verb(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
        return Some(format!("{stem}y"));
    }
    if let Some(base) = strip_sibilant_plural(word) {
        return Some(base);
    }
    if let Some(stem) = word.strip_suffix("ying")
        && stem.chars().count() <= 2
    {
        return Some(format!("{stem}ie"));
    }
    if let Some(stem) = word.strip_suffix("ing") {
        return restore_stem(stem);
    }
    if word.ends_with("eed") {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ed") {
        return restore_stem(stem);
    }
    strip_plain_s(word)
}

fn guess_adjective(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("ier").or_else(|| word.strip_suffix("iest")) {
        return Some(format!("{stem}y"));
    }
    word.strip_suffix("est")
        .or_else(|| word.strip_suffix("er"))
        .and_then(restore_stem)
}

/// "boxes" → "box", "quizzes" → "quiz".
fn strip_sibilant_plural(word: &str) -> Option<String> {
    if word.ends_with("zzes") {
        return word.strip_suffix("zes").map(str::to_string);
    }
    SIBILANT_PLURALS
        .iter()
        .find(|suffix| word.ends_with(*suffix))
        .and_then(|_| word.strip_suffix("es"))
        .map(str::to_string)
}

fn strip_plain_s(word: &str) -> Option<String> {
    if ["ss", "us", "is"].iter().any(|suffix| word.ends_with(suffix)) {
        return None;
    }
    word.strip_suffix('s').map(str::to_string)
}
