//! Lexical resources used by the tagger and the lemmatizer.
//!
//! Two kinds of tables drive the built-in capabilities:
//!
//! - `lexicon.txt` - one word per line followed by its candidate Penn
//!   Treebank tags, most likely first (`run VB NN VBP VBN`).
//! - `noun.exc`, `verb.exc`, `adj.exc` - irregular inflections in WordNet
//!   exception format (`ran run`), one list per lemmatized category.
//!
//! A copy of every table is compiled into the binary. [`ensure_resources_available`]
//! parses that copy once per process and hands out a shared handle, so the
//! per-request code path never touches the disk. [`Resources::load_dir`]
//! overlays a directory of same-named files on top of the bundled tables.
//!
//! # Examples
//!
//! ```
//! use standardize::analysis::pos::PosCategory;
//! use standardize::analysis::resources::ensure_resources_available;
//!
//! let resources = ensure_resources_available().unwrap();
//! assert_eq!(resources.exception("ran", PosCategory::Verb), Some("run"));
//! assert!(resources.is_base_form("cat", PosCategory::Noun));
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use log::{debug, info};

use crate::analysis::pos::PosCategory;
use crate::error::{Result, StandardizeError};

/// Name of the tagging lexicon file.
pub const LEXICON_FILE: &str = "lexicon.txt";

const BUNDLED_LEXICON: &str = include_str!("../../resources/lexicon.txt");
const BUNDLED_NOUN_EXC: &str = include_str!("../../resources/noun.exc");
const BUNDLED_VERB_EXC: &str = include_str!("../../resources/verb.exc");
const BUNDLED_ADJ_EXC: &str = include_str!("../../resources/adj.exc");

static BUNDLED: OnceLock<Arc<Resources>> = OnceLock::new();

/// Parse the bundled tables once and return a shared handle to them.
///
/// Safe to call any number of times; only the first call does any work.
pub fn ensure_resources_available() -> Result<Arc<Resources>> {
    if let Some(resources) = BUNDLED.get() {
        return Ok(Arc::clone(resources));
    }

    let resources = Arc::new(Resources::bundled()?);
    info!(
        "Loaded bundled resources: {} lexicon entries, {} exceptions",
        resources.lexicon_len(),
        resources.exception_count()
    );

    Ok(Arc::clone(BUNDLED.get_or_init(|| resources)))
}

/// Key under which a word is looked up: lower-cased, with typographic
/// apostrophes folded to `'`.
pub fn lookup_form(word: &str) -> String {
    word.to_lowercase().replace('’', "'")
}

/// Tagging lexicon plus per-category exception lists.
#[derive(Clone, Debug, Default)]
pub struct Resources {
    lexicon: HashMap<String, Vec<String>>,
    exceptions: HashMap<PosCategory, HashMap<String, String>>,
}

impl Resources {
    /// Create an empty resource set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the tables compiled into the binary.
    pub fn bundled() -> Result<Self> {
        let mut resources = Resources::new();
        resources.merge_lexicon(BUNDLED_LEXICON, "bundled lexicon.txt")?;
        resources.merge_exceptions(PosCategory::Noun, BUNDLED_NOUN_EXC, "bundled noun.exc")?;
        resources.merge_exceptions(PosCategory::Verb, BUNDLED_VERB_EXC, "bundled verb.exc")?;
        resources.merge_exceptions(PosCategory::Adjective, BUNDLED_ADJ_EXC, "bundled adj.exc")?;
        Ok(resources)
    }

    /// Load the bundled tables and overlay the files found in `dir`.
    ///
    /// The directory must contain `lexicon.txt`, `noun.exc`, `verb.exc` and
    /// `adj.exc`. Entries read from disk replace bundled entries for the
    /// same word.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(StandardizeError::capability_unavailable(format!(
                "resource directory {} does not exist",
                dir.display()
            )));
        }

        let mut resources = Self::bundled()?;

        let (text, source) = read_resource(dir, LEXICON_FILE)?;
        resources.merge_lexicon(&text, &source)?;

        for category in PosCategory::LEMMATIZED {
            if let Some(file) = category.exception_file() {
                let (text, source) = read_resource(dir, file)?;
                resources.merge_exceptions(category, &text, &source)?;
            }
        }

        info!(
            "Loaded resources from {}: {} lexicon entries, {} exceptions",
            dir.display(),
            resources.lexicon_len(),
            resources.exception_count()
        );

        Ok(resources)
    }

    /// Add a lexicon entry, replacing any existing one for the word.
    pub fn with_entry(mut self, word: &str, tags: &[&str]) -> Self {
        self.lexicon.insert(
            lookup_form(word),
            tags.iter().map(|tag| tag.to_string()).collect(),
        );
        self
    }

    /// Add an exception, replacing any existing one for the inflected form.
    pub fn with_exception(mut self, category: PosCategory, inflected: &str, base: &str) -> Self {
        self.exceptions
            .entry(category)
            .or_default()
            .insert(lookup_form(inflected), lookup_form(base));
        self
    }

    /// Parse lexicon lines and merge them into this resource set.
    pub fn merge_lexicon(&mut self, text: &str, source: &str) -> Result<usize> {
        let mut merged = 0;

        for (line_no, line) in content_lines(text) {
            let mut fields = line.split_whitespace();
            let word = fields.next().unwrap_or_default();
            let tags: Vec<String> = fields.map(|tag| tag.to_string()).collect();

            if tags.is_empty() {
                return Err(malformed(source, line_no, "expected `word TAG [TAG ...]`"));
            }
            if let Some(bad) = tags.iter().find(|tag| tag.chars().any(char::is_lowercase)) {
                return Err(malformed(source, line_no, &format!("invalid tag `{bad}`")));
            }

            self.lexicon.insert(lookup_form(word), tags);
            merged += 1;
        }

        debug!("Merged {merged} lexicon entries from {source}");
        Ok(merged)
    }

    /// Parse WordNet-style exception lines and merge them for `category`.
    pub fn merge_exceptions(
        &mut self,
        category: PosCategory,
        text: &str,
        source: &str,
    ) -> Result<usize> {
        let table = self.exceptions.entry(category).or_default();
        let mut merged = 0;

        for (line_no, line) in content_lines(text) {
            let mut fields = line.split_whitespace();
            let (Some(inflected), Some(base)) = (fields.next(), fields.next()) else {
                return Err(malformed(source, line_no, "expected `inflected base`"));
            };

            table.insert(lookup_form(inflected), lookup_form(base));
            merged += 1;
        }

        debug!("Merged {merged} {category} exceptions from {source}");
        Ok(merged)
    }

    /// Candidate tags for a lower-cased word, most likely first.
    pub fn tags(&self, word: &str) -> Option<&[String]> {
        self.lexicon.get(word).map(Vec::as_slice)
    }

    /// Whether the lexicon knows the word.
    pub fn contains(&self, word: &str) -> bool {
        self.lexicon.contains_key(word)
    }

    /// Base form listed for an irregular inflection.
    pub fn exception(&self, word: &str, category: PosCategory) -> Option<&str> {
        self.exceptions
            .get(&category)
            .and_then(|table| table.get(word))
            .map(String::as_str)
    }

    /// Whether the word is a dictionary base form of `category`.
    pub fn is_base_form(&self, word: &str, category: PosCategory) -> bool {
        let base_tags = category.base_tags();
        self.tags(word)
            .is_some_and(|tags| tags.iter().any(|tag| base_tags.contains(&tag.as_str())))
    }

    /// Number of lexicon entries.
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Total number of exceptions across categories.
    pub fn exception_count(&self) -> usize {
        self.exceptions.values().map(HashMap::len).sum()
    }
}

/// Non-blank, non-comment lines with their 1-based line numbers.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn malformed(source: &str, line_no: usize, reason: &str) -> StandardizeError {
    StandardizeError::capability_unavailable(format!("{source}:{line_no}: {reason}"))
}

fn read_resource(dir: &Path, file: &str) -> Result<(String, String)> {
    let path = dir.join(file);
    let source = path.display().to_string();
    let text = fs::read_to_string(&path).map_err(|e| {
        StandardizeError::capability_unavailable(format!("cannot read {source}: {e}"))
    })?;
    Ok((text, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_resource_dir(dir: &Path, lexicon: &str) {
        fs::write(dir.join(LEXICON_FILE), lexicon).unwrap();
        fs::write(dir.join("noun.exc"), "cacti cactus\n").unwrap();
        fs::write(dir.join("verb.exc"), "# irregular\nslew slay\n").unwrap();
        fs::write(dir.join("adj.exc"), "").unwrap();
    }

    #[test]
    fn test_lookup_form() {
        assert_eq!(lookup_form("Running"), "running");
        assert_eq!(lookup_form("N’T"), "n't");
    }

    #[test]
    fn test_bundled_resources_parse() {
        let resources = Resources::bundled().unwrap();
        assert!(resources.lexicon_len() > 100);
        assert!(resources.exception_count() > 50);
    }

    #[test]
    fn test_bundled_lookups() {
        let resources = Resources::bundled().unwrap();

        assert_eq!(resources.tags("the").unwrap()[0], "DT");
        assert_eq!(resources.exception("are", PosCategory::Verb), Some("be"));
        assert_eq!(resources.exception("children", PosCategory::Noun), Some("child"));
        assert_eq!(resources.exception("better", PosCategory::Adjective), Some("good"));
        assert_eq!(resources.exception("children", PosCategory::Verb), None);
    }

    #[test]
    fn test_is_base_form() {
        let resources = Resources::new()
            .with_entry("run", &["VB", "NN"])
            .with_entry("ran", &["VBD"])
            .with_entry("quick", &["JJ"]);

        assert!(resources.is_base_form("run", PosCategory::Verb));
        assert!(resources.is_base_form("run", PosCategory::Noun));
        assert!(!resources.is_base_form("ran", PosCategory::Verb));
        assert!(resources.is_base_form("quick", PosCategory::Adjective));
        assert!(!resources.is_base_form("quick", PosCategory::Other));
        assert!(!resources.is_base_form("missing", PosCategory::Noun));
    }

    #[test]
    fn test_ensure_resources_available_is_shared() {
        let first = ensure_resources_available().unwrap();
        let second = ensure_resources_available().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_merge_lexicon_skips_comments_and_blanks() {
        let mut resources = Resources::new();
        let merged = resources
            .merge_lexicon("# header\n\ncat NN\n  dog NN VB  \n", "test")
            .unwrap();

        assert_eq!(merged, 2);
        assert_eq!(resources.tags("dog").unwrap(), &["NN", "VB"]);
    }

    #[test]
    fn test_merge_lexicon_rejects_missing_tags() {
        let mut resources = Resources::new();
        let err = resources.merge_lexicon("cat NN\ndog\n", "lex").unwrap_err();

        assert!(matches!(err, StandardizeError::CapabilityUnavailable(_)));
        assert!(err.to_string().contains("lex:2"));
    }

    #[test]
    fn test_merge_lexicon_rejects_lowercase_tags() {
        let mut resources = Resources::new();
        let err = resources.merge_lexicon("cat nn\n", "lex").unwrap_err();
        assert!(err.to_string().contains("invalid tag `nn`"));
    }

    #[test]
    fn test_merge_exceptions_rejects_single_field() {
        let mut resources = Resources::new();
        let err = resources
            .merge_exceptions(PosCategory::Noun, "geese goose\nmice\n", "noun.exc")
            .unwrap_err();
        assert!(err.to_string().contains("noun.exc:2"));
    }

    #[test]
    fn test_load_dir_overlays_bundled() {
        let dir = tempfile::tempdir().unwrap();
        write_resource_dir(dir.path(), "run NN\nzyzzyva NN\n");

        let resources = Resources::load_dir(dir.path()).unwrap();

        assert_eq!(resources.tags("run").unwrap(), &["NN"]);
        assert!(resources.contains("zyzzyva"));
        assert!(resources.contains("the"));
        assert_eq!(resources.exception("cacti", PosCategory::Noun), Some("cactus"));
        assert_eq!(resources.exception("slew", PosCategory::Verb), Some("slay"));
        assert_eq!(resources.exception("ran", PosCategory::Verb), Some("run"));
    }

    #[test]
    fn test_load_dir_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = Resources::load_dir(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, StandardizeError::CapabilityUnavailable(_)));
    }

    #[test]
    fn test_load_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LEXICON_FILE), "cat NN\n").unwrap();

        let err = Resources::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, StandardizeError::CapabilityUnavailable(_)));
        assert!(err.to_string().contains("noun.exc"));
    }
}
