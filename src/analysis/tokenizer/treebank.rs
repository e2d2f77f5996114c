//! Penn-Treebank-style word tokenizer.
//!
//! Splits text on whitespace, then separates punctuation and clitics the way
//! the Penn Treebank does:
//!
//! - leading brackets/quotes and trailing punctuation become their own tokens
//! - a final period is split off unless the word is an abbreviation ("U.S.",
//!   "Dr.", or an initial such as "J." before another word)
//! - a leading or trailing ellipsis is its own token ("...and..." → "..." "and" "...")
//! - `n't`, `'s`, `'m`, `'d`, `'ll`, `'re`, `'ve` are split from their host
//!   ("don't" → "do" "n't", "can't" → "ca" "n't")
//! - fused forms are split ("cannot" → "can" "not", "gonna" → "gon" "na")
//! - internal periods and hyphens are kept ("3.14", "well-known"), `--` is not
//!
//! # Examples
//!
//! ```
//! use standardize::analysis::tokenizer::Tokenizer;
//! use standardize::analysis::tokenizer::treebank::TreebankTokenizer;
//!
//! let tokenizer = TreebankTokenizer::new().unwrap();
//! let texts: Vec<String> = tokenizer
//!     .tokenize("They'll visit the U.S. (again).")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(texts, ["They", "'ll", "visit", "the", "U.S.", "(", "again", ")", "."]);
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, StandardizeError};

const CLITIC_PATTERN: &str = r"(?i)^(.+?)(n['’]t|['’](?:s|m|d|ll|re|ve))$";

const LEADING_PUNCTUATION: &[char] = &[
    '"', '\'', '`', '(', '[', '{', '<', '“', '‘', '«', '¿', '¡', '$', '#',
];

const TRAILING_PUNCTUATION: &[char] = &[
    ',', ';', ':', '!', '?', ')', ']', '}', '>', '"', '\'', '”', '’', '»', '%',
];

const CLITICS: &[&str] = &["n't", "'s", "'m", "'d", "'ll", "'re", "'ve"];

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "inc", "ltd", "co", "corp",
    "fig", "approx",
];

/// Fused forms and the byte index they split at.
const SPLIT_WORDS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("wanna", 3),
    ("gimme", 3),
    ("lemme", 3),
];

/// A tokenizer following Penn Treebank conventions.
#[derive(Clone, Debug)]
pub struct TreebankTokenizer {
    /// Whitespace-delimited chunks
    chunk: Arc<Regex>,
    /// Host word followed by a clitic
    clitic: Arc<Regex>,
}

impl TreebankTokenizer {
    /// Create a new treebank tokenizer.
    pub fn new() -> Result<Self> {
        Ok(TreebankTokenizer {
            chunk: Arc::new(compile(r"\S+")?),
            clitic: Arc::new(compile(CLITIC_PATTERN)?),
        })
    }

    /// Split one whitespace-delimited chunk into token spans. `more_follows`
    /// is set when another chunk comes after this one.
    fn split_chunk(
        &self,
        chunk: &str,
        base: usize,
        more_follows: bool,
        spans: &mut Vec<(usize, usize)>,
    ) {
        if is_clitic(chunk) {
            spans.push((base, base + chunk.len()));
            return;
        }

        if !chunk.chars().any(char::is_alphanumeric) {
            split_punctuation(chunk, base, spans);
            return;
        }

        let mut start = 0;
        let mut end = chunk.len();

        loop {
            let core = &chunk[start..end];
            if core.len() > 3 && core.starts_with("...") {
                spans.push((base + start, base + start + 3));
                start += 3;
                continue;
            }

            let Some(c) = core.chars().next() else {
                break;
            };
            if !LEADING_PUNCTUATION.contains(&c) {
                break;
            }
            spans.push((base + start, base + start + c.len_utf8()));
            start += c.len_utf8();
        }

        // Collected right to left, emitted after the core.
        let mut trailing = Vec::new();
        loop {
            let core = &chunk[start..end];
            if core.len() > 3 && core.ends_with("...") {
                trailing.push((base + end - 3, base + end));
                end -= 3;
                continue;
            }

            let Some(c) = core.chars().next_back() else {
                break;
            };
            let split = TRAILING_PUNCTUATION.contains(&c)
                || (c == '.' && !is_abbreviation(&core[..core.len() - 1], more_follows));
            if !split {
                break;
            }
            trailing.push((base + end - c.len_utf8(), base + end));
            end -= c.len_utf8();
        }

        let mut offset = start;
        for (i, part) in chunk[start..end].split("--").enumerate() {
            if i > 0 {
                spans.push((base + offset, base + offset + 2));
                offset += 2;
            }
            if !part.is_empty() {
                self.split_word(part, base + offset, spans);
            }
            offset += part.len();
        }

        spans.extend(trailing.into_iter().rev());
    }

    /// Split fused forms and clitics off a punctuation-free word.
    fn split_word(&self, word: &str, base: usize, spans: &mut Vec<(usize, usize)>) {
        if let Some(&(_, at)) = SPLIT_WORDS
            .iter()
            .find(|(fused, _)| word.eq_ignore_ascii_case(fused))
        {
            spans.push((base, base + at));
            spans.push((base + at, base + word.len()));
            return;
        }

        if let Some(caps) = self.clitic.captures(word)
            && let (Some(host), Some(clitic)) = (caps.get(1), caps.get(2))
        {
            spans.push((base + host.start(), base + host.end()));
            spans.push((base + clitic.start(), base + clitic.end()));
            return;
        }

        spans.push((base, base + word.len()));
    }
}

impl Default for TreebankTokenizer {
    fn default() -> Self {
        Self::new().expect("Treebank patterns should be valid")
    }
}

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut spans = Vec::new();
        let mut chunks = self.chunk.find_iter(text).peekable();
        while let Some(mat) = chunks.next() {
            let more_follows = chunks.peek().is_some();
            self.split_chunk(mat.as_str(), mat.start(), more_follows, &mut spans);
        }

        let tokens: Vec<Token> = spans
            .into_iter()
            .enumerate()
            .map(|(position, (start, end))| Token::with_offsets(&text[start..end], position, start, end))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "treebank"
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| StandardizeError::analysis(format!("Invalid regex pattern: {e}")))
}

fn is_clitic(chunk: &str) -> bool {
    let normalized = chunk.to_lowercase().replace('’', "'");
    CLITICS.contains(&normalized.as_str())
}

/// Whether `body` keeps the period that follows it. Listed abbreviations and
/// dotted initials ("U.S") always do. A lone capital ("J") does only when
/// another word follows, so a sentence ending in "a." or "É." still loses
/// its period.
fn is_abbreviation(body: &str, more_follows: bool) -> bool {
    if body.is_empty() {
        return false;
    }
    if ABBREVIATIONS.contains(&body.to_lowercase().as_str()) {
        return true;
    }

    let parts: Vec<&str> = body.split('.').collect();
    let initials = parts
        .iter()
        .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic));
    if !initials {
        return false;
    }
    parts.len() > 1 || (more_follows && body.chars().all(char::is_uppercase))
}

/// Runs of `.` or `-` stay together, any other symbol stands alone.
fn split_punctuation(chunk: &str, base: usize, spans: &mut Vec<(usize, usize)>) {
    let mut chars = chunk.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let mut end = i + c.len_utf8();
        if c == '.' || c == '-' {
            while let Some(&(j, next)) = chars.peek() {
                if next != c {
                    break;
                }
                end = j + next.len_utf8();
                chars.next();
            }
        }
        spans.push((base + i, base + end));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        TreebankTokenizer::new()
            .unwrap()
            .tokenize(text)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_contractions() {
        assert_eq!(texts("don't"), ["do", "n't"]);
        assert_eq!(texts("can't"), ["ca", "n't"]);
        assert_eq!(texts("won't"), ["wo", "n't"]);
        assert_eq!(texts("They'll"), ["They", "'ll"]);
        assert_eq!(texts("we're"), ["we", "'re"]);
        assert_eq!(texts("John's"), ["John", "'s"]);
        assert_eq!(texts("don’t"), ["do", "n’t"]);
    }

    #[test]
    fn test_bare_clitic_is_kept() {
        assert_eq!(texts("'s"), ["'s"]);
        assert_eq!(texts("n't"), ["n't"]);
    }

    #[test]
    fn test_fused_forms() {
        assert_eq!(texts("cannot"), ["can", "not"]);
        assert_eq!(texts("Gonna"), ["Gon", "na"]);
        assert_eq!(texts("wanna"), ["wan", "na"]);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(texts("Hello, world!"), ["Hello", ",", "world", "!"]);
        assert_eq!(texts("(quoted)"), ["(", "quoted", ")"]);
        assert_eq!(texts("\"yes\""), ["\"", "yes", "\""]);
        assert_eq!(texts("dogs'"), ["dogs", "'"]);
        assert_eq!(texts("$5"), ["$", "5"]);
        assert_eq!(texts("?!"), ["?", "!"]);
    }

    #[test]
    fn test_periods() {
        assert_eq!(texts("end."), ["end", "."]);
        assert_eq!(texts("U.S."), ["U.S."]);
        assert_eq!(texts("Dr."), ["Dr."]);
        assert_eq!(texts("3.14"), ["3.14"]);
        assert_eq!(texts("3.14."), ["3.14", "."]);
        assert_eq!(texts("wait..."), ["wait", "..."]);
        assert_eq!(texts("..."), ["..."]);
    }

    #[test]
    fn test_single_letter_before_period() {
        assert_eq!(texts("a."), ["a", "."]);
        assert_eq!(texts("É."), ["É", "."]);
        assert_eq!(texts("I saw a."), ["I", "saw", "a", "."]);
        assert_eq!(texts("J. Smith"), ["J.", "Smith"]);
        assert_eq!(texts("x. y"), ["x", ".", "y"]);
        assert_eq!(texts("the U.S."), ["the", "U.S."]);
    }

    #[test]
    fn test_leading_ellipsis() {
        assert_eq!(texts("...a..."), ["...", "a", "..."]);
        assert_eq!(texts("...and"), ["...", "and"]);
        assert_eq!(texts("(...so"), ["(", "...", "so"]);
    }

    #[test]
    fn test_hyphens() {
        assert_eq!(texts("well-known"), ["well-known"]);
        assert_eq!(texts("yes--no"), ["yes", "--", "no"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(texts("").is_empty());
        assert!(texts("  \t\n ").is_empty());
    }

    #[test]
    fn test_offsets_and_positions() {
        let tokenizer = TreebankTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("Hello, world!").unwrap().collect();

        let spans: Vec<(usize, usize, usize)> = tokens
            .iter()
            .map(|t| (t.position, t.start_offset, t.end_offset))
            .collect();
        assert_eq!(spans, [(0, 0, 5), (1, 5, 6), (2, 7, 12), (3, 12, 13)]);
    }

    #[test]
    fn test_offsets_with_multibyte_text() {
        let tokenizer = TreebankTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("«café»").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "café");
        assert_eq!(&"«café»"[tokens[1].start_offset..tokens[1].end_offset], "café");
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(TreebankTokenizer::new().unwrap().name(), "treebank");
    }
}
