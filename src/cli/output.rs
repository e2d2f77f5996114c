//! Output formatting for CLI results.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cli::args::StandardizeArgs;
use crate::error::Result;

/// What one run prints to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NormalizationOutput {
    /// Lemmas in input order
    Lemmas(Vec<String>),
    /// Occurrences per lemma, keyed in lexical order
    Counts(BTreeMap<String, usize>),
}

/// Render a result as a single JSON document.
pub fn render_json<T: Serialize>(result: &T, args: &StandardizeArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    Ok(json)
}
