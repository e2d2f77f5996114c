//! Command line argument parsing for the standardize CLI using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::normalizer::NormalizerConfig;

/// standardize - reduce a JSON array of words to the lemmas of its nouns,
/// verbs and adjectives
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "standardize")]
#[command(about = "Normalize a JSON array of words read from stdin into lemmas")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StandardizeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print a {lemma: count} object instead of the lemma array
    #[arg(long)]
    pub counts: bool,

    /// Directory of resource tables overlaying the bundled ones
    #[arg(long, value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Leave words outside the lexicon unlemmatized instead of guessing
    #[arg(long)]
    pub strict: bool,
}

impl StandardizeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Normalizer configuration selected by these arguments.
    pub fn config(&self) -> NormalizerConfig {
        NormalizerConfig {
            resource_dir: self.resources.clone(),
            strict: self.strict,
        }
    }
}
