//! Command implementations for the standardize CLI.

use std::io::{self, Read, Write};

use log::info;

use crate::cli::args::StandardizeArgs;
use crate::cli::output::{NormalizationOutput, render_json};
use crate::error::{Result, StandardizeError};
use crate::normalizer::{Normalizer, term_counts};

/// Execute the CLI: read stdin, normalize, print one JSON document.
///
/// The normalizer is built before stdin is read, so missing resources are
/// reported without consuming input. Nothing is written to stdout unless
/// every step succeeded.
pub fn execute_command(args: StandardizeArgs) -> Result<()> {
    let normalizer = Normalizer::new(&args.config())?;

    let input = read_input(io::stdin().lock())?;

    let rendered = run(&normalizer, &args, &input)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;

    Ok(())
}

/// Normalize one input document and render the output for `args`.
pub fn run(normalizer: &Normalizer, args: &StandardizeArgs, input: &str) -> Result<String> {
    let raw = parse_input(input)?;
    info!("Read {} elements from stdin", raw.len());

    let lemmas = normalizer.normalize(&raw)?;
    info!("Produced {} lemmas", lemmas.len());

    let output = if args.counts {
        NormalizationOutput::Counts(term_counts(&lemmas))
    } else {
        NormalizationOutput::Lemmas(lemmas)
    };

    render_json(&output, args)
}

/// Read the whole input document. Bytes that are not UTF-8 are an input
/// format error, not an I/O failure.
pub fn read_input<R: Read>(mut reader: R) -> Result<String> {
    let mut input = String::new();
    reader.read_to_string(&mut input).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => {
            StandardizeError::input_format(format!("input is not valid UTF-8: {e}"))
        }
        _ => StandardizeError::Io(e),
    })?;
    Ok(input)
}

/// Decode the input document: a JSON array of strings.
pub fn parse_input(input: &str) -> Result<Vec<String>> {
    serde_json::from_str(input).map_err(|e| {
        StandardizeError::input_format(format!("expected a JSON array of strings: {e}"))
    })
}
