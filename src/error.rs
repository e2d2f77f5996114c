//! Error types for the standardize library.
//!
//! All failures are represented by the [`StandardizeError`] enum. Every error
//! is fatal to a normalization run: there is no partial output.
//!
//! # Examples
//!
//! ```
//! use standardize::error::{Result, StandardizeError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StandardizeError::input_format("expected a JSON array of strings"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for standardize operations.
#[derive(Error, Debug)]
pub enum StandardizeError {
    /// I/O errors (reading stdin, writing stdout, resource files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input is not valid JSON, or not an array of strings
    #[error("Input format error: {0}")]
    InputFormat(String),

    /// A tokenizer, tagger or lemmatizer resource is missing or unusable
    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(String),

    /// Analysis-related errors (tokenization, tagging, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with StandardizeError.
pub type Result<T> = std::result::Result<T, StandardizeError>;

impl StandardizeError {
    /// Create a new input format error.
    pub fn input_format<S: Into<String>>(msg: S) -> Self {
        StandardizeError::InputFormat(msg.into())
    }

    /// Create a new capability-unavailable error.
    pub fn capability_unavailable<S: Into<String>>(msg: S) -> Self {
        StandardizeError::CapabilityUnavailable(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        StandardizeError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StandardizeError::Other(msg.into())
    }
}
