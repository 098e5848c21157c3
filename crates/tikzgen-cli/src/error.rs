//! CLI error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use tikzgen::TikzError;

/// Errors surfaced by the CLI.
///
/// The `Document` variant keeps the input source text alongside the TOML
/// error so the error adapter can render a source snippet with the
/// offending span highlighted.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Document {
        err: Box<toml::de::Error>,
        src: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tikz(#[from] TikzError),
}

impl CliError {
    /// Create a new `Document` error with the associated source text.
    pub fn new_document_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Document {
            err: Box::new(err),
            src: src.into(),
        }
    }
}

/// Configuration-related errors for the CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}
