//! Error types for the CLI

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// Bad arguments; clap renders the usage message
    #[error(transparent)]
    #[diagnostic(code(tally::cli::usage))]
    Usage(#[from] clap::Error),

    #[error("failed to write output: {0}")]
    #[diagnostic(code(tally::cli::io))]
    Io(#[from] std::io::Error),
}
