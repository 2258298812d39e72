//! Errors reported by the command line.

use gdoc_babel::{ExportError, SourceError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing argument '{0}'")]
    MissingArgument(String),
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Error reading '{path}': {source}")]
    Source { path: PathBuf, source: SourceError },
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
    #[error("Error writing '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error writing to stdout: {0}")]
    Stdout(std::io::Error),
    #[error("Error encoding message manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
