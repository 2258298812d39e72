//! Error types for export runs

use thiserror::Error;

/// Errors that abort an export run.
///
/// A failed run never returns partial markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// An inline image whose content type is not PNG, GIF or JPEG
    #[error("Unsupported image type: {content_type}")]
    UnsupportedAssetType { content_type: String },
}

/// Errors raised while loading a source document
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source document: {0}")]
    Json(#[from] serde_json::Error),
}
