//! Extraction error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning an uploaded file into text.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The declared content type is neither plain text nor PDF.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PDF could not be parsed or a page could not be extracted.
    #[error("failed to extract PDF text: {0}")]
    Pdf(String),

    /// A blocking extraction task panicked or was cancelled.
    #[error("extraction task failed: {0}")]
    Task(String),
}

impl ExtractError {
    /// Returns `true` if the input was rejected before any extraction began.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ExtractError::UnsupportedType(_))
    }
}
