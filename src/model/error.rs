//! Error types for document loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving a document
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to read or write a document file
    #[error("Failed to access document file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON, or an entity has an unexpected shape
    #[error("Failed to decode document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document decoded but is not a Croissant description at all
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Result type for loading operations
pub type LoadResult<T> = Result<T, LoadError>;
