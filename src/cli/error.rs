//! CLI error types

use std::path::PathBuf;

use crate::model::LoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Invalid config file {0}: {1}")]
    ConfigError(PathBuf, String),

    #[error(transparent)]
    LoadError(#[from] LoadError),

    #[error("Failed to render output: {0}")]
    OutputError(#[from] serde_json::Error),
}
