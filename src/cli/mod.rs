//! CLI module for the croissant-cli binary

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::CliError;
pub use output::OutputFormat;
