//! Compare command implementation

use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::cli::output::{OutputFormat, format_match};
use crate::matching::match_files;

/// Arguments for the `compare` command
pub struct CompareArgs {
    /// Document the candidate must stay compatible with
    pub reference: PathBuf,
    pub candidate: PathBuf,
    pub format: OutputFormat,
}

/// Handle the `compare` command
///
/// Returns the process exit code: 1 when the candidate does not match.
pub fn handle_compare(args: &CompareArgs) -> Result<u8, CliError> {
    let result = match_files(&args.reference, &args.candidate)?;
    println!("{}", format_match(&result, args.format)?);
    Ok(if result.is_match { 0 } else { 1 })
}
