//! Validate command implementation

use std::path::PathBuf;

use tracing::info;

use crate::cli::config::resolve_config;
use crate::cli::error::CliError;
use crate::cli::output::{OutputFormat, format_validation};
use crate::validation::validate_file;

/// Arguments for the `validate` command
pub struct ValidateArgs {
    /// Croissant JSON-LD document
    pub file: PathBuf,
    /// Enable every opt-in check
    pub strict: bool,
    /// TOML file with a validation config
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Handle the `validate` command
///
/// Returns the process exit code: 1 when the document has errors.
pub fn handle_validate(args: &ValidateArgs) -> Result<u8, CliError> {
    let config = resolve_config(args.strict, args.config.as_deref())?;
    info!("Validating {}", args.file.display());

    let issues = validate_file(&args.file, &config)?;
    println!("{}", format_validation(&issues, args.format)?);

    Ok(if issues.has_errors() { 1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_doc(value: serde_json::Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", value).unwrap();
        file
    }

    fn args(file: &tempfile::NamedTempFile) -> ValidateArgs {
        ValidateArgs {
            file: file.path().to_path_buf(),
            strict: false,
            config: None,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_warnings_alone_exit_zero() {
        let file = write_doc(json!({"@type": "sc:Dataset", "name": "empty"}));
        assert_eq!(handle_validate(&args(&file)).unwrap(), 0);
    }

    #[test]
    fn test_errors_exit_one() {
        let file = write_doc(json!({"@type": "sc:Dataset"}));
        assert_eq!(handle_validate(&args(&file)).unwrap(), 1);
    }

    #[test]
    fn test_unreadable_document_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut args = args(&file);
        args.file = PathBuf::from("/nonexistent/metadata.json");
        assert!(matches!(
            handle_validate(&args),
            Err(CliError::LoadError(_))
        ));
    }
}
