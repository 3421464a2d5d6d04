//! Validation config file loading
//!
//! The file is TOML with the same keys as [`ValidationConfig`]:
//!
//! ```toml
//! checkChecksums = true
//! checkSourceReferences = false
//! checkUniqueIds = true
//! ```

use std::path::Path;

use tracing::debug;

use super::error::CliError;
use crate::validation::ValidationConfig;

/// Read a [`ValidationConfig`] from a TOML file; omitted keys stay disabled
pub fn load_config(path: &Path) -> Result<ValidationConfig, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
    let config = parse_config(&content)
        .map_err(|e| CliError::ConfigError(path.to_path_buf(), e.to_string()))?;
    debug!("Loaded validation config from {}: {:?}", path.display(), config);
    Ok(config)
}

fn parse_config(content: &str) -> Result<ValidationConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Resolve the effective config: `--strict` wins over a config file
pub fn resolve_config(strict: bool, path: Option<&Path>) -> Result<ValidationConfig, CliError> {
    if strict {
        return Ok(ValidationConfig::strict());
    }
    match path {
        Some(path) => load_config(path),
        None => Ok(ValidationConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config("checkUniqueIds = true\n").unwrap();
        assert_eq!(config, ValidationConfig::new().with_unique_ids(true));
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        assert!(parse_config("checkChecksums = \"yes\"\n").is_err());
    }

    #[test]
    fn test_strict_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "checkChecksums = false").unwrap();

        let config = resolve_config(true, Some(file.path())).unwrap();
        assert_eq!(config, ValidationConfig::strict());

        let config = resolve_config(false, Some(file.path())).unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/croissant.toml")).unwrap_err();
        assert!(matches!(err, CliError::FileReadError(..)));
    }
}
