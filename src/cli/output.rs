//! Output formatting for CLI

use serde_json::json;

use super::error::CliError;
use crate::matching::MatchResult;
use crate::validation::ValidationIssues;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format validation issues
pub fn format_validation(
    issues: &ValidationIssues,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text if issues.is_empty() => Ok("Validation successful".to_string()),
        OutputFormat::Text => Ok(issues.report()),
        OutputFormat::Json => {
            let value = json!({
                "valid": !issues.has_errors(),
                "errors": issues.errors(),
                "warnings": issues.warnings(),
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}

/// Format a schema match result
pub fn format_match(result: &MatchResult, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(result.summary()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}
