//! Validation functionality
//!
//! Provides validation logic for:
//! - Mandatory properties and canonical `@type` markers of every entity
//! - Record set keys and field sources
//! - Document-wide field references
//! - Opt-in checksum, source-reference and identifier checks

pub mod config;
pub mod issues;
pub mod node;
mod references;
mod rules;

pub use config::ValidationConfig;
pub use issues::{Issue, IssueSeverity, ValidationIssues};
pub use node::{NodeId, NodeKind, NodeRef, NodeTree};

use crate::model::{LoadResult, load_from_path};
use crate::models::Dataset;
use std::path::Path;
use tracing::{debug, info};

/// Validator for Croissant metadata documents
#[derive(Debug, Clone, Default)]
pub struct MetadataValidator {
    config: ValidationConfig,
}

impl MetadataValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Run every rule over `dataset` and collect the resulting issues.
    ///
    /// Never fails: callers decide what to do based on
    /// [`ValidationIssues::has_errors`].
    pub fn validate(&self, dataset: &Dataset) -> ValidationIssues {
        debug!("Validating dataset '{}'", dataset.name);

        let tree = NodeTree::build(dataset);
        let mut issues = ValidationIssues::new();
        rules::validate_node(tree.root(), &self.config, &mut issues);
        references::validate_references(&tree, dataset, &self.config, &mut issues);

        info!(
            "Validated dataset '{}': {} node(s), {} error(s), {} warning(s)",
            dataset.name,
            tree.len(),
            issues.error_count(),
            issues.warning_count()
        );
        issues
    }
}

/// Validate with the default configuration
pub fn validate_metadata(dataset: &Dataset) -> ValidationIssues {
    MetadataValidator::new().validate(dataset)
}

pub fn validate_metadata_with_config(
    dataset: &Dataset,
    config: &ValidationConfig,
) -> ValidationIssues {
    MetadataValidator::with_config(config.clone()).validate(dataset)
}

/// Load the document at `path` and validate it with `config`
///
/// Loading failures (unreadable file, malformed JSON, bad type union or key
/// shapes) are returned as errors rather than issues.
pub fn validate_file(path: &Path, config: &ValidationConfig) -> LoadResult<ValidationIssues> {
    let dataset = load_from_path(path)?;
    Ok(validate_metadata_with_config(&dataset, config))
}
