//! Configuration for document validation

use serde::{Deserialize, Serialize};

/// Opt-in checks layered on top of the mandatory rule set
///
/// The mandatory rules always run. The flags here gate checks that callers
/// enable explicitly, e.g. from a `--strict` command line switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationConfig {
    /// Warn about file objects without a checksum and reject malformed ones
    pub check_checksums: bool,
    /// Require field sources to name an existing distribution
    pub check_source_references: bool,
    /// Require `@id` values to be unique across the document
    pub check_unique_ids: bool,
}

impl ValidationConfig {
    /// Create a config with every optional check disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with every optional check enabled
    pub fn strict() -> Self {
        Self {
            check_checksums: true,
            check_source_references: true,
            check_unique_ids: true,
        }
    }

    pub fn with_checksums(mut self, enabled: bool) -> Self {
        self.check_checksums = enabled;
        self
    }

    pub fn with_source_references(mut self, enabled: bool) -> Self {
        self.check_source_references = enabled;
        self
    }

    pub fn with_unique_ids(mut self, enabled: bool) -> Self {
        self.check_unique_ids = enabled;
        self
    }
}
