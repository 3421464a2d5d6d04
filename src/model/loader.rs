//! Document loading
//!
//! Decodes the compacted JSON-LD form of a Croissant document. Only the
//! `sc:` and `cr:` prefixes of `@type` markers are expanded; the `@context`
//! block itself is not interpreted.

use super::error::{LoadError, LoadResult};
use crate::models::Dataset;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Decode a document from JSON text
pub fn load_from_str(content: &str) -> LoadResult<Dataset> {
    let value: Value = serde_json::from_str(content).inspect_err(|e| {
        warn!("Document is not valid JSON: {}", e);
    })?;
    load_from_value(value)
}

/// Decode a document from an already-parsed JSON value
pub fn load_from_value(value: Value) -> LoadResult<Dataset> {
    if !value.is_object() {
        return Err(LoadError::InvalidDocument(format!(
            "expected a JSON object at the root, found {}",
            json_kind(&value)
        )));
    }

    let dataset: Dataset = serde_json::from_value(value).inspect_err(|e| {
        warn!("Failed to decode document: {}", e);
    })?;

    debug!(
        "Loaded dataset '{}' with {} distribution(s) and {} record set(s)",
        dataset.name,
        dataset.distribution.len(),
        dataset.record_sets.len()
    );
    Ok(dataset)
}

/// Read and decode a document file
pub fn load_from_path(path: &Path) -> LoadResult<Dataset> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    load_from_str(&content)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
