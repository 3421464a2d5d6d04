//! Document saving
//!
//! Encodes a document back to its compacted JSON form: markers are written
//! with the `sc:`/`cr:` prefixes, singleton type unions and keys collapse to
//! bare values.

use super::error::{LoadError, LoadResult};
use crate::models::{Dataset, vocab};
use serde_json::{Value, json};
use std::path::Path;
use tracing::info;

/// Encode a document as a JSON value, including the Croissant `@context`
pub fn to_json_value(dataset: &Dataset) -> LoadResult<Value> {
    let mut value = serde_json::to_value(dataset)?;
    if let Value::Object(map) = &mut value {
        map.insert(
            "@context".to_string(),
            json!({
                "@language": "en",
                "@vocab": vocab::SCHEMA_ORG,
                "sc": vocab::SCHEMA_ORG,
                "cr": vocab::CROISSANT,
                "dct": "http://purl.org/dc/terms/",
            }),
        );
    }
    Ok(value)
}

/// Encode a document as pretty-printed JSON text
pub fn to_json_string(dataset: &Dataset) -> LoadResult<String> {
    let value = to_json_value(dataset)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Write a document to `path`
pub fn save_to_path(dataset: &Dataset, path: &Path) -> LoadResult<()> {
    let content = to_json_string(dataset)?;
    std::fs::write(path, content).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved dataset '{}' to {}", dataset.name, path.display());
    Ok(())
}
