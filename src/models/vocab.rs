//! Croissant vocabulary: type markers, property IRIs and compact IRI handling
//!
//! Only the two prefixes of the Croissant context (`sc:` and `cr:`) are
//! expanded. Everything else is kept as written so that validation messages
//! can cite the literal value found in the document.

use serde::{Deserialize, Deserializer, Serializer};

/// schema.org namespace
pub const SCHEMA_ORG: &str = "https://schema.org/";
/// Croissant namespace
pub const CROISSANT: &str = "http://mlcommons.org/croissant/";

/// Marker for the dataset root
pub const DATASET: &str = "https://schema.org/Dataset";
/// Marker for a single-file distribution
pub const FILE_OBJECT: &str = "http://mlcommons.org/croissant/FileObject";
/// Marker for a pattern-matched distribution
pub const FILE_SET: &str = "http://mlcommons.org/croissant/FileSet";
/// Marker for record sets
pub const RECORD_SET: &str = "http://mlcommons.org/croissant/RecordSet";
/// Marker for fields
pub const FIELD: &str = "http://mlcommons.org/croissant/Field";

// Property IRIs cited in validation messages
pub const PROP_NAME: &str = "https://schema.org/name";
pub const PROP_CONFORMS_TO: &str = "http://purl.org/dc/terms/conformsTo";
pub const PROP_CONTENT_URL: &str = "https://schema.org/contentUrl";
pub const PROP_ENCODING_FORMAT: &str = "https://schema.org/encodingFormat";
pub const PROP_SHA256: &str = "https://schema.org/sha256";
pub const PROP_DATA_TYPE: &str = "http://mlcommons.org/croissant/dataType";
pub const PROP_SOURCE: &str = "http://mlcommons.org/croissant/source";

/// Data type tokens in their compact form
pub mod data_types {
    pub const TEXT: &str = "sc:Text";
    pub const BOOLEAN: &str = "sc:Boolean";
    pub const INTEGER: &str = "sc:Integer";
    pub const NUMBER: &str = "sc:Number";
    pub const FLOAT: &str = "sc:Float";
    pub const DATE: &str = "sc:Date";
    pub const DATE_TIME: &str = "sc:DateTime";
    pub const URL: &str = "sc:URL";
    pub const ENUMERATION: &str = "sc:Enumeration";
    pub const LABEL: &str = "cr:Label";
    pub const BOUNDING_BOX: &str = "cr:BoundingBox";
    pub const SPLIT: &str = "cr:Split";
}

/// Expand a compact IRI using the Croissant context prefixes.
///
/// ```
/// use croissant_sdk::models::vocab::{expand_iri, RECORD_SET};
///
/// assert_eq!(expand_iri("cr:RecordSet"), RECORD_SET);
/// assert_eq!(expand_iri("Custom"), "Custom");
/// ```
pub fn expand_iri(value: &str) -> String {
    if let Some(rest) = value.strip_prefix("sc:") {
        format!("{}{}", SCHEMA_ORG, rest)
    } else if let Some(rest) = value.strip_prefix("cr:") {
        format!("{}{}", CROISSANT, rest)
    } else {
        value.to_string()
    }
}

/// Inverse of [`expand_iri`], used when writing documents back out.
pub fn compact_iri(value: &str) -> String {
    if let Some(rest) = value.strip_prefix(SCHEMA_ORG) {
        format!("sc:{}", rest)
    } else if let Some(rest) = value.strip_prefix(CROISSANT) {
        format!("cr:{}", rest)
    } else {
        value.to_string()
    }
}

pub(crate) fn deserialize_marker<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(expand_iri(&raw))
}

pub(crate) fn serialize_marker<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&compact_iri(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_known_prefixes() {
        assert_eq!(expand_iri("sc:Dataset"), DATASET);
        assert_eq!(expand_iri("cr:FileObject"), FILE_OBJECT);
        assert_eq!(expand_iri("cr:FileSet"), FILE_SET);
        assert_eq!(expand_iri(FIELD), FIELD);
    }

    #[test]
    fn test_unknown_prefix_kept_literally() {
        assert_eq!(expand_iri("dct:conformsTo"), "dct:conformsTo");
        assert_eq!(expand_iri(""), "");
    }

    #[test]
    fn test_compact_roundtrip() {
        for marker in [DATASET, FILE_OBJECT, FILE_SET, RECORD_SET, FIELD] {
            assert_eq!(expand_iri(&compact_iri(marker)), marker);
        }
        assert_eq!(compact_iri("https://example.org/Thing"), "https://example.org/Thing");
    }
}
