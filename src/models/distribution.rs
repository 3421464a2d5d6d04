//! Distribution model (FileObject / FileSet)

use super::vocab;
use serde::{Deserialize, Serialize};

/// One physical file, or a pattern-matched set of files, backing a dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(
        rename = "@type",
        default,
        deserialize_with = "vocab::deserialize_marker",
        serialize_with = "vocab::serialize_marker"
    )]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    /// Glob selecting the members of a file set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes: Option<String>,
}

impl Distribution {
    /// Create a file object; the id defaults to the name
    pub fn file_object(
        name: impl Into<String>,
        content_url: impl Into<String>,
        encoding_format: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            kind: vocab::FILE_OBJECT.to_string(),
            name,
            description: None,
            content_url: Some(content_url.into()),
            encoding_format: Some(encoding_format.into()),
            sha256: None,
            md5: None,
            includes: None,
        }
    }

    /// Create a file set matching `includes`
    pub fn file_set(
        name: impl Into<String>,
        content_url: impl Into<String>,
        encoding_format: impl Into<String>,
        includes: impl Into<String>,
    ) -> Self {
        let mut dist = Self::file_object(name, content_url, encoding_format);
        dist.kind = vocab::FILE_SET.to_string();
        dist.includes = Some(includes.into());
        dist
    }

    pub fn with_sha256(mut self, sha256: impl Into<String>) -> Self {
        self.sha256 = Some(sha256.into());
        self
    }

    pub fn is_file_set(&self) -> bool {
        self.kind == vocab::FILE_SET
    }

    /// At least one checksum is declared
    pub fn has_checksum(&self) -> bool {
        [&self.sha256, &self.md5]
            .iter()
            .any(|c| c.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_file_set() {
        let dist: Distribution = serde_json::from_value(json!({
            "@type": "cr:FileSet",
            "@id": "images",
            "name": "images",
            "containedIn": {"@id": "archive.zip"},
            "encodingFormat": "image/jpeg",
            "includes": "*.jpg"
        }))
        .unwrap();

        assert!(dist.is_file_set());
        assert_eq!(dist.includes.as_deref(), Some("*.jpg"));
        assert!(dist.content_url.is_none());
        assert!(!dist.has_checksum());
    }

    #[test]
    fn test_builders() {
        let dist = Distribution::file_object("data.csv", "https://example.org/data.csv", "text/csv")
            .with_sha256("abc");
        assert_eq!(dist.kind, vocab::FILE_OBJECT);
        assert_eq!(dist.id, "data.csv");
        assert!(dist.has_checksum());

        let set = Distribution::file_set("imgs", "images/", "image/png", "*.png");
        assert!(set.is_file_set());
    }
}
