//! Dataset model, the root of a Croissant document

use super::distribution::Distribution;
use super::field::Field;
use super::record_set::RecordSet;
use super::vocab;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root entity of a Croissant document
///
/// # Example
///
/// ```rust
/// use croissant_sdk::models::{Dataset, Distribution};
///
/// let dataset = Dataset::new("movies")
///     .with_distribution(Distribution::file_object("movies.csv", "movies.csv", "text/csv"));
/// assert_eq!(dataset.distribution.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(
        rename = "@type",
        default,
        deserialize_with = "vocab::deserialize_marker",
        serialize_with = "vocab::serialize_marker"
    )]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    /// Free-form descriptive properties, kept in whatever shape the document uses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    /// Croissant specification version identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conforms_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub distribution: Vec<Distribution>,
    #[serde(rename = "recordSet", default, skip_serializing_if = "Vec::is_empty")]
    pub record_sets: Vec<RecordSet>,
}

impl Dataset {
    /// Create an empty dataset with the canonical marker
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: vocab::DATASET.to_string(),
            name: name.into(),
            description: None,
            conforms_to: None,
            url: None,
            license: None,
            version: None,
            distribution: Vec::new(),
            record_sets: Vec::new(),
        }
    }

    pub fn with_conforms_to(mut self, conforms_to: impl Into<String>) -> Self {
        self.conforms_to = Some(conforms_to.into());
        self
    }

    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution.push(distribution);
        self
    }

    pub fn with_record_set(mut self, record_set: RecordSet) -> Self {
        self.record_sets.push(record_set);
        self
    }

    /// All fields of all record sets, sub-fields included, depth first
    pub fn all_fields(&self) -> Vec<&Field> {
        fn collect<'a>(fields: &'a [Field], out: &mut Vec<&'a Field>) {
            for field in fields {
                out.push(field);
                collect(&field.sub_fields, out);
            }
        }

        let mut out = Vec::new();
        for record_set in &self.record_sets {
            collect(&record_set.fields, &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TypeUnion;

    #[test]
    fn test_all_fields_includes_sub_fields() {
        let bbox = Field::new("bbox", TypeUnion::single(vocab::data_types::BOUNDING_BOX))
            .with_sub_field(Field::new("x", TypeUnion::single(vocab::data_types::FLOAT)))
            .with_sub_field(Field::new("y", TypeUnion::single(vocab::data_types::FLOAT)));
        let dataset = Dataset::new("boxes")
            .with_record_set(RecordSet::new("annotations", vec![bbox]))
            .with_record_set(RecordSet::new(
                "images",
                vec![Field::new("url", TypeUnion::single(vocab::data_types::URL))],
            ));

        let names: Vec<&str> = dataset.all_fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["bbox", "x", "y", "url"]);
    }
}
