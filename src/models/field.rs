//! Field model

use super::data_type::TypeUnion;
use super::vocab;
use serde::{Deserialize, Serialize};

/// A `{"@id": ...}` pointer to another node of the document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdRef {
    #[serde(rename = "@id")]
    pub id: String,
}

impl IdRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Foreign-key style link to a field, written `{"field": {"@id": ...}}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldReference {
    pub field: IdRef,
}

impl FieldReference {
    pub fn new(field_id: impl Into<String>) -> Self {
        Self {
            field: IdRef::new(field_id),
        }
    }

    /// Identifier of the referenced field
    pub fn target(&self) -> &str {
        &self.field.id
    }
}

/// How a value is pulled out of the bound distribution
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Extract {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_property: Option<String>,
}

impl Extract {
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            column: Some(name.into()),
            ..Self::default()
        }
    }

    /// An extraction rule counts only when it names something to extract
    pub fn is_present(&self) -> bool {
        [&self.column, &self.json_path, &self.file_property]
            .iter()
            .any(|v| v.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

/// Binding of a field to a distribution
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_object: Option<IdRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_set: Option<IdRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<Extract>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Source {
    /// Source reading a column of a file object
    pub fn column(file_object: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            file_object: Some(IdRef::new(file_object)),
            extract: Some(Extract::column(column)),
            ..Self::default()
        }
    }

    /// Identifier of the bound distribution, file object first
    pub fn distribution_id(&self) -> Option<&str> {
        self.file_object
            .as_ref()
            .or(self.file_set.as_ref())
            .map(|r| r.id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Bound to a distribution and told either how to extract or how to parse
    pub fn is_valid(&self) -> bool {
        let has_extract = self.extract.as_ref().is_some_and(Extract::is_present);
        let has_format = self.format.as_deref().is_some_and(|f| !f.is_empty());
        self.distribution_id().is_some() && (has_extract || has_format)
    }
}

/// A column of a record set
///
/// Fields either read their values through a [`Source`] or act as composite
/// containers holding sub-fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Field {
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
    #[serde(default, skip_serializing_if = "TypeUnion::is_empty")]
    pub data_type: TypeUnion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub repeated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<FieldReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_field: Option<FieldReference>,
    #[serde(rename = "subField", default, skip_serializing_if = "Vec::is_empty")]
    pub sub_fields: Vec<Field>,
}

impl Field {
    /// Create a field with the canonical marker; the id defaults to the name
    pub fn new(name: impl Into<String>, data_type: TypeUnion) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            kind: vocab::FIELD.to_string(),
            name,
            description: None,
            data_type,
            source: None,
            repeated: false,
            references: None,
            parent_field: None,
            sub_fields: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_references(mut self, field_id: impl Into<String>) -> Self {
        self.references = Some(FieldReference::new(field_id));
        self
    }

    pub fn with_sub_field(mut self, field: Field) -> Self {
        self.sub_fields.push(field);
        self
    }

    /// Composite containers hold sub-fields instead of reading a source
    pub fn is_composite(&self) -> bool {
        !self.sub_fields.is_empty()
    }
}
