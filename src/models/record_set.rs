//! RecordSet model and record set keys

use super::data_type::TypeUnion;
use super::field::{Field, IdRef};
use super::vocab;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Uniqueness constraint over one or more fields of a record set
///
/// Written as a single `{"@id": ...}` object when the key has one element,
/// as a list of such objects otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(Vec<String>);

impl Key {
    /// Key over a single field
    pub fn single(field_ref: impl Into<String>) -> Self {
        Self(vec![field_ref.into()])
    }

    /// Key over several fields. Returns `None` for an empty list.
    pub fn composite<I, S>(field_refs: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let refs: Vec<String> = field_refs.into_iter().map(Into::into).collect();
        if refs.is_empty() { None } else { Some(Self(refs)) }
    }

    pub fn refs(&self) -> &[String] {
        &self.0
    }

    pub fn is_composite(&self) -> bool {
        self.0.len() > 1
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeyWire {
    One(IdRef),
    Many(Vec<IdRef>),
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let refs = match KeyWire::deserialize(deserializer).map_err(|_| {
            <D::Error as de::Error>::custom("key must be an {\"@id\": ...} object or a list of them")
        })? {
            KeyWire::One(r) => vec![r.id],
            KeyWire::Many(list) => list.into_iter().map(|r| r.id).collect(),
        };
        Key::composite(refs)
            .ok_or_else(|| de::Error::custom("key must reference at least one field"))
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let refs: Vec<IdRef> = self.0.iter().map(IdRef::new).collect();
        if refs.len() == 1 {
            refs[0].serialize(serializer)
        } else {
            refs.serialize(serializer)
        }
    }
}

/// A collection of records sharing the same fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
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
    pub key: Option<Key>,
    /// Semantic typing of the whole record set (enumeration, split, ...)
    #[serde(default, skip_serializing_if = "TypeUnion::is_empty")]
    pub data_type: TypeUnion,
    #[serde(rename = "field", default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    /// Inline literal rows, used for small enumerations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<serde_json::Map<String, serde_json::Value>>>,
}

impl RecordSet {
    /// Create a record set with the canonical marker; the id defaults to the name
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            kind: vocab::RECORD_SET.to_string(),
            name,
            description: None,
            key: None,
            data_type: TypeUnion::new(),
            fields,
            data: None,
        }
    }

    pub fn with_key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    pub fn has_inline_data(&self) -> bool {
        self.data.is_some()
    }

    /// Whether `reference` names one of this record set's fields by id or name
    pub fn resolves_field(&self, reference: &str) -> bool {
        self.fields
            .iter()
            .any(|f| f.id == reference || f.name == reference)
    }
}
