//! Type union model
//!
//! A field (or record set) declares one or more semantic type tokens. On the
//! wire a single token is written as a bare string and several as a list;
//! internally both are the same ordered sequence.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered set of type tokens, kept exactly as written (e.g. `sc:Text`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeUnion(Vec<String>);

impl TypeUnion {
    /// Create an empty (unspecified) union
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a union holding a single token
    pub fn single(token: impl Into<String>) -> Self {
        Self(vec![token.into()])
    }

    /// Create a union from several tokens, dropping repeats while keeping order
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut union = Self::new();
        for token in tokens {
            union.push(token);
        }
        union
    }

    /// Append a token if it is not already present
    pub fn push(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !self.0.contains(&token) {
            self.0.push(token);
        }
    }

    /// A union is specified when it holds at least one token
    pub fn is_specified(&self) -> bool {
        !self.0.is_empty()
    }

    /// First token, the one schema matching compares on
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any token normalizes to `bare` (see [`normalize_token`])
    pub fn contains_normalized(&self, bare: &str) -> bool {
        let bare = bare.to_lowercase();
        self.0.iter().any(|t| normalize_token(t) == bare)
    }
}

impl fmt::Display for TypeUnion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// Reduce a type token to its bare lower-case name.
///
/// Namespace prefixes are stripped whether written compactly (`sc:Integer`)
/// or as a full IRI (`https://schema.org/Integer`, `http://x.org/vocab#Int`).
///
/// ```
/// use croissant_sdk::models::data_type::normalize_token;
///
/// assert_eq!(normalize_token("sc:Integer"), "integer");
/// assert_eq!(normalize_token("https://schema.org/Float"), "float");
/// assert_eq!(normalize_token("Text"), "text");
/// ```
pub fn normalize_token(token: &str) -> String {
    let bare = token
        .rsplit(|c: char| c == '/' || c == '#' || c == ':')
        .next()
        .unwrap_or(token);
    bare.to_lowercase()
}

impl Serialize for TypeUnion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.len() == 1 {
            serializer.serialize_str(&self.0[0])
        } else {
            let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
            for token in &self.0 {
                seq.serialize_element(token)?;
            }
            seq.end()
        }
    }
}

impl<'de> Deserialize<'de> for TypeUnion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TypeUnionVisitor;

        impl<'de> Visitor<'de> for TypeUnionVisitor {
            type Value = TypeUnion;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a data type string or a list of data type strings")
            }

            fn visit_str<E>(self, value: &str) -> Result<TypeUnion, E>
            where
                E: de::Error,
            {
                Ok(TypeUnion::single(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<TypeUnion, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut union = TypeUnion::new();
                while let Some(token) = seq.next_element::<String>()? {
                    union.push(token);
                }
                Ok(union)
            }
        }

        deserializer.deserialize_any(TypeUnionVisitor)
    }
}
