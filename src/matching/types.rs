//! Types for schema matching results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of matching a candidate document against a reference document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// True when no reference field is missing or mismatched
    pub is_match: bool,
    /// Reference fields present in the candidate with a compatible type
    pub matched: Vec<String>,
    /// Reference fields absent from the candidate
    pub missing: Vec<String>,
    /// Reference fields present in the candidate with an incompatible type
    pub mismatched: Vec<TypeMismatch>,
    /// Candidate fields absent from the reference
    pub extra: Vec<String>,
}

impl MatchResult {
    /// Create an empty result; `is_match` is settled by [`MatchResult::finish`]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sort every bucket by field name and compute the verdict
    pub(crate) fn finish(mut self) -> Self {
        self.matched.sort();
        self.missing.sort();
        self.mismatched.sort_by(|a, b| a.field.cmp(&b.field));
        self.extra.sort();
        self.is_match = self.missing.is_empty() && self.mismatched.is_empty();
        self
    }

    /// Human-readable summary, one line per non-matched field
    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "{}: {} matched, {} missing, {} mismatched, {} extra",
            if self.is_match { "MATCH" } else { "NO MATCH" },
            self.matched.len(),
            self.missing.len(),
            self.mismatched.len(),
            self.extra.len()
        )];
        lines.extend(self.missing.iter().map(|f| format!("  missing:    {}", f)));
        lines.extend(self.mismatched.iter().map(|m| format!("  mismatched: {}", m)));
        lines.extend(self.extra.iter().map(|f| format!("  extra:      {}", f)));
        lines.join("\n")
    }
}

/// A field whose type differs between the two documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMismatch {
    pub field: String,
    /// Primary type token of the reference field, as written
    pub reference_type: String,
    /// Primary type token of the candidate field, as written
    pub candidate_type: String,
}

impl TypeMismatch {
    pub fn new(
        field: impl Into<String>,
        reference_type: impl Into<String>,
        candidate_type: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            reference_type: reference_type.into(),
            candidate_type: candidate_type.into(),
        }
    }
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (reference: {}, candidate: {})",
            self.field, self.reference_type, self.candidate_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_sorts_and_decides() {
        let result = MatchResult {
            matched: vec!["b".into(), "a".into()],
            extra: vec!["z".into(), "y".into()],
            ..MatchResult::empty()
        }
        .finish();
        assert!(result.is_match);
        assert_eq!(result.matched, vec!["a", "b"]);
        assert_eq!(result.extra, vec!["y", "z"]);

        let result = MatchResult {
            missing: vec!["a".into()],
            ..MatchResult::empty()
        }
        .finish();
        assert!(!result.is_match);
    }

    #[test]
    fn test_serialized_shape() {
        let result = MatchResult {
            mismatched: vec![TypeMismatch::new("age", "sc:Text", "sc:Integer")],
            ..MatchResult::empty()
        }
        .finish();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isMatch"], false);
        assert_eq!(value["mismatched"][0]["referenceType"], "sc:Text");
        assert_eq!(value["mismatched"][0]["candidateType"], "sc:Integer");
    }

    #[test]
    fn test_summary() {
        let result = MatchResult {
            matched: vec!["id".into()],
            missing: vec!["title".into()],
            ..MatchResult::empty()
        }
        .finish();
        assert_eq!(
            result.summary(),
            "NO MATCH: 1 matched, 1 missing, 0 mismatched, 0 extra\n  missing:    title"
        );
    }
}
