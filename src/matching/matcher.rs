//! Field matching between two documents

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::types::{MatchResult, TypeMismatch};
use crate::models::data_type::normalize_token;
use crate::models::{Dataset, Field};

/// Match the fields of a candidate document against a reference document
#[derive(Debug, Clone, Default)]
pub struct SchemaMatcher;

impl SchemaMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Classify every field of both documents into one of four buckets
    ///
    /// Never fails: fields with empty type unions are compared like any other.
    pub fn match_schemas(&self, reference: &Dataset, candidate: &Dataset) -> MatchResult {
        let reference_fields = index_fields(reference);
        let candidate_fields = index_fields(candidate);
        debug!(
            "Matching {} reference field(s) against {} candidate field(s)",
            reference_fields.len(),
            candidate_fields.len()
        );

        let mut result = MatchResult::empty();

        for (name, reference_field) in &reference_fields {
            let Some(candidate_field) = candidate_fields.get(name) else {
                result.missing.push(name.to_string());
                continue;
            };

            let reference_type = reference_field.data_type.primary().unwrap_or_default();
            let candidate_type = candidate_field.data_type.primary().unwrap_or_default();
            if types_compatible(reference_type, candidate_type) {
                result.matched.push(name.to_string());
            } else {
                result
                    .mismatched
                    .push(TypeMismatch::new(*name, reference_type, candidate_type));
            }
        }

        for name in candidate_fields.keys() {
            if !reference_fields.contains_key(name) {
                result.extra.push(name.to_string());
            }
        }

        let result = result.finish();
        info!(
            "Schema match {}: {} matched, {} missing, {} mismatched, {} extra",
            if result.is_match { "succeeded" } else { "failed" },
            result.matched.len(),
            result.missing.len(),
            result.mismatched.len(),
            result.extra.len()
        );
        result
    }
}

/// Field name to field, over the top-level fields of all record sets.
/// A later record set wins on a name collision.
fn index_fields(dataset: &Dataset) -> BTreeMap<&str, &Field> {
    dataset
        .record_sets
        .iter()
        .flat_map(|rs| rs.fields.iter())
        .map(|f| (f.name.as_str(), f))
        .collect()
}

/// Whether a candidate token can stand in for a reference token
fn types_compatible(reference: &str, candidate: &str) -> bool {
    let reference = normalize_token(reference);
    let candidate = normalize_token(candidate);
    if reference == candidate {
        return true;
    }

    // Numeric widening
    matches!(
        (reference.as_str(), candidate.as_str()),
        ("number", "integer") | ("number", "float") | ("integer", "number") | ("float", "number")
    )
}
