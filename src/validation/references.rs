//! Document-wide reference checks
//!
//! Runs once over the whole node tree after the per-entity rules, since a
//! field may point at a field of any record set.

use super::config::ValidationConfig;
use super::issues::ValidationIssues;
use super::node::{NodeKind, NodeTree};
use crate::models::Dataset;
use std::collections::HashSet;

/// Check `references` and `parentField` pointers of every field, sub-fields
/// included, plus the opt-in source and identifier checks
pub(crate) fn validate_references(
    tree: &NodeTree<'_>,
    dataset: &Dataset,
    config: &ValidationConfig,
    issues: &mut ValidationIssues,
) {
    let field_ids: HashSet<&str> = dataset
        .all_fields()
        .into_iter()
        .map(|f| f.id.as_str())
        .filter(|id| !id.is_empty())
        .collect();
    let distribution_ids: HashSet<&str> = dataset
        .distribution
        .iter()
        .flat_map(|d| [d.id.as_str(), d.name.as_str()])
        .filter(|id| !id.is_empty())
        .collect();

    for node in tree.iter() {
        let NodeKind::Field(field) = node.kind() else {
            continue;
        };

        if let Some(reference) = &field.references {
            if !field_ids.contains(reference.target()) {
                issues.add_error(
                    format!(
                        "Field \"{}\" references the non-existent field \"{}\".",
                        node.kind().identifier(),
                        reference.target()
                    ),
                    Some(node),
                );
            }
        }

        if let Some(parent) = &field.parent_field {
            if !field_ids.contains(parent.target()) {
                issues.add_error(
                    format!(
                        "Field \"{}\" has a parentField \"{}\" that does not exist.",
                        node.kind().identifier(),
                        parent.target()
                    ),
                    Some(node),
                );
            }
        }

        if config.check_source_references {
            let dangling = field
                .source
                .as_ref()
                .and_then(|s| s.distribution_id())
                .filter(|id| !distribution_ids.contains(id));
            if let Some(distribution) = dangling {
                issues.add_error(
                    format!(
                        "Field \"{}\" has a source referencing the non-existent distribution \"{}\".",
                        node.kind().identifier(),
                        distribution
                    ),
                    Some(node),
                );
            }
        }
    }

    if config.check_unique_ids {
        validate_unique_ids(tree, issues);
    }
}

/// Every `@id` after its first occurrence is reported
fn validate_unique_ids(tree: &NodeTree<'_>, issues: &mut ValidationIssues) {
    let mut seen = HashSet::new();
    for node in tree.iter() {
        let id = node.kind().id();
        if id.is_empty() {
            continue;
        }
        if !seen.insert(id) {
            issues.add_error(format!("Duplicate identifier \"{}\".", id), Some(node));
        }
    }
}
