//! Per-entity validation rules
//!
//! Executed top-down over the node tree. Every rule writes into the shared
//! [`ValidationIssues`] and none of them stops the traversal.

use super::config::ValidationConfig;
use super::issues::ValidationIssues;
use super::node::{NodeKind, NodeRef};
use crate::models::{Dataset, Distribution, Field, RecordSet, vocab};
use once_cell::sync::Lazy;
use regex::Regex;

static SHA256_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{64}$").unwrap());
static MD5_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{32}$").unwrap());

pub(crate) fn mandatory(property: &str) -> String {
    format!("Property \"{}\" is mandatory, but does not exist.", property)
}

pub(crate) fn recommended(property: &str) -> String {
    format!("Property \"{}\" is recommended, but does not exist.", property)
}

fn wrong_marker(identifier: &str, expected: &str, found: &str) -> String {
    format!(
        "\"{}\" should have an attribute \"@type\": \"{}\". Got \"{}\" instead.",
        identifier, expected, found
    )
}

/// Validate `node` and, depth first, everything below it
pub(crate) fn validate_node(
    node: NodeRef<'_, '_>,
    config: &ValidationConfig,
    issues: &mut ValidationIssues,
) {
    match node.kind() {
        NodeKind::Dataset(dataset) => validate_dataset(dataset, node, issues),
        NodeKind::Distribution(distribution) => {
            validate_distribution(distribution, node, config, issues)
        }
        NodeKind::RecordSet(record_set) => validate_record_set(record_set, node, issues),
        NodeKind::Field(field) => validate_field(field, node, issues),
    }

    for child in node.children() {
        validate_node(child, config, issues);
    }
}

fn validate_dataset(dataset: &Dataset, node: NodeRef<'_, '_>, issues: &mut ValidationIssues) {
    if dataset.name.is_empty() {
        issues.add_error(mandatory(vocab::PROP_NAME), Some(node));
    }

    if dataset.kind != vocab::DATASET {
        issues.add_error(
            format!(
                "The current JSON-LD doesn't extend {}. Got \"{}\" instead.",
                vocab::DATASET,
                dataset.kind
            ),
            Some(node),
        );
    }

    if dataset.conforms_to.as_deref().is_none_or(str::is_empty) {
        issues.add_warning(recommended(vocab::PROP_CONFORMS_TO), Some(node));
    }
}

fn validate_distribution(
    distribution: &Distribution,
    node: NodeRef<'_, '_>,
    config: &ValidationConfig,
    issues: &mut ValidationIssues,
) {
    if distribution.name.is_empty() {
        issues.add_error(mandatory(vocab::PROP_NAME), Some(node));
    }

    if distribution.kind != vocab::FILE_OBJECT && distribution.kind != vocab::FILE_SET {
        issues.add_error(
            format!(
                "\"{}\" should have an attribute \"@type\": \"{}\" or \"{}\". Got \"{}\" instead.",
                node.kind().identifier(),
                vocab::FILE_OBJECT,
                vocab::FILE_SET,
                distribution.kind
            ),
            Some(node),
        );
    }

    if distribution.content_url.as_deref().is_none_or(str::is_empty) {
        issues.add_error(mandatory(vocab::PROP_CONTENT_URL), Some(node));
    }

    if distribution
        .encoding_format
        .as_deref()
        .is_none_or(str::is_empty)
    {
        issues.add_error(mandatory(vocab::PROP_ENCODING_FORMAT), Some(node));
    }

    if config.check_checksums {
        validate_checksums(distribution, node, issues);
    }
}

fn validate_checksums(
    distribution: &Distribution,
    node: NodeRef<'_, '_>,
    issues: &mut ValidationIssues,
) {
    // only file objects carry a checksum
    if !distribution.is_file_set() && !distribution.has_checksum() {
        issues.add_warning(recommended(vocab::PROP_SHA256), Some(node));
    }

    if let Some(sha256) = distribution.sha256.as_deref() {
        if !SHA256_REGEX.is_match(sha256) {
            issues.add_error(
                format!(
                    "Invalid sha256 checksum \"{}\": expected 64 hexadecimal characters.",
                    sha256
                ),
                Some(node),
            );
        }
    }

    if let Some(md5) = distribution.md5.as_deref() {
        if !MD5_REGEX.is_match(md5) {
            issues.add_error(
                format!(
                    "Invalid md5 checksum \"{}\": expected 32 hexadecimal characters.",
                    md5
                ),
                Some(node),
            );
        }
    }
}

fn validate_record_set(
    record_set: &RecordSet,
    node: NodeRef<'_, '_>,
    issues: &mut ValidationIssues,
) {
    if record_set.name.is_empty() {
        issues.add_error(mandatory(vocab::PROP_NAME), Some(node));
    }

    if record_set.kind != vocab::RECORD_SET {
        issues.add_error(
            wrong_marker(node.kind().identifier(), vocab::RECORD_SET, &record_set.kind),
            Some(node),
        );
    }

    if let Some(key) = &record_set.key {
        let label = if key.is_composite() {
            "Composite key element"
        } else {
            "Key"
        };
        for reference in key.refs() {
            if !record_set.resolves_field(reference) {
                issues.add_error(
                    format!(
                        "{} \"{}\" of the RecordSet \"{}\" does not reference any field of the RecordSet.",
                        label,
                        reference,
                        node.kind().identifier()
                    ),
                    Some(node),
                );
            }
        }
    }
}

fn validate_field(field: &Field, node: NodeRef<'_, '_>, issues: &mut ValidationIssues) {
    if field.name.is_empty() {
        issues.add_error(mandatory(vocab::PROP_NAME), Some(node));
    }

    if field.kind != vocab::FIELD {
        issues.add_error(
            wrong_marker(node.kind().identifier(), vocab::FIELD, &field.kind),
            Some(node),
        );
    }

    // TODO: inherit the data type from the parent field once the rules for
    // predecessor lookup are settled; only the field's own union counts today.
    if !field.data_type.is_specified() {
        issues.add_error(
            format!(
                "The field does not specify a valid {}, neither does any of its predecessor.",
                vocab::PROP_DATA_TYPE
            ),
            Some(node),
        );
    }

    let inline_rows = node
        .enclosing_record_set()
        .is_some_and(RecordSet::has_inline_data);
    let needs_source = !field.is_composite() && !inline_rows;
    if needs_source && !field.source.as_ref().is_some_and(|s| s.is_valid()) {
        issues.add_error(
            format!(
                "Node \"{}\" is a field and has no source. Please, use {} to specify the source.",
                node.kind().identifier(),
                vocab::PROP_SOURCE
            ),
            Some(node),
        );
    }
}
