//! Validation issue collection
//!
//! Issues are stored in two sets keyed by their fully formatted message, so
//! reporting the same problem twice (e.g. once per traversal entry point)
//! does not inflate the counts. Rendering sorts the messages, which keeps the
//! report byte-identical regardless of insertion order.

use super::node::NodeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Specification non-compliance; fails validation
    Error,
    /// Best-practice deviation; reported only
    Warning,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueSeverity::Error => write!(f, "error"),
            IssueSeverity::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation issue, message already prefixed with its location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: IssueSeverity,
    pub message: String,
}

/// Deduplicating collection of validation issues
#[derive(Debug, Clone, Default)]
pub struct ValidationIssues {
    errors: HashSet<String>,
    warnings: HashSet<String>,
}

impl ValidationIssues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, tagged with the location of `node` when given
    pub fn add_error(&mut self, message: impl Into<String>, node: Option<NodeRef<'_, '_>>) {
        self.errors.insert(format_message(message.into(), node));
    }

    /// Record a warning, tagged with the location of `node` when given
    pub fn add_warning(&mut self, message: impl Into<String>, node: Option<NodeRef<'_, '_>>) {
        self.warnings.insert(format_message(message.into(), node));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Error messages, sorted
    pub fn errors(&self) -> Vec<&str> {
        sorted(&self.errors)
    }

    /// Warning messages, sorted
    pub fn warnings(&self) -> Vec<&str> {
        sorted(&self.warnings)
    }

    /// All issues, errors first, each group sorted
    pub fn issues(&self) -> Vec<Issue> {
        let errors = self.errors().into_iter().map(|m| Issue {
            severity: IssueSeverity::Error,
            message: m.to_string(),
        });
        let warnings = self.warnings().into_iter().map(|m| Issue {
            severity: IssueSeverity::Warning,
            message: m.to_string(),
        });
        errors.chain(warnings).collect()
    }

    /// Fold the issues of `other` into this collection
    pub fn merge(&mut self, other: ValidationIssues) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Human-readable report of all issues
    ///
    /// Returns an empty string when there is nothing to report.
    pub fn report(&self) -> String {
        let mut sections = Vec::new();
        if self.has_errors() {
            sections.push(render_section("error", &self.errors()));
        }
        if self.has_warnings() {
            sections.push(render_section("warning", &self.warnings()));
        }
        sections.join("\n\n")
    }
}

impl fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report())
    }
}

fn format_message(message: String, node: Option<NodeRef<'_, '_>>) -> String {
    match node {
        Some(node) => format!("[{}] {}", node.context(), message),
        None => message,
    }
}

fn sorted(set: &HashSet<String>) -> Vec<&str> {
    let mut messages: Vec<&str> = set.iter().map(String::as_str).collect();
    messages.sort_unstable();
    messages
}

fn render_section(kind: &str, messages: &[&str]) -> String {
    let mut out = format!(
        "Found the following {} {}(s) during the validation:",
        messages.len(),
        kind
    );
    for message in messages {
        out.push_str("\n  -  ");
        out.push_str(message);
    }
    out
}
