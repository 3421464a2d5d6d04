//! Schema matching module for comparing two Croissant documents
//!
//! This module answers whether a candidate document can replace a reference
//! document at the schema level:
//! - Fields are paired by name across all record sets
//! - Types are compared on their bare primary token, with numeric widening
//! - Every field lands in exactly one of matched, missing, mismatched or extra
//!
//! # Example
//!
//! ```rust
//! use croissant_sdk::matching::match_schemas;
//! use croissant_sdk::models::{Dataset, Field, RecordSet, TypeUnion};
//!
//! let reference = Dataset::new("v1").with_record_set(RecordSet::new(
//!     "rows",
//!     vec![Field::new("score", TypeUnion::single("sc:Number"))],
//! ));
//! let candidate = Dataset::new("v2").with_record_set(RecordSet::new(
//!     "rows",
//!     vec![
//!         Field::new("score", TypeUnion::single("sc:Integer")),
//!         Field::new("comment", TypeUnion::single("sc:Text")),
//!     ],
//! ));
//!
//! let result = match_schemas(&reference, &candidate);
//! assert!(result.is_match);
//! assert_eq!(result.extra, vec!["comment"]);
//! ```

mod matcher;
mod types;

pub use matcher::SchemaMatcher;
pub use types::{MatchResult, TypeMismatch};

use crate::model::{LoadResult, load_from_path};
use crate::models::Dataset;
use std::path::Path;

/// Match a candidate document against a reference document
pub fn match_schemas(reference: &Dataset, candidate: &Dataset) -> MatchResult {
    SchemaMatcher::new().match_schemas(reference, candidate)
}

/// Load two documents from disk and match them
///
/// Only loading can fail; the comparison itself always produces a result.
pub fn match_files(reference: &Path, candidate: &Path) -> LoadResult<MatchResult> {
    let reference = load_from_path(reference)?;
    let candidate = load_from_path(candidate)?;
    Ok(match_schemas(&reference, &candidate))
}
