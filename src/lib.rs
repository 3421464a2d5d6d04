//! Croissant SDK - validation and schema matching for Croissant dataset descriptions
//!
//! Provides unified interfaces for:
//! - Document model (dataset, distributions, record sets, fields)
//! - Document loading/saving from and to JSON-LD
//! - Validation with location-tagged, deduplicated issues
//! - Schema compatibility matching between two documents

pub mod matching;
pub mod model;
pub mod models;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use matching::{MatchResult, SchemaMatcher, TypeMismatch, match_files, match_schemas};
pub use model::{LoadError, LoadResult, load_from_path, load_from_str, save_to_path};
pub use validation::{
    IssueSeverity, MetadataValidator, ValidationConfig, ValidationIssues, validate_file,
    validate_metadata, validate_metadata_with_config,
};

// Re-export models
pub use models::{
    Dataset, Distribution, Extract, Field, FieldReference, IdRef, Key, RecordSet, Source,
    TypeUnion,
};
