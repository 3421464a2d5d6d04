//! Document model
//!
//! Plain data structures for a Croissant document: the dataset root, its
//! distributions, record sets and fields. These carry no behaviour beyond
//! their shape; validation and matching read them without mutating.

pub mod data_type;
pub mod dataset;
pub mod distribution;
pub mod field;
pub mod record_set;
pub mod vocab;

pub use data_type::TypeUnion;
pub use dataset::Dataset;
pub use distribution::Distribution;
pub use field::{Extract, Field, FieldReference, IdRef, Source};
pub use record_set::{Key, RecordSet};
