//! Document loading and saving
//!
//! The boundary between the JSON wire form and the in-memory document model.
//! Decoding is strict: a type union or key in an unexpected shape fails the
//! load instead of being defaulted.

pub mod error;
pub mod loader;
pub mod saver;

pub use error::{LoadError, LoadResult};
pub use loader::{load_from_path, load_from_str, load_from_value};
pub use saver::{save_to_path, to_json_string, to_json_value};
