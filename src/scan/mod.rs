//! Library scanning and import pipeline.
//!
//! Provides:
//! - Model path parsing (identity from path segments)
//! - SHA-512 content digesting
//! - Lookup-or-create resolution for creators and collections
//! - The three-level tree walk that drives the import

pub mod digest;
pub mod paths;
pub mod resolve;
pub mod stats;
pub mod walker;

pub use digest::file_digest;
pub use paths::{model_identity, parse_model_dir_name, relative_to_root, ModelIdentity};
pub use resolve::{get_or_create_collection, get_or_create_creator};
pub use stats::ScanStats;
pub use walker::import_library;
