//! Configuration module for the library-importer.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, DatabaseConfig, LibraryConfig, OptionsConfig};
pub use validation::validate_config;
