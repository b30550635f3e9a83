//! Library Importer - batch import of a 3D model asset library.
//!
//! This library scans a `<creator>/<collection>/<model>` folder hierarchy
//! and populates a pre-existing catalog database that mirrors it.
//!
//! # Features
//!
//! - Three-level tree walk over creators, collections and models
//! - Lookup-or-create resolution so repeated scans reuse creator and
//!   collection rows
//! - SHA-512 content digest for every model file
//! - Dry-run mode that logs intended writes instead of persisting them
//!
//! # Example
//!
//! ```no_run
//! use library_importer::{Config, DryRunCatalog, ScanStats};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.library.root_folder = Some("/data/models".into());
//!     config.library.library_id = Some(1);
//!
//!     let catalog = DryRunCatalog::new();
//!     let mut stats = ScanStats::default();
//!     library_importer::import_library(&catalog, &config, &mut stats).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod output;
pub mod scan;

// Re-exports for convenience
pub use config::Config;
pub use db::{Catalog, DryRunCatalog, PgCatalog};
pub use error::{Error, Result};
pub use scan::{import_library, ScanStats};
