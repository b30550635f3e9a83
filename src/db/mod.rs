//! Catalog database access.
//!
//! Provides:
//! - Row and insert types mirroring the external schema
//! - The `Catalog` storage gateway trait
//! - A PostgreSQL implementation (sqlx)
//! - A logging-only stand-in for dry runs

pub mod catalog;
pub mod dry_run;
pub mod postgres;
pub mod records;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::Catalog;
pub use dry_run::DryRunCatalog;
pub use postgres::PgCatalog;
pub use records::{
    Collection, Creator, Model, ModelFile, NewCollection, NewCreator, NewModel, NewModelFile,
};
