//! Storage gateway trait for the catalog database.

use async_trait::async_trait;

use crate::db::records::{
    Collection, Creator, Model, ModelFile, NewCollection, NewCreator, NewModel, NewModelFile,
};
use crate::error::Result;

/// Persistence operations the import pipeline depends on.
///
/// Implemented by [`PgCatalog`](crate::db::PgCatalog) for a real PostgreSQL
/// store and by [`DryRunCatalog`](crate::db::DryRunCatalog) for logging-only
/// dry runs. Every insert is durable before the call returns; there is no
/// batching across rows.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Look up a creator by exact name match.
    async fn find_creator_by_name(&self, name: &str) -> Result<Option<Creator>>;

    /// Insert a creator row and return it as persisted.
    async fn insert_creator(&self, creator: &NewCreator) -> Result<Creator>;

    /// Look up a collection by exact name within a parent scope.
    ///
    /// A `None` parent matches only top-level collections.
    async fn find_collection(&self, name: &str, parent_id: Option<i64>)
        -> Result<Option<Collection>>;

    /// Insert a collection row and return it as persisted.
    async fn insert_collection(&self, collection: &NewCollection) -> Result<Collection>;

    /// Insert a model row and return it as persisted.
    async fn insert_model(&self, model: &NewModel) -> Result<Model>;

    /// Insert a model file row and return it as persisted.
    async fn insert_model_file(&self, file: &NewModelFile) -> Result<ModelFile>;
}
