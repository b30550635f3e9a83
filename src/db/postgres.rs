//! PostgreSQL catalog implementation backed by sqlx.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::db::catalog::Catalog;
use crate::db::records::{
    Collection, Creator, Model, ModelFile, NewCollection, NewCreator, NewModel, NewModelFile,
};
use crate::error::Result;

/// Catalog backed by a live PostgreSQL database.
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    /// Connect to the catalog database.
    ///
    /// The import is strictly sequential, so a single connection is enough.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;

        tracing::debug!("Connected to catalog database");
        Ok(Self { pool })
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Catalog for PgCatalog {
    async fn find_creator_by_name(&self, name: &str) -> Result<Option<Creator>> {
        let creator = sqlx::query_as::<_, Creator>(
            "SELECT id, name, created_at, updated_at, notes, caption, slug \
             FROM creators WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(creator)
    }

    async fn insert_creator(&self, creator: &NewCreator) -> Result<Creator> {
        let creator = sqlx::query_as::<_, Creator>(
            "INSERT INTO creators (name, created_at, updated_at) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, created_at, updated_at, notes, caption, slug",
        )
        .bind(&creator.name)
        .bind(creator.created_at)
        .bind(creator.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(creator)
    }

    async fn find_collection(
        &self,
        name: &str,
        parent_id: Option<i64>,
    ) -> Result<Option<Collection>> {
        // IS NOT DISTINCT FROM makes the NULL parent compare as a value.
        let collection = sqlx::query_as::<_, Collection>(
            "SELECT id, name, notes, caption, created_at, updated_at, collection_id, slug \
             FROM collections WHERE name = $1 AND collection_id IS NOT DISTINCT FROM $2",
        )
        .bind(name)
        .bind(parent_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(collection)
    }

    async fn insert_collection(&self, collection: &NewCollection) -> Result<Collection> {
        let collection = sqlx::query_as::<_, Collection>(
            "INSERT INTO collections (name, collection_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, notes, caption, created_at, updated_at, collection_id, slug",
        )
        .bind(&collection.name)
        .bind(collection.collection_id)
        .bind(collection.created_at)
        .bind(collection.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(collection)
    }

    async fn insert_model(&self, model: &NewModel) -> Result<Model> {
        let model = sqlx::query_as::<_, Model>(
            "INSERT INTO models (name, path, library_id, creator_id, collection_id, \
             created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, name, path, library_id, created_at, updated_at, preview_file_id, \
             creator_id, notes, caption, collection_id, slug, license",
        )
        .bind(&model.name)
        .bind(&model.path)
        .bind(model.library_id)
        .bind(model.creator_id)
        .bind(model.collection_id)
        .bind(model.created_at)
        .bind(model.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(model)
    }

    async fn insert_model_file(&self, file: &NewModelFile) -> Result<ModelFile> {
        let file = sqlx::query_as::<_, ModelFile>(
            "INSERT INTO model_files (filename, model_id, presupported, y_up, digest, \
             notes, caption, size, presupported_version_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING id, filename, model_id, created_at, updated_at, presupported, y_up, \
             digest, notes, caption, size, presupported_version_id",
        )
        .bind(&file.filename)
        .bind(file.model_id)
        .bind(file.presupported)
        .bind(file.y_up)
        .bind(&file.digest)
        .bind(&file.notes)
        .bind(&file.caption)
        .bind(file.size)
        .bind(file.presupported_version_id)
        .bind(file.created_at)
        .bind(file.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(file)
    }
}
