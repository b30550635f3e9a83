//! Logging-only catalog stand-in for dry runs.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::db::catalog::Catalog;
use crate::db::records::{
    Collection, Creator, Model, ModelFile, NewCollection, NewCreator, NewModel, NewModelFile,
};
use crate::error::Result;

/// Catalog that logs every intended write instead of persisting it.
///
/// Lookups always report "no match", so every creator and collection is
/// treated as new on every dry run. Fabricated row ids are handed out
/// sequentially so the rest of the pipeline can still link rows together.
#[derive(Debug)]
pub struct DryRunCatalog {
    next_id: AtomicI64,
}

impl DryRunCatalog {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for DryRunCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Catalog for DryRunCatalog {
    async fn find_creator_by_name(&self, _name: &str) -> Result<Option<Creator>> {
        Ok(None)
    }

    async fn insert_creator(&self, creator: &NewCreator) -> Result<Creator> {
        let id = self.next_id();
        tracing::info!("Would insert creator");
        tracing::info!("  id: {}", id);
        tracing::info!("  name: {}", creator.name);
        tracing::info!("  created_at: {}", creator.created_at);
        tracing::info!("  updated_at: {}", creator.updated_at);

        Ok(Creator {
            id,
            name: creator.name.clone(),
            created_at: creator.created_at,
            updated_at: creator.updated_at,
            notes: None,
            caption: None,
            slug: None,
        })
    }

    async fn find_collection(
        &self,
        _name: &str,
        _parent_id: Option<i64>,
    ) -> Result<Option<Collection>> {
        Ok(None)
    }

    async fn insert_collection(&self, collection: &NewCollection) -> Result<Collection> {
        let id = self.next_id();
        tracing::info!("Would insert collection");
        tracing::info!("  id: {}", id);
        tracing::info!("  name: {}", collection.name);
        tracing::info!("  collection_id: {:?}", collection.collection_id);
        tracing::info!("  created_at: {}", collection.created_at);
        tracing::info!("  updated_at: {}", collection.updated_at);

        Ok(Collection {
            id,
            name: Some(collection.name.clone()),
            notes: None,
            caption: None,
            created_at: collection.created_at,
            updated_at: collection.updated_at,
            collection_id: collection.collection_id,
            slug: None,
        })
    }

    async fn insert_model(&self, model: &NewModel) -> Result<Model> {
        let id = self.next_id();
        tracing::info!("Would insert model");
        tracing::info!("  id: {}", id);
        tracing::info!("  name: {}", model.name);
        tracing::info!("  path: {}", model.path);
        tracing::info!("  library_id: {}", model.library_id);
        tracing::info!("  creator_id: {}", model.creator_id);
        tracing::info!("  collection_id: {}", model.collection_id);
        tracing::info!("  created_at: {}", model.created_at);
        tracing::info!("  updated_at: {}", model.updated_at);

        Ok(Model {
            id,
            name: model.name.clone(),
            path: model.path.clone(),
            library_id: model.library_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            preview_file_id: None,
            creator_id: Some(model.creator_id),
            notes: None,
            caption: None,
            collection_id: Some(model.collection_id),
            slug: None,
            license: None,
        })
    }

    async fn insert_model_file(&self, file: &NewModelFile) -> Result<ModelFile> {
        let id = self.next_id();
        tracing::info!("Would insert model file");
        tracing::info!("  id: {}", id);
        tracing::info!("  filename: {}", file.filename);
        tracing::info!("  model_id: {}", file.model_id);
        tracing::info!("  presupported: {}", file.presupported);
        tracing::info!("  y_up: {}", file.y_up);
        tracing::info!("  digest: {}", file.digest);
        tracing::info!("  size: {}", file.size);
        tracing::info!("  presupported_version_id: {:?}", file.presupported_version_id);

        Ok(ModelFile {
            id,
            filename: Some(file.filename.clone()),
            model_id: file.model_id,
            created_at: file.created_at,
            updated_at: file.updated_at,
            presupported: file.presupported,
            y_up: file.y_up,
            digest: Some(file.digest.clone()),
            notes: Some(file.notes.clone()),
            caption: Some(file.caption.clone()),
            size: Some(file.size),
            presupported_version_id: file.presupported_version_id,
        })
    }
}
