//! In-memory catalog used by unit tests.
//!
//! Behaves like a real store for lookup-or-create purposes: lookups see
//! previously inserted rows, so resolver idempotence can be exercised
//! without a live database.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::db::catalog::Catalog;
use crate::db::records::{
    Collection, Creator, Model, ModelFile, NewCollection, NewCreator, NewModel, NewModelFile,
};
use crate::error::Result;

#[derive(Debug, Default)]
struct Tables {
    creators: Vec<Creator>,
    collections: Vec<Collection>,
    models: Vec<Model>,
    model_files: Vec<ModelFile>,
    next_id: i64,
}

/// Catalog that keeps rows in memory.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    tables: Mutex<Tables>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn creators(&self) -> Vec<Creator> {
        self.tables.lock().unwrap().creators.clone()
    }

    pub fn collections(&self) -> Vec<Collection> {
        self.tables.lock().unwrap().collections.clone()
    }

    pub fn models(&self) -> Vec<Model> {
        self.tables.lock().unwrap().models.clone()
    }

    pub fn model_files(&self) -> Vec<ModelFile> {
        self.tables.lock().unwrap().model_files.clone()
    }
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn find_creator_by_name(&self, name: &str) -> Result<Option<Creator>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.creators.iter().find(|c| c.name == name).cloned())
    }

    async fn insert_creator(&self, creator: &NewCreator) -> Result<Creator> {
        let mut tables = self.tables.lock().unwrap();
        let row = Creator {
            id: tables.next_id(),
            name: creator.name.clone(),
            created_at: creator.created_at,
            updated_at: creator.updated_at,
            notes: None,
            caption: None,
            slug: None,
        };
        tables.creators.push(row.clone());
        Ok(row)
    }

    async fn find_collection(
        &self,
        name: &str,
        parent_id: Option<i64>,
    ) -> Result<Option<Collection>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .collections
            .iter()
            .find(|c| c.name.as_deref() == Some(name) && c.collection_id == parent_id)
            .cloned())
    }

    async fn insert_collection(&self, collection: &NewCollection) -> Result<Collection> {
        let mut tables = self.tables.lock().unwrap();
        let row = Collection {
            id: tables.next_id(),
            name: Some(collection.name.clone()),
            notes: None,
            caption: None,
            created_at: collection.created_at,
            updated_at: collection.updated_at,
            collection_id: collection.collection_id,
            slug: None,
        };
        tables.collections.push(row.clone());
        Ok(row)
    }

    async fn insert_model(&self, model: &NewModel) -> Result<Model> {
        let mut tables = self.tables.lock().unwrap();
        let row = Model {
            id: tables.next_id(),
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
        };
        tables.models.push(row.clone());
        Ok(row)
    }

    async fn insert_model_file(&self, file: &NewModelFile) -> Result<ModelFile> {
        let mut tables = self.tables.lock().unwrap();
        let row = ModelFile {
            id: tables.next_id(),
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
        };
        tables.model_files.push(row.clone());
        Ok(row)
    }
}
