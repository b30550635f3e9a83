//! Row types mirroring the catalog schema.
//!
//! The four tables (creators, collections, models, model_files) are an
//! external contract: this tool writes rows but never creates or migrates
//! the schema. Column names and nullability follow the live schema.

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// A row in the `creators` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Creator {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub notes: Option<String>,
    pub caption: Option<String>,
    pub slug: Option<String>,
}

/// A row in the `collections` table.
///
/// `collection_id` is a self-referential parent link; the schema supports
/// nested collections even though this tool always writes top-level ones.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Collection {
    pub id: i64,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub caption: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub collection_id: Option<i64>,
    pub slug: Option<String>,
}

/// A row in the `models` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Model {
    pub id: i64,
    pub name: String,
    pub path: String,
    pub library_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub preview_file_id: Option<i64>,
    pub creator_id: Option<i64>,
    pub notes: Option<String>,
    pub caption: Option<String>,
    pub collection_id: Option<i64>,
    pub slug: Option<String>,
    pub license: Option<String>,
}

/// A row in the `model_files` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ModelFile {
    pub id: i64,
    pub filename: Option<String>,
    pub model_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub presupported: bool,
    pub y_up: bool,
    pub digest: Option<String>,
    pub notes: Option<String>,
    pub caption: Option<String>,
    pub size: Option<i64>,
    pub presupported_version_id: Option<i64>,
}

/// Insert payload for a new creator.
#[derive(Debug, Clone)]
pub struct NewCreator {
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insert payload for a new collection.
#[derive(Debug, Clone)]
pub struct NewCollection {
    pub name: String,
    /// Parent collection id; always `None` at current call sites.
    pub collection_id: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insert payload for a new model.
#[derive(Debug, Clone)]
pub struct NewModel {
    /// Directory name with the trailing variant token stripped.
    pub name: String,
    /// Path relative to the scanned root, never absolute.
    pub path: String,
    pub library_id: i64,
    pub creator_id: i64,
    pub collection_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insert payload for a new model file.
#[derive(Debug, Clone)]
pub struct NewModelFile {
    /// File basename only, without any directory components.
    pub filename: String,
    pub model_id: i64,
    pub presupported: bool,
    pub y_up: bool,
    /// SHA-512 of the file content as lowercase hex.
    pub digest: String,
    pub notes: String,
    pub caption: String,
    pub size: i64,
    pub presupported_version_id: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
