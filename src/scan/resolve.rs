//! Lookup-or-create resolution for creators and collections.

use chrono::Utc;

use crate::db::records::{Collection, Creator, NewCollection, NewCreator};
use crate::db::Catalog;
use crate::error::Result;

/// Return the creator with the given name, inserting it on first encounter.
///
/// The lookup is an exact, case-sensitive name match. The insert is durable
/// before this returns, so repeated scans against a real store reuse the
/// same row instead of duplicating it.
pub async fn get_or_create_creator(catalog: &dyn Catalog, name: &str) -> Result<Creator> {
    if let Some(creator) = catalog.find_creator_by_name(name).await? {
        return Ok(creator);
    }

    let now = Utc::now().naive_utc();
    catalog
        .insert_creator(&NewCreator {
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        })
        .await
}

/// Return the collection with the given name and parent, inserting it on
/// first encounter.
///
/// The schema supports nested collections through `parent_id`, but the
/// walker always passes `None`; nesting is never derived from directory
/// depth.
pub async fn get_or_create_collection(
    catalog: &dyn Catalog,
    name: &str,
    parent_id: Option<i64>,
) -> Result<Collection> {
    if let Some(collection) = catalog.find_collection(name, parent_id).await? {
        return Ok(collection);
    }

    let now = Utc::now().naive_utc();
    catalog
        .insert_collection(&NewCollection {
            name: name.to_string(),
            collection_id: parent_id,
            created_at: now,
            updated_at: now,
        })
        .await
}
