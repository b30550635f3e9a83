//! Three-level library walk and import pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use walkdir::WalkDir;

use crate::config::Config;
use crate::db::records::{NewModel, NewModelFile};
use crate::db::Catalog;
use crate::error::Result;
use crate::output::create_spinner;
use crate::scan::digest::file_digest;
use crate::scan::paths::{model_identity, relative_to_root};
use crate::scan::resolve::{get_or_create_collection, get_or_create_creator};
use crate::scan::stats::ScanStats;

/// Import every model under the configured root into the catalog.
///
/// The hierarchy is `<root>/<creator>/<collection>/<model>`; non-directory
/// entries are skipped at each level. Any path, filesystem, or database
/// error aborts the scan, leaving already-committed rows in place.
pub async fn import_library(
    catalog: &dyn Catalog,
    config: &Config,
    stats: &mut ScanStats,
) -> Result<()> {
    let root = config.root_folder()?.to_path_buf();
    let library_id = config.library_id()?;

    for creator_dir in subdirectories(&root, stats)? {
        tracing::info!("Processing creator {}", display_name(&creator_dir));

        for collection_dir in subdirectories(&creator_dir, stats)? {
            tracing::info!("Processing collection {}", display_name(&collection_dir));

            for model_dir in subdirectories(&collection_dir, stats)? {
                import_model(catalog, config, &root, library_id, &model_dir, stats).await?;
            }
        }
    }

    Ok(())
}

/// Import one model directory: resolve its creator and collection, insert
/// the model row, then a file row for every regular file beneath it.
async fn import_model(
    catalog: &dyn Catalog,
    config: &Config,
    root: &Path,
    library_id: i64,
    model_dir: &Path,
    stats: &mut ScanStats,
) -> Result<()> {
    let identity = model_identity(model_dir)?;
    tracing::info!("Processing model {}", display_name(model_dir));

    let creator = get_or_create_creator(catalog, &identity.creator).await?;
    let collection = get_or_create_collection(catalog, &identity.collection, None).await?;
    stats.record_creator(creator.id);
    stats.record_collection(collection.id);

    let now = Utc::now().naive_utc();
    let model = catalog
        .insert_model(&NewModel {
            name: identity.name,
            path: relative_to_root(root, model_dir)?,
            library_id,
            creator_id: creator.id,
            collection_id: collection.id,
            created_at: now,
            updated_at: now,
        })
        .await?;
    stats.record_model();

    import_model_files(catalog, config, model.id, model_dir, stats).await
}

/// Insert a ModelFile row for every regular file at any depth beneath the
/// model directory.
async fn import_model_files(
    catalog: &dyn Catalog,
    config: &Config,
    model_id: i64,
    model_dir: &Path,
    stats: &mut ScanStats,
) -> Result<()> {
    let model_name = display_name(model_dir);
    let spinner = config
        .options
        .show_progress
        .then(|| create_spinner(&format!("Importing {}", model_name)));

    for entry in WalkDir::new(model_dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();
        tracing::info!("Processing file {}", filename);
        if let Some(spinner) = &spinner {
            spinner.set_message(format!("Importing {}: {}", model_name, filename));
        }

        let size = entry.metadata()?.len();
        let digest = file_digest(entry.path())?;
        let now = Utc::now().naive_utc();
        catalog
            .insert_model_file(&NewModelFile {
                filename,
                model_id,
                presupported: false,
                y_up: false,
                digest,
                notes: String::new(),
                caption: String::new(),
                size: size as i64,
                presupported_version_id: None,
                created_at: now,
                updated_at: now,
            })
            .await?;
        stats.record_file(size);
    }

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    Ok(())
}

/// Immediate subdirectories of `dir`, sorted by name for deterministic
/// scan order. Non-directory entries are counted and skipped.
fn subdirectories(dir: &Path, stats: &mut ScanStats) -> Result<Vec<PathBuf>> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)?.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut dirs = Vec::new();
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        } else {
            tracing::debug!("Skipping non-directory entry {}", path.display());
            stats.record_skipped();
        }
    }

    Ok(dirs)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::MemoryCatalog;
    use crate::error::Error;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn test_config(root: &Path) -> Config {
        let mut config = Config::default();
        config.library.root_folder = Some(root.to_path_buf());
        config.library.library_id = Some(7);
        config.options.show_progress = false;
        config
    }

    fn write_file(path: &Path, contents: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut file = File::create(path).unwrap();
        file.write_all(contents).unwrap();
    }

    #[tokio::test]
    async fn test_end_to_end_single_model() {
        let root = TempDir::new().unwrap();
        write_file(
            &root.path().join("CreatorA/CollectionB/ModelC-1234/mesh.obj"),
            b"0123456789",
        );

        let catalog = MemoryCatalog::new();
        let mut stats = ScanStats::default();
        import_library(&catalog, &test_config(root.path()), &mut stats)
            .await
            .unwrap();

        let creators = catalog.creators();
        assert_eq!(creators.len(), 1);
        assert_eq!(creators[0].name, "CreatorA");

        let collections = catalog.collections();
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].name.as_deref(), Some("CollectionB"));
        assert_eq!(collections[0].collection_id, None);

        let models = catalog.models();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name, "ModelC");
        assert_eq!(models[0].library_id, 7);
        assert_eq!(models[0].creator_id, Some(creators[0].id));
        assert_eq!(models[0].collection_id, Some(collections[0].id));
        assert_eq!(models[0].path, "CreatorA/CollectionB/ModelC-1234");

        let files = catalog.model_files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename.as_deref(), Some("mesh.obj"));
        assert_eq!(files[0].model_id, models[0].id);
        assert_eq!(files[0].size, Some(10));
        assert!(!files[0].presupported);
        assert!(!files[0].y_up);
        assert_eq!(files[0].presupported_version_id, None);

        let digest = files[0].digest.as_deref().unwrap();
        assert_eq!(digest.len(), 128);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        assert_eq!(stats.models_imported, 1);
        assert_eq!(stats.files_imported, 1);
        assert_eq!(stats.bytes_digested, 10);
        assert_eq!(stats.creators_resolved(), 1);
        assert_eq!(stats.collections_resolved(), 1);
    }

    #[tokio::test]
    async fn test_model_path_never_contains_root() {
        let root = TempDir::new().unwrap();
        write_file(
            &root.path().join("CreatorA/CollectionB/ModelC-1234/mesh.obj"),
            b"x",
        );

        let catalog = MemoryCatalog::new();
        let mut stats = ScanStats::default();
        import_library(&catalog, &test_config(root.path()), &mut stats)
            .await
            .unwrap();

        let root_str = root.path().to_string_lossy().into_owned();
        for model in catalog.models() {
            assert!(!model.path.contains(&root_str));
            assert!(!Path::new(&model.path).is_absolute());
        }
    }

    #[tokio::test]
    async fn test_nested_files_are_imported() {
        let root = TempDir::new().unwrap();
        let model_dir = root.path().join("CreatorA/CollectionB/ModelC-1234");
        write_file(&model_dir.join("mesh.obj"), b"body");
        write_file(&model_dir.join("parts/leg.stl"), b"leg part");

        let catalog = MemoryCatalog::new();
        let mut stats = ScanStats::default();
        import_library(&catalog, &test_config(root.path()), &mut stats)
            .await
            .unwrap();

        let files = catalog.model_files();
        assert_eq!(files.len(), 2);
        let filenames: Vec<_> = files.iter().filter_map(|f| f.filename.as_deref()).collect();
        assert!(filenames.contains(&"mesh.obj"));
        // Nested files keep their basename only.
        assert!(filenames.contains(&"leg.stl"));
    }

    #[tokio::test]
    async fn test_shared_creator_and_collection_are_not_duplicated() {
        let root = TempDir::new().unwrap();
        write_file(
            &root.path().join("CreatorA/CollectionB/ModelC-1234/mesh.obj"),
            b"first",
        );
        write_file(
            &root.path().join("CreatorA/CollectionB/ModelD-5678/mesh.obj"),
            b"second",
        );

        let catalog = MemoryCatalog::new();
        let mut stats = ScanStats::default();
        import_library(&catalog, &test_config(root.path()), &mut stats)
            .await
            .unwrap();

        assert_eq!(catalog.creators().len(), 1);
        assert_eq!(catalog.collections().len(), 1);
        assert_eq!(catalog.models().len(), 2);
    }

    #[tokio::test]
    async fn test_rerun_duplicates_models_but_not_creators() {
        let root = TempDir::new().unwrap();
        write_file(
            &root.path().join("CreatorA/CollectionB/ModelC-1234/mesh.obj"),
            b"contents",
        );

        let catalog = MemoryCatalog::new();
        let config = test_config(root.path());

        let mut stats = ScanStats::default();
        import_library(&catalog, &config, &mut stats).await.unwrap();
        let mut stats = ScanStats::default();
        import_library(&catalog, &config, &mut stats).await.unwrap();

        // Creators and collections go through lookup-or-create; models and
        // files are straight inserts.
        assert_eq!(catalog.creators().len(), 1);
        assert_eq!(catalog.collections().len(), 1);
        assert_eq!(catalog.models().len(), 2);
        assert_eq!(catalog.model_files().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_model_dir_aborts_scan() {
        let root = TempDir::new().unwrap();
        write_file(
            &root.path().join("CreatorA/CollectionB/NoSeparator/mesh.obj"),
            b"contents",
        );

        let catalog = MemoryCatalog::new();
        let mut stats = ScanStats::default();
        let err = import_library(&catalog, &test_config(root.path()), &mut stats)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::PathFormat { .. }));
        // Identity parsing happens before any insert for the model.
        assert!(catalog.models().is_empty());
        assert!(catalog.model_files().is_empty());
    }

    #[tokio::test]
    async fn test_stray_files_are_skipped() {
        let root = TempDir::new().unwrap();
        write_file(&root.path().join("README.txt"), b"stray at root");
        write_file(&root.path().join("CreatorA/notes.txt"), b"stray in creator");
        write_file(
            &root.path().join("CreatorA/CollectionB/cover.jpg"),
            b"stray in collection",
        );
        write_file(
            &root.path().join("CreatorA/CollectionB/ModelC-1234/mesh.obj"),
            b"contents",
        );

        let catalog = MemoryCatalog::new();
        let mut stats = ScanStats::default();
        import_library(&catalog, &test_config(root.path()), &mut stats)
            .await
            .unwrap();

        assert_eq!(catalog.models().len(), 1);
        assert_eq!(catalog.model_files().len(), 1);
        assert_eq!(stats.entries_skipped, 3);
    }
}
