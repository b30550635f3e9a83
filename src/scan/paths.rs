//! Model path parsing.
//!
//! A model directory is expected three levels below the scan root:
//! `<root>/<creator>/<collection>/<model name>-<variant>`. The variant
//! token (typically a UUID) is split off the directory name at the last
//! hyphen so that model names may themselves contain hyphens.

use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Identity derived from a model directory's path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelIdentity {
    pub creator: String,
    pub collection: String,
    /// Semantic model name, variant suffix stripped.
    pub name: String,
    /// Variant/UUID token after the last hyphen.
    pub variant: String,
}

/// Split a model directory name into `(name, variant)` at the last hyphen.
///
/// A directory name without any hyphen is malformed; the resulting error is
/// not caught anywhere, so it aborts the whole scan.
pub fn parse_model_dir_name(dir_name: &str) -> Result<(String, String)> {
    match dir_name.rsplit_once('-') {
        Some((name, variant)) => Ok((name.to_string(), variant.to_string())),
        None => Err(Error::PathFormat {
            name: dir_name.to_string(),
            reason: "expected '<name>-<variant>'".to_string(),
        }),
    }
}

/// Derive a model's identity from the last three segments of its path.
pub fn model_identity(model_dir: &Path) -> Result<ModelIdentity> {
    let mut segments = model_dir.components().rev().filter_map(|c| match c {
        Component::Normal(segment) => Some(segment),
        _ => None,
    });

    let malformed = |reason: &str| Error::PathFormat {
        name: model_dir.display().to_string(),
        reason: reason.to_string(),
    };

    let dir_name = segments
        .next()
        .ok_or_else(|| malformed("empty path"))?
        .to_str()
        .ok_or_else(|| malformed("non-UTF-8 path segment"))?;
    let collection = segments
        .next()
        .ok_or_else(|| malformed("missing collection segment"))?
        .to_str()
        .ok_or_else(|| malformed("non-UTF-8 path segment"))?;
    let creator = segments
        .next()
        .ok_or_else(|| malformed("missing creator segment"))?
        .to_str()
        .ok_or_else(|| malformed("non-UTF-8 path segment"))?;

    let (name, variant) = parse_model_dir_name(dir_name)?;

    Ok(ModelIdentity {
        creator: creator.to_string(),
        collection: collection.to_string(),
        name,
        variant,
    })
}

/// Strip the scan root prefix, yielding the path stored on a model row.
pub fn relative_to_root(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| Error::PathOutsideRoot(path.display().to_string()))?;
    Ok(relative.to_string_lossy().into_owned())
}
