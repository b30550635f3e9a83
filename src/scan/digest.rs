//! Content digests for model files.

use std::path::Path;

use sha2::{Digest, Sha512};

use crate::error::Result;

/// Compute the SHA-512 digest of a file as a lowercase hex string.
///
/// The whole file is read into memory; digests are recomputed on every
/// scan, there is no caching.
pub fn file_digest(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(hex::encode(Sha512::digest(&bytes)))
}
