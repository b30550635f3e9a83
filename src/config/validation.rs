//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate a merged configuration before the scan starts.
pub fn validate_config(config: &Config) -> Result<()> {
    let root = config.root_folder()?;
    if !root.is_dir() {
        return Err(Error::ConfigValidation {
            field: "library.root_folder".to_string(),
            message: format!("not a directory: {}", root.display()),
        });
    }

    config.library_id()?;

    // A dry run never touches the database, so the URL is only required
    // for a real import.
    if !config.options.dry_run && config.database.url.is_none() {
        return Err(Error::MissingConfig(
            "database.url (or the DATABASE_URL positional argument)".to_string(),
        ));
    }

    Ok(())
}
