//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
///
/// Every value can also be supplied on the command line; CLI arguments win
/// over the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Scan target configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LibraryConfig {
    /// Root folder of the asset hierarchy.
    #[serde(default)]
    pub root_folder: Option<PathBuf>,

    /// Library identifier attached to every imported model.
    #[serde(default)]
    pub library_id: Option<i64>,
}

/// Database connection configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URI.
    #[serde(default)]
    pub url: Option<String>,
}

/// Import options configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Log intended writes instead of persisting them.
    #[serde(default)]
    pub dry_run: bool,

    /// Whether to show a progress spinner while digesting files.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            show_progress: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the configured scan root.
    pub fn root_folder(&self) -> Result<&Path> {
        self.library
            .root_folder
            .as_deref()
            .ok_or_else(|| Error::MissingConfig("library.root_folder".to_string()))
    }

    /// Get the configured library identifier.
    pub fn library_id(&self) -> Result<i64> {
        self.library
            .library_id
            .ok_or_else(|| Error::MissingConfig("library.library_id".to_string()))
    }

    /// Get the configured database URL.
    pub fn database_url(&self) -> Result<&str> {
        self.database
            .url
            .as_deref()
            .ok_or_else(|| Error::MissingConfig("database.url".to_string()))
    }
}
