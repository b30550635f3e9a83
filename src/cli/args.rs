//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Library importer CLI.
#[derive(Parser, Debug)]
#[command(
    name = "library-importer",
    version,
    about = "Import a 3D model asset library into a catalog database",
    long_about = "Scans a creator/collection/model folder hierarchy and populates the\n\
                  catalog's creators, collections, models and model_files tables,\n\
                  computing a SHA-512 content digest for every file."
)]
pub struct Args {
    /// Root folder of the asset library.
    pub root_folder: Option<PathBuf>,

    /// Library identifier to attach imported models to.
    pub library_id: Option<i64>,

    /// PostgreSQL connection URI.
    #[arg(env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Log intended writes instead of persisting them.
    #[arg(long)]
    pub dry_run: bool,

    /// Path to configuration file.
    #[arg(short, long, default_value = "importer.toml")]
    pub config: PathBuf,

    /// Hide the per-model progress spinner.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(root) = self.root_folder {
            config.library.root_folder = Some(root);
        }

        if let Some(id) = self.library_id {
            config.library.library_id = Some(id);
        }

        if let Some(url) = self.database_url {
            config.database.url = Some(url);
        }

        // Boolean flags only override when set
        if self.dry_run {
            config.options.dry_run = true;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
