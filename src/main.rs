//! Library Importer - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use library_importer::{
    cli::Args,
    config::{validate_config, Config},
    db::{Catalog, DryRunCatalog, PgCatalog},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_scan_stats,
        print_success, print_warning,
    },
    scan::{import_library, ScanStats},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::PathFormat { .. }
                | Error::PathOutsideRoot(_)
                | Error::Io(_)
                | Error::Walk(_) => ExitCode::from(exit_codes::SCAN_ERROR as u8),
                Error::Database(_) => ExitCode::from(exit_codes::DATABASE_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration, then merge CLI arguments over it
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        print_info(&format!(
            "Loaded configuration from {}",
            config_path.display()
        ));
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    args.merge_into_config(&mut config);
    validate_config(&config)?;

    print_config_summary(
        &config.root_folder()?.display().to_string(),
        config.library_id()?,
        if config.options.dry_run {
            "dry run"
        } else {
            "import"
        },
    );

    // Pick the storage gateway
    let catalog: Box<dyn Catalog> = if config.options.dry_run {
        print_warning("Dry run: intended writes are logged, nothing is persisted");
        Box::new(DryRunCatalog::new())
    } else {
        print_info("Connecting to catalog database...");
        Box::new(PgCatalog::connect(config.database_url()?).await?)
    };

    // Walk the hierarchy and import it
    let mut stats = ScanStats::default();
    import_library(catalog.as_ref(), &config, &mut stats).await?;

    print_scan_stats(&stats);
    print_success("Import complete");

    Ok(())
}
