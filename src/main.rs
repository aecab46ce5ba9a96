use clap::Parser;
use folio::core::catalog::{featured_books, load_catalog};
use folio::core::config::{self, CliOverrides, FolioConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "folio", about = "Featured books, in your terminal")]
struct Args {
    /// JSON catalog to show instead of the built-in featured list
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Show every card at once instead of revealing them one by one
    #[arg(long)]
    no_animation: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config decides the log level, so its errors are reported once logging is up
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (FolioConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        catalog: args.catalog.as_deref(),
        no_animation: args.no_animation,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - writes to folio.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("folio.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = &config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("Folio starting up: {:?}", resolved);

    let books = match &resolved.catalog_file {
        Some(path) => match load_catalog(path) {
            Ok(books) => books,
            Err(e) => {
                log::error!("Failed to load catalog {}: {}", path.display(), e);
                eprintln!("folio: {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => featured_books(),
    };

    match folio::tui::run(&resolved, books) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("folio: {e}");
            ExitCode::FAILURE
        }
    }
}
