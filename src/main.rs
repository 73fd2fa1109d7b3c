//! TeslaGrid - A terminal reliability cockpit for a charging network
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use teslagrid_app::config;
use teslagrid_core::logging;
use tracing::{info, warn};

/// TeslaGrid - Supercharger network and fleet reliability cockpit
#[derive(Parser, Debug)]
#[command(name = "teslagrid")]
#[command(about = "A terminal reliability cockpit for a charging network", long_about = None)]
struct Args {
    /// Start at this path instead of the configured one (e.g. /dashboard/forecast)
    #[arg(long, value_name = "PATH")]
    path: Option<String>,

    /// Run in headless mode (NDJSON output, commands on stdin, no TUI)
    #[arg(long)]
    headless: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let config_path = args.config.unwrap_or_else(config::default_config_path);
    if let Err(e) = config::init_config_file(&config_path) {
        warn!("Could not create default config file: {}", e);
    }
    let (settings, save_path) = config::load_session_settings(&config_path);
    info!(
        "Loaded settings from {}: icons={}",
        config_path.display(),
        settings.ui.icons
    );

    if args.headless {
        teslagrid::run_headless(settings, save_path, args.path.as_deref()).await?;
    } else {
        teslagrid::run(settings, save_path, args.path.as_deref()).await?;
    }

    Ok(())
}
