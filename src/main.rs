//! Product Loader - terminal wizard for loading product listings onto marketplaces
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use ploader_app::config;
use ploader_core::prelude::*;

/// Product Loader - analyze a product with AI and publish it to a marketplace
#[derive(Parser, Debug)]
#[command(name = "ploader")]
#[command(about = "Terminal wizard for loading product listings onto marketplaces", long_about = None)]
struct Args {
    /// Backend base URL (overrides `api.base_url` from the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        return init_config(args.config);
    }

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    ploader_core::logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref());
    if let Some(url) = args.api_url {
        info!("Backend URL overridden from command line: {}", url);
        settings.api.base_url = url;
    }

    let result = ploader_tui::run(settings).await;
    if let Err(e) = &result {
        error!("Product Loader exited with error: {}", e);
    } else {
        info!("Product Loader exiting");
    }
    result
}

fn init_config(explicit: Option<PathBuf>) -> Result<()> {
    let path = explicit
        .or_else(config::default_config_path)
        .ok_or_else(|| Error::config("no config directory available on this platform"))?;

    if config::init_config_file(&path)? {
        println!("Wrote default config to {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(())
}
