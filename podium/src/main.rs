//! CLI entry point: generate a full report site from a JSON configuration.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use podium::generate_site;
use podium_types::{PodiumError, SiteConfig};

#[derive(Parser, Debug)]
#[command(name = "podium", about = "Generate static leaderboard report pages")]
struct Args {
    /// Path to the site configuration (JSON).
    #[arg(long)]
    config: PathBuf,

    /// Output directory for the generated pages.
    #[arg(long, default_value = "site")]
    out: PathBuf,
}

fn main() -> Result<(), PodiumError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let raw = fs::read_to_string(&args.config)
        .map_err(|e| PodiumError::io(format!("{}: {e}", args.config.display())))?;
    let config: SiteConfig =
        serde_json::from_str(&raw).map_err(|e| PodiumError::config(e.to_string()))?;

    generate_site(&config, &args.out)
}
