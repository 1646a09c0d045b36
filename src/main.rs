//! CLI entry point for the tiling-aligned wallpaper generator

use clap::Parser;
use tilewall::io::cli::{Cli, WallpaperRunner};
use tilewall::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

fn main() -> tilewall::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    WallpaperRunner::new(cli).process()
}
