use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use data_loader::TableStore;
use menu::Console;
use std::path::PathBuf;
use std::time::Instant;

mod app;
mod render;

use app::AppState;

/// Catalog Explorer - filter a catalog of titles interactively
#[derive(Parser)]
#[command(name = "catalog-explorer")]
#[command(about = "Build filters over a CSV catalog of titles, browse the result and export it", long_about = None)]
struct Cli {
    /// Path to the catalog CSV file
    #[arg(default_value = "netflix_titles.csv")]
    data_file: PathBuf,

    /// Log level used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // A catalog that can't be loaded ends the program with a non-zero exit code
    let start = Instant::now();
    let store = TableStore::load(&cli.data_file)
        .with_context(|| format!("Failed to load catalog from {}", cli.data_file.display()))?;
    println!(
        "{} Loaded {} titles from {} in {:?}",
        "✓".green(),
        store.table().len(),
        store.source().display(),
        start.elapsed()
    );

    let mut console = Console::stdio();
    AppState::new(store).run(&mut console)
}
