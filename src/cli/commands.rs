use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::backend::memory::MemoryBackend;
use crate::backend::{ALL_TYPES_LABEL, HistoryBackend};
use crate::models::DataType;
use crate::tui::run_interactive;
use crate::utils::{default_data_path, format_path_with_tilde};

#[derive(Parser)]
#[command(name = "clipboard-history-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Browse and search clipboard history", long_about = None)]
pub struct Cli {
    /// Path to the history file (defaults to the platform data directory)
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about the history
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_path = match cli.data {
        Some(path) => path,
        None => default_data_path()?,
    };

    match &cli.command {
        Some(Commands::Stats) => {
            show_stats(&data_path)?;
        }
        None => {
            info!(path = %data_path.display(), "opening history");
            let backend = MemoryBackend::open(&data_path)?;
            run_interactive(backend)?;
        }
    }

    Ok(())
}

fn show_stats(data_path: &Path) -> Result<()> {
    let backend = MemoryBackend::open(data_path)?;
    let records = backend.get_history(ALL_TYPES_LABEL, "")?;

    let text_items = records.iter().filter(|r| matches!(r.data_type, DataType::Text)).count();
    let image_items = records.iter().filter(|r| matches!(r.data_type, DataType::Image)).count();
    let file_items = records.iter().filter(|r| matches!(r.data_type, DataType::Files)).count();
    let favorites = records.iter().filter(|r| r.is_favorite).count();

    println!("Clipboard History Statistics");
    println!("================================");
    println!("Total items: {}", records.len());
    println!("  Text: {}", text_items);
    println!("  Images: {}", image_items);
    println!("  Files: {}", file_items);
    println!("  Favorites: {}", favorites);
    println!();
    println!("History file: {}", format_path_with_tilde(data_path));

    Ok(())
}
