//! Command-line interface definitions.

pub mod terminal;

use clap::Parser;
use std::path::PathBuf;

/// Wishwatch - marketplace wishlist watcher and auto-purchase agent.
#[derive(Parser, Debug)]
#[command(name = "wishwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Operating identity (selects the wallet and wishlist to use)
    pub identity: String,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}
