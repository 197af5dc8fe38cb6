//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and manage compute images
#[derive(Parser, Debug)]
#[command(name = "compute-images")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Compute endpoint (overrides the settings file)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Identity token (overrides the settings file)
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a single image
    Get {
        /// Image id
        id: String,
    },

    /// List images
    List {
        /// Follow next links through every page
        #[arg(long)]
        all: bool,

        /// Stop after this many pages (implies --all)
        #[arg(long)]
        max_pages: Option<u64>,
    },

    /// Delete an image
    Delete {
        /// Image id
        id: String,
    },

    /// Resolve an image name to its id
    Find {
        /// Exact image name
        name: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one image per line)
    Json,
    /// Human-readable output
    Pretty,
}
