//! CLI commands using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// VisionLint: Automated Quality Assurance for Computer Vision Datasets.
#[derive(Parser, Debug)]
#[command(name = "vision-lint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit a dataset for integrity issues
    Audit {
        /// Dataset directory or single image file
        path: PathBuf,

        /// Print findings as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Worker threads (0 = one per CPU, 1 = sequential)
        #[arg(short = 'j', long, default_value_t = 0)]
        threads: usize,

        /// Image extensions to check (e.g. jpg,png)
        #[arg(short, long, value_delimiter = ',')]
        extensions: Option<Vec<String>>,

        /// Disable the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}
