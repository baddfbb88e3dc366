//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level argument parser.
#[derive(Parser)]
#[command(name = "postbru")]
#[command(version)]
#[command(about = "Convert Postman collections to Bruno", long_about = None)]
pub struct Cli {
    /// Show detailed output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a single Postman collection
    Convert {
        /// Path to the Postman collection JSON file (v2.0 or v2.1)
        input: PathBuf,

        /// Output directory (default: ./<collection-name>)
        output_dir: Option<PathBuf>,
    },

    /// Convert every Postman collection found under a directory
    Batch {
        /// Directory scanned recursively for collection JSON files
        input_dir: PathBuf,

        /// Output directory for the converted collections
        output_dir: PathBuf,

        /// Keep going when a collection fails to convert
        #[arg(long)]
        continue_on_error: bool,
    },

    /// Convert a Postman environment file
    Env {
        /// Path to the Postman environment JSON file
        input: PathBuf,

        /// Output directory; the file lands in its environments/ subdirectory
        output_dir: PathBuf,
    },
}
