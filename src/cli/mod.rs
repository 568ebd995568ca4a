//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "envconv")]
#[command(about = "Convert KEY=VALUE environment-variable text to a JSON array")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input source (env text, file, or directory)
    #[arg()]
    pub input: Option<String>,

    /// Output file path (default: stdout); output directory in directory mode
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read env text from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,
}
