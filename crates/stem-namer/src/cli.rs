use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for `classify`.
#[derive(Debug, Parser)]
#[command(name = "classify")]
#[command(version, about = "Classify audio files into short instrument names", long_about = None)]
pub struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Audio files to classify
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,
}
