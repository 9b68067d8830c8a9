//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "projpack")]
#[command(author, version)]
#[command(about = "Package a project directory into a portable ZIP archive")]
pub struct Cli {
    /// Project directory to archive (default: current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output archive name without extension
    #[arg(short = 'o', long, value_name = "NAME")]
    pub output: Option<String>,

    /// Additional directory name to prune (can be repeated)
    #[arg(short = 'x', long = "exclude-dir", value_name = "NAME")]
    pub exclude_dir: Vec<String>,

    /// Additional exact file name to skip (can be repeated)
    #[arg(long = "skip-name", value_name = "NAME")]
    pub skip_name: Vec<String>,

    /// Additional file extension to skip, without the dot (can be repeated)
    #[arg(long = "skip-ext", value_name = "EXT")]
    pub skip_ext: Vec<String>,

    /// Compression level (1-9)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub compression_level: Option<u8>,

    /// Show a progress bar instead of per-file lines
    #[arg(long)]
    pub progress: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}
