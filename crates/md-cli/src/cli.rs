//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Simple, command-line DICOM-RAW matcher.
///
/// Associates DICOM files with raw TIFF acquisitions by comparing their
/// embedded acquisition timestamps.
///
/// With one path, prints the comment and timestamp of the file (or of every
/// file in the directory). With two paths (DICOM first, RAW second), matches
/// them: two directories give a full mapping, a file and a directory give a
/// one-to-many scan, two files give a pairwise comparison.
#[derive(Debug, Parser)]
#[command(name = "match-dicom", version, about, long_about)]
pub struct Cli {
    /// DICOM path, then RAW path. Each may be a file or a directory.
    #[arg(num_args = 0..=2, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Raw mode: read a single path as RAW, or key matches by the RAW side.
    #[arg(short, long)]
    pub raw: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Matching window in seconds (overrides the configuration).
    #[arg(short, long, value_name = "SECONDS")]
    pub tolerance: Option<f64>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}
