//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use filesnap_core::{DEFAULT_DB, DEFAULT_ROOT};

#[derive(Debug, Parser)]
#[command(name = "filesnap")]
#[command(author, version, about = "Build a SQLite DB of project files", long_about = None)]
pub struct Cli {
    /// Project root directory
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Path to the SQLite database
    #[arg(long, default_value = DEFAULT_DB)]
    pub db: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
