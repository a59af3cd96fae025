//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Interactive 24-hour schedule planner.
///
/// Records named time intervals for a single day and visualizes how the
/// day's 1440 minutes are allocated among them. All state lives in memory
/// for the lifetime of the session; nothing is persisted.
#[derive(Debug, Parser)]
#[command(name = "dayplan", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
