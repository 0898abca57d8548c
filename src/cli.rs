//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `stamp`.
#[derive(Debug, Parser)]
#[command(name = "stamp", version, about = "Print the local time as YYYY/MM/DD HH:MM:SS")]
pub struct Cli {
    /// Record every clock read to this cassette file (overrides `STAMP_RECORD`).
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "replay")]
    pub record: Option<PathBuf>,
    /// Replay clock reads from this cassette file (overrides `STAMP_REPLAY`).
    #[arg(long, global = true, value_name = "PATH")]
    pub replay: Option<PathBuf>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current local date and time.
    Now,
    /// Produce a timestamp and check its layout.
    Verify,
}
