//! Fixed-pattern local timestamps.
//!
//! [`get_date_time`] returns the host's current local date and time as
//! `YYYY/MM/DD HH:MM:SS`, e.g. `2015/12/12 23:00:00`. Use
//! [`TimestampFormatter`] with a [`ports::Clock`] of your own to control
//! which instant is formatted.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod formatter;
pub mod ports;

pub use formatter::{check_layout, format_timestamp, get_date_time, TimestampFormatter};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}
