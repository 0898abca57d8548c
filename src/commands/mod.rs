//! Command dispatch and handlers.

pub mod now;
pub mod verify;

use crate::cli::{Cli, Command};
use crate::config::StampConfig;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// The clock source comes from `STAMP_RECORD` / `STAMP_REPLAY`, overridden by
/// the `--record` / `--replay` flags. A recording is written once the command
/// has finished, even when it failed.
///
/// # Errors
///
/// Returns an error string if configuration is contradictory, a cassette
/// cannot be loaded or written, or the selected command fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = StampConfig::from_env().merge_cli(cli.record.clone(), cli.replay.clone());
    let ctx = ServiceContext::from_mode(&config.mode()?)?;

    let result = dispatch_with_context(&cli.command, &ctx);
    let saved = ctx.finish();
    if let Ok(Some(path)) = &saved {
        eprintln!("Recording saved to: {}", path.display());
    }

    merge_outcomes(result, saved.map(|_| ()))
}

/// Combine the command outcome with the recording outcome.
///
/// The command's error comes first; a failed save is appended to it.
fn merge_outcomes(command: Result<(), String>, saved: Result<(), String>) -> Result<(), String> {
    match (command, saved) {
        (Err(command_err), Err(save_err)) => {
            Err(format!("{command_err}\nAlso failed to save recording: {save_err}"))
        }
        (Err(err), Ok(())) | (Ok(()), Err(err)) => Err(err),
        (Ok(()), Ok(())) => Ok(()),
    }
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Now => now::run(ctx),
        Command::Verify => verify::run(ctx),
    }
}
