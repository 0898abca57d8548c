//! `stamp verify`: produce a timestamp and check its layout.

use crate::context::ServiceContext;
use crate::formatter::check_layout;

/// Produce a timestamp, check it, and report the outcome.
///
/// # Errors
///
/// Returns an error naming the first layout violation.
pub fn run(ctx: &ServiceContext) -> Result<(), String> {
    let line = report(&ctx.timestamp())?;
    println!("{line}");
    Ok(())
}

/// Build the success line for `timestamp`, or the failure message.
fn report(timestamp: &str) -> Result<String, String> {
    check_layout(timestamp)
        .map(|()| format!("ok: {timestamp}"))
        .map_err(|e| format!("Malformed timestamp: {e}"))
}
