//! `stamp now`: print the current local timestamp.

use crate::context::ServiceContext;

/// Print one formatted timestamp on stdout.
///
/// # Errors
///
/// Never fails; the signature matches the other command handlers.
#[allow(clippy::unnecessary_wraps)]
pub fn run(ctx: &ServiceContext) -> Result<(), String> {
    println!("{}", ctx.timestamp());
    Ok(())
}
