//! Binary entrypoint for the `stamp` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // An optional .env may set STAMP_RECORD / STAMP_REPLAY.
    let _ = dotenvy::dotenv();

    match stamp::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
