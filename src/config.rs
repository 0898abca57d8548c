//! Runtime configuration from the environment and CLI flags.

use std::env;
use std::path::PathBuf;

/// Environment variable naming a cassette file to record clock reads into.
pub const RECORD_VAR: &str = "STAMP_RECORD";
/// Environment variable naming a cassette file to replay clock reads from.
pub const REPLAY_VAR: &str = "STAMP_REPLAY";

/// How the clock should be sourced for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockMode {
    /// Read the host's local clock.
    Live,
    /// Read the host clock and record every read to the given cassette.
    Record(PathBuf),
    /// Serve clock reads from the given cassette.
    Replay(PathBuf),
}

/// Settings gathered from `.env`, the process environment and CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StampConfig {
    /// Cassette path to record into.
    pub record: Option<PathBuf>,
    /// Cassette path to replay from.
    pub replay: Option<PathBuf>,
}

impl StampConfig {
    /// Reads `STAMP_RECORD` and `STAMP_REPLAY` from the process environment.
    ///
    /// Empty values are treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self { record: path(RECORD_VAR), replay: path(REPLAY_VAR) }
    }

    /// Applies CLI flag values on top of this config. Flags win.
    #[must_use]
    pub fn merge_cli(mut self, record: Option<PathBuf>, replay: Option<PathBuf>) -> Self {
        if record.is_some() {
            self.record = record;
        }
        if replay.is_some() {
            self.replay = replay;
        }
        self
    }

    /// Resolves the clock mode.
    ///
    /// # Errors
    ///
    /// Returns an error if both a record and a replay cassette are set.
    pub fn mode(&self) -> Result<ClockMode, String> {
        match (&self.record, &self.replay) {
            (Some(record), Some(replay)) => Err(format!(
                "Cannot record to {} and replay from {} in the same run",
                record.display(),
                replay.display()
            )),
            (Some(record), None) => Ok(ClockMode::Record(record.clone())),
            (None, Some(replay)) => Ok(ClockMode::Replay(replay.clone())),
            (None, None) => Ok(ClockMode::Live),
        }
    }
}
