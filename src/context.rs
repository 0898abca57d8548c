//! Service context wiring a clock adapter for a run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;

use crate::adapters::{FixedClock, LiveClock, RecordingClock, ReplayingClock};
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::ClockMode;
use crate::formatter::format_timestamp;
use crate::ports::clock::Clock;

/// Cassette name written into recordings.
const SESSION_NAME: &str = "stamp-session";

/// Holds the clock for a run, plus the recorder when recording.
///
/// Call [`ServiceContext::finish`] to flush a recording to disk.
pub struct ServiceContext {
    /// Clock for obtaining the current local time.
    pub clock: Box<dyn Clock>,
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a context reading the host's local clock.
    #[must_use]
    pub fn live() -> Self {
        Self { clock: Box::new(LiveClock), recorder: None }
    }

    /// Creates a context whose clock always reports `at`.
    #[must_use]
    pub fn fixed(at: NaiveDateTime) -> Self {
        Self { clock: Box::new(FixedClock::new(at)), recorder: None }
    }

    /// Creates a context that reads the live clock and records every read.
    ///
    /// The cassette is written to `path` by [`ServiceContext::finish`].
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, SESSION_NAME)));
        Self {
            clock: Box::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&recorder))),
            recorder: Some(recorder),
        }
    }

    /// Creates a context that serves clock reads from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed, has
    /// no clock reads, or holds a clock read that is not a date/time.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        let clock = ReplayingClock::from_cassette(&cassette)
            .map_err(|e| format!("Invalid cassette file {}: {e}", path.display()))?;
        Ok(Self { clock: Box::new(clock), recorder: None })
    }

    /// Creates the context matching a resolved [`ClockMode`].
    ///
    /// # Errors
    ///
    /// Returns an error if a replay cassette cannot be loaded.
    pub fn from_mode(mode: &ClockMode) -> Result<Self, String> {
        match mode {
            ClockMode::Live => Ok(Self::live()),
            ClockMode::Record(path) => Ok(Self::recording(path)),
            ClockMode::Replay(path) => Self::replaying(path),
        }
    }

    /// Reads this context's clock once and formats it.
    #[must_use]
    pub fn timestamp(&self) -> String {
        format_timestamp(&self.clock.now())
    }

    /// Consumes the context, writing the recording if there is one.
    ///
    /// Returns the cassette path when a recording was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, String> {
        let Self { clock, recorder } = self;
        // Release the clock's handle on the recorder first.
        drop(clock);
        recorder.map(finish_recorder).transpose()
    }
}

/// Unwraps a shared recorder and writes its cassette.
///
/// # Errors
///
/// Returns an error if other handles to the recorder are still alive or the
/// file cannot be written.
fn finish_recorder(recorder: Arc<Mutex<CassetteRecorder>>) -> Result<PathBuf, String> {
    let recorder = Arc::try_unwrap(recorder)
        .map_err(|_| "Recording clock still holds a reference to the recorder".to_string())?
        .into_inner()
        .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
    recorder.finish().map_err(|e| format!("Failed to write clock cassette: {e}"))
}
