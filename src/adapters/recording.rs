//! Recording adapter that captures clock reads into a cassette.

use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;

use crate::cassette::recorder::CassetteRecorder;
use crate::ports::Clock;

/// Port name used for clock interactions in cassettes.
pub const CLOCK_PORT: &str = "clock";
/// Method name used for clock reads in cassettes.
pub const NOW_METHOD: &str = "now";

/// Records clock reads while delegating to an inner implementation.
pub struct RecordingClock {
    inner: Box<dyn Clock>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingClock {
    /// Creates a new recording clock wrapping the given implementation.
    pub fn new(inner: Box<dyn Clock>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Clock for RecordingClock {
    fn now(&self) -> NaiveDateTime {
        let result = self.inner.now();
        let output =
            serde_json::to_value(result).expect("failed to serialize recorded clock value");
        let mut guard = self.recorder.lock().expect("recorder lock poisoned");
        guard.record(CLOCK_PORT, NOW_METHOD, serde_json::json!({}), output);
        result
    }
}
