//! Replaying adapter that serves recorded clock reads.

use std::sync::Mutex;

use chrono::NaiveDateTime;

use super::recording::{CLOCK_PORT, NOW_METHOD};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::clock::Clock;

/// Replays recorded clock values from a cassette, in recording order.
pub struct ReplayingClock {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingClock {
    /// Creates a new replaying clock from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    /// Creates a replaying clock after checking the cassette's clock reads.
    ///
    /// Every `clock::now` output must be a local date/time, and there must be
    /// at least one.
    ///
    /// # Errors
    ///
    /// Returns an error naming the cassette and the offending interaction.
    pub fn from_cassette(cassette: &Cassette) -> Result<Self, String> {
        let mut reads = cassette
            .interactions
            .iter()
            .filter(|i| i.port == CLOCK_PORT && i.method == NOW_METHOD)
            .peekable();
        if reads.peek().is_none() {
            return Err(format!(
                "Cassette {:?} has no {CLOCK_PORT}::{NOW_METHOD} interactions",
                cassette.name
            ));
        }
        for read in reads {
            serde_json::from_value::<NaiveDateTime>(read.output.clone()).map_err(|e| {
                format!(
                    "Cassette {:?} seq={}: {CLOCK_PORT}::{NOW_METHOD} output {} is not a local \
                     date/time: {e}",
                    cassette.name, read.seq, read.output
                )
            })?;
        }
        Ok(Self::new(CassetteReplayer::new(cassette)))
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> NaiveDateTime {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            replayer.next_interaction(CLOCK_PORT, NOW_METHOD).output.clone()
        };
        serde_json::from_value(output).expect("clock::now: failed to deserialize NaiveDateTime")
    }
}
