//! Clock pinned to a single instant.

use chrono::NaiveDateTime;

use crate::ports::clock::Clock;

/// Clock that always reports the same local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    /// Creates a clock that always returns `at`.
    #[must_use]
    pub const fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }

    /// Parses `value` as `YYYY-MM-DD HH:MM:SS` (or ISO 8601 with a `T`).
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a valid local date/time.
    pub fn parse(value: &str) -> Result<Self, String> {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
            .or_else(|_| value.parse::<NaiveDateTime>())
            .map(Self::new)
            .map_err(|e| format!("Invalid fixed clock time {value:?}: {e}"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at
    }
}
