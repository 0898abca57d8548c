//! Clock port for obtaining the current local time.

use chrono::NaiveDateTime;

/// Provides the current local wall-clock time.
///
/// The value is already adjusted for the host time zone, so formatting it
/// needs no further zone handling. Tests substitute a fixed or replayed
/// clock to make the output deterministic.
pub trait Clock: Send + Sync {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}
