//! Fixed-pattern rendering of the current local date and time.
//!
//! The layout is always `YYYY/MM/DD HH:MM:SS`: Gregorian calendar,
//! 24-hour clock, zero-padded numeric fields, no locale involvement.

use chrono::NaiveDateTime;

use crate::adapters::live::LiveClock;
use crate::ports::clock::Clock;

/// chrono pattern producing `2015/12/12 23:00:00`.
pub const PATTERN: &str = "%Y/%m/%d %H:%M:%S";

/// Length of every formatted timestamp for years `0..=9999`.
pub const FORMATTED_LEN: usize = 19;

/// Byte positions and the separator expected at each.
const SEPARATORS: [(usize, u8); 5] = [(4, b'/'), (7, b'/'), (10, b' '), (13, b':'), (16, b':')];

/// Renders `at` with [`PATTERN`]. Sub-second precision is dropped.
#[must_use]
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(PATTERN).to_string()
}

/// Returns the current local date and time formatted with [`PATTERN`].
#[must_use]
pub fn get_date_time() -> String {
    TimestampFormatter::system().get_date_time()
}

/// Checks that `value` has the `YYYY/MM/DD HH:MM:SS` shape.
///
/// Only the layout is checked: width, separator positions and that every
/// other position is an ASCII digit. Field ranges are not validated.
///
/// # Errors
///
/// Returns a message describing the first violation found.
pub fn check_layout(value: &str) -> Result<(), String> {
    let bytes = value.as_bytes();
    if bytes.len() != FORMATTED_LEN {
        return Err(format!("expected {FORMATTED_LEN} ASCII characters, got {value:?}"));
    }

    for (pos, &byte) in bytes.iter().enumerate() {
        match SEPARATORS.iter().find(|(at, _)| *at == pos) {
            Some(&(_, sep)) if byte != sep => {
                return Err(format!(
                    "expected {:?} at position {pos}, got {:?} in {value:?}",
                    char::from(sep),
                    char::from(byte)
                ));
            }
            None if !byte.is_ascii_digit() => {
                return Err(format!(
                    "expected a digit at position {pos}, got {:?} in {value:?}",
                    char::from(byte)
                ));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Formats "now" as read from an injected [`Clock`].
pub struct TimestampFormatter {
    clock: Box<dyn Clock>,
}

impl TimestampFormatter {
    /// Creates a formatter reading from `clock`.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Creates a formatter backed by the host's local clock.
    #[must_use]
    pub fn system() -> Self {
        Self::new(Box::new(LiveClock))
    }

    /// Reads the clock once and formats the result.
    #[must_use]
    pub fn get_date_time(&self) -> String {
        format_timestamp(&self.clock.now())
    }
}

impl std::fmt::Debug for TimestampFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimestampFormatter").finish_non_exhaustive()
    }
}
