//! Live clock using the host's local time zone.

use chrono::{Local, NaiveDateTime};

use crate::ports::clock::Clock;

/// Live clock that returns the real current local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_current_local_time() {
        let clock = LiveClock;
        let before = Local::now().naive_local();
        let now = clock.now();
        let after = Local::now().naive_local();

        // A DST fall-back between the two reads would break ordering; the
        // window is a few microseconds wide.
        assert!(now >= before);
        assert!(now <= after);
    }
}
