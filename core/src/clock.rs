//! Generation clock: the single "now" every fixture timestamp is relative to.

use crate::types::Timestamp;
use chrono::{Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedClock {
    now: Timestamp,
}

impl SeedClock {
    /// Capture the current wall-clock time once.
    pub fn system() -> Self {
        Self { now: Utc::now() }
    }

    /// A frozen clock, for reproducible runs.
    pub fn fixed(now: Timestamp) -> Self {
        Self { now }
    }

    /// Frozen clock from unix seconds. Out-of-range input falls back to the epoch.
    pub fn from_unix(secs: i64) -> Self {
        let now = Utc.timestamp_opt(secs, 0).single().unwrap_or_default();
        Self { now }
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// Midnight UTC of the current day.
    pub fn start_of_day(&self) -> Timestamp {
        self.now - Duration::seconds(self.now.timestamp().rem_euclid(SECONDS_PER_DAY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_never_moves() {
        let clock = SeedClock::from_unix(1_700_000_000);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn start_of_day_is_utc_midnight() {
        let clock = SeedClock::from_unix(1_700_000_000);
        let midnight = clock.start_of_day();
        assert_eq!(midnight.timestamp(), 1_699_920_000);
        assert!(clock.now() - midnight < Duration::days(1));
        assert_eq!(SeedClock::fixed(midnight).start_of_day(), midnight);
    }
}
