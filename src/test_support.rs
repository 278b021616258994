//! Deterministic clock shared by the unit tests.

use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use std::sync::{Mutex, PoisonError};

/// Start of every test timeline: 2026-01-05T09:00:00Z.
const BASE_TIMESTAMP_SECS: i64 = 1_767_603_600;

/// Clock pinned to a controllable instant.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Creates a clock pinned to `now`.
    pub const fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Creates a clock pinned to the shared base timestamp.
    pub fn base() -> Self {
        Self::at(DateTime::from_timestamp(BASE_TIMESTAMP_SECS, 0).unwrap_or_default())
    }

    /// Moves the pinned instant forward by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        let mut guard = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *guard += delta;
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
