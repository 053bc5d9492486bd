// tests/support/mocks/time.rs
use articles_api::application::ports::time::Clock;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Always returns `fixed_now()`.
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Starts at `fixed_now()` and moves forward one second per call.
#[derive(Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value the next `now()` call will return.
    pub fn peek(&self) -> DateTime<Utc> {
        fixed_now() + Duration::seconds(self.ticks.load(Ordering::SeqCst))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}
