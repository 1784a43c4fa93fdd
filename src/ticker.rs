use std::time::{Duration, Instant};

/// How long the event loop waits for a key before redrawing
pub const POLL_MS: u64 = 250;
/// How often the clock used for highlighting is refreshed
pub const CLOCK_REFRESH_SECS: u64 = 30;

pub fn poll_duration() -> Duration {
    Duration::from_millis(POLL_MS)
}

/// Fires once per interval
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    pub fn clock() -> Self {
        Self::new(Duration::from_secs(CLOCK_REFRESH_SECS))
    }

    /// True when at least one interval passed since it last fired
    pub fn due_at(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    pub fn due(&mut self) -> bool {
        self.due_at(Instant::now())
    }
}
