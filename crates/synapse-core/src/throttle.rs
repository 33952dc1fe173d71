use std::time::Duration;

/// Minimum-interval gate for trail bursts.
///
/// The gate is checked once per pointer event and records a single
/// timestamp per accepted event, however many entities the burst spawns.
#[derive(Clone, Copy, Debug)]
pub struct RateLimiter {
    interval: Duration,
    last: Option<Duration>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn ready(&self, now: Duration) -> bool {
        match self.last {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.interval,
        }
    }

    pub fn mark(&mut self, now: Duration) {
        self.last = Some(now);
    }

    pub fn last(&self) -> Option<Duration> {
        self.last
    }
}
