use std::time::Duration;

use tokio::time::Instant;

/// Lets a call through at most once per interval.
///
/// The instant is recorded when a call is let through, not when it completes, so that
/// failing or still-running calls also hold the throttle closed.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    last_passed_at: Option<Instant>,
}

impl Throttle {
    pub const fn new(interval: Duration) -> Self {
        Self { interval, last_passed_at: None }
    }

    /// Check the throttle at `now` and close it on success.
    pub fn try_pass(&mut self, now: Instant) -> bool {
        if let Some(last_passed_at) = self.last_passed_at
            && now.saturating_duration_since(last_passed_at) < self.interval
        {
            return false;
        }
        self.last_passed_at = Some(now);
        true
    }
}
