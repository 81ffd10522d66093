use std::time::{Duration, Instant};

/// Fixed-period deadline tracker.
///
/// A `Ticker` never fires on its own; callers ask it how many whole periods
/// have elapsed via [`poll`](Ticker::poll) and feed [`deadline`](Ticker::deadline)
/// into the event loop's wait. Deadlines stay phase-aligned to the arming
/// instant, so a late poll does not shift subsequent ticks.
///
/// All methods take an explicit `now` so timer logic stays deterministic
/// under test.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    /// Arms a ticker whose first tick is due one `period` after `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        debug_assert!(!period.is_zero());
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Instant the next tick becomes due.
    pub fn deadline(&self) -> Instant {
        self.next_due
    }

    /// Re-arms the ticker; the next tick is due one period after `now`.
    pub fn restart(&mut self, now: Instant) {
        self.next_due = now + self.period;
    }

    /// Returns the number of whole periods elapsed by `now` and advances the
    /// deadline past them.
    ///
    /// After a stall of N periods this returns N, so callers apply the steps
    /// they missed rather than silently dropping them.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if now < self.next_due {
            return 0;
        }

        let past_due = now.saturating_duration_since(self.next_due);
        let ticks = 1 + (past_due.as_nanos() / self.period.as_nanos()) as u32;

        self.next_due += self.period * ticks;
        ticks
    }
}
