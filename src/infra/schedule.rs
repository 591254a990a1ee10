//! Polling cadence for the price source.
//!
//! The contract: fetch immediately on first use, re-fetch once the refresh
//! interval elapses, allow manual refreshes no more often than the throttle
//! window, and never have two requests in flight at once. A failed poll
//! simply waits for the next tick; there is no backoff.

use std::time::{Duration, Instant};

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(10 * 60);
pub const REFRESH_THROTTLE: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub struct RefreshSchedule {
    interval: Duration,
    throttle: Duration,
    last_attempt: Option<Instant>,
    in_flight: bool,
}

impl Default for RefreshSchedule {
    fn default() -> Self {
        Self::new(REFRESH_INTERVAL, REFRESH_THROTTLE)
    }
}

impl RefreshSchedule {
    pub fn new(interval: Duration, throttle: Duration) -> Self {
        Self {
            interval,
            throttle,
            last_attempt: None,
            in_flight: false,
        }
    }

    /// Scheduled tick: due immediately on first use, then once per interval.
    pub fn tick_due(&self, now: Instant) -> bool {
        !self.in_flight && self.elapsed_since_attempt(now, self.interval)
    }

    /// Manual refresh (window regaining focus, refresh button): allowed at
    /// most once per throttle window regardless of how often it is asked.
    pub fn manual_due(&self, now: Instant) -> bool {
        !self.in_flight && self.elapsed_since_attempt(now, self.throttle)
    }

    /// Marks a poll as started. Returns false when one is already in
    /// flight, so concurrent callers collapse into a single request.
    pub fn begin(&mut self, now: Instant) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.last_attempt = Some(now);
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    /// Time remaining until the next scheduled tick is due; zero when due
    /// now. Manual refreshes move `last_attempt`, so the poll loop must
    /// re-derive its sleep from here instead of sleeping a fixed interval.
    pub fn next_tick_in(&self, now: Instant) -> Duration {
        match self.last_attempt {
            Some(at) => self.interval.saturating_sub(now.duration_since(at)),
            None => Duration::ZERO,
        }
    }

    fn elapsed_since_attempt(&self, now: Instant, window: Duration) -> bool {
        self.last_attempt
            .map(|at| now.duration_since(at) >= window)
            .unwrap_or(true)
    }
}
