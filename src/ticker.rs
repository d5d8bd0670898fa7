//! Cancellable periodic task driven by the event loop
//!
//! The loop polls the ticker with the current time. A due ticker fires once
//! and schedules its next tick one interval after that poll, so a late poll
//! never produces a burst of catch-up ticks.

use std::time::{Duration, Instant};

/// Start/stop periodic scheduler with a start-up delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Periodic {
    interval: Duration,
    startup_delay: Duration,
    next_due: Option<Instant>,
}

impl Periodic {
    /// Create a stopped ticker
    #[must_use]
    pub const fn new(interval: Duration, startup_delay: Duration) -> Self {
        Self {
            interval,
            startup_delay,
            next_due: None,
        }
    }

    /// Start ticking; the first tick is due after the start-up delay.
    ///
    /// Restarting a running ticker resets the delay.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.startup_delay);
    }

    /// Stop ticking. Pending ticks are dropped.
    pub const fn stop(&mut self) {
        self.next_due = None;
    }

    /// Whether the ticker is running
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Tick period
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` when a tick is due at `now`, and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or `None` when stopped
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(30);
    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn test_stopped_never_fires() {
        let mut ticker = Periodic::new(INTERVAL, DELAY);
        let now = Instant::now();
        assert!(!ticker.is_running());
        assert!(!ticker.poll(now + Duration::from_secs(10)));
        assert_eq!(ticker.time_until_due(now), None);
    }

    #[test]
    fn test_startup_delay_precedes_first_tick() {
        let mut ticker = Periodic::new(INTERVAL, DELAY);
        let start = Instant::now();
        ticker.start(start);

        assert!(!ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(99)));
        assert!(ticker.poll(start + DELAY));
    }

    #[test]
    fn test_late_poll_fires_once() {
        let mut ticker = Periodic::new(INTERVAL, Duration::ZERO);
        let start = Instant::now();
        ticker.start(start);

        let late = start + INTERVAL * 10;
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert!(ticker.poll(late + INTERVAL));
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let mut ticker = Periodic::new(INTERVAL, Duration::ZERO);
        let start = Instant::now();
        ticker.start(start);
        ticker.stop();
        assert!(!ticker.poll(start + INTERVAL));
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_time_until_due() {
        let mut ticker = Periodic::new(INTERVAL, DELAY);
        let start = Instant::now();
        ticker.start(start);
        assert_eq!(
            ticker.time_until_due(start + Duration::from_millis(40)),
            Some(Duration::from_millis(60))
        );
        assert_eq!(
            ticker.time_until_due(start + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }
}
