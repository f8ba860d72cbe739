//! Leading-edge debounce for list refreshes.
//!
//! The first call of a burst runs immediately. Calls arriving before the
//! window has elapsed since the previous call collapse into one trailing
//! run, fired by [`Debouncer::poll`] once the burst goes quiet. The clock
//! is passed in so the event loop tick and tests share one notion of time.

use std::time::{Duration, Instant};

use ism_config::constants::REFRESH_DEBOUNCE_MS;

pub const REFRESH_DEBOUNCE: Duration = Duration::from_millis(REFRESH_DEBOUNCE_MS);

/// Outcome of a debounced call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Run now.
    Now,
    /// Collapsed into the pending trailing run.
    Deferred,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_call: Option<Instant>,
    pending: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(REFRESH_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_call: None,
            pending: false,
        }
    }

    pub fn call(&mut self, now: Instant) -> Trigger {
        let in_burst = self
            .last_call
            .is_some_and(|last| now.saturating_duration_since(last) < self.window);
        self.last_call = Some(now);

        if in_burst {
            self.pending = true;
            Trigger::Deferred
        } else {
            self.pending = false;
            Trigger::Now
        }
    }

    /// Returns `true` exactly once when a deferred run is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.pending {
            return false;
        }
        let due = self
            .last_call
            .is_none_or(|last| now.saturating_duration_since(last) >= self.window);
        if due {
            self.pending = false;
        }
        due
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_burst_runs_once_then_trails() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();

        assert_eq!(debouncer.call(t0), Trigger::Now);
        assert_eq!(debouncer.call(t0 + ms(100)), Trigger::Deferred);
        assert_eq!(debouncer.call(t0 + ms(200)), Trigger::Deferred);

        assert!(!debouncer.poll(t0 + ms(400)));
        assert!(!debouncer.poll(t0 + ms(650)));
        assert!(debouncer.poll(t0 + ms(700)));
        assert!(!debouncer.poll(t0 + ms(800)));
    }

    #[test]
    fn test_single_call_has_no_trailing_run() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.call(t0), Trigger::Now);
        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll(t0 + ms(1000)));
    }

    #[test]
    fn test_quiet_gap_starts_new_burst() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.call(t0), Trigger::Now);
        assert_eq!(debouncer.call(t0 + ms(600)), Trigger::Now);
    }
}
