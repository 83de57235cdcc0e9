//! Cancellable deadline timers.
//!
//! # Responsibility
//! - Represent the typing-quiescence and saved-flash delays as explicit
//!   deadlines evaluated lazily against a caller-supplied clock.
//!
//! # Invariants
//! - Arming replaces any pending deadline (restart semantics).
//! - A cancelled timer can never report active again without a new `arm`.

use chrono::{DateTime, Duration, Utc};

/// One-shot debounce deadline.
///
/// There is no background callback: the owner arms the timer on an event and
/// asks `is_active(now)` when projecting state, so a stale deadline can never
/// mutate state after the owner moved on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTimer {
    deadline: Option<DateTime<Utc>>,
}

impl DebounceTimer {
    /// Creates an idle timer.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the timer to expire `quiet` after `now`.
    pub fn arm(&mut self, now: DateTime<Utc>, quiet: Duration) {
        self.deadline = Some(now + quiet);
    }

    /// Drops any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns whether the timer is armed and not yet expired at `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::DebounceTimer;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn arm_restarts_the_quiescence_window() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let quiet = Duration::seconds(1);
        let mut timer = DebounceTimer::idle();

        timer.arm(start, quiet);
        let later = start + Duration::milliseconds(800);
        assert!(timer.is_active(later));

        timer.arm(later, quiet);
        assert!(timer.is_active(start + Duration::milliseconds(1500)));
        assert!(!timer.is_active(later + quiet));
    }

    #[test]
    fn cancel_clears_a_pending_deadline() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let mut timer = DebounceTimer::idle();
        timer.arm(start, Duration::seconds(1));
        timer.cancel();
        assert!(!timer.is_active(start));
    }

    #[test]
    fn idle_timer_is_never_active() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        assert!(!DebounceTimer::idle().is_active(now));
    }
}
