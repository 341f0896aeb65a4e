//! Search control: stop flag and time budget.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How often the clock is consulted, in nodes. Must be a power of two.
const TIME_CHECK_INTERVAL: u64 = 1024;

/// Controls when a search should stop.
///
/// The clock is only compared against the budget every
/// [`TIME_CHECK_INTERVAL`] nodes; in between, only the stop flag is read.
/// The flag can also be set externally (from another thread or a caller's
/// cancel path), in which case the in-flight search unwinds and the driver
/// keeps the best move from the last completed depth.
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
    start: Instant,
    budget: Option<Duration>,
}

impl SearchControl {
    /// Create a control with a millisecond budget. A budget of 0 means no
    /// time limit.
    pub fn new(max_time_ms: u64, stopped: Arc<AtomicBool>) -> Self {
        Self {
            stopped,
            start: Instant::now(),
            budget: (max_time_ms > 0).then(|| Duration::from_millis(max_time_ms)),
        }
    }

    /// Check whether the search should abort.
    ///
    /// Reads the stop flag on every call; probes the clock only when
    /// `nodes` crosses the check interval. Once the budget is exceeded the
    /// flag latches, so later calls stop without touching the clock.
    pub fn should_stop(&self, nodes: u64) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }

        if nodes % TIME_CHECK_INTERVAL != 0 {
            return false;
        }

        if let Some(budget) = self.budget
            && self.start.elapsed() >= budget
        {
            self.stopped.store(true, Ordering::Release);
            return true;
        }

        false
    }

    /// Whether the stop flag has been raised.
    pub fn stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Elapsed wall time since the search started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::SearchControl;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn unlimited_budget_never_stops_on_time() {
        let flag = Arc::new(AtomicBool::new(false));
        let control = SearchControl::new(0, flag);
        assert!(!control.should_stop(0));
        assert!(!control.should_stop(1024));
        assert!(!control.should_stop(1_000_000 * 1024));
    }

    #[test]
    fn external_stop_flag_wins_immediately() {
        let flag = Arc::new(AtomicBool::new(false));
        let control = SearchControl::new(0, Arc::clone(&flag));
        assert!(!control.should_stop(1));
        flag.store(true, Ordering::Release);
        assert!(control.should_stop(1));
        assert!(control.stopped());
    }

    #[test]
    fn clock_only_checked_on_interval() {
        let flag = Arc::new(AtomicBool::new(false));
        // A zero-duration budget would stop instantly, but off-interval node
        // counts never consult the clock.
        let control = SearchControl::new(1, flag);
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(!control.should_stop(1023));
        assert!(control.should_stop(1024));
        // The flag latched; any node count stops now.
        assert!(control.should_stop(1));
    }
}
