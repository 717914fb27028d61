//! Tick scheduling and cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Cancels an emitter's update loop. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop all further scheduled ticks.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

/// When the next tick is due.
///
/// The due time is measured from the completion of the previous tick, so a
/// slow tick pushes every later tick back.
#[derive(Debug)]
pub struct Schedule {
    interval: Duration,
    due: Instant,
    stop: StopHandle,
}

impl Schedule {
    /// A schedule whose first tick is due immediately.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            due: Instant::now(),
            stop: StopHandle::new(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        !self.is_stopped() && now >= self.due
    }

    /// Schedule the next tick one interval after `completed`.
    pub fn rearm(&mut self, completed: Instant) {
        self.due = completed + self.interval;
    }

    /// Time left until the next tick, `None` once stopped.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        if self.is_stopped() {
            None
        } else {
            Some(self.due.saturating_duration_since(now))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_due_immediately() {
        let schedule = Schedule::new(Duration::from_millis(200));
        assert!(schedule.is_due(Instant::now()));
    }

    #[test]
    fn test_rearm_from_completion() {
        let mut schedule = Schedule::new(Duration::from_millis(200));
        assert_eq!(schedule.interval(), Duration::from_millis(200));
        let completed = Instant::now();
        schedule.rearm(completed);
        assert!(!schedule.is_due(completed));
        assert!(!schedule.is_due(completed + Duration::from_millis(199)));
        assert!(schedule.is_due(completed + Duration::from_millis(200)));
        assert_eq!(
            schedule.remaining(completed + Duration::from_millis(50)),
            Some(Duration::from_millis(150))
        );
        assert_eq!(
            schedule.remaining(completed + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_stop_is_shared() {
        let schedule = Schedule::new(Duration::ZERO);
        let handle = schedule.stop_handle();
        handle.clone().stop();
        assert!(handle.is_stopped());
        assert!(schedule.is_stopped());
        assert!(!schedule.is_due(Instant::now()));
        assert_eq!(schedule.remaining(Instant::now()), None);
    }
}
