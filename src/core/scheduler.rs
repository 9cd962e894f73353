//! Tick-scheduler timekeeping primitives
//!
//! The transmit loop is cooperative and single-threaded: every iteration each
//! task compares `now - last_fired >= period` and, when due, runs
//! synchronously to completion. There is no preemption and no task queue.
//! [`TaskTimer`] holds the per-task record; [`Expiry`] implements the one
//! deferred-action pattern in the system, a stored deadline checked on a
//! later iteration instead of a blocking delay.

/// Periodic task record: a fixed period and the timestamp of the last firing.
///
/// Owned by the scheduler value, never global state.
#[derive(Debug, Clone, Copy)]
pub struct TaskTimer {
    period_ms: u64,
    last_fired_ms: u64,
}

impl TaskTimer {
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            last_fired_ms: 0,
        }
    }

    /// Checks whether the task is due at `now_ms` and records the firing.
    ///
    /// Returns `true` at most once per period. Periodicity is best effort: a
    /// late poll fires immediately but does not catch up on missed periods.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms.wrapping_sub(self.last_fired_ms) >= self.period_ms {
            self.last_fired_ms = now_ms;
            true
        } else {
            false
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }
}

/// One-shot deadline: armed with an absolute timestamp, reports expiry once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Expiry {
    deadline_ms: Option<u64>,
}

impl Expiry {
    pub const fn idle() -> Self {
        Self { deadline_ms: None }
    }

    /// Arm the deadline at an absolute timestamp
    pub fn arm(&mut self, at_ms: u64) {
        self.deadline_ms = Some(at_ms);
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// True exactly once, on the first check at or past the deadline.
    pub fn expired(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_timer_fires_on_period() {
        let mut task = TaskTimer::new(20);

        assert!(!task.poll(5));
        assert!(!task.poll(19));
        assert!(task.poll(20));
        // Just fired: not due again within the same period
        assert!(!task.poll(25));
        assert!(!task.poll(39));
        assert!(task.poll(40));
    }

    #[test]
    fn test_task_timer_late_poll_fires_once() {
        let mut task = TaskTimer::new(20);

        // Way past due: fires once, no catch-up burst
        assert!(task.poll(500));
        assert!(!task.poll(501));
        assert!(task.poll(520));
    }

    #[test]
    fn test_task_timer_zero_period_always_due() {
        let mut task = TaskTimer::new(0);
        assert!(task.poll(0));
        assert!(task.poll(0));
        assert!(task.poll(1));
    }

    #[test]
    fn test_expiry_fires_once() {
        let mut expiry = Expiry::idle();
        assert!(!expiry.expired(100));

        expiry.arm(150);
        assert!(expiry.is_armed());
        assert!(!expiry.expired(149));
        assert!(expiry.expired(150));
        // Disarmed after firing
        assert!(!expiry.expired(151));
        assert!(!expiry.is_armed());
    }

    #[test]
    fn test_expiry_rearm() {
        let mut expiry = Expiry::idle();
        expiry.arm(10);
        assert!(expiry.expired(10));

        expiry.arm(20);
        assert!(!expiry.expired(15));
        assert!(expiry.expired(25));
    }
}
