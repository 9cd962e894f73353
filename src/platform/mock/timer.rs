//! Mock Timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};

/// Mock Timer implementation
///
/// Keeps a simulated monotonic clock. Delays advance the clock instead of
/// sleeping, and tests can jump it forward with [`MockTimer::advance_ms`] to
/// make scheduler tasks due.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
}

impl MockTimer {
    /// Create a new mock timer at t = 0
    pub fn new() -> Self {
        Self { now_us: 0 }
    }

    /// Jump the simulated clock forward
    pub fn advance_ms(&mut self, ms: u64) {
        self.now_us = self.now_us.wrapping_add(ms * 1000);
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.now_us = self.now_us.wrapping_add(u64::from(us));
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}
