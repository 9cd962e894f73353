//! Timer interface trait
//!
//! The millisecond clock drives the cooperative scheduler; the delay calls are
//! the bounded busy-waits inside the sampling and calibration loops. They
//! block the whole scheduler for their duration, which is an accepted
//! trade-off: both loops are short relative to the tick period.

use crate::platform::Result;

/// Timer interface trait
///
/// # Safety Invariants
///
/// - Monotonic time source (never goes backwards)
/// - Millisecond-level precision required
pub trait TimerInterface {
    /// Delay for at least `us` microseconds.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the delay operation fails.
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Delay for at least `ms` milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the delay operation fails.
    fn delay_ms(&mut self, ms: u32) -> Result<()>;

    /// Monotonic timestamp in microseconds since platform initialization.
    fn now_us(&self) -> u64;

    /// Monotonic timestamp in milliseconds since platform initialization.
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
