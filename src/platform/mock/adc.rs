//! Mock ADC implementation for testing

use heapless::Deque;

use crate::platform::{
    error::{AdcError, PlatformError},
    traits::AdcInterface,
    Result,
};

/// Mock ADC implementation
///
/// Serves queued samples in order, then falls back to a resting value once
/// the queue drains. Useful for scripting a calibration pass followed by
/// steady-state stick positions.
#[derive(Debug)]
pub struct MockAdc {
    queued: Deque<u16, 256>,
    resting: u16,
    fail_reads: bool,
}

impl MockAdc {
    /// Create a mock channel resting at the given raw value
    pub fn new(resting: u16) -> Self {
        Self {
            queued: Deque::new(),
            resting,
            fail_reads: false,
        }
    }

    /// Queue samples to be served before the resting value.
    ///
    /// Samples beyond the queue capacity are dropped.
    pub fn queue_samples(&mut self, samples: &[u16]) {
        for &s in samples {
            let _ = self.queued.push_back(s);
        }
    }

    /// Change the resting value (simulates moving the stick)
    pub fn set_resting(&mut self, resting: u16) {
        self.resting = resting;
    }

    /// Make subsequent reads fail
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Number of samples still queued
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }
}

impl AdcInterface for MockAdc {
    fn read_raw(&mut self) -> Result<u16> {
        if self.fail_reads {
            return Err(PlatformError::Adc(AdcError::ReadFailed));
        }
        Ok(self.queued.pop_front().unwrap_or(self.resting))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queued_samples_then_resting() {
        let mut adc = MockAdc::new(2048);
        adc.queue_samples(&[100, 200, 300]);

        assert_eq!(adc.read_raw().unwrap(), 100);
        assert_eq!(adc.read_raw().unwrap(), 200);
        assert_eq!(adc.read_raw().unwrap(), 300);
        assert_eq!(adc.read_raw().unwrap(), 2048);
        assert_eq!(adc.read_raw().unwrap(), 2048);
    }

    #[test]
    fn test_set_resting() {
        let mut adc = MockAdc::new(2048);
        assert_eq!(adc.read_raw().unwrap(), 2048);

        adc.set_resting(3500);
        assert_eq!(adc.read_raw().unwrap(), 3500);
    }

    #[test]
    fn test_fail_reads() {
        let mut adc = MockAdc::new(0);
        adc.fail_reads(true);
        assert_eq!(
            adc.read_raw(),
            Err(PlatformError::Adc(AdcError::ReadFailed))
        );

        adc.fail_reads(false);
        assert!(adc.read_raw().is_ok());
    }
}
