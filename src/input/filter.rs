//! Median filter for noisy analog sticks
//!
//! A selection filter: it rejects single-sample spikes from electrically
//! noisy potentiometers without the lag an averaging filter would add, and
//! always returns a value that actually occurred in the input.

use crate::platform::traits::{AdcInterface, TimerInterface};
use crate::platform::Result;

/// Upper bound on the filter width served by [`read_filtered`]
pub const MAX_FILTER_SAMPLES: usize = 15;

/// Median of `samples`, sorting in place.
///
/// The median index is `len / 2` (integer division), which is the true
/// median for odd lengths and the upper middle for even ones. Callers keep
/// `len >= 3`.
pub fn median(samples: &mut [u16]) -> u16 {
    // Insertion sort; buffers here are tiny
    for i in 1..samples.len() {
        let mut j = i;
        while j > 0 && samples[j - 1] > samples[j] {
            samples.swap(j - 1, j);
            j -= 1;
        }
    }
    samples[samples.len() / 2]
}

/// Reads `count` successive raw samples with `gap_ms` between them and
/// returns the median.
///
/// The inter-sample waits are intentional bounded busy-waits; the whole
/// acquisition stays well inside one scheduler tick. `count` is clamped to
/// `3..=MAX_FILTER_SAMPLES`.
pub fn read_filtered<A: AdcInterface, T: TimerInterface>(
    adc: &mut A,
    timer: &mut T,
    count: usize,
    gap_ms: u32,
) -> Result<u16> {
    let count = count.clamp(3, MAX_FILTER_SAMPLES);
    let mut buf = [0u16; MAX_FILTER_SAMPLES];
    for slot in buf.iter_mut().take(count) {
        *slot = adc.read_raw()?;
        timer.delay_ms(gap_ms)?;
    }
    Ok(median(&mut buf[..count]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockAdc, MockTimer};

    #[test]
    fn test_median_odd_length() {
        let mut samples = [2010, 2900, 2015, 2012, 2013];
        assert_eq!(median(&mut samples), 2013);
    }

    #[test]
    fn test_median_even_length() {
        let mut samples = [10, 40, 20, 30];
        // len / 2 picks the upper middle
        assert_eq!(median(&mut samples), 30);
    }

    #[test]
    fn test_median_is_a_selection() {
        let mut samples = [7, 1, 9, 3, 5];
        let original = [7, 1, 9, 3, 5];
        let m = median(&mut samples);
        assert!(original.contains(&m));
    }

    #[test]
    fn test_median_rejects_single_spike() {
        // One 4095 glitch among steady readings must not leak through
        let mut samples = [2048, 2049, 4095, 2047, 2048];
        assert_eq!(median(&mut samples), 2048);
    }

    #[test]
    fn test_read_filtered_consumes_n_samples() {
        let mut adc = MockAdc::new(0);
        adc.queue_samples(&[2048, 4095, 2047, 2049, 2048]);
        let mut timer = MockTimer::new();

        let value = read_filtered(&mut adc, &mut timer, 5, 1).unwrap();
        assert_eq!(value, 2048);
        assert_eq!(adc.queued_len(), 0);
        // 5 samples, 1 ms apart
        assert_eq!(timer.now_ms(), 5);
    }

    #[test]
    fn test_read_filtered_clamps_count() {
        let mut adc = MockAdc::new(100);
        let mut timer = MockTimer::new();

        // Asking for fewer than 3 still reads 3
        read_filtered(&mut adc, &mut timer, 1, 1).unwrap();
        assert_eq!(timer.now_ms(), 3);
    }

    #[test]
    fn test_read_filtered_propagates_adc_failure() {
        let mut adc = MockAdc::new(0);
        adc.fail_reads(true);
        let mut timer = MockTimer::new();

        assert!(read_filtered(&mut adc, &mut timer, 5, 1).is_err());
    }
}
