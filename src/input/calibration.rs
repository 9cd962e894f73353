//! One-shot axis calibration
//!
//! Acquires the center/min/max raw bounds of an axis by sampling it for a
//! fixed window at startup or on demand. The pass always runs to completion;
//! normal sampling and shaping are suspended while it does.

use crate::platform::traits::{AdcInterface, TimerInterface};
use crate::platform::Result;

/// Raw-domain bounds for one axis, produced by a calibration pass.
///
/// Immutable read-only input to the shaper until the next recalibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisCalibration {
    /// Mean resting value over the calibration window
    pub center: i32,
    /// Lowest raw value observed
    pub min: i32,
    /// Highest raw value observed
    pub max: i32,
    /// Set once a pass has completed; shaping requires it
    pub calibrated: bool,
}

impl AxisCalibration {
    /// Placeholder bounds before the first pass: full converter range,
    /// mid-scale center, not yet usable for shaping.
    pub const fn uncalibrated() -> Self {
        Self {
            center: 2048,
            min: 0,
            max: 4095,
            calibrated: false,
        }
    }
}

impl Default for AxisCalibration {
    fn default() -> Self {
        Self::uncalibrated()
    }
}

/// Samples one axis `samples` times with `gap_ms` between reads,
/// accumulating a running sum for the center and running min/max bounds.
///
/// A degenerate result (`min == max`, stick disconnected or wedged) is still
/// returned as calibrated; the shaper maps that axis to neutral instead of
/// dividing by zero.
pub fn calibrate_axis<A: AdcInterface, T: TimerInterface>(
    adc: &mut A,
    timer: &mut T,
    samples: u16,
    gap_ms: u32,
) -> Result<AxisCalibration> {
    let samples = samples.max(1);
    let mut sum: i64 = 0;
    let mut min = i32::MAX;
    let mut max = i32::MIN;

    for _ in 0..samples {
        let raw = i32::from(adc.read_raw()?);
        sum += i64::from(raw);
        min = min.min(raw);
        max = max.max(raw);
        timer.delay_ms(gap_ms)?;
    }

    Ok(AxisCalibration {
        center: (sum / i64::from(samples)) as i32,
        min,
        max,
        calibrated: true,
    })
}
