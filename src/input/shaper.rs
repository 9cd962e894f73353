//! Raw-to-command shaping
//!
//! Pure transforms from a filtered raw reading to a signed command in
//! `[-512, 512]`: calibration remap with saturation, dead-zone remap, then a
//! power-law response curve. No hidden state; the output is monotonic in the
//! input magnitude and the calibrated center maps to 0.

use libm::powf;

use super::calibration::AxisCalibration;
use crate::config::{ControlConfig, OUTPUT_MAX};

/// Which control axis is being shaped; selects the output ceiling and the
/// response-curve exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Throttle,
    Steering,
}

/// Steering always gets this fixed super-linear exponent when exponential
/// steering is enabled, independent of the configured throttle curve.
const STEERING_EXPONENT: f32 = 1.5;

/// Integer linear remap with truncation toward zero. No clamping; callers
/// saturate the result where the input may leave the calibrated range.
pub fn remap(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Maps a filtered raw reading to a signed command value.
///
/// Values outside the observed calibration range saturate rather than
/// extrapolate. An unfinished calibration, or a degenerate one
/// (`min == max`), yields neutral for the axis until recalibrated.
pub fn shape(raw: u16, axis: Axis, calib: &AxisCalibration, config: &ControlConfig) -> i16 {
    if !calib.calibrated || calib.min == calib.max {
        return 0;
    }

    let value = remap(
        i32::from(raw),
        calib.min,
        calib.max,
        -OUTPUT_MAX,
        OUTPUT_MAX,
    )
    .clamp(-OUTPUT_MAX, OUTPUT_MAX);

    let out_max = match axis {
        Axis::Throttle => config.max_throttle,
        Axis::Steering => config.max_steering,
    };
    let value = apply_dead_zone(value, config.dead_zone, out_max);

    let exponent = match axis {
        Axis::Throttle => config.throttle_curve,
        Axis::Steering if config.exponential_steering => STEERING_EXPONENT,
        Axis::Steering => 1.0,
    };
    apply_curve(value, exponent) as i16
}

/// Suppresses `|value| < dead_zone` to exactly zero and remaps the remaining
/// magnitude band `[dead_zone, 512]` to `[0, out_max]`, preserving sign.
pub fn apply_dead_zone(value: i32, dead_zone: i32, out_max: i32) -> i32 {
    let magnitude = value.abs();
    if magnitude < dead_zone {
        return 0;
    }
    let remapped = remap(magnitude, dead_zone, OUTPUT_MAX, 0, out_max).clamp(0, out_max);
    if value < 0 {
        -remapped
    } else {
        remapped
    }
}

/// Power-law response curve: `sign(v) * |v/512|^exponent * 512`, truncated
/// to integer. Exponent 1.0 is the identity.
pub fn apply_curve(value: i32, exponent: f32) -> i32 {
    if value == 0 {
        return 0;
    }
    let normalized = value as f32 / OUTPUT_MAX as f32;
    let curved = powf(normalized.abs(), exponent);
    let signed = if value < 0 { -curved } else { curved };
    ((signed * OUTPUT_MAX as f32) as i32).clamp(-OUTPUT_MAX, OUTPUT_MAX)
}
