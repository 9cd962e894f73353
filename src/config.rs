//! Control and transmitter configuration
//!
//! Both structures are process-wide, set once at initialization and read by
//! the pipeline on every tick. [`ControlConfig`] may be replaced wholesale
//! between ticks (never mid-tick) via
//! [`Transmitter::set_control_config`](crate::transmitter::Transmitter::set_control_config).

use crate::platform::traits::radio::PeerAddress;
use crate::platform::{PlatformError, Result};
use crate::protocol::policy::SendPolicy;

/// Shaped axis full-scale output: commands lie in `[-OUTPUT_MAX, OUTPUT_MAX]`.
pub const OUTPUT_MAX: i32 = 512;

/// Input-shaping settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlConfig {
    /// Magnitude band around neutral suppressed to exactly zero
    pub dead_zone: i32,
    /// Throttle output ceiling after the dead-zone remap
    pub max_throttle: i32,
    /// Steering output ceiling after the dead-zone remap
    pub max_steering: i32,
    /// Throttle response-curve exponent (1.0 = linear)
    pub throttle_curve: f32,
    /// Give steering a fixed super-linear response (exponent 1.5)
    pub exponential_steering: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            dead_zone: 50,
            max_throttle: OUTPUT_MAX,
            max_steering: OUTPUT_MAX,
            throttle_curve: 1.0,
            exponential_steering: true,
        }
    }
}

impl ControlConfig {
    /// Rejects settings the shaping math cannot serve. The dead-zone remap
    /// divides by `OUTPUT_MAX - dead_zone`, so `dead_zone` must stay below
    /// `OUTPUT_MAX`; this is enforced here rather than guarded at runtime.
    pub fn validate(&self) -> Result<()> {
        if self.dead_zone < 0 || self.dead_zone >= OUTPUT_MAX {
            return Err(PlatformError::InvalidConfig);
        }
        if self.max_throttle <= 0 || self.max_throttle > OUTPUT_MAX {
            return Err(PlatformError::InvalidConfig);
        }
        if self.max_steering <= 0 || self.max_steering > OUTPUT_MAX {
            return Err(PlatformError::InvalidConfig);
        }
        // Also rejects NaN
        if !(self.throttle_curve > 0.0) {
            return Err(PlatformError::InvalidConfig);
        }
        Ok(())
    }
}

/// Link identity, task cadences, and acquisition parameters
#[derive(Debug, Clone, Copy)]
pub struct TransmitterConfig {
    /// Receiver hardware address
    pub peer: PeerAddress,
    /// Frame-change detection policy
    pub send_policy: SendPolicy,
    /// Sampling + frame-build period
    pub sample_period_ms: u64,
    /// Transmission period (reference: 50 Hz)
    pub send_period_ms: u64,
    /// Status-log period
    pub status_period_ms: u64,
    /// Peer liveness poll period
    pub link_check_period_ms: u64,
    /// Median filter width, at least 3
    pub filter_samples: usize,
    /// Gap between filter samples
    pub filter_gap_ms: u32,
    /// Samples per axis in a calibration pass
    pub calibration_samples: u16,
    /// Gap between calibration samples
    pub calibration_gap_ms: u32,
}

impl Default for TransmitterConfig {
    fn default() -> Self {
        Self {
            peer: [0xff; 6],
            send_policy: SendPolicy::ChangeGated { min_axis_delta: 3 },
            sample_period_ms: 20,
            send_period_ms: 20,
            status_period_ms: 500,
            link_check_period_ms: 2000,
            filter_samples: 5,
            filter_gap_ms: 1,
            calibration_samples: 100,
            calibration_gap_ms: 10,
        }
    }
}

impl TransmitterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.filter_samples < 3 {
            return Err(PlatformError::InvalidConfig);
        }
        if self.calibration_samples == 0 {
            return Err(PlatformError::InvalidConfig);
        }
        if self.sample_period_ms == 0 || self.send_period_ms == 0 {
            return Err(PlatformError::InvalidConfig);
        }
        Ok(())
    }
}
