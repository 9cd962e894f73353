//! Analog input interface trait
//!
//! One instance per sampled channel (throttle axis, steering axis).

use crate::platform::Result;

/// Full-scale raw reading of the reference 12-bit converter.
pub const ADC_MAX: u16 = 4095;

/// Raw analog source interface
///
/// # Contract
///
/// - Readings lie in `0..=ADC_MAX`
/// - A single read is a microsecond-scale blocking operation
/// - Electrical noise is the caller's concern; the input layer runs a
///   median filter over successive reads
pub trait AdcInterface {
    /// Sample the channel once.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Adc` if the conversion fails. The input layer
    /// treats this as transient and retries on the next scheduled sample.
    fn read_raw(&mut self) -> Result<u16>;
}
