//! Platform error types
//!
//! This module defines error types for platform operations. All platform
//! implementations map their HAL-specific errors to these variants.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// Analog read failed
    Adc(AdcError),
    /// GPIO operation failed
    Gpio(GpioError),
    /// Radio operation failed
    Radio(RadioError),
    /// Timer operation failed
    Timer(TimerError),
    /// Subsystem initialization failed
    InitializationFailed,
    /// Invalid configuration provided
    InvalidConfig,
}

/// ADC-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcError {
    /// Conversion did not complete
    ReadFailed,
    /// Channel is not wired on this board
    InvalidChannel,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Invalid pin number
    InvalidPin,
    /// Invalid mode for operation
    InvalidMode,
}

/// Radio-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioError {
    /// Radio subsystem failed to come up
    InitFailed,
    /// No room left in the peer table
    PeerTableFull,
    /// Addressed peer is not registered
    PeerNotFound,
    /// Frame was not delivered
    SendFailed,
}

/// Timer-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// Timer overflow
    Overflow,
    /// Invalid duration
    InvalidDuration,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Adc(e) => write!(f, "ADC error: {:?}", e),
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::Radio(e) => write!(f, "radio error: {:?}", e),
            PlatformError::Timer(e) => write!(f, "timer error: {:?}", e),
            PlatformError::InitializationFailed => write!(f, "initialization failed"),
            PlatformError::InvalidConfig => write!(f, "invalid configuration"),
        }
    }
}
