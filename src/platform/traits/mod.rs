//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod adc;
pub mod gpio;
pub mod radio;
pub mod timer;

// Re-export trait interfaces
pub use adc::{AdcInterface, ADC_MAX};
pub use gpio::{GpioInterface, GpioMode};
pub use radio::{PeerAddress, RadioInterface};
pub use timer::TimerInterface;
