//! Mock platform implementations for host testing
//!
//! Always compiled, so integration-style tests anywhere in the crate can run
//! the full control path without hardware.

pub mod adc;
pub mod gpio;
pub mod radio;
pub mod timer;

pub use adc::MockAdc;
pub use gpio::MockGpio;
pub use radio::{MockRadio, SentFrame};
pub use timer::MockTimer;
