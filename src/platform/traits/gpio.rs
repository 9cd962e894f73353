//! GPIO interface trait
//!
//! Digital inputs carry the transmitter's buttons (active-low wiring: a press
//! reads electrically low), outputs drive the indicator LEDs.

use crate::platform::Result;

/// GPIO pin mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioMode {
    /// Input mode (high impedance)
    Input,
    /// Input mode with pull-up resistor (buttons idle high)
    InputPullUp,
    /// Output mode (push-pull, LEDs)
    OutputPushPull,
}

/// GPIO interface trait
///
/// # Safety Invariants
///
/// - One owner per pin instance
/// - No concurrent access to the same pin from multiple contexts
pub trait GpioInterface {
    /// Set the pin high (logic level 1)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin is
    /// not configured as an output.
    fn set_high(&mut self) -> Result<()>;

    /// Set the pin low (logic level 0)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the pin is
    /// not configured as an output.
    fn set_low(&mut self) -> Result<()>;

    /// Read the pin level, `true` meaning high.
    ///
    /// Valid in both input and output modes.
    fn read(&self) -> bool;

    /// Set the pin mode
    fn set_mode(&mut self, mode: GpioMode) -> Result<()>;

    /// Get the current pin mode
    fn mode(&self) -> GpioMode;
}
