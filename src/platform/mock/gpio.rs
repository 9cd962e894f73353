//! Mock GPIO implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};

/// Mock GPIO implementation
///
/// Tracks pin level and mode for test verification. Buttons in this crate
/// are active-low, so an input pin created with [`MockGpio::new_input`]
/// starts high (released).
#[derive(Debug)]
pub struct MockGpio {
    level: bool,
    mode: GpioMode,
}

impl MockGpio {
    /// Create a mock output pin, initially low
    pub fn new_output() -> Self {
        Self {
            level: false,
            mode: GpioMode::OutputPushPull,
        }
    }

    /// Create a mock pulled-up input pin, initially high (button released)
    pub fn new_input() -> Self {
        Self {
            level: true,
            mode: GpioMode::InputPullUp,
        }
    }

    /// Drive the input level externally (simulates pressing a button by
    /// pulling the line low)
    pub fn set_input_level(&mut self, high: bool) {
        self.level = high;
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        match self.mode {
            GpioMode::OutputPushPull => {
                self.level = true;
                Ok(())
            }
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn set_low(&mut self) -> Result<()> {
        match self.mode {
            GpioMode::OutputPushPull => {
                self.level = false;
                Ok(())
            }
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn read(&self) -> bool {
        self.level
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}
