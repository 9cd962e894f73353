//! Status indication
//!
//! Three independent LED channels rendered from the transmitter's observable
//! state: link status, gear, turbo. Everything here is non-blocking and
//! evaluated once per scheduler iteration; the disconnected pulse arms a
//! stored off-deadline and a later iteration clears the LED when it expires.

use crate::core::scheduler::Expiry;
use crate::platform::traits::GpioInterface;
use crate::platform::Result;

const CALIBRATING_BLINK_MS: u64 = 100;
const CONNECTED_BLINK_MS: u64 = 1000;
const DISCONNECTED_PULSE_PERIOD_MS: u64 = 2000;
const DISCONNECTED_PULSE_WIDTH_MS: u64 = 50;
const REVERSE_BLINK_MS: u64 = 500;

const SUCCESS_BLINKS: u8 = 2;
const SUCCESS_WIDTH_MS: u64 = 300;
const ERROR_BLINKS: u8 = 3;
const ERROR_WIDTH_MS: u64 = 100;

/// Observable transmitter state the indicator renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicationView {
    pub connected: bool,
    pub calibrating: bool,
    /// 1 = forward (solid), 2 = reverse (blinking)
    pub gear: u8,
    pub turbo: bool,
}

/// Startup feedback patterns played on the status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Peer registered: two slow blinks
    Success,
    /// Initialization failed: three fast blinks
    Error,
}

/// Drives the three indicator channels.
pub struct LedManager<G: GpioInterface> {
    status: G,
    gear: G,
    turbo: G,

    status_level: bool,
    status_last_toggle_ms: u64,
    pulse_off: Expiry,
    // A playing pattern preempts the status rendering until it finishes
    pattern_toggles_left: u8,
    pattern_width_ms: u64,

    gear_level: bool,
    gear_last_toggle_ms: u64,
}

impl<G: GpioInterface> LedManager<G> {
    pub fn new(status: G, gear: G, turbo: G) -> Self {
        Self {
            status,
            gear,
            turbo,
            status_level: false,
            status_last_toggle_ms: 0,
            pulse_off: Expiry::idle(),
            pattern_toggles_left: 0,
            pattern_width_ms: 0,
            gear_level: false,
            gear_last_toggle_ms: 0,
        }
    }

    /// Starts a feedback pattern at `now_ms`; later `update` calls step it.
    pub fn play(&mut self, pattern: Pattern, now_ms: u64) -> Result<()> {
        let (blinks, width_ms) = match pattern {
            Pattern::Success => (SUCCESS_BLINKS, SUCCESS_WIDTH_MS),
            Pattern::Error => (ERROR_BLINKS, ERROR_WIDTH_MS),
        };
        // One blink is an on phase and an off phase; the LED goes high now
        self.pattern_toggles_left = blinks * 2 - 1;
        self.pattern_width_ms = width_ms;
        self.status_level = true;
        self.status_last_toggle_ms = now_ms;
        self.status.set_high()
    }

    /// Renders `view` at `now_ms`. Called once per scheduler iteration.
    pub fn update(&mut self, now_ms: u64, view: IndicationView) -> Result<()> {
        self.update_status(now_ms, view)?;
        self.update_gear(now_ms, view.gear)?;
        if view.turbo {
            self.turbo.set_high()
        } else {
            self.turbo.set_low()
        }
    }

    /// Level of the status LED (for tests and bring-up)
    pub fn status_level(&self) -> bool {
        self.status.read()
    }

    pub fn gear_level(&self) -> bool {
        self.gear.read()
    }

    pub fn turbo_level(&self) -> bool {
        self.turbo.read()
    }

    fn update_status(&mut self, now_ms: u64, view: IndicationView) -> Result<()> {
        if self.pattern_toggles_left > 0 {
            return self.step_pattern(now_ms);
        }

        // An armed pulse always gets to finish, whatever the link does
        if self.pulse_off.expired(now_ms) {
            self.status_level = false;
            self.status.set_low()?;
        }

        if view.calibrating {
            self.blink_status(now_ms, CALIBRATING_BLINK_MS)
        } else if view.connected {
            self.blink_status(now_ms, CONNECTED_BLINK_MS)
        } else if !self.pulse_off.is_armed()
            && now_ms.wrapping_sub(self.status_last_toggle_ms) >= DISCONNECTED_PULSE_PERIOD_MS
        {
            // Short visible flash, cleared by expiry on a later iteration
            self.status_level = true;
            self.status.set_high()?;
            self.pulse_off.arm(now_ms + DISCONNECTED_PULSE_WIDTH_MS);
            self.status_last_toggle_ms = now_ms;
            Ok(())
        } else {
            Ok(())
        }
    }

    fn step_pattern(&mut self, now_ms: u64) -> Result<()> {
        if now_ms.wrapping_sub(self.status_last_toggle_ms) < self.pattern_width_ms {
            return Ok(());
        }
        self.pattern_toggles_left -= 1;
        self.status_last_toggle_ms = now_ms;
        self.status_level = !self.status_level;
        if self.pattern_toggles_left == 0 {
            self.status_level = false;
        }
        if self.status_level {
            self.status.set_high()
        } else {
            self.status.set_low()
        }
    }

    fn blink_status(&mut self, now_ms: u64, half_period_ms: u64) -> Result<()> {
        if now_ms.wrapping_sub(self.status_last_toggle_ms) >= half_period_ms {
            self.status_level = !self.status_level;
            self.status_last_toggle_ms = now_ms;
            if self.status_level {
                self.status.set_high()?;
            } else {
                self.status.set_low()?;
            }
        }
        Ok(())
    }

    fn update_gear(&mut self, now_ms: u64, gear: u8) -> Result<()> {
        if gear == 1 {
            // Forward: solid
            self.gear_level = true;
            self.gear.set_high()
        } else if now_ms.wrapping_sub(self.gear_last_toggle_ms) >= REVERSE_BLINK_MS {
            // Reverse: blink
            self.gear_level = !self.gear_level;
            self.gear_last_toggle_ms = now_ms;
            if self.gear_level {
                self.gear.set_high()
            } else {
                self.gear.set_low()
            }
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockGpio;

    fn manager() -> LedManager<MockGpio> {
        LedManager::new(
            MockGpio::new_output(),
            MockGpio::new_output(),
            MockGpio::new_output(),
        )
    }

    #[test]
    fn test_turbo_led_follows_state() {
        let mut leds = manager();
        let mut view = IndicationView {
            gear: 1,
            ..Default::default()
        };

        leds.update(0, view).unwrap();
        assert!(!leds.turbo_level());

        view.turbo = true;
        leds.update(1, view).unwrap();
        assert!(leds.turbo_level());
    }

    #[test]
    fn test_gear_forward_solid_reverse_blinks() {
        let mut leds = manager();
        let mut view = IndicationView {
            gear: 1,
            ..Default::default()
        };

        leds.update(0, view).unwrap();
        leds.update(10_000, view).unwrap();
        assert!(leds.gear_level());

        view.gear = 2;
        // First due toggle flips it off, the next flips it back on
        leds.update(10_500, view).unwrap();
        assert!(!leds.gear_level());
        leds.update(10_700, view).unwrap();
        assert!(!leds.gear_level());
        leds.update(11_000, view).unwrap();
        assert!(leds.gear_level());
    }

    #[test]
    fn test_disconnected_pulse_expires_without_blocking() {
        let mut leds = manager();
        let view = IndicationView {
            gear: 1,
            ..Default::default()
        };

        // Past the pulse period: flash goes high and an off-deadline is armed
        leds.update(2000, view).unwrap();
        assert!(leds.status_level());

        // Before the deadline the flash persists
        leds.update(2040, view).unwrap();
        assert!(leds.status_level());

        // A later iteration sees the expiry and clears the LED
        leds.update(2050, view).unwrap();
        assert!(!leds.status_level());

        // Next pulse a full period later
        leds.update(4000, view).unwrap();
        assert!(leds.status_level());
    }

    #[test]
    fn test_calibrating_blinks_fast() {
        let mut leds = manager();
        let view = IndicationView {
            calibrating: true,
            gear: 1,
            ..Default::default()
        };

        leds.update(100, view).unwrap();
        let first = leds.status_level();
        leds.update(200, view).unwrap();
        assert_ne!(leds.status_level(), first);
        leds.update(300, view).unwrap();
        assert_eq!(leds.status_level(), first);
    }

    #[test]
    fn test_connected_blinks_slow() {
        let mut leds = manager();
        let view = IndicationView {
            connected: true,
            gear: 1,
            ..Default::default()
        };

        leds.update(1000, view).unwrap();
        let level = leds.status_level();
        // Well inside the half period: no toggle
        leds.update(1400, view).unwrap();
        assert_eq!(leds.status_level(), level);
        leds.update(2000, view).unwrap();
        assert_ne!(leds.status_level(), level);
    }

    #[test]
    fn test_pattern_runs_to_completion() {
        let mut leds = manager();
        let view = IndicationView {
            gear: 1,
            ..Default::default()
        };

        leds.play(Pattern::Success, 0).unwrap();
        assert!(leds.status_level());

        // Success: 300 ms phases, on-off-on-off
        leds.update(300, view).unwrap();
        assert!(!leds.status_level());
        leds.update(600, view).unwrap();
        assert!(leds.status_level());
        leds.update(900, view).unwrap();
        assert!(!leds.status_level());

        // Pattern over: normal rendering resumes (disconnected pulse at the
        // next period boundary)
        leds.update(2900, view).unwrap();
        assert!(leds.status_level());
    }
}
