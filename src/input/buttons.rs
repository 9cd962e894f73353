//! Digital input edge handling
//!
//! Buttons are wired active-low: a press reads electrically low. The edge
//! detectors track the previous level so toggles fire exactly once per
//! physical press, not once per tick while the button is held.

use crate::platform::traits::GpioInterface;

/// Press-edge detector over one active-low input.
#[derive(Debug, Default)]
pub struct PressEdge {
    last_pressed: bool,
}

impl PressEdge {
    pub const fn new() -> Self {
        Self {
            last_pressed: false,
        }
    }

    /// Feeds the current electrical level. True exactly on the released →
    /// pressed transition.
    pub fn update(&mut self, level_high: bool) -> bool {
        let pressed = !level_high;
        let edge = pressed && !self.last_pressed;
        self.last_pressed = pressed;
        edge
    }
}

/// Latching toggle driven by press edges (the gear and turbo switches).
#[derive(Debug)]
pub struct Toggle {
    edge: PressEdge,
    state: bool,
}

impl Toggle {
    pub const fn new(initial: bool) -> Self {
        Self {
            edge: PressEdge::new(),
            state: initial,
        }
    }

    /// Feeds the current electrical level; flips on a press edge and
    /// returns the (possibly new) state.
    pub fn update(&mut self, level_high: bool) -> bool {
        if self.edge.update(level_high) {
            self.state = !self.state;
        }
        self.state
    }

    pub fn state(&self) -> bool {
        self.state
    }
}

/// Momentary (level) state of an active-low input.
pub fn is_pressed<G: GpioInterface>(pin: &G) -> bool {
    !pin.read()
}
