//! Input acquisition
//!
//! The path from a noisy potentiometer to a signed command value: median
//! filtering, one-shot calibration, dead-zone and response-curve shaping,
//! plus press-edge handling for the digital buttons.

pub mod buttons;
pub mod calibration;
pub mod filter;
pub mod shaper;
