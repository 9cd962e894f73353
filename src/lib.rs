#![cfg_attr(not(test), no_std)]

//! drivelink - control path for an RC car radio transmitter
//!
//! Samples joystick and button input, shapes it into a compact command frame,
//! and hands the frame to a best-effort radio link on a fixed cadence. The
//! whole pipeline is single-threaded and driven by a cooperative millisecond
//! tick; hardware access goes through the traits in [`platform`], so the full
//! logic tree runs in host tests against the mock implementations.

// Platform abstraction layer (ADC, GPIO, timer, radio)
pub mod platform;

// Logging macros and scheduler timekeeping
pub mod core;

// Input acquisition: filtering, calibration, shaping, button edges
pub mod input;

// Command frame layout, checksum, send gating
pub mod protocol;

// Link health and transmit statistics
pub mod link;

// LED status indication
pub mod indication;

// Control and cadence configuration
pub mod config;

// The transmit loop tying everything together
pub mod transmitter;
