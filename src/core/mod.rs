//! Core infrastructure
//!
//! Logging macros and the timekeeping primitives behind the cooperative
//! transmit scheduler.

pub mod logging;
pub mod scheduler;
