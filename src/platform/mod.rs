//! Platform abstraction layer
//!
//! Hardware access for the transmitter goes through the capability traits in
//! [`traits`]: analog sticks, buttons and LEDs, the millisecond clock, and the
//! radio link. Core logic never names a pin or a peripheral register. The
//! [`mock`] implementations are always available so the full control path can
//! run in host tests.

pub mod error;
pub mod mock;
pub mod traits;

pub use error::{PlatformError, Result};
