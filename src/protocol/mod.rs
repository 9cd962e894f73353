//! Command frame protocol
//!
//! The fixed-layout wire frame, its integrity checksum, and the send-gating
//! policies that decide whether a freshly built frame goes on the air.

pub mod frame;
pub mod policy;

pub use frame::{checksum, ControlFrame, FRAME_LEN, PAYLOAD_LEN};
pub use policy::{FrameGate, SendDecision, SendPolicy};
