//! Radio link interface trait
//!
//! The link is at-most-once, latest-value-wins: no acknowledgement protocol,
//! no retransmission, no sequencing. A failed send is a soft condition; the
//! next scheduled frame is the retry.

use crate::platform::Result;

/// Six-byte peer identifier (the remote receiver's hardware address).
pub type PeerAddress = [u8; 6];

/// Radio link interface trait
pub trait RadioInterface {
    /// Register a peer so frames can be addressed to it. Called once at
    /// initialization; failure keeps the transmitter out of the main loop.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Radio` if the peer cannot be registered.
    fn add_peer(&mut self, addr: PeerAddress) -> Result<()>;

    /// Transmit one payload to a registered peer, best effort.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Radio` if delivery failed. Never fatal to the
    /// caller.
    fn send(&mut self, addr: PeerAddress, payload: &[u8]) -> Result<()>;

    /// Liveness query, polled at a coarse interval to maintain the
    /// connected/disconnected view.
    fn peer_exists(&self, addr: PeerAddress) -> bool;
}
