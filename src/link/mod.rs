//! Link health and transmit statistics
//!
//! The link is best effort; nothing here retries. [`LinkMonitor`] maintains
//! the connected/disconnected view from coarse liveness polls and from send
//! outcomes, and [`TxStats`] feeds the periodic status log.

use crate::platform::traits::radio::{PeerAddress, RadioInterface};

/// Connection view for one registered peer.
#[derive(Debug)]
pub struct LinkMonitor {
    peer: PeerAddress,
    connected: bool,
}

impl LinkMonitor {
    /// Starts disconnected; the first poll or delivered frame proves the
    /// link.
    pub const fn new(peer: PeerAddress) -> Self {
        Self {
            peer,
            connected: false,
        }
    }

    pub fn peer(&self) -> PeerAddress {
        self.peer
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Coarse liveness poll (reference cadence: 2 s).
    pub fn poll<R: RadioInterface>(&mut self, radio: &R) -> bool {
        self.connected = radio.peer_exists(self.peer);
        self.connected
    }

    /// Folds a send outcome into the view: a delivered frame proves the
    /// link, a failed one counts as loss until the next poll says otherwise.
    pub fn note_send(&mut self, delivered: bool) {
        self.connected = delivered;
    }
}

/// Running transmit counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TxStats {
    /// Frames handed to the radio
    pub sent: u32,
    /// Frames the radio reported delivered
    pub delivered: u32,
    /// Frames discarded because their checksum did not recompute
    pub integrity_failures: u32,
}

impl TxStats {
    pub fn record_attempt(&mut self, delivered: bool) {
        self.sent = self.sent.saturating_add(1);
        if delivered {
            self.delivered = self.delivered.saturating_add(1);
        }
    }

    pub fn record_integrity_failure(&mut self) {
        self.integrity_failures = self.integrity_failures.saturating_add(1);
    }

    /// Delivery rate in percent; 100 before anything has been sent.
    pub fn success_rate(&self) -> f32 {
        if self.sent == 0 {
            return 100.0;
        }
        self.delivered as f32 * 100.0 / self.sent as f32
    }
}
