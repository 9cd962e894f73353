//! Mock radio implementation for testing

use heapless::Vec;

use crate::platform::{
    error::{PlatformError, RadioError},
    traits::{PeerAddress, RadioInterface},
    Result,
};

/// Largest payload the mock records
pub const MOCK_PAYLOAD_MAX: usize = 16;

/// One recorded transmission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentFrame {
    pub peer: PeerAddress,
    pub payload: Vec<u8, MOCK_PAYLOAD_MAX>,
}

/// Mock radio implementation
///
/// Keeps a peer table and records every delivered payload for inspection.
/// Failures are programmable so tests can drive the soft-failure and
/// startup-failure paths.
#[derive(Debug, Default)]
pub struct MockRadio {
    peers: Vec<PeerAddress, 4>,
    sent: Vec<SentFrame, 64>,
    fail_sends: bool,
    fail_add_peer: bool,
}

impl MockRadio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent sends fail (peer out of range)
    pub fn fail_sends(&mut self, fail: bool) {
        self.fail_sends = fail;
    }

    /// Make peer registration fail (radio subsystem down at startup)
    pub fn fail_add_peer(&mut self, fail: bool) {
        self.fail_add_peer = fail;
    }

    /// Remove a peer from the table (simulates the receiver disappearing)
    pub fn drop_peer(&mut self, addr: PeerAddress) {
        self.peers.retain(|p| *p != addr);
    }

    /// Recorded transmissions, in order
    pub fn sent(&self) -> &[SentFrame] {
        &self.sent
    }

    pub fn sent_count(&self) -> usize {
        self.sent.len()
    }

    /// Payload of the most recent transmission
    pub fn last_payload(&self) -> Option<&[u8]> {
        self.sent.last().map(|f| f.payload.as_slice())
    }
}

impl RadioInterface for MockRadio {
    fn add_peer(&mut self, addr: PeerAddress) -> Result<()> {
        if self.fail_add_peer {
            return Err(PlatformError::Radio(RadioError::InitFailed));
        }
        if self.peers.contains(&addr) {
            return Ok(());
        }
        self.peers
            .push(addr)
            .map_err(|_| PlatformError::Radio(RadioError::PeerTableFull))
    }

    fn send(&mut self, addr: PeerAddress, payload: &[u8]) -> Result<()> {
        if !self.peers.contains(&addr) {
            return Err(PlatformError::Radio(RadioError::PeerNotFound));
        }
        if self.fail_sends {
            return Err(PlatformError::Radio(RadioError::SendFailed));
        }
        let mut copy = Vec::new();
        copy.extend_from_slice(&payload[..payload.len().min(MOCK_PAYLOAD_MAX)])
            .ok();
        // Recording capacity exhausted is fine for long-running tests; the
        // delivery itself still counts.
        let _ = self.sent.push(SentFrame {
            peer: addr,
            payload: copy,
        });
        Ok(())
    }

    fn peer_exists(&self, addr: PeerAddress) -> bool {
        self.peers.contains(&addr)
    }
}
