//! Command frame layout and integrity checksum

/// Payload bytes covered by the checksum
pub const PAYLOAD_LEN: usize = 8;
/// Full wire frame: payload plus trailing checksum
pub const FRAME_LEN: usize = 10;

/// The fixed-layout command record sent each transmission.
///
/// Wire layout, all little-endian: `throttle` i16, `steering` i16,
/// `button1` u8, `button2` u8, `gear` u8, `turbo` u8, `checksum` u16.
/// A frame is transmittable only when self-consistent
/// (`checksum == recompute`); it is rebuilt every sampling tick and the only
/// copy retained past its tick is the last sent one, kept for change
/// detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFrame {
    /// Throttle command, `[-512, 512]`, 0 = neutral
    pub throttle: i16,
    /// Steering command, `[-512, 512]`, 0 = centered
    pub steering: i16,
    /// Primary momentary button (handbrake)
    pub button1: bool,
    /// Secondary momentary button (auxiliary function)
    pub button2: bool,
    /// 1 = forward, 2 = reverse
    pub gear: u8,
    /// 0 = off, 1 = on
    pub turbo: u8,
    /// Integrity value over all preceding fields
    pub checksum: u16,
}

impl ControlFrame {
    /// Assembles a frame and seals it with a freshly computed checksum.
    pub fn build(
        throttle: i16,
        steering: i16,
        button1: bool,
        button2: bool,
        gear: u8,
        turbo: u8,
    ) -> Self {
        let mut frame = Self {
            throttle,
            steering,
            button1,
            button2,
            gear,
            turbo,
            checksum: 0,
        };
        frame.checksum = frame.compute_checksum();
        frame
    }

    /// Checksummed field bytes in their fixed wire order.
    pub fn payload_bytes(&self) -> [u8; PAYLOAD_LEN] {
        let throttle = self.throttle.to_le_bytes();
        let steering = self.steering.to_le_bytes();
        [
            throttle[0],
            throttle[1],
            steering[0],
            steering[1],
            u8::from(self.button1),
            u8::from(self.button2),
            self.gear,
            self.turbo,
        ]
    }

    /// Recomputes the checksum from the current field values.
    pub fn compute_checksum(&self) -> u16 {
        checksum(&self.payload_bytes())
    }

    /// True when the stored checksum matches a recomputation. A mismatch
    /// means the frame was torn or corrupted in memory; it must be discarded
    /// rather than transmitted.
    pub fn verify(&self) -> bool {
        self.checksum == self.compute_checksum()
    }

    /// Serializes the full wire frame, checksum last.
    pub fn to_bytes(&self) -> [u8; FRAME_LEN] {
        let mut out = [0u8; FRAME_LEN];
        out[..PAYLOAD_LEN].copy_from_slice(&self.payload_bytes());
        out[PAYLOAD_LEN..].copy_from_slice(&self.checksum.to_le_bytes());
        out
    }
}

/// Rolling polynomial accumulator: `acc = (acc << 5) + acc + byte` over the
/// bytes in order, seeded at 0, wrapping.
///
/// Non-cryptographic: detects in-memory corruption and torn reads before
/// transmission, nothing more. Pure and deterministic, which the
/// change-gated send policy relies on.
pub fn checksum(bytes: &[u8]) -> u16 {
    let mut acc: u16 = 0;
    for &byte in bytes {
        acc = (acc << 5)
            .wrapping_add(acc)
            .wrapping_add(u16::from(byte));
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_deterministic() {
        let a = ControlFrame::build(120, -45, true, false, 1, 0);
        let b = ControlFrame::build(120, -45, true, false, 1, 0);
        assert_eq!(a.checksum, b.checksum);
        assert_eq!(a.compute_checksum(), a.compute_checksum());
        assert_eq!(a, b);
    }

    #[test]
    fn test_built_frame_verifies() {
        let frame = ControlFrame::build(-512, 512, false, true, 2, 1);
        assert!(frame.verify());
    }

    #[test]
    fn test_tampered_frame_fails_verification() {
        let mut frame = ControlFrame::build(100, 100, false, false, 1, 0);
        frame.throttle = 101;
        assert!(!frame.verify());
    }

    #[test]
    fn test_checksum_sensitive_to_single_byte_changes() {
        // Every single-byte mutation over a corpus of payloads must change
        // the accumulator output.
        let corpus: [[u8; PAYLOAD_LEN]; 4] = [
            [0; PAYLOAD_LEN],
            [0x00, 0x02, 0xfe, 0xff, 0x01, 0x00, 0x01, 0x00],
            [0xff; PAYLOAD_LEN],
            [0x34, 0x12, 0xcc, 0xed, 0x00, 0x01, 0x02, 0x01],
        ];
        for payload in corpus {
            let base = checksum(&payload);
            for i in 0..PAYLOAD_LEN {
                let mut mutated = payload;
                mutated[i] ^= 0x01;
                assert_ne!(
                    checksum(&mutated),
                    base,
                    "byte {} flip went undetected",
                    i
                );
            }
        }
    }

    #[test]
    fn test_checksum_depends_on_byte_order() {
        assert_ne!(checksum(&[1, 2]), checksum(&[2, 1]));
    }

    #[test]
    fn test_wire_layout() {
        let frame = ControlFrame::build(0x0102, -2, true, false, 2, 1);
        let bytes = frame.to_bytes();

        assert_eq!(&bytes[0..2], &0x0102i16.to_le_bytes());
        assert_eq!(&bytes[2..4], &(-2i16).to_le_bytes());
        assert_eq!(bytes[4], 1);
        assert_eq!(bytes[5], 0);
        assert_eq!(bytes[6], 2);
        assert_eq!(bytes[7], 1);
        assert_eq!(&bytes[8..10], &frame.checksum.to_le_bytes());
    }

    #[test]
    fn test_neutral_frame_distinct_from_active() {
        let neutral = ControlFrame::build(0, 0, false, false, 1, 0);
        let active = ControlFrame::build(0, 0, true, false, 1, 0);
        assert_ne!(neutral.checksum, active.checksum);
    }
}
