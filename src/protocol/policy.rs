//! Send gating
//!
//! Decides whether a freshly built frame goes on the air. Two validated
//! policies: send every frame unconditionally, or gate on a material change
//! since the last *sent* frame. Neither ever approves a frame that fails its
//! own checksum.

use super::frame::ControlFrame;

/// Frame-change detection policy, selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendPolicy {
    /// Every sampled frame is transmitted. Simplest, highest radio airtime.
    Always,
    /// Transmit only frames that differ materially from the last sent one.
    ///
    /// `min_axis_delta` (reference: 3) absorbs the single-unit ADC jitter
    /// that survives the dead zone after curve shaping; axis movement below
    /// it does not count as a change even though it perturbs the checksum.
    ChangeGated { min_axis_delta: i16 },
}

/// Outcome of gating one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendDecision {
    /// Transmit and record as last sent
    Send,
    /// No material change since the last sent frame; skip this cadence
    Unchanged,
    /// Stored checksum failed recomputation: logic defect, discard the frame
    Corrupt,
}

/// Gate state: the one retained copy of the last *sent* frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    last_sent: Option<ControlFrame>,
}

impl FrameGate {
    pub const fn new() -> Self {
        Self { last_sent: None }
    }

    /// Applies `policy` to `frame`.
    pub fn evaluate(&self, policy: SendPolicy, frame: &ControlFrame) -> SendDecision {
        if !frame.verify() {
            return SendDecision::Corrupt;
        }
        match policy {
            SendPolicy::Always => SendDecision::Send,
            SendPolicy::ChangeGated { min_axis_delta } => match &self.last_sent {
                None => SendDecision::Send,
                Some(prev) => {
                    if frame.checksum == prev.checksum {
                        return SendDecision::Unchanged;
                    }
                    let discrete_changed = frame.button1 != prev.button1
                        || frame.button2 != prev.button2
                        || frame.gear != prev.gear
                        || frame.turbo != prev.turbo;
                    let delta = i32::from(min_axis_delta);
                    let axis_changed = axis_delta(frame.throttle, prev.throttle) >= delta
                        || axis_delta(frame.steering, prev.steering) >= delta;
                    if discrete_changed || axis_changed {
                        SendDecision::Send
                    } else {
                        SendDecision::Unchanged
                    }
                }
            },
        }
    }

    /// Records a successfully transmitted frame.
    pub fn record_sent(&mut self, frame: ControlFrame) {
        self.last_sent = Some(frame);
    }

    pub fn last_sent(&self) -> Option<&ControlFrame> {
        self.last_sent.as_ref()
    }
}

fn axis_delta(a: i16, b: i16) -> i32 {
    (i32::from(a) - i32::from(b)).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GATED: SendPolicy = SendPolicy::ChangeGated { min_axis_delta: 3 };

    #[test]
    fn test_always_policy_sends_every_valid_frame() {
        let mut gate = FrameGate::new();
        let frame = ControlFrame::build(0, 0, false, false, 1, 0);

        assert_eq!(gate.evaluate(SendPolicy::Always, &frame), SendDecision::Send);
        gate.record_sent(frame);
        // Identical frame still goes out
        assert_eq!(gate.evaluate(SendPolicy::Always, &frame), SendDecision::Send);
    }

    #[test]
    fn test_corrupt_frame_never_sendable() {
        let gate = FrameGate::new();
        let mut frame = ControlFrame::build(10, 10, false, false, 1, 0);
        frame.steering = 11;

        assert_eq!(gate.evaluate(SendPolicy::Always, &frame), SendDecision::Corrupt);
        assert_eq!(gate.evaluate(GATED, &frame), SendDecision::Corrupt);
    }

    #[test]
    fn test_gated_first_frame_sends() {
        let gate = FrameGate::new();
        let frame = ControlFrame::build(0, 0, false, false, 1, 0);
        assert_eq!(gate.evaluate(GATED, &frame), SendDecision::Send);
    }

    #[test]
    fn test_gated_identical_frame_not_resent() {
        // Building an identical frame yields the same checksum K, so the
        // detector marks it not-sendable.
        let mut gate = FrameGate::new();
        let sent = ControlFrame::build(100, -30, false, false, 1, 0);
        gate.record_sent(sent);

        let rebuilt = ControlFrame::build(100, -30, false, false, 1, 0);
        assert_eq!(rebuilt.checksum, sent.checksum);
        assert_eq!(gate.evaluate(GATED, &rebuilt), SendDecision::Unchanged);
    }

    #[test]
    fn test_gated_axis_jitter_below_threshold_suppressed() {
        let mut gate = FrameGate::new();
        gate.record_sent(ControlFrame::build(100, -30, false, false, 1, 0));

        // 2-unit wiggle on both axes: checksum differs, still not material
        let jitter = ControlFrame::build(102, -28, false, false, 1, 0);
        assert_eq!(gate.evaluate(GATED, &jitter), SendDecision::Unchanged);
    }

    #[test]
    fn test_gated_axis_movement_at_threshold_sends() {
        let mut gate = FrameGate::new();
        gate.record_sent(ControlFrame::build(100, -30, false, false, 1, 0));

        let moved = ControlFrame::build(103, -30, false, false, 1, 0);
        assert_eq!(gate.evaluate(GATED, &moved), SendDecision::Send);
    }

    #[test]
    fn test_gated_discrete_change_always_sends() {
        let mut gate = FrameGate::new();
        gate.record_sent(ControlFrame::build(100, -30, false, false, 1, 0));

        // Gear shift with no axis movement is material
        let shifted = ControlFrame::build(100, -30, false, false, 2, 0);
        assert_eq!(gate.evaluate(GATED, &shifted), SendDecision::Send);

        let braked = ControlFrame::build(100, -30, true, false, 1, 0);
        assert_eq!(gate.evaluate(GATED, &braked), SendDecision::Send);
    }
}
