//! The transmit loop
//!
//! One `Transmitter` value owns the whole control path: input hardware,
//! calibration state, frame gate, link monitor, LED manager, and the per-task
//! scheduler records. [`Transmitter::tick`] is one cooperative scheduler
//! iteration; the caller drives it from the device main loop. Task order
//! within an iteration is fixed: data acquisition and frame build, send,
//! indication decay, status log, link-liveness check.

use crate::config::{ControlConfig, TransmitterConfig};
use crate::core::scheduler::TaskTimer;
use crate::indication::{IndicationView, LedManager, Pattern};
use crate::input::buttons::{is_pressed, Toggle};
use crate::input::calibration::{calibrate_axis, AxisCalibration};
use crate::input::filter::read_filtered;
use crate::input::shaper::{shape, Axis};
use crate::link::{LinkMonitor, TxStats};
use crate::platform::traits::{AdcInterface, GpioInterface, RadioInterface, TimerInterface};
use crate::platform::{PlatformError, Result};
use crate::protocol::frame::ControlFrame;
use crate::protocol::policy::{FrameGate, SendDecision};
use crate::{log_error, log_info, log_warn};

/// Gear field value for forward
pub const GEAR_FORWARD: u8 = 1;
/// Gear field value for reverse
pub const GEAR_REVERSE: u8 = 2;

/// All manual-input hardware: two analog axes and four buttons.
///
/// Buttons are active-low. The primary and function buttons are momentary;
/// gear and turbo toggle on press edges.
pub struct Controls<A: AdcInterface, G: GpioInterface> {
    pub throttle_adc: A,
    pub steering_adc: A,
    /// Momentary: handbrake
    pub primary_button: G,
    /// Momentary: auxiliary function
    pub function_button: G,
    /// Press toggles forward/reverse
    pub gear_button: G,
    /// Press toggles turbo mode
    pub turbo_button: G,
}

/// The transmitter control path.
pub struct Transmitter<A, G, T, R>
where
    A: AdcInterface,
    G: GpioInterface,
    T: TimerInterface,
    R: RadioInterface,
{
    controls: Controls<A, G>,
    leds: LedManager<G>,
    timer: T,
    radio: R,

    control_config: ControlConfig,
    config: TransmitterConfig,

    throttle_cal: AxisCalibration,
    steering_cal: AxisCalibration,
    calibrating: bool,

    gear_reverse: Toggle,
    turbo: Toggle,

    gate: FrameGate,
    link: LinkMonitor,
    stats: TxStats,

    sample_task: TaskTimer,
    send_task: TaskTimer,
    status_task: TaskTimer,
    link_task: TaskTimer,

    /// Latest built frame, replaced every sampling tick
    pending: Option<ControlFrame>,
    ready: bool,
}

impl<A, G, T, R> Transmitter<A, G, T, R>
where
    A: AdcInterface,
    G: GpioInterface,
    T: TimerInterface,
    R: RadioInterface,
{
    pub fn new(
        controls: Controls<A, G>,
        leds: LedManager<G>,
        timer: T,
        radio: R,
        control_config: ControlConfig,
        config: TransmitterConfig,
    ) -> Self {
        Self {
            controls,
            leds,
            timer,
            radio,
            control_config,
            config,
            throttle_cal: AxisCalibration::uncalibrated(),
            steering_cal: AxisCalibration::uncalibrated(),
            calibrating: false,
            gear_reverse: Toggle::new(false),
            turbo: Toggle::new(false),
            gate: FrameGate::new(),
            link: LinkMonitor::new(config.peer),
            stats: TxStats::default(),
            sample_task: TaskTimer::new(config.sample_period_ms),
            send_task: TaskTimer::new(config.send_period_ms),
            status_task: TaskTimer::new(config.status_period_ms),
            link_task: TaskTimer::new(config.link_check_period_ms),
            pending: None,
            ready: false,
        }
    }

    /// Validates configuration, registers the peer, and runs the startup
    /// calibration.
    ///
    /// # Errors
    ///
    /// Peer-registration failure leaves the transmitter in a visible
    /// not-ready state (error pattern on the status LED, disconnected) and
    /// returns `InitializationFailed`; [`Transmitter::tick`] refuses to run
    /// until a later `init` succeeds.
    pub fn init(&mut self) -> Result<()> {
        self.control_config.validate()?;
        self.config.validate()?;

        if self.radio.add_peer(self.link.peer()).is_err() {
            log_error!("peer registration failed, transmitter not ready");
            self.ready = false;
            let now = self.timer.now_ms();
            self.leds.play(Pattern::Error, now)?;
            return Err(PlatformError::InitializationFailed);
        }
        self.link.poll(&self.radio);

        self.start_calibration()?;

        let now = self.timer.now_ms();
        self.leds.play(Pattern::Success, now)?;
        self.ready = true;
        log_info!("transmitter ready");
        Ok(())
    }

    /// Runs a full calibration pass on both axes, suspending normal
    /// sampling for the duration. The pass always runs to completion; there
    /// is no cancellation.
    pub fn start_calibration(&mut self) -> Result<()> {
        self.calibrating = true;
        self.throttle_cal.calibrated = false;
        self.steering_cal.calibrated = false;
        log_info!("calibrating axes");

        let samples = self.config.calibration_samples;
        let gap = self.config.calibration_gap_ms;
        let throttle = calibrate_axis(&mut self.controls.throttle_adc, &mut self.timer, samples, gap);
        let steering = calibrate_axis(&mut self.controls.steering_adc, &mut self.timer, samples, gap);
        self.calibrating = false;

        self.throttle_cal = throttle?;
        self.steering_cal = steering?;
        log_info!(
            "calibration done: throttle center {} [{}..{}], steering center {} [{}..{}]",
            self.throttle_cal.center,
            self.throttle_cal.min,
            self.throttle_cal.max,
            self.steering_cal.center,
            self.steering_cal.min,
            self.steering_cal.max
        );
        Ok(())
    }

    /// One cooperative scheduler iteration.
    ///
    /// # Errors
    ///
    /// Refuses to run before a successful [`Transmitter::init`]. Transient
    /// radio failures are absorbed (logged and counted); ADC failures
    /// propagate so the caller can decide whether to keep ticking.
    pub fn tick(&mut self) -> Result<()> {
        if !self.ready {
            return Err(PlatformError::InitializationFailed);
        }
        let now = self.timer.now_ms();

        if self.sample_task.poll(now) {
            self.acquire()?;
        }
        if self.send_task.poll(now) {
            self.transmit();
        }

        let view = IndicationView {
            connected: self.link.is_connected(),
            calibrating: self.calibrating,
            gear: self.gear(),
            turbo: self.turbo.state(),
        };
        self.leds.update(now, view)?;

        if self.status_task.poll(now) {
            self.log_status();
        }
        if self.link_task.poll(now) && !self.link.poll(&self.radio) {
            log_warn!("peer lost");
        }
        Ok(())
    }

    /// Replaces the control settings wholesale. Applied between ticks only.
    pub fn set_control_config(&mut self, config: ControlConfig) -> Result<()> {
        config.validate()?;
        self.control_config = config;
        Ok(())
    }

    pub fn control_config(&self) -> ControlConfig {
        self.control_config
    }

    pub fn is_connected(&self) -> bool {
        self.link.is_connected()
    }

    pub fn is_calibrating(&self) -> bool {
        self.calibrating
    }

    pub fn gear(&self) -> u8 {
        if self.gear_reverse.state() {
            GEAR_REVERSE
        } else {
            GEAR_FORWARD
        }
    }

    pub fn turbo_enabled(&self) -> bool {
        self.turbo.state()
    }

    pub fn stats(&self) -> TxStats {
        self.stats
    }

    /// Latest built frame, if a sampling tick has produced one
    pub fn pending_frame(&self) -> Option<&ControlFrame> {
        self.pending.as_ref()
    }

    /// Direct access to the input hardware, for host tests and bring-up
    pub fn controls_mut(&mut self) -> &mut Controls<A, G> {
        &mut self.controls
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn radio(&self) -> &R {
        &self.radio
    }

    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    /// Samples both axes and all buttons, shapes the values, and builds the
    /// pending frame. Skipped while a calibration pass is pending.
    fn acquire(&mut self) -> Result<()> {
        if self.calibrating || !self.throttle_cal.calibrated || !self.steering_cal.calibrated {
            return Ok(());
        }
        let count = self.config.filter_samples;
        let gap = self.config.filter_gap_ms;

        let raw_throttle =
            read_filtered(&mut self.controls.throttle_adc, &mut self.timer, count, gap)?;
        let raw_steering =
            read_filtered(&mut self.controls.steering_adc, &mut self.timer, count, gap)?;

        let throttle = shape(
            raw_throttle,
            Axis::Throttle,
            &self.throttle_cal,
            &self.control_config,
        );
        let steering = shape(
            raw_steering,
            Axis::Steering,
            &self.steering_cal,
            &self.control_config,
        );

        let button1 = is_pressed(&self.controls.primary_button);
        let button2 = is_pressed(&self.controls.function_button);
        let reverse = self.gear_reverse.update(self.controls.gear_button.read());
        let turbo = self.turbo.update(self.controls.turbo_button.read());

        let gear = if reverse { GEAR_REVERSE } else { GEAR_FORWARD };
        self.pending = Some(ControlFrame::build(
            throttle,
            steering,
            button1,
            button2,
            gear,
            u8::from(turbo),
        ));
        Ok(())
    }

    /// Gates the pending frame and hands it to the radio. Send failures are
    /// soft: counted, reflected in the link view, retried on the next
    /// cadence.
    fn transmit(&mut self) {
        let Some(frame) = self.pending else {
            return;
        };
        match self.gate.evaluate(self.config.send_policy, &frame) {
            SendDecision::Unchanged => {}
            SendDecision::Corrupt => {
                self.stats.record_integrity_failure();
                log_error!("integrity failure: frame checksum does not recompute, discarding");
            }
            SendDecision::Send => {
                let delivered = self.radio.send(self.link.peer(), &frame.to_bytes()).is_ok();
                self.stats.record_attempt(delivered);
                self.link.note_send(delivered);
                if delivered {
                    self.gate.record_sent(frame);
                } else {
                    log_warn!("send failed, retrying on next cadence");
                }
            }
        }
    }

    fn log_status(&self) {
        if let Some(frame) = &self.pending {
            log_info!(
                "throttle {} steering {} gear {} turbo {} | sent {} delivered {} ({}%)",
                frame.throttle,
                frame.steering,
                frame.gear,
                frame.turbo,
                self.stats.sent,
                self.stats.delivered,
                self.stats.success_rate() as u32
            );
        }
    }
}
