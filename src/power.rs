//! Module power sequencing.
//!
//! `Off -> PoweringOn -> Ready -> PoweringOff -> Off`. Every transition into
//! or out of `Ready` is gated on the status line, the fixed poll bounds from
//! [`module_timing`](crate::module_timing) only exist to fail fast on a
//! hardware fault.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::{
    config::InitMode,
    error::{Error, Transition},
    module_timing::*,
    pins::{ControlLines, Line, PinController},
    traits::Control,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModuleState {
    Off,
    PoweringOn,
    Ready,
    PoweringOff,
}

/// Owns the control lines and the delay, and with them the module state.
pub struct Lifecycle<L, D> {
    pins: PinController<L>,
    delay: D,
    state: ModuleState,
}

impl<L, D> Lifecycle<L, D>
where
    L: ControlLines,
    D: DelayNs,
{
    pub fn new(pins: PinController<L>, delay: D) -> Self {
        Self {
            pins,
            delay,
            state: ModuleState::Off,
        }
    }

    pub fn state(&self) -> ModuleState {
        self.state
    }

    /// Configure the control lines and settle the initial state.
    ///
    /// With [`InitMode::Resume`] a running module is adopted as `Ready`.
    /// With [`InitMode::ForceIdle`] a running module is held on the kill line
    /// until the status line drops, so that the driver always starts `Off`.
    pub fn bootstrap<E>(&mut self, mode: InitMode) -> Result<(), Error<E, L::Error>> {
        self.pins.configure().map_err(Error::Pin)?;

        let running = self.status()?;
        debug!("Bootstrap, module running: {}", running);

        match mode {
            InitMode::Resume if running => {
                self.state = ModuleState::Ready;
                return Ok(());
            }
            InitMode::ForceIdle if running => {
                warn!("Module running, forcing it idle");
                self.pins.set(Line::Kill, true).map_err(Error::Pin)?;
                let idle = self.wait_for_status(false, IDLE_POLL);
                self.pins.set(Line::Kill, false).map_err(Error::Pin)?;

                if !idle? {
                    error!("Module did not go idle within {} ms", IDLE_POLL.timeout().as_millis());
                    return Err(Error::HardwareInitialization(Transition::Idle));
                }
                self.pause(OFF_SETTLE_TIME);
            }
            _ => {}
        }

        self.state = ModuleState::Off;
        Ok(())
    }

    /// Power the module on and run the startup handshake.
    ///
    /// The state ends up `Ready` on success and `Off` on any failure.
    pub fn startup<C: Control>(
        &mut self,
        engine: &mut C,
    ) -> Result<(), Error<C::Error, L::Error>> {
        debug!("Starting up module");
        self.state = ModuleState::PoweringOn;

        let res = self.power_on(engine);
        self.state = match res {
            Ok(()) => ModuleState::Ready,
            Err(_) => ModuleState::Off,
        };
        res
    }

    /// Power the module down, gracefully first.
    ///
    /// The engine is always asked to power down, even when the status line
    /// already reads inactive, so that it can drop its session. If the module
    /// is still up after the graceful bound and `forced` is set, a single kill
    /// pulse cuts its power. The state ends up `Off` on success and `Ready`
    /// on failure.
    pub fn shutdown<C: Control>(
        &mut self,
        engine: &mut C,
        forced: bool,
    ) -> Result<(), Error<C::Error, L::Error>> {
        debug!("Shutting down module, forced: {}", forced);
        self.state = ModuleState::PoweringOff;

        let res = self.power_off(engine, forced);
        self.state = match res {
            Ok(()) => ModuleState::Off,
            Err(_) => ModuleState::Ready,
        };
        res
    }

    pub fn release(self) -> (L, D) {
        (self.pins.release(), self.delay)
    }

    fn power_on<C: Control>(
        &mut self,
        engine: &mut C,
    ) -> Result<(), Error<C::Error, L::Error>> {
        if self.status()? {
            debug!("Status already active, skipping power on pulse");
        } else {
            self.pulse(Line::Power, PWR_ON_ACTIVE_TIME, PWR_ON_RELEASE_TIME)?;

            if !self.wait_for_status(true, BOOT_POLL)? {
                error!(
                    "Status line inactive {} ms after power on",
                    BOOT_POLL.timeout().as_millis()
                );
                return Err(Error::HardwareInitialization(Transition::PowerUp));
            }
            self.pause(BOOT_SETTLE_TIME);
        }

        engine.complete_startup().map_err(Error::Native)?;
        debug!("Module ready");
        Ok(())
    }

    fn power_off<C: Control>(
        &mut self,
        engine: &mut C,
        forced: bool,
    ) -> Result<(), Error<C::Error, L::Error>> {
        let mut off = match engine.power_down() {
            Ok(()) => self.wait_for_status(false, GRACEFUL_OFF_POLL)?,
            Err(e) => {
                warn!("Power down not acknowledged");
                let off = !self.status()?;
                if !off && !forced {
                    return Err(Error::Native(e));
                }
                off
            }
        };

        if !off && forced {
            warn!("Graceful power down failed, pulsing kill line");
            self.pulse(Line::Kill, KILL_ACTIVE_TIME, KILL_RELEASE_TIME)?;
            off = self.wait_for_status(false, FORCED_OFF_POLL)?;
        }

        if !off {
            error!("Status line still active after power down");
            return Err(Error::HardwareInitialization(Transition::PowerDown));
        }

        self.pause(OFF_SETTLE_TIME);
        debug!("Module off");
        Ok(())
    }

    fn status<E>(&mut self) -> Result<bool, Error<E, L::Error>> {
        self.pins.get(Line::Status).map_err(Error::Pin)
    }

    fn pulse<E>(
        &mut self,
        line: Line,
        active: Duration,
        release: Duration,
    ) -> Result<(), Error<E, L::Error>> {
        self.pins.set(line, true).map_err(Error::Pin)?;
        self.pause(active);
        self.pins.set(line, false).map_err(Error::Pin)?;
        self.pause(release);
        Ok(())
    }

    /// Poll the status line until it reads `active`, at most `poll.attempts`
    /// times. Returns whether the level was reached.
    fn wait_for_status<E>(
        &mut self,
        active: bool,
        poll: Poll,
    ) -> Result<bool, Error<E, L::Error>> {
        for _ in 0..poll.attempts {
            if self.status()? == active {
                return Ok(true);
            }
            self.pause(poll.interval);
        }
        Ok(false)
    }

    fn pause(&mut self, duration: Duration) {
        self.delay.delay_ms(duration.as_millis() as u32);
    }
}
