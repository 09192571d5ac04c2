use embedded_hal::delay::DelayNs;

use crate::{
    config::Config,
    error::Error,
    pins::{ControlLines, PinController},
    power::{Lifecycle, ModuleState},
    registry::{Registry, Service, PROVIDER},
    socket::{AddressFamily, SocketGateway},
    traits::{Control, Sockets},
};

/// Handle to a single cellular module.
///
/// Owns the control lines, the delay and the native command engine `E`.
/// Network, SMS and socket operations are forwarded to the engine, power
/// transitions are sequenced on the control lines.
pub struct Modem<L, D, E> {
    config: Config,
    lifecycle: Lifecycle<L, D>,
    pub(crate) engine: E,
}

impl<L, D, E> Modem<L, D, E>
where
    L: ControlLines,
    D: DelayNs,
    E: Control,
{
    /// Take ownership of the control lines, the delay and the engine. Nothing
    /// is touched until [`init`](Self::init).
    pub fn new(config: Config, lines: L, delay: D, engine: E) -> Self {
        let pins = PinController::new(lines, &config);
        Self {
            config,
            lifecycle: Lifecycle::new(pins, delay),
            engine,
        }
    }

    /// Configure the control lines, bring the module to its initial state
    /// per [`Config::init_mode`](crate::config::InitMode), and register this
    /// driver as the cellular, secure socket and IPv4 provider.
    ///
    /// Nothing is registered on failure. The modem keeps its resources, so
    /// `init` can be retried, or they can be taken back with
    /// [`release`](Self::release).
    pub fn init<R: Registry>(
        &mut self,
        registry: &mut R,
    ) -> Result<(), Error<E::Error, L::Error>> {
        self.lifecycle.bootstrap(self.config.init_mode)?;

        registry.register(Service::Cellular, PROVIDER);
        registry.register(Service::Secure, PROVIDER);
        registry.register(Service::Socket(AddressFamily::Inet), PROVIDER);
        info!("Modem initialized on serial {}", self.config.serial);
        Ok(())
    }

    pub fn startup(&mut self) -> Result<(), Error<E::Error, L::Error>> {
        self.lifecycle.startup(&mut self.engine)
    }

    pub fn shutdown(&mut self, forced: bool) -> Result<(), Error<E::Error, L::Error>> {
        self.lifecycle.shutdown(&mut self.engine, forced)
    }

    pub fn state(&self) -> ModuleState {
        self.lifecycle.state()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn release(self) -> (L, D, E) {
        let (lines, delay) = self.lifecycle.release();
        (lines, delay, self.engine)
    }
}

impl<L, D, E: Sockets> Modem<L, D, E> {
    pub fn sockets(&mut self) -> SocketGateway<'_, E> {
        SocketGateway::new(&mut self.engine)
    }
}
