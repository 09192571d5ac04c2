use atat::blocking::AtatClient;

use crate::{
    command::{
        control::{
            types::{BaudRate, Echo},
            SetDataRate, SetEcho,
        },
        mobile_control::{
            types::{Functionality, PowerDownMode, TerminationErrorMode, TimezoneUpdate},
            PowerDown, SetAutomaticTimezoneUpdate, SetModuleFunctionality,
            SetReportMobileTerminationError,
        },
        network_service::{types::NetworkRegistrationUrcConfig, SetNetworkRegistrationStatus},
        sms::{types::MessageFormat, SetMessageFormat, SetNewMessageIndication},
        AT,
    },
    traits::{Control, ErrorType},
};

/// Autobaud probe attempts after power on
const AUTOBAUD_ATTEMPTS: u8 = 200;

/// [`Control`] hooks implemented over a blocking AT client.
///
/// Can be used as is for a module that only needs the lifecycle, or wrapped
/// by a full command engine that adds the network, socket and SMS services.
pub struct AtControl<C> {
    client: C,
}

impl<C: AtatClient> AtControl<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn release(self) -> C {
        self.client
    }

    /// Send a raw AT command, bypassing the driver. Settings changed this way
    /// may interfere with the handshake.
    pub fn send<Cmd: atat::AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, atat::Error> {
        self.client.send(cmd)
    }

    /// Probe the module with `AT` until it answers, at most `attempts` times.
    pub fn is_alive(&mut self, attempts: u8) -> Result<(), atat::Error> {
        let mut error = atat::Error::Timeout;
        for _ in 0..attempts {
            match self.client.send(&AT) {
                Ok(_) => return Ok(()),
                Err(e) => error = e,
            }
        }
        Err(error)
    }
}

impl<C> ErrorType for AtControl<C> {
    type Error = atat::Error;
}

impl<C: AtatClient> Control for AtControl<C> {
    fn complete_startup(&mut self) -> Result<(), Self::Error> {
        self.is_alive(AUTOBAUD_ATTEMPTS)?;

        self.client.send(&SetEcho {
            enabled: Echo::Disable,
        })?;
        self.client.send(&SetDataRate {
            rate: BaudRate::B115200,
        })?;
        self.client.send(&SetReportMobileTerminationError {
            n: TerminationErrorMode::Verbose,
        })?;
        self.client.send(&SetNetworkRegistrationStatus {
            n: NetworkRegistrationUrcConfig::UrcVerbose,
        })?;
        self.client.send(&SetAutomaticTimezoneUpdate {
            on_off: TimezoneUpdate::Enable,
        })?;
        self.client.send(&SetMessageFormat {
            format: MessageFormat::Text,
        })?;
        self.client.send(&SetNewMessageIndication {
            mode: 2,
            mt: 1,
            bm: 0,
            ds: 0,
            bfr: 0,
        })?;

        Ok(())
    }

    fn power_down(&mut self) -> Result<(), Self::Error> {
        self.is_alive(1)?;

        if self
            .client
            .send(&SetModuleFunctionality {
                fun: Functionality::Minimum,
            })
            .is_err()
        {
            warn!("Failed to detach before power down");
        }

        self.client.send(&PowerDown {
            mode: PowerDownMode::Normal,
        })?;
        Ok(())
    }
}
