//! Packet network attach and read-only module information.
//!
//! The info snapshots implement [`serde::Serialize`], so that a host can
//! report them with whichever serializer it already carries.

use embassy_time::Duration;
use embedded_nal::{IpAddr, Ipv4Addr};
use heapless::{String, Vec};
use serde::Serialize;

use crate::{client::Modem, error::Error, traits::Network};

/// Most operators reported by a single `+COPS=?` scan
pub const MAX_OPERATORS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Apn<'a> {
    pub name: &'a str,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
}

impl<'a> Apn<'a> {
    pub const fn new(name: &'a str) -> Self {
        Self {
            name,
            username: None,
            password: None,
        }
    }

    pub const fn with_credentials(self, username: &'a str, password: &'a str) -> Self {
        Self {
            username: Some(username),
            password: Some(password),
            ..self
        }
    }
}

/// PDP context authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AuthMode {
    #[default]
    None = 0,
    Pap = 1,
    Chap = 2,
    PapOrChap = 3,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NetworkInfo {
    pub registered: bool,
    pub attached: bool,
    /// Radio access technology, e.g. `GSM` or `UMTS`
    pub rat: String<16>,
    pub operator: String<24>,
    pub mcc: Option<u16>,
    pub mnc: Option<u16>,
    pub lac: Option<u16>,
    pub cell_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MobileInfo {
    pub imei: String<16>,
    pub imsi: String<16>,
    pub iccid: String<22>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkInfo {
    pub ip: Option<IpAddr>,
    pub dns: Option<IpAddr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatorStatus {
    Unknown = 0,
    Available = 1,
    Current = 2,
    Forbidden = 3,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operator {
    pub status: OperatorStatus,
    pub long_name: String<24>,
    pub short_name: String<10>,
    /// Numeric MCC/MNC code
    pub code: String<8>,
}

/// Convert a `+CSQ` RSSI index to dBm. `99` (not known) maps to `0`.
pub fn rssi_to_dbm(rssi: u8) -> i16 {
    match rssi {
        99 => 0,
        0..=31 => -113 + 2 * rssi as i16,
        other => other as i16,
    }
}

impl<L, D, E: Network> Modem<L, D, E> {
    /// Attach to the packet network. Blocks for as long as the engine takes,
    /// `timeout` is handed to the engine as is.
    pub fn attach(
        &mut self,
        apn: &Apn<'_>,
        auth: AuthMode,
        timeout: Duration,
    ) -> Result<(), Error<E::Error>> {
        debug!("Attaching to APN {}", apn.name);
        self.engine.attach(apn, auth, timeout).map_err(Error::Native)
    }

    pub fn detach(&mut self) -> Result<(), Error<E::Error>> {
        self.engine.detach().map_err(Error::Native)
    }

    pub fn network_info(&mut self) -> Result<NetworkInfo, Error<E::Error>> {
        self.engine.network_info().map_err(Error::Native)
    }

    pub fn mobile_info(&mut self) -> Result<MobileInfo, Error<E::Error>> {
        self.engine.mobile_info().map_err(Error::Native)
    }

    pub fn link_info(&mut self) -> Result<LinkInfo, Error<E::Error>> {
        self.engine.link_info().map_err(Error::Native)
    }

    /// Received signal strength in dBm, `0` if not known.
    pub fn signal_strength(&mut self) -> Result<i16, Error<E::Error>> {
        self.engine
            .signal_quality()
            .map(rssi_to_dbm)
            .map_err(Error::Native)
    }

    pub fn operators(&mut self) -> Result<Vec<Operator, MAX_OPERATORS>, Error<E::Error>> {
        self.engine.operators().map_err(Error::Native)
    }

    pub fn set_operator(&mut self, name: &str) -> Result<(), Error<E::Error>> {
        self.engine.set_operator(name).map_err(Error::Native)
    }

    /// Resolve `hostname`. Dotted IPv4 literals are returned without asking
    /// the engine.
    pub fn gethostbyname(&mut self, hostname: &str) -> Result<IpAddr, Error<E::Error>> {
        if let Ok(ip) = hostname.parse::<Ipv4Addr>() {
            return Ok(IpAddr::V4(ip));
        }
        self.engine.resolve(hostname).map_err(Error::Native)
    }
}
