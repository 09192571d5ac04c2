//! Registration with the host network dispatch table.
//!
//! The host keeps one active provider per service key. Initializing a
//! [`Modem`](crate::Modem) registers it for the cellular, secure socket and
//! IPv4 socket family services.

use crate::socket::AddressFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Service {
    Cellular,
    Secure,
    Socket(AddressFamily),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProviderId(pub &'static str);

/// Identifier this driver registers under
pub const PROVIDER: ProviderId = ProviderId("quectel-ug96");

pub trait Registry {
    fn register(&mut self, service: Service, provider: ProviderId);
}

/// Minimal in-memory provider table, for hosts without their own dispatch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProviderTable {
    cellular: Option<ProviderId>,
    secure: Option<ProviderId>,
    inet: Option<ProviderId>,
    inet6: Option<ProviderId>,
}

impl ProviderTable {
    pub const fn new() -> Self {
        Self {
            cellular: None,
            secure: None,
            inet: None,
            inet6: None,
        }
    }

    pub fn provider(&self, service: Service) -> Option<ProviderId> {
        match service {
            Service::Cellular => self.cellular,
            Service::Secure => self.secure,
            Service::Socket(AddressFamily::Inet) => self.inet,
            Service::Socket(AddressFamily::Inet6) => self.inet6,
        }
    }
}

impl Registry for ProviderTable {
    fn register(&mut self, service: Service, provider: ProviderId) {
        let slot = match service {
            Service::Cellular => &mut self.cellular,
            Service::Secure => &mut self.secure,
            Service::Socket(AddressFamily::Inet) => &mut self.inet,
            Service::Socket(AddressFamily::Inet6) => &mut self.inet6,
        };
        if let Some(previous) = slot.replace(provider) {
            debug!("{:?} provider replaced: {:?}", service, previous);
        }
    }
}
