//! Boundary to the native command engine.
//!
//! The engine owns everything protocol related: AT framing, TLS, DNS and
//! socket buffers. The driver only sequences power around it and forwards
//! calls, so every method here maps one-to-one onto a public operation and
//! its error is surfaced unchanged as [`Error::Native`](crate::error::Error::Native).

use core::fmt::Debug;

use embassy_time::Duration;
use embedded_nal::{IpAddr, SocketAddr};
use heapless::{String, Vec};

use crate::network::{Apn, AuthMode, LinkInfo, MobileInfo, NetworkInfo, Operator, MAX_OPERATORS};
use crate::rtc::RtcTime;
use crate::sms::{SmsRecord, SMSC_LEN};
use crate::socket::{AddressFamily, HandleSet, Protocol, SecureContext, SocketHandle, SocketType};

pub trait ErrorType {
    type Error: Debug;
}

/// Hooks run by the lifecycle around the electrical power transitions.
pub trait Control: ErrorType {
    /// Bring the command interface up once the status line reports the
    /// module as running.
    fn complete_startup(&mut self) -> Result<(), Self::Error>;

    /// Request a graceful power down. `Ok` means the module acknowledged the
    /// request, the status line is then expected to go inactive.
    fn power_down(&mut self) -> Result<(), Self::Error>;
}

pub trait Network: ErrorType {
    fn attach(&mut self, apn: &Apn<'_>, auth: AuthMode, timeout: Duration)
        -> Result<(), Self::Error>;
    fn detach(&mut self) -> Result<(), Self::Error>;

    fn network_info(&mut self) -> Result<NetworkInfo, Self::Error>;
    fn mobile_info(&mut self) -> Result<MobileInfo, Self::Error>;
    fn link_info(&mut self) -> Result<LinkInfo, Self::Error>;

    /// Raw `+CSQ` RSSI index
    fn signal_quality(&mut self) -> Result<u8, Self::Error>;

    fn operators(&mut self) -> Result<Vec<Operator, MAX_OPERATORS>, Self::Error>;
    fn set_operator(&mut self, name: &str) -> Result<(), Self::Error>;

    fn resolve(&mut self, hostname: &str) -> Result<IpAddr, Self::Error>;
}

pub trait Sockets: ErrorType {
    fn socket(
        &mut self,
        family: AddressFamily,
        ty: SocketType,
        proto: Protocol,
    ) -> Result<SocketHandle, Self::Error>;

    fn secure_socket(
        &mut self,
        family: AddressFamily,
        ty: SocketType,
        proto: Protocol,
        context: &SecureContext<'_>,
    ) -> Result<SocketHandle, Self::Error>;

    fn bind(&mut self, handle: SocketHandle, local: SocketAddr) -> Result<(), Self::Error>;
    fn connect(&mut self, handle: SocketHandle, remote: SocketAddr) -> Result<(), Self::Error>;

    fn send(&mut self, handle: SocketHandle, data: &[u8], flags: u32)
        -> Result<usize, Self::Error>;
    fn sendto(
        &mut self,
        handle: SocketHandle,
        data: &[u8],
        flags: u32,
        remote: SocketAddr,
    ) -> Result<usize, Self::Error>;

    fn recv_into(
        &mut self,
        handle: SocketHandle,
        buf: &mut [u8],
        flags: u32,
    ) -> Result<usize, Self::Error>;
    fn recvfrom_into(
        &mut self,
        handle: SocketHandle,
        buf: &mut [u8],
        flags: u32,
    ) -> Result<(usize, SocketAddr), Self::Error>;

    fn close(&mut self, handle: SocketHandle) -> Result<(), Self::Error>;

    /// Wait for readiness on any of the given handles. On return each set
    /// only holds its ready handles, the total count is returned.
    fn select(
        &mut self,
        readable: &mut HandleSet,
        writable: &mut HandleSet,
        exceptional: &mut HandleSet,
        timeout: Option<Duration>,
    ) -> Result<usize, Self::Error>;
}

/// SMS store and RTC access.
pub trait Messaging: ErrorType {
    fn rtc(&mut self) -> Result<RtcTime, Self::Error>;

    /// Returns the message reference assigned by the network
    fn send_sms(&mut self, number: &str, text: &str) -> Result<u16, Self::Error>;
    fn delete_sms(&mut self, index: u16) -> Result<(), Self::Error>;
    fn list_sms<const N: usize>(
        &mut self,
        unread_only: bool,
        offset: usize,
    ) -> Result<Vec<SmsRecord, N>, Self::Error>;
    fn pending_sms(&mut self) -> Result<usize, Self::Error>;

    fn get_smsc(&mut self) -> Result<String<SMSC_LEN>, Self::Error>;
    fn set_smsc(&mut self, address: &str) -> Result<(), Self::Error>;
}
