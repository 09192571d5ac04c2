//! Socket API over the native engine.
//!
//! The gateway never interprets or caches a [`SocketHandle`], the engine owns
//! it from `socket()` until `close()`. Listening sockets do not exist on a
//! cellular link, so `listen` and `accept` always fail with
//! [`Error::Unsupported`].

#[cfg(any(feature = "socket-tcp", feature = "socket-udp"))]
mod nal;

use embassy_time::Duration;
use embedded_nal::SocketAddr;
use heapless::Vec;

use crate::{error::Error, traits::Sockets};

/// Most sockets the module keeps open at once
pub const MAX_SOCKETS: usize = 4;

/// Engine assigned socket identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SocketHandle(pub i32);

pub type HandleSet = Vec<SocketHandle, MAX_SOCKETS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressFamily {
    Inet,
    Inet6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SocketType {
    Stream,
    Datagram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Protocol {
    Tcp,
    Udp,
}

/// Server certificate verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verify {
    None,
    Optional,
    #[default]
    Required,
}

/// TLS material for [`SocketGateway::secure_socket`], PEM or DER as the
/// engine expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SecureContext<'a> {
    pub ca_cert: Option<&'a [u8]>,
    pub client_cert: Option<&'a [u8]>,
    pub private_key: Option<&'a [u8]>,
    pub verify: Verify,
}

pub struct SocketGateway<'a, S> {
    engine: &'a mut S,
}

impl<'a, S: Sockets> SocketGateway<'a, S> {
    pub fn new(engine: &'a mut S) -> Self {
        Self { engine }
    }

    pub fn socket(
        &mut self,
        family: AddressFamily,
        ty: SocketType,
        proto: Protocol,
    ) -> Result<SocketHandle, Error<S::Error>> {
        self.engine
            .socket(family, ty, proto)
            .map_err(Error::Native)
    }

    pub fn secure_socket(
        &mut self,
        family: AddressFamily,
        ty: SocketType,
        proto: Protocol,
        context: &SecureContext<'_>,
    ) -> Result<SocketHandle, Error<S::Error>> {
        self.engine
            .secure_socket(family, ty, proto, context)
            .map_err(Error::Native)
    }

    /// Bind a local address, for unconnected datagram use.
    pub fn bind(&mut self, handle: SocketHandle, local: SocketAddr) -> Result<(), Error<S::Error>> {
        self.engine.bind(handle, local).map_err(Error::Native)
    }

    pub fn connect(
        &mut self,
        handle: SocketHandle,
        remote: SocketAddr,
    ) -> Result<(), Error<S::Error>> {
        debug!("[{:?}] Connecting", handle);
        self.engine.connect(handle, remote).map_err(Error::Native)
    }

    pub fn send(
        &mut self,
        handle: SocketHandle,
        data: &[u8],
        flags: u32,
    ) -> Result<usize, Error<S::Error>> {
        trace!("[{:?}] Sending {} bytes", handle, data.len());
        self.engine.send(handle, data, flags).map_err(Error::Native)
    }

    /// Same as a single [`send`](Self::send), partial writes are returned as
    /// reported by the engine.
    pub fn sendall(
        &mut self,
        handle: SocketHandle,
        data: &[u8],
        flags: u32,
    ) -> Result<usize, Error<S::Error>> {
        self.send(handle, data, flags)
    }

    pub fn sendto(
        &mut self,
        handle: SocketHandle,
        data: &[u8],
        flags: u32,
        remote: SocketAddr,
    ) -> Result<usize, Error<S::Error>> {
        self.engine
            .sendto(handle, data, flags, remote)
            .map_err(Error::Native)
    }

    pub fn recv_into(
        &mut self,
        handle: SocketHandle,
        buf: &mut [u8],
        flags: u32,
    ) -> Result<usize, Error<S::Error>> {
        self.engine
            .recv_into(handle, buf, flags)
            .map_err(Error::Native)
    }

    pub fn recvfrom_into(
        &mut self,
        handle: SocketHandle,
        buf: &mut [u8],
        flags: u32,
    ) -> Result<(usize, SocketAddr), Error<S::Error>> {
        self.engine
            .recvfrom_into(handle, buf, flags)
            .map_err(Error::Native)
    }

    pub fn close(&mut self, handle: SocketHandle) -> Result<(), Error<S::Error>> {
        debug!("[{:?}] Closing", handle);
        self.engine.close(handle).map_err(Error::Native)
    }

    pub fn select(
        &mut self,
        readable: &mut HandleSet,
        writable: &mut HandleSet,
        exceptional: &mut HandleSet,
        timeout: Option<Duration>,
    ) -> Result<usize, Error<S::Error>> {
        self.engine
            .select(readable, writable, exceptional, timeout)
            .map_err(Error::Native)
    }

    /// Socket options are engine defined, nothing is applied here.
    pub fn setsockopt(
        &mut self,
        _handle: SocketHandle,
        _level: u32,
        _option: u32,
        _value: &[u8],
    ) -> Result<(), Error<S::Error>> {
        Ok(())
    }

    pub fn listen(&mut self, _handle: SocketHandle, _backlog: usize) -> Result<(), Error<S::Error>> {
        Err(Error::Unsupported)
    }

    pub fn accept(
        &mut self,
        _handle: SocketHandle,
    ) -> Result<(SocketHandle, SocketAddr), Error<S::Error>> {
        Err(Error::Unsupported)
    }
}
