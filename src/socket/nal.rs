//! `embedded-nal` stacks over [`SocketGateway`].
//!
//! Sockets are plain [`SocketHandle`]s, all state stays with the engine.

use embedded_nal::{Ipv4Addr, SocketAddr};

use super::{AddressFamily, Protocol, SocketGateway, SocketHandle, SocketType};
use crate::{error::Error, traits::Sockets};

fn any_port(port: u16) -> SocketAddr {
    SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), port)
}

#[cfg(feature = "socket-tcp")]
impl<S: Sockets> embedded_nal::TcpClientStack for SocketGateway<'_, S> {
    type TcpSocket = SocketHandle;
    type Error = Error<S::Error>;

    fn socket(&mut self) -> Result<Self::TcpSocket, Self::Error> {
        self.engine
            .socket(AddressFamily::Inet, SocketType::Stream, Protocol::Tcp)
            .map_err(Error::Native)
    }

    fn connect(
        &mut self,
        socket: &mut Self::TcpSocket,
        remote: SocketAddr,
    ) -> nb::Result<(), Self::Error> {
        self.engine
            .connect(*socket, remote)
            .map_err(|e| nb::Error::Other(Error::Native(e)))
    }

    fn send(&mut self, socket: &mut Self::TcpSocket, buffer: &[u8]) -> nb::Result<usize, Self::Error> {
        self.engine
            .send(*socket, buffer, 0)
            .map_err(|e| nb::Error::Other(Error::Native(e)))
    }

    fn receive(
        &mut self,
        socket: &mut Self::TcpSocket,
        buffer: &mut [u8],
    ) -> nb::Result<usize, Self::Error> {
        self.engine
            .recv_into(*socket, buffer, 0)
            .map_err(|e| nb::Error::Other(Error::Native(e)))
    }

    fn close(&mut self, socket: Self::TcpSocket) -> Result<(), Self::Error> {
        self.engine.close(socket).map_err(Error::Native)
    }
}

#[cfg(feature = "socket-tcp")]
impl<S: Sockets> embedded_nal::TcpFullStack for SocketGateway<'_, S> {
    fn bind(&mut self, socket: &mut Self::TcpSocket, local_port: u16) -> Result<(), Self::Error> {
        self.engine
            .bind(*socket, any_port(local_port))
            .map_err(Error::Native)
    }

    fn listen(&mut self, _socket: &mut Self::TcpSocket) -> Result<(), Self::Error> {
        Err(Error::Unsupported)
    }

    fn accept(
        &mut self,
        _socket: &mut Self::TcpSocket,
    ) -> nb::Result<(Self::TcpSocket, SocketAddr), Self::Error> {
        Err(nb::Error::Other(Error::Unsupported))
    }
}

#[cfg(feature = "socket-udp")]
impl<S: Sockets> embedded_nal::UdpClientStack for SocketGateway<'_, S> {
    type UdpSocket = SocketHandle;
    type Error = Error<S::Error>;

    fn socket(&mut self) -> Result<Self::UdpSocket, Self::Error> {
        self.engine
            .socket(AddressFamily::Inet, SocketType::Datagram, Protocol::Udp)
            .map_err(Error::Native)
    }

    fn connect(
        &mut self,
        socket: &mut Self::UdpSocket,
        remote: SocketAddr,
    ) -> Result<(), Self::Error> {
        self.engine.connect(*socket, remote).map_err(Error::Native)
    }

    fn send(&mut self, socket: &mut Self::UdpSocket, buffer: &[u8]) -> nb::Result<(), Self::Error> {
        self.engine
            .send(*socket, buffer, 0)
            .map(drop)
            .map_err(|e| nb::Error::Other(Error::Native(e)))
    }

    fn receive(
        &mut self,
        socket: &mut Self::UdpSocket,
        buffer: &mut [u8],
    ) -> nb::Result<(usize, SocketAddr), Self::Error> {
        self.engine
            .recvfrom_into(*socket, buffer, 0)
            .map_err(|e| nb::Error::Other(Error::Native(e)))
    }

    fn close(&mut self, socket: Self::UdpSocket) -> Result<(), Self::Error> {
        self.engine.close(socket).map_err(Error::Native)
    }
}

#[cfg(feature = "socket-udp")]
impl<S: Sockets> embedded_nal::UdpFullStack for SocketGateway<'_, S> {
    fn bind(&mut self, socket: &mut Self::UdpSocket, local_port: u16) -> Result<(), Self::Error> {
        self.engine
            .bind(*socket, any_port(local_port))
            .map_err(Error::Native)
    }

    fn send_to(
        &mut self,
        socket: &mut Self::UdpSocket,
        remote: SocketAddr,
        buffer: &[u8],
    ) -> nb::Result<(), Self::Error> {
        self.engine
            .sendto(*socket, buffer, 0, remote)
            .map(drop)
            .map_err(|e| nb::Error::Other(Error::Native(e)))
    }
}
