//! Prelude - Include traits
pub use crate::pins::{ControlLines, PortExpander};
pub use crate::registry::Registry;
pub use crate::traits::{Control, ErrorType, Messaging, Network, Sockets};

#[cfg(feature = "socket-tcp")]
pub use embedded_nal::{TcpClientStack, TcpFullStack};
#[cfg(feature = "socket-udp")]
pub use embedded_nal::{UdpClientStack, UdpFullStack};
