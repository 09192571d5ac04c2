#![cfg_attr(not(test), no_std)]

//! # Quectel cellular
//!
//! Driver for Quectel UG95/UG96 cellular modules. The crate sequences the
//! module's power, kill and status lines, and forwards network, socket, SMS
//! and clock operations to a native command engine implementing the traits
//! in [`traits`]. The lifecycle handshake itself ships as [`AtControl`],
//! running over any blocking [`atat`] client.
//!
//! It can be used both on `no_std` and `std` platforms.
//!
//! ## Features
//!
//! - `socket-tcp`, `socket-udp` (default): `embedded-nal` stacks over
//!   [`SocketGateway`](socket::SocketGateway).
//! - `log` or `defmt`: logging backend.
//!
//! ## Example
//!
//! ```ignore
//! let config = Config::new(PWR_KEY, RESET_N, STATUS).kill_active(Level::Low);
//! let lines = HalLines::new(pwr_key, reset_n, status);
//! let mut modem = Modem::new(config, lines, delay, engine);
//! modem.init(&mut providers)?;
//!
//! modem.startup()?;
//! modem.attach(&Apn::new("internet"), AuthMode::None, Duration::from_secs(60))?;
//! ```

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod client;
pub mod command;
pub mod config;
pub mod control;
pub mod error;
pub mod module_timing;
pub mod network;
pub mod pins;
pub mod power;
pub mod prelude;
pub mod registry;
pub mod rtc;
pub mod sms;
pub mod socket;
pub mod traits;

#[cfg(test)]
mod test_helpers;

pub use atat;
pub use embedded_nal;

pub use client::Modem;
pub use config::{Config, InitMode, Level};
pub use control::AtControl;
pub use error::{Error, Transition};
pub use power::ModuleState;
