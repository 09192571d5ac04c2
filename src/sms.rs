//! SMS store and RTC access, forwarded to the engine as is.
//!
//! [`SmsRecord`] and [`RtcTime`] implement [`serde::Serialize`] for host side
//! reporting.

use heapless::{String, Vec};
use serde::Serialize;

use crate::{client::Modem, error::Error, rtc::RtcTime, traits::Messaging};

/// Longest service center address, `+` and international number included
pub const SMSC_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmsRecord {
    /// Storage index, as accepted by [`Modem::delete_sms`]
    pub index: u16,
    pub unread: bool,
    pub sender: String<32>,
    pub text: String<160>,
    pub timestamp: Option<RtcTime>,
}

impl<L, D, E: Messaging> Modem<L, D, E> {
    pub fn rtc(&mut self) -> Result<RtcTime, Error<E::Error>> {
        self.engine.rtc().map_err(Error::Native)
    }

    /// Send a text message, returning the network assigned reference.
    pub fn send_sms(&mut self, number: &str, text: &str) -> Result<u16, Error<E::Error>> {
        debug!("Sending SMS, {} bytes", text.len());
        self.engine.send_sms(number, text).map_err(Error::Native)
    }

    pub fn delete_sms(&mut self, index: u16) -> Result<(), Error<E::Error>> {
        self.engine.delete_sms(index).map_err(Error::Native)
    }

    /// List at most `N` stored messages, skipping the first `offset`.
    pub fn list_sms<const N: usize>(
        &mut self,
        unread_only: bool,
        offset: usize,
    ) -> Result<Vec<SmsRecord, N>, Error<E::Error>> {
        self.engine
            .list_sms(unread_only, offset)
            .map_err(Error::Native)
    }

    /// Number of unread messages in storage
    pub fn pending_sms(&mut self) -> Result<usize, Error<E::Error>> {
        self.engine.pending_sms().map_err(Error::Native)
    }

    pub fn get_smsc(&mut self) -> Result<String<SMSC_LEN>, Error<E::Error>> {
        self.engine.get_smsc().map_err(Error::Native)
    }

    pub fn set_smsc(&mut self, address: &str) -> Result<(), Error<E::Error>> {
        self.engine.set_smsc(address).map_err(Error::Native)
    }
}
