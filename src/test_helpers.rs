//! Hand written mocks shared by the unit tests.
//!
//! Time is virtual: [`MockDelay`] advances the shared [`Bench`] clock and the
//! scripted status line is evaluated against it, so tests can assert exact
//! pulse timings and poll counts.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    convert::Infallible,
    rc::Rc,
};

use embassy_time::Duration;
use embedded_hal::{
    delay::DelayNs,
    digital::{self, ErrorKind},
};
use embedded_nal::{IpAddr, Ipv4Addr, SocketAddr};

use crate::{
    client::Modem,
    config::Config,
    network::{Apn, AuthMode, LinkInfo, MobileInfo, NetworkInfo, Operator, MAX_OPERATORS},
    pins::{ControlLines, Line, PinMode, PortExpander},
    registry::ProviderTable,
    rtc::RtcTime,
    sms::{SmsRecord, SMSC_LEN},
    socket::{AddressFamily, HandleSet, Protocol, SecureContext, SocketHandle, SocketType},
    traits::{Control, ErrorType, Messaging, Network, Sockets},
};

/// Electrical level of the status line over virtual time
#[derive(Debug, Clone, Copy)]
pub enum StatusScript {
    Fixed(bool),
    HighFrom(u64),
    LowFrom(u64),
    /// High until the given line has been driven high
    LowOnceHigh(Line),
}

#[derive(Debug)]
pub struct Bench {
    now_ns: u64,
    pub status: StatusScript,
    /// `(ms, line, high)`
    pub writes: Vec<(u64, Line, bool)>,
    pub modes: Vec<(Line, PinMode)>,
    pub status_reads: usize,
    /// Fail every pin operation
    pub fail: bool,
}

impl Bench {
    pub fn now_ms(&self) -> u64 {
        self.now_ns / 1_000_000
    }

    fn status_high(&self) -> bool {
        let now = self.now_ms();
        match self.status {
            StatusScript::Fixed(high) => high,
            StatusScript::HighFrom(t) => now >= t,
            StatusScript::LowFrom(t) => now < t,
            StatusScript::LowOnceHigh(line) => !self.writes.iter().any(|w| w.1 == line && w.2),
        }
    }
}

pub type SharedBench = Rc<RefCell<Bench>>;

pub fn bench(status: StatusScript) -> (MockLines, MockDelay, SharedBench) {
    let bench = Rc::new(RefCell::new(Bench {
        now_ns: 0,
        status,
        writes: Vec::new(),
        modes: Vec::new(),
        status_reads: 0,
        fail: false,
    }));
    (
        MockLines(bench.clone()),
        MockDelay(bench.clone()),
        bench,
    )
}

/// Modem in `Off` state over a status line that reads inactive.
pub fn modem() -> (Modem<MockLines, MockDelay, MockEngine>, SharedBench) {
    let (lines, delay, bench) = bench(StatusScript::Fixed(false));
    let mut modem = Modem::new(Config::new(1, 2, 3), lines, delay, MockEngine::default());
    modem.init(&mut ProviderTable::new()).unwrap();
    bench.borrow_mut().writes.clear();
    (modem, bench)
}

pub struct MockLines(SharedBench);

impl digital::ErrorType for MockLines {
    type Error = ErrorKind;
}

impl ControlLines for MockLines {
    fn configure(&mut self, line: Line, mode: PinMode) -> Result<(), Self::Error> {
        let mut bench = self.0.borrow_mut();
        if bench.fail {
            return Err(ErrorKind::Other);
        }
        bench.modes.push((line, mode));
        Ok(())
    }

    fn read(&mut self, line: Line) -> Result<bool, Self::Error> {
        let mut bench = self.0.borrow_mut();
        if bench.fail || line != Line::Status {
            return Err(ErrorKind::Other);
        }
        bench.status_reads += 1;
        Ok(bench.status_high())
    }

    fn write(&mut self, line: Line, high: bool) -> Result<(), Self::Error> {
        let mut bench = self.0.borrow_mut();
        if bench.fail {
            return Err(ErrorKind::Other);
        }
        let now = bench.now_ms();
        bench.writes.push((now, line, high));
        Ok(())
    }
}

pub struct MockDelay(SharedBench);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().now_ns += ns as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().now_ns += ms as u64 * 1_000_000;
    }
}

/// Pin backed by a shared level, for [`HalLines`](crate::pins::HalLines).
#[derive(Clone, Default)]
pub struct MockPin {
    pub level: Rc<Cell<bool>>,
}

impl digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl digital::InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

impl digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }
}

/// Bus failure of [`MockExpander`], carrying the pin it was addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBusError {
    Nack(u16),
}

impl digital::Error for MockBusError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Default)]
pub struct MockExpander {
    pub modes: Vec<(u16, PinMode)>,
    pub sets: Vec<(u16, bool)>,
    pub inputs: Vec<(u16, bool)>,
    /// Writes to this pin fail
    pub broken: Option<u16>,
}

impl digital::ErrorType for MockExpander {
    type Error = MockBusError;
}

impl PortExpander for MockExpander {
    fn mode(&mut self, pin: u16, mode: PinMode) -> Result<(), Self::Error> {
        self.modes.push((pin, mode));
        Ok(())
    }

    fn get(&mut self, pin: u16) -> Result<bool, Self::Error> {
        self.inputs
            .iter()
            .find(|(p, _)| *p == pin)
            .map(|(_, high)| *high)
            .ok_or(MockBusError::Nack(pin))
    }

    fn set(&mut self, pin: u16, high: bool) -> Result<(), Self::Error> {
        if self.broken == Some(pin) {
            return Err(MockBusError::Nack(pin));
        }
        self.sets.push((pin, high));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    Timeout,
    Rejected,
}

/// Peer every received datagram claims to come from
pub fn peer() -> SocketAddr {
    SocketAddr::new(Ipv4Addr::new(10, 0, 0, 2).into(), 8080)
}

pub fn sms(index: u16, unread: bool, text: &str) -> SmsRecord {
    SmsRecord {
        index,
        unread,
        sender: heapless::String::try_from("+4500000000").unwrap(),
        text: heapless::String::try_from(text).unwrap(),
        timestamp: None,
    }
}

/// Native engine stand-in recording every call.
pub struct MockEngine {
    pub calls: Vec<String>,
    /// Fail every non-lifecycle call
    pub fail: Option<MockError>,
    pub startup_result: Result<(), MockError>,
    pub power_down_result: Result<(), MockError>,
    pub next_handle: i32,
    pub send_limit: Option<usize>,
    pub rx: Vec<u8>,
    /// Handles reported ready by `select`
    pub ready: Vec<SocketHandle>,
    pub rssi: u8,
    pub network: NetworkInfo,
    pub clock: Option<RtcTime>,
    pub inbox: Vec<SmsRecord>,
    pub next_reference: u16,
    pub smsc: heapless::String<SMSC_LEN>,
}

impl Default for MockEngine {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            fail: None,
            startup_result: Ok(()),
            power_down_result: Ok(()),
            next_handle: 0,
            send_limit: None,
            rx: Vec::new(),
            ready: Vec::new(),
            rssi: 99,
            network: NetworkInfo::default(),
            clock: RtcTime::new(2024, 1, 1, 0, 0, 0, 0),
            inbox: Vec::new(),
            next_reference: 1,
            smsc: heapless::String::new(),
        }
    }
}

impl MockEngine {
    fn call(&mut self, call: impl ToString) -> Result<(), MockError> {
        self.calls.push(call.to_string());
        match self.fail {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl ErrorType for MockEngine {
    type Error = MockError;
}

impl Control for MockEngine {
    fn complete_startup(&mut self) -> Result<(), Self::Error> {
        self.calls.push("complete_startup".to_string());
        self.startup_result
    }

    fn power_down(&mut self) -> Result<(), Self::Error> {
        self.calls.push("power_down".to_string());
        self.power_down_result
    }
}

impl Network for MockEngine {
    fn attach(
        &mut self,
        apn: &Apn<'_>,
        auth: AuthMode,
        timeout: Duration,
    ) -> Result<(), Self::Error> {
        self.call(format!(
            "attach {} {} {} {:?} {}",
            apn.name,
            apn.username.unwrap_or("-"),
            apn.password.unwrap_or("-"),
            auth,
            timeout.as_millis()
        ))
    }

    fn detach(&mut self) -> Result<(), Self::Error> {
        self.call("detach")
    }

    fn network_info(&mut self) -> Result<NetworkInfo, Self::Error> {
        self.call("network_info")?;
        Ok(self.network.clone())
    }

    fn mobile_info(&mut self) -> Result<MobileInfo, Self::Error> {
        self.call("mobile_info")?;
        Ok(MobileInfo::default())
    }

    fn link_info(&mut self) -> Result<LinkInfo, Self::Error> {
        self.call("link_info")?;
        Ok(LinkInfo::default())
    }

    fn signal_quality(&mut self) -> Result<u8, Self::Error> {
        self.call("signal_quality")?;
        Ok(self.rssi)
    }

    fn operators(&mut self) -> Result<heapless::Vec<Operator, MAX_OPERATORS>, Self::Error> {
        self.call("operators")?;
        Ok(heapless::Vec::new())
    }

    fn set_operator(&mut self, name: &str) -> Result<(), Self::Error> {
        self.call(format!("set_operator {}", name))
    }

    fn resolve(&mut self, hostname: &str) -> Result<IpAddr, Self::Error> {
        self.call(format!("resolve {}", hostname))?;
        Ok(Ipv4Addr::new(93, 184, 216, 34).into())
    }
}

impl Sockets for MockEngine {
    fn socket(
        &mut self,
        family: AddressFamily,
        ty: SocketType,
        proto: Protocol,
    ) -> Result<SocketHandle, Self::Error> {
        self.call(format!("socket {:?} {:?} {:?}", family, ty, proto))?;
        let handle = SocketHandle(self.next_handle);
        self.next_handle += 1;
        Ok(handle)
    }

    fn secure_socket(
        &mut self,
        family: AddressFamily,
        ty: SocketType,
        proto: Protocol,
        context: &SecureContext<'_>,
    ) -> Result<SocketHandle, Self::Error> {
        self.call(format!(
            "secure_socket {:?} {:?} {:?} {:?}",
            family, ty, proto, context.verify
        ))?;
        let handle = SocketHandle(self.next_handle);
        self.next_handle += 1;
        Ok(handle)
    }

    fn bind(&mut self, handle: SocketHandle, local: SocketAddr) -> Result<(), Self::Error> {
        self.call(format!("bind {} {}", handle.0, local))
    }

    fn connect(&mut self, handle: SocketHandle, remote: SocketAddr) -> Result<(), Self::Error> {
        self.call(format!("connect {} {}", handle.0, remote))
    }

    fn send(&mut self, handle: SocketHandle, data: &[u8], _flags: u32) -> Result<usize, Self::Error> {
        self.call(format!("send {} {}", handle.0, data.len()))?;
        Ok(self.send_limit.map_or(data.len(), |limit| data.len().min(limit)))
    }

    fn sendto(
        &mut self,
        handle: SocketHandle,
        data: &[u8],
        _flags: u32,
        remote: SocketAddr,
    ) -> Result<usize, Self::Error> {
        self.call(format!("sendto {} {} {}", handle.0, data.len(), remote))?;
        Ok(data.len())
    }

    fn recv_into(
        &mut self,
        handle: SocketHandle,
        buf: &mut [u8],
        _flags: u32,
    ) -> Result<usize, Self::Error> {
        self.call(format!("recv_into {}", handle.0))?;
        let n = self.rx.len().min(buf.len());
        buf[..n].copy_from_slice(&self.rx[..n]);
        Ok(n)
    }

    fn recvfrom_into(
        &mut self,
        handle: SocketHandle,
        buf: &mut [u8],
        flags: u32,
    ) -> Result<(usize, SocketAddr), Self::Error> {
        let n = self.recv_into(handle, buf, flags)?;
        Ok((n, peer()))
    }

    fn close(&mut self, handle: SocketHandle) -> Result<(), Self::Error> {
        self.call(format!("close {}", handle.0))
    }

    fn select(
        &mut self,
        readable: &mut HandleSet,
        writable: &mut HandleSet,
        exceptional: &mut HandleSet,
        _timeout: Option<Duration>,
    ) -> Result<usize, Self::Error> {
        self.call("select")?;
        let ready = &self.ready;
        readable.retain(|h| ready.contains(h));
        writable.retain(|h| ready.contains(h));
        exceptional.clear();
        Ok(readable.len() + writable.len())
    }
}

impl Messaging for MockEngine {
    fn rtc(&mut self) -> Result<RtcTime, Self::Error> {
        self.call("rtc")?;
        self.clock.ok_or(MockError::Rejected)
    }

    fn send_sms(&mut self, number: &str, text: &str) -> Result<u16, Self::Error> {
        self.call(format!("send_sms {} {}", number, text))?;
        let reference = self.next_reference;
        self.next_reference += 1;
        Ok(reference)
    }

    fn delete_sms(&mut self, index: u16) -> Result<(), Self::Error> {
        self.call(format!("delete_sms {}", index))?;
        self.inbox.retain(|s| s.index != index);
        Ok(())
    }

    fn list_sms<const N: usize>(
        &mut self,
        unread_only: bool,
        offset: usize,
    ) -> Result<heapless::Vec<SmsRecord, N>, Self::Error> {
        self.call("list_sms")?;
        Ok(self
            .inbox
            .iter()
            .filter(|s| !unread_only || s.unread)
            .skip(offset)
            .take(N)
            .cloned()
            .collect())
    }

    fn pending_sms(&mut self) -> Result<usize, Self::Error> {
        self.call("pending_sms")?;
        Ok(self.inbox.iter().filter(|s| s.unread).count())
    }

    fn get_smsc(&mut self) -> Result<heapless::String<SMSC_LEN>, Self::Error> {
        self.call("get_smsc")?;
        Ok(self.smsc.clone())
    }

    fn set_smsc(&mut self, address: &str) -> Result<(), Self::Error> {
        self.call(format!("set_smsc {}", address))?;
        self.smsc = heapless::String::try_from(address).map_err(|_| MockError::Rejected)?;
        Ok(())
    }
}

/// Blocking AT client replaying canned results in order, recording every
/// command it is asked to send. Times out once the script runs dry.
#[derive(Default)]
pub struct MockAtClient {
    pub sent: Vec<String>,
    responses: VecDeque<Result<(), atat::Error>>,
}

impl MockAtClient {
    pub fn respond_ok(&mut self, n: usize) {
        for _ in 0..n {
            self.responses.push_back(Ok(()));
        }
    }

    pub fn respond_err(&mut self, error: atat::Error, n: usize) {
        for _ in 0..n {
            self.responses.push_back(Err(error.clone()));
        }
    }
}

impl atat::blocking::AtatClient for MockAtClient {
    fn send<Cmd: atat::AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, atat::Error> {
        let mut buf = std::vec![0; Cmd::MAX_LEN];
        let len = cmd.write(&mut buf);
        self.sent
            .push(String::from_utf8_lossy(&buf[..len]).trim_end().to_string());

        match self.responses.pop_front() {
            Some(Ok(())) => cmd.parse(Ok(&b""[..])),
            Some(Err(e)) => Err(e),
            None => Err(atat::Error::Timeout),
        }
    }
}
