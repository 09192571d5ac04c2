//! Control line access.
//!
//! The module is sequenced through three lines: `PWR_KEY` (power), the kill
//! (emergency off) line and the `STATUS` output of the module. Callers of
//! [`PinController`] only reason in terms of asserted / released, the
//! configured [`Level`] of each line decides the electrical level.
//!
//! The actual pin I/O goes through a [`ControlLines`] backend, either
//! [`HalLines`] wrapping `embedded-hal` pins directly, or [`ExpanderLines`]
//! for boards where the lines hang off a port expander.

use embedded_hal::digital::{Error as _, ErrorKind, ErrorType, InputPin, OutputPin, PinState};

use crate::config::{Config, Level};

/// Control lines of the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    Power,
    Kill,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    Input,
    InputPullUp,
    InputPullDown,
    OutputPushPull,
}

/// Pin I/O capability used by [`PinController`].
///
/// Levels are electrical, `true` meaning high.
pub trait ControlLines: ErrorType {
    fn configure(&mut self, line: Line, mode: PinMode) -> Result<(), Self::Error>;
    fn read(&mut self, line: Line) -> Result<bool, Self::Error>;
    fn write(&mut self, line: Line, high: bool) -> Result<(), Self::Error>;
}

/// External GPIO capability addressed by pin number, e.g. an I2C port
/// expander.
pub trait PortExpander: ErrorType {
    fn mode(&mut self, pin: u16, mode: PinMode) -> Result<(), Self::Error>;
    fn get(&mut self, pin: u16) -> Result<bool, Self::Error>;
    fn set(&mut self, pin: u16, high: bool) -> Result<(), Self::Error>;
}

/// Control lines wired straight to MCU pins.
///
/// Pin direction and pulls are fixed by the HAL types at construction, so
/// [`ControlLines::configure`] is a no-op here.
pub struct HalLines<PWR, KILL, STATUS> {
    power: PWR,
    kill: KILL,
    status: STATUS,
}

impl<PWR, KILL, STATUS> HalLines<PWR, KILL, STATUS>
where
    PWR: OutputPin,
    KILL: OutputPin,
    STATUS: InputPin,
{
    pub fn new(power: PWR, kill: KILL, status: STATUS) -> Self {
        Self {
            power,
            kill,
            status,
        }
    }

    pub fn release(self) -> (PWR, KILL, STATUS) {
        (self.power, self.kill, self.status)
    }
}

impl<PWR, KILL, STATUS> ErrorType for HalLines<PWR, KILL, STATUS> {
    type Error = ErrorKind;
}

impl<PWR, KILL, STATUS> ControlLines for HalLines<PWR, KILL, STATUS>
where
    PWR: OutputPin,
    KILL: OutputPin,
    STATUS: InputPin,
{
    fn configure(&mut self, _line: Line, _mode: PinMode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn read(&mut self, line: Line) -> Result<bool, Self::Error> {
        match line {
            Line::Status => self.status.is_high().map_err(|e| e.kind()),
            // Output lines are write-only through `OutputPin`
            Line::Power | Line::Kill => Err(ErrorKind::Other),
        }
    }

    fn write(&mut self, line: Line, high: bool) -> Result<(), Self::Error> {
        let state = PinState::from(high);
        match line {
            Line::Power => self.power.set_state(state).map_err(|e| e.kind()),
            Line::Kill => self.kill.set_state(state).map_err(|e| e.kind()),
            Line::Status => Err(ErrorKind::Other),
        }
    }
}

/// Control lines driven through a [`PortExpander`], using the pin numbers
/// from [`Config`].
pub struct ExpanderLines<X> {
    expander: X,
    power: u16,
    kill: u16,
    status: u16,
}

impl<X: PortExpander> ExpanderLines<X> {
    pub fn new(expander: X, config: &Config) -> Self {
        Self {
            expander,
            power: config.power.pin,
            kill: config.kill.pin,
            status: config.status.pin,
        }
    }

    pub fn release(self) -> X {
        self.expander
    }

    fn pin(&self, line: Line) -> u16 {
        match line {
            Line::Power => self.power,
            Line::Kill => self.kill,
            Line::Status => self.status,
        }
    }
}

impl<X: PortExpander> ErrorType for ExpanderLines<X> {
    type Error = X::Error;
}

impl<X: PortExpander> ControlLines for ExpanderLines<X> {
    fn configure(&mut self, line: Line, mode: PinMode) -> Result<(), Self::Error> {
        let pin = self.pin(line);
        self.expander.mode(pin, mode)
    }

    fn read(&mut self, line: Line) -> Result<bool, Self::Error> {
        let pin = self.pin(line);
        self.expander.get(pin)
    }

    fn write(&mut self, line: Line, high: bool) -> Result<(), Self::Error> {
        let pin = self.pin(line);
        self.expander.set(pin, high)
    }
}

/// Polarity aware access to the control lines.
pub struct PinController<L> {
    lines: L,
    power: Level,
    kill: Level,
    status: Level,
}

impl<L: ControlLines> PinController<L> {
    pub fn new(lines: L, config: &Config) -> Self {
        Self {
            lines,
            power: config.power.active,
            kill: config.kill.active,
            status: config.status.active,
        }
    }

    /// Set up line directions once, leaving both outputs released.
    ///
    /// The status input is pulled towards its inactive level, so a floating
    /// line never reads as a running module.
    pub fn configure(&mut self) -> Result<(), L::Error> {
        let pull = match self.status {
            Level::High => PinMode::InputPullDown,
            Level::Low => PinMode::InputPullUp,
        };
        self.lines.configure(Line::Status, pull)?;

        self.lines.configure(Line::Kill, PinMode::OutputPushPull)?;
        self.set(Line::Kill, false)?;

        self.lines.configure(Line::Power, PinMode::OutputPushPull)?;
        self.set(Line::Power, false)?;

        Ok(())
    }

    pub fn set(&mut self, line: Line, active: bool) -> Result<(), L::Error> {
        let high = self.level(line).drive(active);
        trace!("{:?} -> {}", line, if active { "active" } else { "inactive" });
        self.lines.write(line, high)
    }

    pub fn get(&mut self, line: Line) -> Result<bool, L::Error> {
        let high = self.lines.read(line)?;
        Ok(self.level(line).is_active(high))
    }

    pub fn release(self) -> L {
        self.lines
    }

    fn level(&self, line: Line) -> Level {
        match line {
            Line::Power => self.power,
            Line::Kill => self.kill,
            Line::Status => self.status,
        }
    }
}
