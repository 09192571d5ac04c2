/// Electrical level at which a control line is considered asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Electrical level to drive for the logical `active` state.
    pub(crate) fn drive(self, active: bool) -> bool {
        (self == Level::High) == active
    }

    /// Logical state of a line currently reading `high`.
    pub(crate) fn is_active(self, high: bool) -> bool {
        (self == Level::High) == high
    }
}

/// A control line and the level that asserts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    pub pin: u16,
    pub active: Level,
}

impl PinConfig {
    pub const fn active_high(pin: u16) -> Self {
        Self {
            pin,
            active: Level::High,
        }
    }

    pub const fn active_low(pin: u16) -> Self {
        Self {
            pin,
            active: Level::Low,
        }
    }
}

/// What initialization does with a module that may already be running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitMode {
    /// Bring the module fully down, so that it starts out `Off`.
    #[default]
    ForceIdle,
    /// Adopt a live session if the status line reports one.
    Resume,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub serial: u8,
    // DTR and RTS are wired on most boards, but not used for control yet
    pub dtr: Option<u16>,
    pub rts: Option<u16>,
    pub power: PinConfig,
    pub kill: PinConfig,
    pub status: PinConfig,
    pub init_mode: InitMode,
}

impl Config {
    /// Configuration with all control lines active high.
    pub const fn new(power: u16, kill: u16, status: u16) -> Self {
        Config {
            serial: 0,
            dtr: None,
            rts: None,
            power: PinConfig::active_high(power),
            kill: PinConfig::active_high(kill),
            status: PinConfig::active_high(status),
            init_mode: InitMode::ForceIdle,
        }
    }

    pub fn with_serial(self, serial: u8) -> Self {
        Config { serial, ..self }
    }

    pub fn with_dtr(self, dtr: u16) -> Self {
        Config {
            dtr: Some(dtr),
            ..self
        }
    }

    pub fn with_rts(self, rts: u16) -> Self {
        Config {
            rts: Some(rts),
            ..self
        }
    }

    pub fn power_active(self, active: Level) -> Self {
        Config {
            power: PinConfig {
                active,
                ..self.power
            },
            ..self
        }
    }

    pub fn kill_active(self, active: Level) -> Self {
        Config {
            kill: PinConfig {
                active,
                ..self.kill
            },
            ..self
        }
    }

    /// Some PCB designs report a running module with the status line low.
    pub fn status_active(self, active: Level) -> Self {
        Config {
            status: PinConfig {
                active,
                ..self.status
            },
            ..self
        }
    }

    pub fn init_mode(self, init_mode: InitMode) -> Self {
        Config { init_mode, ..self }
    }
}
