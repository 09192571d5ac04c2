use embedded_hal::digital;

/// Power transition that did not complete within its polling bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Status line never became active after the power-on pulse.
    PowerUp,
    /// Status line stayed active after the power down command and,
    /// if requested, the kill pulse.
    PowerDown,
    /// Status line stayed active while holding the kill line during
    /// initialization.
    Idle,
}

/// Driver error.
///
/// `P` is the error of the control lines in use, so that a port expander's
/// bus error reaches the caller as is. Direct HAL pins of different types
/// only share [`digital::ErrorKind`], which is also the default for
/// operations that never touch a pin.
#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum Error<E, P = digital::ErrorKind> {
    /// Fatal hardware error, the module did not reach the expected power state.
    HardwareInitialization(Transition),

    /// The operation can never be performed by a cellular module, e.g.
    /// listening for inbound connections.
    Unsupported,

    /// A control line could not be driven or read.
    Pin(P),

    /// Error reported by the native command engine, passed through untouched.
    Native(E),
}

impl<E, P> Error<E, P> {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format, P: defmt::Format> defmt::Format for Error<E, P> {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Self::HardwareInitialization(t) => defmt::write!(f, "HardwareInitialization({:?})", t),
            Self::Unsupported => defmt::write!(f, "Unsupported"),
            Self::Pin(e) => defmt::write!(f, "Pin({:?})", e),
            Self::Native(e) => defmt::write!(f, "Native({:?})", e),
        }
    }
}

#[cfg(feature = "socket-tcp")]
impl<E: core::fmt::Debug, P: core::fmt::Debug> embedded_nal::TcpError for Error<E, P> {
    fn kind(&self) -> embedded_nal::TcpErrorKind {
        embedded_nal::TcpErrorKind::Other
    }
}
