use atat::atat_derive::AtatEnum;

#[derive(Clone, PartialEq, Eq, AtatEnum)]
pub enum Functionality {
    /// 0: Minimum functionality
    Minimum = 0,
    /// 1: Full functionality (default)
    Full = 1,
    /// 4: Disable both transmitting and receiving RF circuits
    AirplaneMode = 4,
}

#[derive(Clone, PartialEq, Eq, AtatEnum)]
pub enum TerminationErrorMode {
    /// 0: +CME ERROR: <err> result code disabled and ERROR used
    Disabled = 0,
    /// 1: +CME ERROR: <err> result code enabled and numeric <err> values used
    Enabled = 1,
    /// 2: +CME ERROR: <err> result code enabled and verbose <err> values used
    Verbose = 2,
}

#[derive(Clone, PartialEq, Eq, AtatEnum)]
pub enum TimezoneUpdate {
    Disable = 0,
    Enable = 1,
}

#[derive(Clone, PartialEq, Eq, AtatEnum)]
pub enum PowerDownMode {
    /// 0: Immediately power down
    Immediate = 0,
    /// 1: Normal power down, detaching from the network first
    Normal = 1,
}
