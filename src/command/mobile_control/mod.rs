//! ### 3 - Mobile equipment control and status commands
pub mod types;

use atat::atat_derive::AtatCmd;

use super::NoResponse;
use types::{Functionality, PowerDownMode, TerminationErrorMode, TimezoneUpdate};

/// 3.3 Set phone functionality +CFUN
///
/// Going to minimum functionality deregisters from the network, which can
/// take several seconds.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CFUN", NoResponse, timeout_ms = 15000)]
pub struct SetModuleFunctionality {
    #[at_arg(position = 0)]
    pub fun: Functionality,
}

/// 3.13 Report mobile equipment error +CMEE
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMEE", NoResponse)]
pub struct SetReportMobileTerminationError {
    #[at_arg(position = 0)]
    pub n: TerminationErrorMode,
}

/// 3.21 Automatic time zone update +CTZU
#[derive(Clone, AtatCmd)]
#[at_cmd("+CTZU", NoResponse)]
pub struct SetAutomaticTimezoneUpdate {
    #[at_arg(position = 0)]
    pub on_off: TimezoneUpdate,
}

/// 2.2.14 Power off +QPOWD
///
/// The module answers `OK` and reports `POWERED DOWN` once it starts the
/// power down procedure, after which the status line goes inactive.
#[derive(Clone, AtatCmd)]
#[at_cmd("+QPOWD", NoResponse)]
pub struct PowerDown {
    #[at_arg(position = 0)]
    pub mode: PowerDownMode,
}
