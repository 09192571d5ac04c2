//! ### 2 - V.25ter commands
pub mod types;

use atat::atat_derive::AtatCmd;

use super::NoResponse;
use types::{BaudRate, Echo};

/// 2.1.3 Set command echo mode E
///
/// Controls whether the module echoes characters received from the host.
#[derive(Clone, AtatCmd)]
#[at_cmd("E", NoResponse, value_sep = false)]
pub struct SetEcho {
    #[at_arg(position = 0)]
    pub enabled: Echo,
}

/// 4.1.6 Set TE-TA fixed local rate +IPR
#[derive(Clone, AtatCmd)]
#[at_cmd("+IPR", NoResponse)]
pub struct SetDataRate {
    #[at_arg(position = 0)]
    pub rate: BaudRate,
}
