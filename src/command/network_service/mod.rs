//! ### 6 - Network service commands
pub mod types;

use atat::atat_derive::AtatCmd;

use super::NoResponse;
use types::NetworkRegistrationUrcConfig;

/// 6.2 Network registration status +CREG
#[derive(Clone, AtatCmd)]
#[at_cmd("+CREG", NoResponse)]
pub struct SetNetworkRegistrationStatus {
    #[at_arg(position = 0)]
    pub n: NetworkRegistrationUrcConfig,
}
