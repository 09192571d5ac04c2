//! ### 7 - SMS commands
pub mod types;

use atat::atat_derive::AtatCmd;

use super::NoResponse;
use types::MessageFormat;

/// 7.2 Message format +CMGF
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGF", NoResponse)]
pub struct SetMessageFormat {
    #[at_arg(position = 0)]
    pub format: MessageFormat,
}

/// 7.9 New message indications to TE +CNMI
///
/// All fields are plain 27.005 values, e.g. `2,1,0,0,0` to buffer
/// indications while the link is busy and report new messages by index.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CNMI", NoResponse)]
pub struct SetNewMessageIndication {
    #[at_arg(position = 0)]
    pub mode: u8,
    #[at_arg(position = 1)]
    pub mt: u8,
    #[at_arg(position = 2)]
    pub bm: u8,
    #[at_arg(position = 3)]
    pub ds: u8,
    #[at_arg(position = 4)]
    pub bfr: u8,
}
