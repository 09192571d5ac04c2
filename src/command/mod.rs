//! AT commands for the Quectel UG95/UG96 family, limited to what the
//! lifecycle handshake needs. Following the Quectel UG95&UG96 AT commands
//! manual.

pub mod control;
pub mod mobile_control;
pub mod network_service;
pub mod sms;

use atat::atat_derive::{AtatCmd, AtatResp};

#[derive(Clone, AtatResp)]
pub struct NoResponse;

/// Attention, used as a liveness probe while the module autobauds. A silent
/// module is retried quickly rather than waited on.
#[derive(Clone, AtatCmd)]
#[at_cmd("", NoResponse, timeout_ms = 200)]
pub struct AT;
