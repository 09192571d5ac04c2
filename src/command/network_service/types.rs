use atat::atat_derive::AtatEnum;

#[derive(Clone, PartialEq, Eq, AtatEnum)]
pub enum NetworkRegistrationUrcConfig {
    /// 0: Disable network registration unsolicited result code
    UrcDisabled = 0,
    /// 1: Enable +CREG: <stat>
    UrcEnabled = 1,
    /// 2: Enable +CREG: <stat>[,<lac>,<ci>[,<Act>]], with location information
    UrcVerbose = 2,
}
