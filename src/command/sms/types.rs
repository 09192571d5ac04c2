use atat::atat_derive::AtatEnum;

#[derive(Clone, PartialEq, Eq, AtatEnum)]
pub enum MessageFormat {
    Pdu = 0,
    Text = 1,
}
