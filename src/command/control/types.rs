use atat::atat_derive::AtatEnum;

#[derive(Clone, PartialEq, Eq, AtatEnum)]
#[at_enum(u32)]
pub enum BaudRate {
    B9600 = 9600,
    B19200 = 19200,
    B38400 = 38400,
    B57600 = 57600,
    B115200 = 115_200,
    B230400 = 230_400,
    B460800 = 460_800,
    B921600 = 921_600,
}

#[derive(Clone, PartialEq, Eq, AtatEnum)]
pub enum Echo {
    Disable = 0,
    Enable = 1,
}
