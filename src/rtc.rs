use serde::Serialize;

/// Wall clock time as kept by the module RTC.
///
/// Fields are always UTC-relative: `tz_offset` is the signed offset from UTC
/// in minutes, the other fields are never shifted by it. Values are range
/// checked on construction, so a `RtcTime` is always a valid calendar tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RtcTime {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    tz_offset: i16,
}

impl RtcTime {
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        tz_offset: i16,
    ) -> Option<Self> {
        let valid = (1..=12).contains(&month)
            && (1..=31).contains(&day)
            && hour <= 23
            && minute <= 59
            && second <= 59
            && (-24 * 60..=24 * 60).contains(&tz_offset);

        valid.then_some(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            tz_offset,
        })
    }

    /// Parse the `+CCLK` clock format, `yy/MM/dd,hh:mm:ss±zz`, where the zone
    /// is given in quarter hours. Surrounding quotes are accepted.
    pub fn parse_cclk(s: &str) -> Option<Self> {
        let s = s.trim().trim_matches('"');
        let (date, time) = s.split_once(',')?;

        let mut date = date.split('/');
        let year: u16 = date.next()?.parse().ok()?;
        let month = date.next()?.parse().ok()?;
        let day = date.next()?.parse().ok()?;
        if date.next().is_some() || year > 99 {
            return None;
        }

        let split = time.find(['+', '-'])?;
        let (clock, zone) = time.split_at(split);
        let quarters: i16 = zone.parse().ok()?;

        let mut clock = clock.split(':');
        let hour = clock.next()?.parse().ok()?;
        let minute = clock.next()?.parse().ok()?;
        let second = clock.next()?.parse().ok()?;
        if clock.next().is_some() {
            return None;
        }

        Self::new(
            2000 + year,
            month,
            day,
            hour,
            minute,
            second,
            quarters.checked_mul(15)?,
        )
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Offset from UTC in minutes
    pub fn tz_offset(&self) -> i16 {
        self.tz_offset
    }

    /// `(year, month, day, hour, minute, second, tz_offset)`
    pub fn as_tuple(&self) -> (u16, u8, u8, u8, u8, u8, i16) {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.tz_offset,
        )
    }
}
