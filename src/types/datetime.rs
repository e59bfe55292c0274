/// Simple date and time representation
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime {
    pub year: u32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl DateTime {
    pub fn new(year: u32, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }
}

#[cfg(feature = "datetime")]
impl DateTime {
    /// Convert to a jiff civil datetime (requires "datetime" feature)
    ///
    /// Returns `None` if the fields do not form a valid calendar date.
    pub fn to_civil(&self) -> Option<jiff::civil::DateTime> {
        jiff::civil::DateTime::new(
            self.year as i16,
            self.month as i8,
            self.day as i8,
            self.hour as i8,
            self.minute as i8,
            0,
            0,
        )
        .ok()
    }
}

#[cfg(feature = "datetime")]
impl From<jiff::civil::DateTime> for DateTime {
    fn from(dt: jiff::civil::DateTime) -> Self {
        Self {
            year: dt.year() as u32,
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
        }
    }
}
