use std::fmt;

use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

const DISPLAY_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// A point in time with millisecond precision.
///
/// All timestamps are stored as unix timestamps in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dt = OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000)
            .map_err(|_| fmt::Error)?;
        let formatted = dt.format(DISPLAY_FORMAT).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_round_trip() {
        let now = Timestamp::now();
        assert_eq!(now, Timestamp::from_millis(now.as_millis()));
    }

    #[test]
    fn display_format() {
        // 2022-03-19 21:39 UTC
        let ts = Timestamp::from_millis(1_647_725_940_000);
        assert_eq!(ts.to_string(), "2022-03-19 21:39");
    }
}
