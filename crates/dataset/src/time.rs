//! Timestamps carried by plotted samples and the collaborators that print them.

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::error::DatasetError;

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// A timestamp split into whole seconds and nanoseconds since the Unix epoch.
///
/// The nanosecond part is always below one second; [Time::new] and
/// deserialization carry any overflow into the seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "TimeParts")]
pub struct Time {
    sec: u32,
    nsec: u32,
}

impl Time {
    /// Creates a timestamp, normalizing `nsec` values of a second or more.
    pub fn new(sec: u32, nsec: u32) -> Time {
        Self {
            sec: sec.saturating_add(nsec / NANOS_PER_SEC),
            nsec: nsec % NANOS_PER_SEC,
        }
    }

    /// The whole seconds.
    pub fn sec(&self) -> u32 {
        self.sec
    }

    /// The nanoseconds within the second.
    pub fn nsec(&self) -> u32 {
        self.nsec
    }

    /// Converts the timestamp into a UTC date time.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::from(self.sec), self.nsec)
    }
}

impl TryFrom<DateTime<Utc>> for Time {
    type Error = DatasetError;

    fn try_from(datetime: DateTime<Utc>) -> Result<Self, Self::Error> {
        let seconds = datetime.timestamp();
        let sec = u32::try_from(seconds).map_err(|_| DatasetError::TimeOutOfRange(seconds))?;

        Ok(Time::new(sec, datetime.timestamp_subsec_nanos()))
    }
}

/// Prints the raw `sec.nsec` form, e.g. `12.000000500`.
impl Display for Time {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.sec, self.nsec)
    }
}

#[derive(Deserialize)]
struct TimeParts {
    sec: u32,
    nsec: u32,
}

impl From<TimeParts> for Time {
    fn from(parts: TimeParts) -> Self {
        Time::new(parts.sec, parts.nsec)
    }
}

/// Formats a [Time] into the text written to exported tables.
pub trait TimeFormat {
    /// Formats the given timestamp.
    fn format(&self, time: &Time) -> String;
}

impl<F> TimeFormat for F
where
    F: Fn(&Time) -> String,
{
    fn format(&self, time: &Time) -> String {
        self(time)
    }
}

/// Formats timestamps as raw `sec.nsec` numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawTime;

impl TimeFormat for RawTime {
    fn format(&self, time: &Time) -> String {
        time.to_string()
    }
}

/// Formats timestamps as RFC 3339 dates with nanosecond precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc3339Time;

impl TimeFormat for Rfc3339Time {
    fn format(&self, time: &Time) -> String {
        match time.to_datetime() {
            Some(datetime) => datetime.to_rfc3339_opts(SecondsFormat::Nanos, true),
            None => time.to_string(),
        }
    }
}
