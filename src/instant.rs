use crate::{
    error::DateError,
    parse::{self, DateFormat},
};
use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use core::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};

/// An absolute point in time, decomposed into calendar fields in UTC.
///
/// An `Instant` is always valid: text that cannot be read as a date never becomes one, and instead
/// produces a [DateError]. Fields are available through chrono's [`Datelike`](chrono::Datelike)
/// and [`Timelike`](chrono::Timelike) traits, since an `Instant` derefs to a [`DateTime<Utc>`].
///
/// ```
/// use chrono::{Datelike, Timelike};
/// use datebits::Instant;
///
/// let instant = Instant::from_ymd_hms_milli(2016, 1, 19, 8, 7, 37, 250).unwrap();
/// assert_eq!(instant.year(), 2016);
/// assert_eq!(instant.hour(), 8);
/// assert_eq!(instant.millisecond(), 250);
/// assert_eq!(instant.to_string(), "2016-01-19T08:07:37.250Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// Returns the [Instant] of this call.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Returns the [Instant] `millis` milliseconds after the Unix epoch (or before it, for negative
    /// values), or [DateError::OutOfRange].
    pub fn from_millis(millis: i64) -> Result<Self, DateError> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(Self)
            .ok_or(DateError::OutOfRange { millis })
    }

    /// Returns the [Instant] at the given UTC fields, or [DateError::InvalidDateArguments] if they
    /// do not name a real date and time. Leap seconds are not representable, so `milli` must be
    /// below `1000`.
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .filter(|_| milli < 1_000)
            .and_then(|date| date.and_hms_milli_opt(hour, minute, second, milli))
            .map(|naive| Self(Utc.from_utc_datetime(&naive)))
            .ok_or(DateError::InvalidDateArguments {
                year,
                month,
                day,
                hour,
                minute,
                second,
                milli,
            })
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The millisecond within the second (`0`–`999`).
    pub fn millisecond(&self) -> u32 {
        self.0.timestamp_subsec_millis()
    }

    /// The underlying chrono value.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self(datetime.with_timezone(&Utc))
    }
}

impl From<Instant> for DateTime<Utc> {
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

impl FromStr for Instant {
    type Err = DateError;

    /// Parses either an ISO 8601 or an RFC 2822 date string, trying ISO 8601 first.
    ///
    /// See [parse_from_iso8601](crate::parse_from_iso8601) and
    /// [parse_from_rfc2822](crate::parse_from_rfc2822).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_from_iso8601(s)
            .or_else(|_| parse::parse_from_rfc2822(s))
            .map_err(|_| DateError::UnparseableDate {
                text: s.to_owned(),
                format: DateFormat::Any,
            })
    }
}

impl Deref for Instant {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
