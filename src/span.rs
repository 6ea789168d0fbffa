use crate::instant::Instant;
use core::fmt::{self, Display};

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// The unsigned length of time between two [Instant]s, with millisecond precision.
///
/// Displays as `HH:mm:ss.sss`. Hours are zero-padded to two digits but never wrap into days, so a
/// span of 100 hours or more shows three or more hour digits.
///
/// ```
/// use datebits::{Instant, TimeSpan};
///
/// let start = Instant::from_ymd_hms_milli(2016, 1, 19, 10, 0, 0, 0).unwrap();
/// let end = Instant::from_ymd_hms_milli(2016, 1, 19, 15, 20, 10, 453).unwrap();
/// let span = TimeSpan::between(&start, &end);
/// assert_eq!(span, TimeSpan::between(&end, &start));
/// assert_eq!(span.to_string(), "05:20:10.453");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TimeSpan {
    total_millis: u64,
}

impl TimeSpan {
    /// Returns a [TimeSpan] of `millis` milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self {
            total_millis: millis,
        }
    }

    /// Returns the [TimeSpan] between `start` and `end`, in either order.
    pub fn between(start: &Instant, end: &Instant) -> Self {
        Self::from_millis(end.timestamp_millis().abs_diff(start.timestamp_millis()))
    }

    /// Total length in milliseconds.
    pub fn as_millis(&self) -> u64 {
        self.total_millis
    }

    /// Whole hours. Unbounded.
    pub fn hours(&self) -> u64 {
        self.total_millis / MILLIS_PER_HOUR
    }

    /// Minutes past the whole hours (`0`–`59`).
    pub fn minutes(&self) -> u64 {
        self.total_millis % MILLIS_PER_HOUR / MILLIS_PER_MINUTE
    }

    /// Seconds past the whole minutes (`0`–`59`).
    pub fn seconds(&self) -> u64 {
        self.total_millis % MILLIS_PER_MINUTE / MILLIS_PER_SECOND
    }

    /// Milliseconds past the whole seconds (`0`–`999`).
    pub fn subsec_millis(&self) -> u64 {
        self.total_millis % MILLIS_PER_SECOND
    }
}

impl Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.subsec_millis()
        )
    }
}

/// Formats the time between `start` and `end` as `HH:mm:ss.sss`, discarding its sign.
///
/// See [TimeSpan].
pub fn format_time_span(start: &Instant, end: &Instant) -> String {
    TimeSpan::between(start, end).to_string()
}
