use crate::{error::DateError, instant::Instant};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use core::fmt::{self, Display};

/// Natural-language date-times, e.g. `December 17, 1995 03:24:00`, optionally led by a weekday.
/// `%A` and `%B` also match abbreviated names when parsing.
const NATURAL_DATETIME_FORMATS: [&str; 4] = [
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%A, %B %d, %Y %H:%M:%S",
    "%A, %B %d, %Y %H:%M",
];

const NATURAL_DATE_FORMATS: [&str; 2] = ["%B %d, %Y", "%A, %B %d, %Y"];

/// ISO 8601 offset date-times that RFC 3339 does not allow: compact (`+hhmm`) or hour-only (`+hh`)
/// offsets, and times without seconds. `%#z` also accepts `Z`.
const ISO8601_OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

const ISO8601_DATE_FORMAT: &str = "%Y-%m-%d";

/// The date syntax a string was expected to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// RFC 2822 §3.3, or the natural-language form accepted alongside it.
    Rfc2822,
    /// ISO 8601 extended format.
    Iso8601,
    /// Either of the above.
    Any,
}

impl Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateFormat::Rfc2822 => "RFC 2822",
            DateFormat::Iso8601 => "ISO 8601",
            DateFormat::Any => "RFC 2822 or ISO 8601",
        })
    }
}

/// Parses an RFC 2822 date-time, such as `Tue, 26 Jan 2016 13:48:02 GMT`, into an [Instant].
///
/// Numeric offsets (`+0200`) and the obsolete zone names (`GMT`, `UT`, `EST`, ...) are honored.
/// The looser natural-language form `December 17, 1995 03:24:00` is accepted too, with or without
/// seconds or the time of day, and with full or abbreviated month names. It names no zone, so it is
/// read as UTC. Either form may lead with a weekday (`Sunday, December 17, 1995`), which must agree
/// with the date. Surrounding whitespace is ignored.
///
/// # Errors
///
/// - If the text matches neither form, returns a [DateError::UnparseableDate].
/// - If the leading weekday is not the weekday of the date (`Mon, 26 Jan 2016 ...` names a
///   Tuesday), returns a [DateError::UnparseableDate].
///
/// ```
/// use datebits::parse_from_rfc2822;
///
/// let instant = parse_from_rfc2822("Tue, 26 Jan 2016 13:48:02 GMT").unwrap();
/// assert_eq!(instant.to_string(), "2016-01-26T13:48:02.000Z");
///
/// assert!(parse_from_rfc2822("not a date").is_err());
/// ```
pub fn parse_from_rfc2822(text: &str) -> Result<Instant, DateError> {
    let trimmed = text.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(datetime.into());
    }

    parse_natural(trimmed).ok_or_else(|| unparseable(text, DateFormat::Rfc2822))
}

/// Parses an ISO 8601 extended date-time, such as `2016-01-19T16:07:37+00:00` or
/// `2016-01-19T08:07:37Z`, into an [Instant], honoring the offset or `Z` designator.
///
/// Fractional seconds, times without seconds (`16:07Z`), and compact (`+0800`) or hour-only
/// (`+08`) offsets are accepted. A bare date (`2016-01-19`) is midnight UTC. A date-time without an
/// offset is rejected, since it names no single instant. Surrounding whitespace is ignored.
///
/// # Errors
///
/// - If the text is not an ISO 8601 date or offset date-time, returns a
///   [DateError::UnparseableDate].
///
/// ```
/// use datebits::parse_from_iso8601;
///
/// let plus = parse_from_iso8601("2016-01-19T16:07:37+08:00").unwrap();
/// let zulu = parse_from_iso8601("2016-01-19T08:07:37Z").unwrap();
/// assert_eq!(plus, zulu);
/// ```
pub fn parse_from_iso8601(text: &str) -> Result<Instant, DateError> {
    let trimmed = text.trim();

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .or_else(|| {
            ISO8601_OFFSET_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(trimmed, format).ok())
        })
        .map(Instant::from)
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, ISO8601_DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(utc)
        })
        .ok_or_else(|| unparseable(text, DateFormat::Iso8601))
}

fn parse_natural(text: &str) -> Option<Instant> {
    NATURAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| {
            log::trace!("trying natural-language format `{format}` on `{text}`");
            NaiveDateTime::parse_from_str(text, format).ok()
        })
        .or_else(|| {
            NATURAL_DATE_FORMATS.iter().find_map(|format| {
                log::trace!("trying natural-language format `{format}` on `{text}`");
                NaiveDate::parse_from_str(text, format)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
        })
        .map(utc)
}

fn utc(naive: NaiveDateTime) -> Instant {
    Utc.from_utc_datetime(&naive).into()
}

fn unparseable(text: &str, format: DateFormat) -> DateError {
    log::debug!("rejected `{text}` as an {format} date");
    DateError::UnparseableDate {
        text: text.to_owned(),
        format,
    }
}
