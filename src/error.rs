use crate::parse::DateFormat;

/// Errors produced when making an [`Instant`](crate::Instant) from text or raw fields.
///
/// [`DateError::UnparseableDate`] is the "invalid date" marker returned by the parsers. Like every
/// variant, it compares with `==`, so two failed parses of the same text are equal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The text did not match the expected date syntax.
    #[error("Date string `{text}` should be a valid {format} date")]
    UnparseableDate {
        /// The rejected input, as given.
        text: String,
        /// The syntax that was expected.
        format: DateFormat,
    },

    /// A millisecond timestamp is beyond the range of representable instants.
    #[error("Timestamp `{millis}` ms should be within the representable range of instants")]
    OutOfRange {
        /// The rejected timestamp.
        millis: i64,
    },

    /// Explicit fields that do not make a real date and time.
    #[error("Explicit arguments {year}-{month}-{day} {hour}:{minute}:{second}.{milli} cannot be made into a valid instant")]
    InvalidDateArguments {
        /// Calendar year.
        year: i32,
        /// Month (`1`–`12`).
        month: u32,
        /// Day of the month (`1`–`31`).
        day: u32,
        /// Hour (`0`–`23`).
        hour: u32,
        /// Minute (`0`–`59`).
        minute: u32,
        /// Second (`0`–`59`).
        second: u32,
        /// Millisecond (`0`–`999`).
        milli: u32,
    },
}
