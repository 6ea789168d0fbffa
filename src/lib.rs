//! # datebits
//!
//! Small, self-contained date and time utilities built on [chrono].
//!
//! Every function here is pure: it reads its arguments, returns a value, and keeps no state.
//!
//! ## Examples
//!
//! Parse dates in either of two standard textual formats:
//!
//! ```
//! use datebits::prelude::*;
//!
//! let email = parse_from_rfc2822("Tue, 26 Jan 2016 13:48:02 GMT").unwrap();
//! let iso = parse_from_iso8601("2016-01-26T14:48:02+01:00").unwrap();
//! assert_eq!(email, iso);
//!
//! // Text that is not a date gives an error, never a panic
//! assert!(matches!(
//!     parse_from_iso8601("not a date"),
//!     Err(DateError::UnparseableDate { .. })
//! ));
//! ```
//!
//! Then ask questions of the resulting [`Instant`]s:
//!
//! ```
//! use datebits::prelude::*;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let start = parse_from_iso8601("2016-04-05T03:00:00Z").unwrap();
//! let end = parse_from_iso8601("2016-04-05T08:20:10.453Z").unwrap();
//!
//! assert!(is_leap_year(&start));
//! assert_eq!(format_time_span(&start, &end), "05:20:10.453");
//! assert_eq!(clock_hands_angle(&start), FRAC_PI_2);
//! ```
//!
//! ## Functions
//!
//! | Function | Returns |
//! |---|---|
//! | [`parse_from_rfc2822`] | An [`Instant`] from `Tue, 26 Jan 2016 13:48:02 GMT` or `December 17, 1995 03:24:00` |
//! | [`parse_from_iso8601`] | An [`Instant`] from `2016-01-19T16:07:37+00:00` or `2016-01-19T08:07:37Z` |
//! | [`is_leap_year`] | Whether the instant's UTC year is a Gregorian leap year (see [`is_leap`] for a bare year) |
//! | [`format_time_span`] | The unsigned time between two instants as `HH:mm:ss.sss` |
//! | [`clock_hands_angle`] | The angle between the hands of a clock at the instant's UTC time, in radians (`0`–`π`) |
//!
//! All calendar fields are read in UTC.
//!
//! ## Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Instant`] (as an RFC 3339 string) and
//!   [`TimeSpan`] (as milliseconds).
//!
//! ## Prelude
//!
//! datebits provides a prelude module for convenience. Use it with:
//!
//! ```
//! use datebits::prelude::*;
//! ```
#![warn(missing_docs)]

mod calendar;
mod clock;
mod error;
mod instant;
mod parse;
mod span;

pub use crate::calendar::{is_leap, is_leap_year};
pub use crate::clock::clock_hands_angle;
pub use crate::error::DateError;
pub use crate::instant::Instant;
pub use crate::parse::{parse_from_iso8601, parse_from_rfc2822, DateFormat};
pub use crate::span::{format_time_span, TimeSpan};

/// A convenience module appropriate for glob imports (`use datebits::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::clock_hands_angle;
    #[doc(no_inline)]
    pub use crate::format_time_span;
    #[doc(no_inline)]
    pub use crate::is_leap;
    #[doc(no_inline)]
    pub use crate::is_leap_year;
    #[doc(no_inline)]
    pub use crate::parse_from_iso8601;
    #[doc(no_inline)]
    pub use crate::parse_from_rfc2822;
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::DateFormat;
    #[doc(no_inline)]
    pub use crate::Instant;
    #[doc(no_inline)]
    pub use crate::TimeSpan;
}
