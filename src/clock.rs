use crate::instant::Instant;
use chrono::Timelike;
use std::f64::consts::PI;

const DEGREES_PER_HOUR: f64 = 30.0;
const HOUR_HAND_DEGREES_PER_MINUTE: f64 = 0.5;
const MINUTE_HAND_DEGREES_PER_MINUTE: f64 = 6.0;

/// Returns the smaller angle, in radians (`0`–`π`), between the hour and minute hands of an
/// analog clock showing the UTC time of `instant`.
///
/// Seconds are ignored: the minute hand moves in whole-minute steps, and the hour hand moves half a
/// degree per minute.
///
/// ```
/// use datebits::{clock_hands_angle, parse_from_iso8601};
/// use std::f64::consts::PI;
///
/// let six = parse_from_iso8601("2016-04-05T18:00:00Z").unwrap();
/// assert_eq!(clock_hands_angle(&six), PI);
/// ```
pub fn clock_hands_angle(instant: &Instant) -> f64 {
    let hour = f64::from(instant.hour() % 12);
    let minute = f64::from(instant.minute());

    let hour_hand = DEGREES_PER_HOUR * hour + HOUR_HAND_DEGREES_PER_MINUTE * minute;
    let minute_hand = MINUTE_HAND_DEGREES_PER_MINUTE * minute;
    let degrees = (hour_hand - minute_hand).abs();

    if degrees == 180.0 {
        return PI;
    }

    let smaller = if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    };

    // degrees are exact multiples of 0.5 up to here, so round only once
    smaller / 180.0 * PI
}
