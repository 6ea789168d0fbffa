use crate::instant::Instant;
use chrono::Datelike;

/// Returns true if the UTC calendar year of `instant` is a Gregorian leap year.
///
/// ```
/// use datebits::{is_leap_year, parse_from_iso8601};
///
/// assert!(is_leap_year(&parse_from_iso8601("2000-06-01").unwrap()));
/// assert!(!is_leap_year(&parse_from_iso8601("1900-06-01").unwrap()));
/// ```
pub fn is_leap_year(instant: &Instant) -> bool {
    is_leap(instant.year())
}

/// Returns true if `year` is divisible by 4, and either not divisible by 100 or divisible by 400.
///
/// Years are proleptic Gregorian, so `0` (1 BCE) is a leap year.
///
/// ```
/// use datebits::prelude::*;
///
/// assert!(is_leap(2012));
/// assert!(!is_leap(2100));
/// ```
pub fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::*;

    #[rstest]
    #[case(1900, false)]
    #[case(2000, true)]
    #[case(2001, false)]
    #[case(2012, true)]
    #[case(2015, false)]
    #[case(2100, false)]
    #[case(2400, true)]
    #[case(0, true)]
    #[case(-4, true)]
    #[case(-100, false)]
    fn test_is_leap(#[case] year: i32, #[case] expected: bool) {
        assert_eq!(is_leap(year), expected);
    }

    #[rstest]
    #[case(1900, false)]
    #[case(2000, true)]
    #[case(2001, false)]
    #[case(2012, true)]
    #[case(2015, false)]
    fn test_is_leap_year(#[case] year: i32, #[case] expected: bool) {
        // the last moment of the year belongs to the same year in UTC
        let instant = Instant::from_ymd_hms_milli(year, 12, 31, 23, 59, 59, 999).unwrap();
        assert_eq!(is_leap_year(&instant), expected);
    }

    /// agrees with chrono's own calendar
    #[test]
    fn test_is_leap_matches_february_29() {
        for year in 1583..=2600 {
            let has_feb_29 = NaiveDate::from_ymd_opt(year, 2, 29).is_some();
            assert_eq!(is_leap(year), has_feb_29, "year {year}");
        }
    }
}
