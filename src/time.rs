use hifitime::Epoch;

/// Largest calendar year an ODM date can carry (four-digit year field).
const MAX_YEAR: i32 = 9999;

/// Fractional seconds suffix: empty for whole seconds, microseconds when the
/// value is microsecond-exact, nanoseconds otherwise.
fn fraction(nanos: u32) -> String {
    if nanos == 0 {
        String::new()
    } else if nanos % 1_000 == 0 {
        format!(".{:06}", nanos / 1_000)
    } else {
        format!(".{nanos:09}")
    }
}

/// Day of year (1-based) of a Gregorian calendar date.
fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    Epoch::from_gregorian_utc_at_midnight(year, month, day)
        .day_of_year()
        .round() as u16
}

/// Format an epoch as a calendar date `YYYY-MM-DDThh:mm:ss[.ffffff]`
///
/// Argument
/// --------
/// * `epoch`: the date to format, rendered on the UTC calendar
///
/// Return
/// ------
/// * the ISO 8601 representation; the fractional part only appears when non-zero
pub fn format_date(epoch: &Epoch) -> String {
    let (y, mm, dd, hh, min, ss, nanos) = epoch.to_gregorian_utc();
    format!(
        "{y:04}-{mm:02}-{dd:02}T{hh:02}:{min:02}:{ss:02}{}",
        fraction(nanos)
    )
}

/// Format an epoch as an ordinal date `YYYY-DDDThh:mm:ss[.ffffff]`
///
/// Argument
/// --------
/// * `epoch`: the date to format, rendered on the UTC calendar
///
/// Return
/// ------
/// * the year/day-of-year representation accepted by CCSDS ODMs
pub fn format_date_yyyyddd(epoch: &Epoch) -> String {
    let (y, mm, dd, hh, min, ss, nanos) = epoch.to_gregorian_utc();
    format!(
        "{y:04}-{:03}T{hh:02}:{min:02}:{ss:02}{}",
        day_of_year(y, mm, dd),
        fraction(nanos)
    )
}

/// Check that an epoch can be written with a four-digit year.
pub fn validate_date(epoch: &Epoch) -> bool {
    let (y, ..) = epoch.to_gregorian_utc();
    (0..=MAX_YEAR).contains(&y)
}

#[cfg(test)]
mod time_test {
    use super::*;

    #[test]
    fn test_format_date() {
        let with_micro = Epoch::from_gregorian_utc(2014, 11, 12, 13, 14, 15, 999_999_000);
        assert_eq!(format_date(&with_micro), "2014-11-12T13:14:15.999999");

        let whole = Epoch::from_gregorian_utc_hms(2014, 11, 12, 13, 14, 15);
        assert_eq!(format_date(&whole), "2014-11-12T13:14:15");

        let with_nano = Epoch::from_gregorian_utc(2014, 11, 12, 13, 14, 15, 123_456_789);
        assert_eq!(format_date(&with_nano), "2014-11-12T13:14:15.123456789");
    }

    #[test]
    fn test_format_date_yyyyddd() {
        let with_micro = Epoch::from_gregorian_utc(2014, 11, 12, 13, 14, 15, 999_999_000);
        assert_eq!(format_date_yyyyddd(&with_micro), "2014-316T13:14:15.999999");

        let whole = Epoch::from_gregorian_utc_hms(2014, 11, 12, 13, 14, 15);
        assert_eq!(format_date_yyyyddd(&whole), "2014-316T13:14:15");

        let leap = Epoch::from_gregorian_utc_hms(2012, 12, 31, 0, 0, 0);
        assert_eq!(format_date_yyyyddd(&leap), "2012-366T00:00:00");
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(2011, 1, 1), 1);
        assert_eq!(day_of_year(2011, 3, 1), 60);
        assert_eq!(day_of_year(2000, 3, 1), 61);
        assert_eq!(day_of_year(1900, 3, 1), 60);
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date(&Epoch::from_gregorian_utc_hms(2011, 3, 1, 1, 2, 3)));
        assert!(!validate_date(&Epoch::from_gregorian_utc_hms(12011, 3, 1, 1, 2, 3)));
    }
}
