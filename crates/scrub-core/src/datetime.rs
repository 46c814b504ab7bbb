//! Date parsing for filter bounds and cell values.
//!
//! Two encodings are recognised: spreadsheet serial day counts stored as
//! numbers, and date or date-time strings in a fixed list of layouts
//! (ISO, RFC 2822, US and day-month forms, 12-hour clocks, trailing zones).
//! Everything is reduced to a calendar date; times of day are dropped.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use scrub_model::Value;

/// Serial numbers must be strictly greater than this to count as dates.
pub const SERIAL_MIN: f64 = 10_000.0;
/// Serial numbers must be strictly less than this to count as dates.
pub const SERIAL_MAX: f64 = 60_000.0;

// Layouts carrying a numeric UTC offset that RFC 3339 rejects ("+0200").
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%b %d, %Y %I:%M:%S %p",
    "%b %d, %Y %I:%M %p",
    "%B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %I:%M %p",
    "%b %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
    "%d-%b-%Y %H:%M:%S",
    "%a %b %d %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d-%b-%Y",
    "%d-%B-%Y",
    "%Y.%m.%d",
    "%d.%m.%Y",
    "%a %b %d %Y",
    "%a, %d %b %Y",
];

// Zone names accepted after a local date-time; the time is read as given.
const ZONE_SUFFIXES: &[&str] = &[" UTC", " GMT", "Z"];

fn serial_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// Converts a spreadsheet serial day count to a date.
///
/// Only values inside the open interval (10000, 60000) are accepted; the
/// fractional part (time of day) is ignored.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    let in_range = serial > SERIAL_MIN && serial < SERIAL_MAX;
    if !in_range {
        return None;
    }
    serial_epoch()?.checked_add_days(Days::new(serial.trunc() as u64))
}

/// Parses a date or date-time string into a calendar date.
pub fn parse_date_str(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.date_naive());
    }
    let local = ZONE_SUFFIXES
        .iter()
        .find_map(|zone| s.strip_suffix(zone))
        .map_or(s, str::trim_end);
    parse_local(local)
}

fn parse_local(s: &str) -> Option<NaiveDate> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        })
        .or_else(|| parse_year_month(s))
        .or_else(|| parse_year(s))
}

/// Reads a cell as a date: numbers through the serial encoding, text through
/// [`parse_date_str`]. Missing cells never parse.
pub fn parse_cell_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Null => None,
        Value::Number(v) => serial_to_date(*v),
        Value::Text(s) => parse_date_str(s),
    }
}

// YYYY-MM, read as the first of the month.
fn parse_year_month(s: &str) -> Option<NaiveDate> {
    let (year, month) = s.split_once('-')?;
    if year.len() != 4 || !(1..=2).contains(&month.len()) {
        return None;
    }
    if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

// A bare four-digit year, read as January 1st.
fn parse_year(s: &str) -> Option<NaiveDate> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn serial_range_is_exclusive() {
        assert_eq!(serial_to_date(44927.0), Some(date(2023, 1, 1)));
        assert_eq!(serial_to_date(44927.75), Some(date(2023, 1, 1)));
        assert_eq!(serial_to_date(9999.0), None);
        assert_eq!(serial_to_date(SERIAL_MIN), None);
        assert_eq!(serial_to_date(SERIAL_MAX), None);
        assert_eq!(serial_to_date(f64::NAN), None);
    }

    #[test]
    fn common_layouts_parse() {
        let expected = date(2023, 3, 7);
        for raw in [
            "2023-03-07",
            "2023/03/07",
            "03/07/2023",
            "3/7/2023",
            "03-07-2023",
            "7 March 2023",
            "7 Mar 2023",
            "March 7, 2023",
            "Mar 7 2023",
            "2023-03-07T10:15:00",
            "2023-03-07T10:15:00Z",
            "2023-03-07T10:15:00.250+02:00",
            "2023-03-07 10:15",
            "Tue, 7 Mar 2023 10:15:00 +0000",
            " 2023-03-07 ",
            "3/7/2023 2:30 PM",
            "03/07/2023 02:30:15 am",
            "Mar 7, 2023 10:00 AM",
            "March 7, 2023 10:00:05 PM",
            "07-Mar-2023",
            "2023.03.07",
            "2023-03-07T10:15:00+0200",
            "2023-03-07 10:15:00 UTC",
            "2023-03-07 10:15 GMT",
            "2023-03-07 10:15:00Z",
            "Tue Mar 07 2023",
        ] {
            assert_eq!(parse_date_str(raw), Some(expected), "{raw}");
        }
    }

    #[test]
    fn twelve_hour_clock_keeps_the_calendar_day() {
        assert_eq!(parse_date_str("1/15/2023 12:05 AM"), Some(date(2023, 1, 15)));
        assert_eq!(parse_date_str("1/15/2023 11:59 PM"), Some(date(2023, 1, 15)));
        assert_eq!(
            parse_cell_date(&Value::text("15-Jan-2023")),
            Some(date(2023, 1, 15))
        );
        assert_eq!(parse_date_str("1/15/2023 13:05 PM"), None);
    }

    #[test]
    fn partial_dates() {
        assert_eq!(parse_date_str("2023-03"), Some(date(2023, 3, 1)));
        assert_eq!(parse_date_str("1999"), Some(date(1999, 1, 1)));
        assert_eq!(parse_date_str("2023-13"), None);
    }

    #[test]
    fn non_dates_do_not_parse() {
        for raw in ["", "   ", "hello", "12", "2023-02-30", "44927"] {
            assert_eq!(parse_date_str(raw), None, "{raw}");
        }
    }

    #[test]
    fn cell_dates() {
        assert_eq!(parse_cell_date(&Value::Number(44927.0)), Some(date(2023, 1, 1)));
        assert_eq!(parse_cell_date(&Value::Number(2023.0)), None);
        assert_eq!(parse_cell_date(&Value::text("2023-01-01")), Some(date(2023, 1, 1)));
        assert_eq!(parse_cell_date(&Value::Null), None);
    }
}
