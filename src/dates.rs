//! Calendar date parsing shared by the loader and the date-window queries.
//!
//! Accepted shapes: `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`, and the first two followed by a
//! `HH:MM[:SS]` time (space or `T` separated), plus RFC 3339 timestamps.
//!
//! Query bounds additionally accept the reduced-precision forms `YYYY-MM` and `YYYY`, which
//! resolve to the first day of that month or year. Source cells do not.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parse a date-like string into a point in time. Plain dates resolve to midnight.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Parse a date-like string, dropping any time component.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_datetime(raw).map(|dt| dt.date())
}

/// Parse a query bound: any [`parse_datetime`] shape, or `YYYY-MM` / `YYYY` resolved to the
/// start of the period.
pub fn parse_bound(raw: &str) -> Option<NaiveDateTime> {
    parse_datetime(raw)
        .or_else(|| parse_period_start(raw.trim()).map(|d| d.and_time(NaiveTime::MIN)))
}

fn parse_period_start(raw: &str) -> Option<NaiveDate> {
    let (year, month) = raw.split_once('-').unwrap_or((raw, "1"));
    let digits = |s: &str, len: std::ops::RangeInclusive<usize>| {
        len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(year, 4..=4) || !digits(month, 1..=2) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Parse a wall-clock time (`HH:MM[:SS]`).
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_and_slash_dates() {
        assert_eq!(parse_date("1957-10-04"), Some(ymd(1957, 10, 4)));
        assert_eq!(parse_date("1957/10/04"), Some(ymd(1957, 10, 4)));
        assert_eq!(parse_date("10/04/1957"), Some(ymd(1957, 10, 4)));
        assert_eq!(parse_date(" 1957-10-04 "), Some(ymd(1957, 10, 4)));
    }

    #[test]
    fn datetimes_keep_time_and_dates_resolve_to_midnight() {
        let dt = parse_datetime("1957-10-04 19:28:00").unwrap();
        assert_eq!(dt.date(), ymd(1957, 10, 4));
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(19, 28, 0).unwrap());
        assert_eq!(parse_datetime("1957-10-04").unwrap().time(), NaiveTime::MIN);
        assert!(parse_datetime("1957-10-04T19:28:00+00:00").is_some());
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_date("abc"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("1957-02-30"), None);
        assert_eq!(parse_date("1957"), None);
    }

    #[test]
    fn bounds_accept_month_and_year_precision() {
        let start = |y, m, d| Some(ymd(y, m, d).and_time(NaiveTime::MIN));
        assert_eq!(parse_bound("1957-10"), start(1957, 10, 1));
        assert_eq!(parse_bound("1957"), start(1957, 1, 1));
        assert_eq!(parse_bound("1957-10-04"), start(1957, 10, 4));
        assert_eq!(parse_bound("1957-13"), None);
        assert_eq!(parse_bound("57-10"), None);
        assert_eq!(parse_bound("1957-"), None);
        assert_eq!(parse_bound("abcd"), None);
    }

    #[test]
    fn parses_times() {
        assert_eq!(parse_time("19:28"), NaiveTime::from_hms_opt(19, 28, 0));
        assert_eq!(parse_time("19:28:34"), NaiveTime::from_hms_opt(19, 28, 34));
        assert_eq!(parse_time(""), None);
    }
}
