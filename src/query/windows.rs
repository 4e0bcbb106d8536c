//! Date- and year-windowed queries.

use chrono::NaiveTime;

use crate::types::{LaunchTable, Value};

use super::args::{as_date_bound, as_year};
use super::round2;

/// Mission names launched within `[start, end]` (inclusive), oldest first.
///
/// Launches on the same date keep table order. Bounds must be date strings; `YYYY-MM` and `YYYY`
/// mean the first day of that month or year. A bound with a time component is compared against
/// midnight of each launch date. Returns an empty list when a
/// bound is not a parseable date or `start > end`.
pub fn missions_by_date_range(
    table: &LaunchTable,
    start: impl Into<Value>,
    end: impl Into<Value>,
) -> Vec<String> {
    let (start, end) = (start.into(), end.into());
    let (Some(start), Some(end)) = (as_date_bound(&start), as_date_bound(&end)) else {
        return Vec::new();
    };
    if start > end {
        return Vec::new();
    }

    let mut hits: Vec<_> = table
        .iter()
        .filter_map(|r| {
            let date = r.launch_date?;
            let at = date.and_time(NaiveTime::MIN);
            (start <= at && at <= end).then_some((date, r.mission.as_str()))
        })
        .collect();
    // Stable: equal dates keep table order.
    hits.sort_by_key(|&(date, _)| date);
    hits.into_iter().map(|(_, mission)| mission.to_owned()).collect()
}

/// Launches per year over `[start_year, end_year]` (inclusive), rounded to 2 decimals.
///
/// Returns 0.0 when either bound is not an integer or `end_year < start_year`.
pub fn average_missions_per_year(
    table: &LaunchTable,
    start_year: impl Into<Value>,
    end_year: impl Into<Value>,
) -> f64 {
    let (start, end) = (start_year.into(), end_year.into());
    let (Some(start), Some(end)) = (as_year(&start), as_year(&end)) else {
        return 0.0;
    };
    if end < start {
        return 0.0;
    }

    let years = i64::from(end) - i64::from(start) + 1;
    let total = table
        .iter()
        .filter(|r| r.year.is_some_and(|y| (start..=end).contains(&y)))
        .count();
    round2(total as f64 / years as f64)
}
