//! Per-company, per-status and per-year counts.

use std::collections::BTreeMap;

use crate::types::{LaunchTable, Value};

use super::args::{as_text, as_year};
use super::round2;

/// Number of records whose company exactly equals `name` (case-sensitive).
///
/// Returns 0 when `name` is not a string.
pub fn mission_count_by_company(table: &LaunchTable, name: impl Into<Value>) -> usize {
    let name = name.into();
    let Some(name) = as_text(&name) else {
        return 0;
    };
    table.iter().filter(|r| r.company == name).count()
}

/// Percentage (0-100) of `name`'s launches that succeeded, rounded to 2 decimals.
///
/// Returns 0.0 when the company has no records or `name` is not a string.
pub fn success_rate(table: &LaunchTable, name: impl Into<Value>) -> f64 {
    let name = name.into();
    let Some(name) = as_text(&name) else {
        return 0.0;
    };
    let (total, successes) = table.reduce_rows((0usize, 0usize), |(total, ok), r| {
        if r.company == name {
            (total + 1, ok + usize::from(r.mission_status.is_success()))
        } else {
            (total, ok)
        }
    });
    percent(successes, total)
}

/// Occurrences of each mission status spelling present in the table.
pub fn mission_status_count(table: &LaunchTable) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for r in table {
        *counts.entry(r.mission_status.as_str().to_owned()).or_insert(0) += 1;
    }
    counts
}

/// Number of records launched in `year`. Records without a date never match.
///
/// Returns 0 when `year` is not an integer.
pub fn missions_by_year(table: &LaunchTable, year: impl Into<Value>) -> usize {
    let year = year.into();
    let Some(year) = as_year(&year) else {
        return 0;
    };
    table.iter().filter(|r| r.year == Some(year)).count()
}

/// `100 * part / total` rounded to 2 decimals, or 0.0 for an empty total.
pub(crate) fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}
