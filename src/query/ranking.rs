//! Deterministic rankings.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::{LaunchRecord, LaunchTable, Value};

use super::args::as_integer;

/// Orders `(name, count)` pairs by count descending, then name ascending (byte-wise).
pub fn by_count_then_name(a: &(String, usize), b: &(String, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Occurrence counts of `key`, sorted with [`by_count_then_name`].
fn ranked_counts<F>(table: &LaunchTable, key: F) -> Vec<(String, usize)>
where
    F: Fn(&LaunchRecord) -> &str,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in table {
        *counts.entry(key(r)).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_owned(), count))
        .collect();
    ranked.sort_by(by_count_then_name);
    ranked
}

/// The `n` companies with the most launches, as `(company, count)` pairs.
///
/// Ties on count are broken by company name ascending. Returns an empty list when `n` is not a
/// positive integer.
pub fn top_companies_by_mission_count(table: &LaunchTable, n: impl Into<Value>) -> Vec<(String, usize)> {
    let n = n.into();
    let n = match as_integer(&n) {
        Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => return Vec::new(),
    };
    let mut ranked = ranked_counts(table, |r| r.company.as_str());
    ranked.truncate(n);
    ranked
}

/// The most frequently used rocket; ties resolve to the alphabetically first name.
///
/// Returns `None` for an empty table.
pub fn most_used_rocket(table: &LaunchTable) -> Option<String> {
    ranked_counts(table, |r| r.rocket.as_str())
        .into_iter()
        .next()
        .map(|(rocket, _)| rocket)
}
