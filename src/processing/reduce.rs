//! Summary reductions over a (usually filtered) [`LaunchTable`].

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::query::percent;
use crate::types::LaunchTable;

/// Headline figures for a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total: usize,
    pub success_count: usize,
    /// `round(100 * success_count / total, 2)`, or 0.0 for an empty table.
    pub success_rate_percent: f64,
    pub unique_companies: usize,
    pub unique_rockets: usize,
}

/// Compute [`SummaryStats`] in one pass.
pub fn summary_stats(table: &LaunchTable) -> SummaryStats {
    let mut companies = HashSet::new();
    let mut rockets = HashSet::new();
    let mut success_count = 0;
    for r in table {
        companies.insert(r.company.as_str());
        rockets.insert(r.rocket.as_str());
        success_count += usize::from(r.mission_status.is_success());
    }

    SummaryStats {
        total: table.row_count(),
        success_count,
        success_rate_percent: percent(success_count, table.row_count()),
        unique_companies: companies.len(),
        unique_rockets: rockets.len(),
    }
}

/// Launch count per derived year, ascending by year. Undated records are skipped.
pub fn missions_per_year(table: &LaunchTable) -> BTreeMap<i32, usize> {
    table.reduce_rows(BTreeMap::new(), |mut acc, r| {
        if let Some(year) = r.year {
            *acc.entry(year).or_insert(0) += 1;
        }
        acc
    })
}
