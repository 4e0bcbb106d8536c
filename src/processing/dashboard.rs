//! Everything a dashboard renders for one set of filter choices.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::LaunchTable;

use super::filter::{apply_filters, FilterCriteria, FilterOptions};
use super::rank::{per_company_success_rate, ranked_subset, CompanySuccessRate, RankBy};
use super::reduce::{missions_per_year, summary_stats, SummaryStats};

/// Length of the "top companies" and "top rockets" charts.
pub const TOP_N: usize = 10;

/// Filtered view plus the aggregates charted from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Choices offered by the controls, computed over the unfiltered table.
    pub options: FilterOptions,
    pub summary: SummaryStats,
    pub missions_per_year: BTreeMap<i32, usize>,
    /// All statuses present, most frequent first.
    pub status_distribution: Vec<(String, usize)>,
    pub top_companies: Vec<(String, usize)>,
    /// Success rate of each of `top_companies`, same order.
    pub top_company_success_rates: Vec<CompanySuccessRate>,
    pub top_rockets: Vec<(String, usize)>,
    pub records: LaunchTable,
}

impl DashboardView {
    /// Apply `criteria` to `table` and compute every aggregate over the result.
    pub fn build(table: &LaunchTable, criteria: &FilterCriteria) -> Self {
        let filtered = apply_filters(table, criteria);

        let top_companies = ranked_subset(&filtered, RankBy::Company, TOP_N);
        let names: Vec<&str> = top_companies.iter().map(|(c, _)| c.as_str()).collect();
        let top_company_success_rates = per_company_success_rate(&filtered, names.as_slice());

        tracing::debug!(
            total = table.row_count(),
            filtered = filtered.row_count(),
            year_min = criteria.year_range.0,
            year_max = criteria.year_range.1,
            "built dashboard view"
        );

        Self {
            options: FilterOptions::from_table(table),
            summary: summary_stats(&filtered),
            missions_per_year: missions_per_year(&filtered),
            status_distribution: ranked_subset(&filtered, RankBy::MissionStatus, usize::MAX),
            top_companies,
            top_company_success_rates,
            top_rockets: ranked_subset(&filtered, RankBy::Rocket, TOP_N),
            records: filtered,
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
