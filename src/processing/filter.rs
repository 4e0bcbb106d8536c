//! Interactive filtering of a [`LaunchTable`].

use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::{LaunchRecord, LaunchTable};

/// Constraints chosen on a control surface.
///
/// The year range is always active. Each set restricts its field when non-empty and is ignored
/// when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Inclusive `(min, max)` launch year.
    pub year_range: (i32, i32),
    pub companies: BTreeSet<String>,
    pub mission_statuses: BTreeSet<String>,
    pub rocket_statuses: BTreeSet<String>,
}

impl FilterCriteria {
    /// Criteria restricted only by `year_range`.
    pub fn new(year_range: (i32, i32)) -> Self {
        Self {
            year_range,
            companies: BTreeSet::new(),
            mission_statuses: BTreeSet::new(),
            rocket_statuses: BTreeSet::new(),
        }
    }

    /// Default criteria for `table`: the year range spans every dated record, no other
    /// restriction. A table with no dated records gets the full `i32` range.
    pub fn for_table(table: &LaunchTable) -> Self {
        Self::new(table.year_bounds().unwrap_or((i32::MIN, i32::MAX)))
    }

    pub fn with_year_range(mut self, min: i32, max: i32) -> Self {
        self.year_range = (min, max);
        self
    }

    pub fn with_companies<I, S>(mut self, companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.companies = companies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mission_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mission_statuses = statuses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rocket_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rocket_statuses = statuses.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `record` passes every active constraint.
    ///
    /// Records without a launch year never match.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        let (min, max) = self.year_range;
        let in_range = record.year.is_some_and(|y| min <= y && y <= max);
        in_range
            && allows(&self.companies, &record.company)
            && allows(&self.mission_statuses, record.mission_status.as_str())
            && allows(&self.rocket_statuses, &record.rocket_status)
    }
}

fn allows(set: &BTreeSet<String>, value: &str) -> bool {
    set.is_empty() || set.contains(value)
}

/// Returns a new table holding the records of `table` that satisfy `criteria`, in table order.
pub fn apply_filters(table: &LaunchTable, criteria: &FilterCriteria) -> LaunchTable {
    table.filter_rows(|r| criteria.matches(r))
}

/// The choices a control surface offers for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// `None` when no record carries a date.
    pub year_bounds: Option<(i32, i32)>,
    pub companies: Vec<String>,
    pub mission_statuses: Vec<String>,
    pub rocket_statuses: Vec<String>,
}

impl FilterOptions {
    /// Sorted distinct values of each filterable field.
    pub fn from_table(table: &LaunchTable) -> Self {
        let sorted = |values: BTreeSet<&str>| -> Vec<String> { values.into_iter().map(str::to_owned).collect() };
        Self {
            year_bounds: table.year_bounds(),
            companies: sorted(table.distinct(|r| r.company.as_str())),
            mission_statuses: sorted(table.distinct(|r| r.mission_status.as_str())),
            rocket_statuses: sorted(table.distinct(|r| r.rocket_status.as_str())),
        }
    }
}
