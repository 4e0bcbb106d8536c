//! Rankings for charts.
//!
//! Unlike [`crate::query::top_companies_by_mission_count`], ties here keep the order in which
//! values were first encountered in the table.

use std::collections::HashMap;

use serde::Serialize;

use crate::query::percent;
use crate::types::{LaunchRecord, LaunchTable};

/// Field to rank by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    Company,
    Rocket,
    MissionStatus,
    RocketStatus,
}

impl RankBy {
    fn key(self, record: &LaunchRecord) -> &str {
        match self {
            RankBy::Company => record.company.as_str(),
            RankBy::Rocket => record.rocket.as_str(),
            RankBy::MissionStatus => record.mission_status.as_str(),
            RankBy::RocketStatus => record.rocket_status.as_str(),
        }
    }
}

/// The `n` most frequent values of `by`, as `(value, count)` pairs, count descending.
pub fn ranked_subset(table: &LaunchTable, by: RankBy, n: usize) -> Vec<(String, usize)> {
    // Vec in first-seen order; the stable sort below keeps that order among equal counts.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for r in table {
        let key = by.key(r);
        let next = counts.len();
        let i = *slots.entry(key).or_insert(next);
        if i == next {
            counts.push((key, 0));
        }
        counts[i].1 += 1;
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(n)
        .map(|(k, c)| (k.to_owned(), c))
        .collect()
}

/// One company's success rate with the launch count behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySuccessRate {
    pub company: String,
    pub success_rate_percent: f64,
    pub total_missions: usize,
}

/// Success rate and launch count for each of `companies`, in the given order.
///
/// A company with no records in `table` reports `0.0` and `0`.
pub fn per_company_success_rate<S: AsRef<str>>(
    table: &LaunchTable,
    companies: &[S],
) -> Vec<CompanySuccessRate> {
    companies
        .iter()
        .map(|company| {
            let company = company.as_ref();
            let (total, ok) = table.reduce_rows((0usize, 0usize), |(total, ok), r| {
                if r.company == company {
                    (total + 1, ok + usize::from(r.mission_status.is_success()))
                } else {
                    (total, ok)
                }
            });
            CompanySuccessRate {
                company: company.to_owned(),
                success_rate_percent: percent(ok, total),
                total_missions: total,
            }
        })
        .collect()
}
