//! Filter/aggregation pipeline behind the dashboard.
//!
//! The pipeline narrows a [`crate::types::LaunchTable`] with a [`FilterCriteria`] and computes
//! the figures a presentation layer shows for the result.
//!
//! - [`apply_filters()`]: year range, company, mission status and rocket status constraints
//! - [`summary_stats()`]: totals, success rate and cardinalities
//! - [`ranked_subset()`]: top-N values of one field (ties in first-seen order)
//! - [`per_company_success_rate()`]: success rate with launch count, per company
//! - [`missions_per_year()`]: launches per year
//! - [`DashboardView`]: all of the above for one set of filter choices
//!
//! ## Example: filter → summarize
//!
//! ```rust
//! use chrono::NaiveDate;
//! use space_missions::processing::{apply_filters, summary_stats, FilterCriteria};
//! use space_missions::types::{LaunchRecord, LaunchTable, MissionStatus};
//!
//! let launch = |company: &str, date: &str, status| {
//!     let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok();
//!     LaunchRecord::new(company, "Site", date, None, "Rocket", "Mission", "Retired", None, status)
//! };
//! let table = LaunchTable::new(vec![
//!     launch("RVSN USSR", "1957-10-04", MissionStatus::Success),
//!     launch("US Navy", "1957-12-06", MissionStatus::Failure),
//!     launch("US Navy", "1958-03-17", MissionStatus::Success),
//!     launch("US Navy", "unknown", MissionStatus::Success),
//! ]);
//!
//! let criteria = FilterCriteria::for_table(&table).with_companies(["US Navy"]);
//! let filtered = apply_filters(&table, &criteria);
//! let stats = summary_stats(&filtered);
//!
//! // The undated launch never passes the year range.
//! assert_eq!(stats.total, 2);
//! assert_eq!(stats.success_rate_percent, 50.0);
//! ```

pub mod dashboard;
pub mod filter;
pub mod rank;
pub mod reduce;

pub use dashboard::{DashboardView, TOP_N};
pub use filter::{apply_filters, FilterCriteria, FilterOptions};
pub use rank::{per_company_success_rate, ranked_subset, CompanySuccessRate, RankBy};
pub use reduce::{missions_per_year, summary_stats, SummaryStats};
