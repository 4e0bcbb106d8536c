//! Analytical queries over a [`crate::types::LaunchTable`].
//!
//! Every function here is pure and infallible. Arguments are taken as `impl Into<Value>` and
//! validated at the boundary; an argument of the wrong shape yields the function's neutral
//! result (0, 0.0, or an empty collection) rather than an error.
//!
//! | Function | Result |
//! |---|---|
//! | [`mission_count_by_company`] | launches by one company |
//! | [`success_rate`] | percent of a company's launches that succeeded |
//! | [`missions_by_date_range`] | mission names in a date window, oldest first |
//! | [`top_companies_by_mission_count`] | top-N `(company, count)` pairs |
//! | [`mission_status_count`] | count per mission status |
//! | [`missions_by_year`] | launches in one year |
//! | [`most_used_rocket`] | the most frequent rocket |
//! | [`average_missions_per_year`] | launches per year over a year window |
//!
//! Rankings are deterministic: count descending, then name ascending. Percentages and averages
//! are rounded to 2 decimals on the way out only.
//!
//! ```rust
//! use space_missions::query::{mission_count_by_company, success_rate, top_companies_by_mission_count};
//! use space_missions::types::{LaunchRecord, LaunchTable, MissionStatus, Value};
//!
//! let table = LaunchTable::new(vec![
//!     LaunchRecord::new("NASA", "LC-39A", None, None, "Saturn V", "Apollo 11", "Retired", None, MissionStatus::Success),
//!     LaunchRecord::new("NASA", "LC-39A", None, None, "Saturn V", "Apollo 13", "Retired", None, MissionStatus::PartialFailure),
//! ]);
//!
//! assert_eq!(mission_count_by_company(&table, "NASA"), 2);
//! assert_eq!(mission_count_by_company(&table, Value::Null), 0);
//! assert_eq!(success_rate(&table, "NASA"), 50.0);
//! assert!(top_companies_by_mission_count(&table, 0).is_empty());
//! ```

mod args;
pub mod counts;
pub mod ranking;
pub mod windows;

pub use counts::{mission_count_by_company, mission_status_count, missions_by_year, success_rate};
pub use ranking::{by_count_then_name, most_used_rocket, top_companies_by_mission_count};
pub use windows::{average_missions_per_year, missions_by_date_range};

pub(crate) use counts::percent;

/// Round to 2 decimal places, exact halves to even.
///
/// Formatting rounds the exact binary value, so `0.125` becomes `0.12` and `0.375` becomes
/// `0.38`, while `2.675` (stored slightly below the half) becomes `2.67`.
pub(crate) fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}
