//! `space-missions` answers analytical questions over a static historical record of orbital
//! launch attempts and computes the figures a launch dashboard shows.
//!
//! The record is loaded once from CSV into an immutable [`types::LaunchTable`]. Everything else
//! reads that table:
//!
//! - [`query`]: eight pure lookups (counts, success rate, date windows, rankings, averages) with
//!   deterministic tie-breaks and a never-fail argument contract
//! - [`processing`]: the filter/aggregation pipeline (year range, company and status filters,
//!   summary statistics, chart rankings)
//!
//! ## Loading
//!
//! Construct a [`ingestion::RecordStore`] at startup and pass it around by reference. The first
//! load of a path parses the file; later loads return the same `Arc`.
//!
//! ```no_run
//! use space_missions::ingestion::RecordStore;
//! use space_missions::query;
//!
//! # fn main() -> Result<(), space_missions::LoadError> {
//! let store = RecordStore::default();
//! let table = store.load("space_missions.csv")?;
//!
//! println!("RVSN USSR launches: {}", query::mission_count_by_company(&table, "RVSN USSR"));
//! println!("most used rocket: {:?}", query::most_used_rocket(&table));
//! println!("1957: {:?}", query::missions_by_date_range(&table, "1957-01-01", "1957-12-31"));
//! # Ok(())
//! # }
//! ```
//!
//! Rows with an empty or unparseable date are kept with no date: they count toward company,
//! rocket and status aggregates but never match a date or year window.
//!
//! ## Degrade-to-neutral arguments
//!
//! Query functions accept anything convertible into a [`types::Value`]. An argument of the
//! wrong shape (a number where a company name is expected, a float where a year is expected,
//! an unparseable date) produces the neutral result instead of an error:
//!
//! ```rust
//! use space_missions::query::{average_missions_per_year, missions_by_year};
//! use space_missions::types::{LaunchTable, Value};
//!
//! let table = LaunchTable::default();
//! assert_eq!(missions_by_year(&table, "2020"), 0);
//! assert_eq!(missions_by_year(&table, 2020.5), 0);
//! assert_eq!(average_missions_per_year(&table, Value::Null, 2020), 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loader, load observers and the memoizing record store
//! - [`types`]: launch record, table and argument types
//! - [`dates`]: the accepted date and time shapes
//! - [`query`]: the query engine
//! - [`processing`]: the filter/aggregation pipeline
//! - [`cli`]: command-line front end used by the `space-missions` binary
//! - [`error`]: the load error type

pub mod cli;
pub mod dates;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod query;
pub mod types;

#[cfg(test)]
mod test_support;

pub use error::{LoadError, LoadResult};
