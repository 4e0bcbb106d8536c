//! Loading the launch record.
//!
//! Most callers should construct a [`RecordStore`] once and call [`RecordStore::load`], which:
//!
//! - parses the CSV into an immutable [`crate::types::LaunchTable`] on first use
//! - hands out the same `Arc` on every later call for that path
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The raw CSV loader is available under [`csv`].

pub mod csv;
pub mod observability;
pub mod store;

pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    TracingObserver,
};
pub use store::{load_from_path, LoadOptions, RecordStore};
