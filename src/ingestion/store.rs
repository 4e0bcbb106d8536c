//! Load-once record store.
//!
//! [`load_from_path`] loads a launch record and reports the outcome to the configured
//! [`LoadObserver`]. [`RecordStore`] memoizes loaded tables per path so a long-lived process
//! parses the source once and hands every caller the same immutable [`Arc<LaunchTable>`].

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::LoadResult;
use crate::types::LaunchTable;

use super::csv::load_csv_with_counts;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Options controlling how loads are reported.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a launch record from a CSV file, reporting to `options.observer`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row and partial-data counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use space_missions::ingestion::{load_from_path, LoadOptions, LoadSeverity, TracingObserver};
///
/// # fn main() -> Result<(), space_missions::LoadError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(TracingObserver)),
///     alert_at_or_above: LoadSeverity::Critical,
/// };
/// let table = load_from_path("space_missions.csv", &opts)?;
/// println!("rows={}", table.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<LaunchTable> {
    let path = path.as_ref();
    let result = load_csv_with_counts(path);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = LoadContext {
            path: path.to_path_buf(),
        };
        match &result {
            Ok((table, counts)) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: table.row_count(),
                    undated_rows: counts.undated_rows,
                    unpriced_rows: counts.unpriced_rows,
                },
            ),
            Err(e) => {
                let sev = LoadSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result.map(|(table, _)| table)
}

/// Memoizing, per-path store of loaded launch tables.
///
/// Construct one at startup and pass it by reference. The first successful [`RecordStore::load`]
/// for a path parses the file; later calls return the same `Arc`. Failures are not cached, so a
/// later call retries. The source is assumed static for the life of the store.
pub struct RecordStore {
    options: LoadOptions,
    tables: Mutex<HashMap<PathBuf, Arc<LaunchTable>>>,
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("options", &self.options)
            .field("cached", &self.len())
            .finish()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(LoadOptions::default())
    }
}

impl RecordStore {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            tables: Mutex::new(HashMap::new()),
        }
    }

    /// Return the table for `path`, loading it on first use.
    pub fn load(&self, path: impl AsRef<Path>) -> LoadResult<Arc<LaunchTable>> {
        let path = path.as_ref();
        if let Some(table) = self.lock().get(path) {
            return Ok(Arc::clone(table));
        }

        // The lock is not held while parsing. Concurrent first loads of one path may both parse;
        // the first insert wins and every caller gets that table.
        let loaded = Arc::new(load_from_path(path, &self.options)?);
        let mut tables = self.lock();
        let table = tables.entry(path.to_path_buf()).or_insert(loaded);
        Ok(Arc::clone(table))
    }

    /// Paths currently held in the cache.
    pub fn cached_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.lock().keys().cloned().collect();
        paths.sort();
        paths
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached table. Outstanding `Arc`s stay valid.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Arc<LaunchTable>>> {
        // The map is only ever inserted into whole, so a poisoned guard is still consistent.
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
