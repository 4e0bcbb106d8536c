use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::LoadError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (load failed).
    Error,
    /// Critical error (typically I/O failures).
    Critical,
}

impl LoadSeverity {
    /// Severity of a load failure. Missing or unreadable files are critical.
    pub fn for_error(error: &LoadError) -> Self {
        match error {
            LoadError::Io(_) => Self::Critical,
            LoadError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => Self::Critical,
                _ => Self::Error,
            },
            LoadError::MissingColumn { .. } => Self::Error,
        }
    }
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The source path.
    pub path: PathBuf,
}

/// Stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of loaded records.
    pub rows: usize,
    /// Records kept with an unknown launch date.
    pub undated_rows: usize,
    /// Records kept with an unknown price.
    pub unpriced_rows: usize,
}

/// Observer interface for load outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait LoadObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &LoadError) {}

    /// Called when a load failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Forwards load events to `tracing` as structured events.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        tracing::info!(
            path = %ctx.path.display(),
            rows = stats.rows,
            undated_rows = stats.undated_rows,
            unpriced_rows = stats.unpriced_rows,
            "launch record loaded"
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        tracing::warn!(
            path = %ctx.path.display(),
            severity = ?severity,
            error = %error,
            "launch record load failed"
        );
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        tracing::error!(
            path = %ctx.path.display(),
            severity = ?severity,
            error = %error,
            "launch record unavailable"
        );
    }
}

/// Appends load events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.append_line(&format!(
            "{} ok path={} rows={} undated={} unpriced={}",
            unix_ts(),
            ctx.path.display(),
            stats.rows,
            stats.undated_rows,
            stats.unpriced_rows
        ));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.append_line(&format!(
            "{} fail severity={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            error
        ));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
