use std::sync::{Arc, Mutex};

use space_missions::ingestion::{
    load_from_path, CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadOptions, LoadSeverity,
    LoadStats, TracingObserver,
};
use space_missions::LoadError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<LoadStats>>,
    failures: Mutex<Vec<LoadSeverity>>,
    alerts: Mutex<Vec<LoadSeverity>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &LoadError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &LoadError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn opts_with(obs: Arc<dyn LoadObserver>, alert_at_or_above: LoadSeverity) -> LoadOptions {
    LoadOptions {
        observer: Some(obs),
        alert_at_or_above,
    }
}

#[test]
fn observer_receives_stats_on_success() {
    let obs = Arc::new(RecordingObserver::default());
    let table = load_from_path(
        "tests/fixtures/launches.csv",
        &opts_with(obs.clone(), LoadSeverity::Critical),
    )
    .unwrap();

    assert_eq!(table.row_count(), 19);
    assert_eq!(
        obs.successes.lock().unwrap().clone(),
        vec![LoadStats {
            rows: 19,
            undated_rows: 2,
            unpriced_rows: 13,
        }]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());

    // Missing file -> Io error -> Critical
    let _ = load_from_path(
        "tests/fixtures/does_not_exist.csv",
        &opts_with(obs.clone(), LoadSeverity::Critical),
    )
    .unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![LoadSeverity::Critical]);
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![LoadSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_non_critical_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_status.csv");
    std::fs::write(&path, "Company,Location,Date,Rocket,Mission,RocketStatus,Price\n").unwrap();

    let obs = Arc::new(RecordingObserver::default());
    let err = load_from_path(&path, &opts_with(obs.clone(), LoadSeverity::Critical)).unwrap_err();

    // Missing column -> Error severity (not Critical) -> no alert
    assert!(matches!(err, LoadError::MissingColumn { .. }));
    assert_eq!(obs.failures.lock().unwrap().clone(), vec![LoadSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn lower_alert_threshold_alerts_on_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_status.csv");
    std::fs::write(&path, "Company\nX\n").unwrap();

    let obs = Arc::new(RecordingObserver::default());
    let _ = load_from_path(&path, &opts_with(obs.clone(), LoadSeverity::Error)).unwrap_err();
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![LoadSeverity::Error]);
}

#[test]
fn composite_fans_out_to_every_observer() {
    let a = Arc::new(RecordingObserver::default());
    let b = Arc::new(RecordingObserver::default());
    let observers: Vec<Arc<dyn LoadObserver>> = vec![a.clone(), b.clone()];
    let composite = Arc::new(CompositeObserver::new(observers));

    load_from_path(
        "tests/fixtures/launches.csv",
        &opts_with(composite, LoadSeverity::Critical),
    )
    .unwrap();

    assert_eq!(a.successes.lock().unwrap().len(), 1);
    assert_eq!(b.successes.lock().unwrap().len(), 1);
}

#[test]
fn file_observer_appends_lines() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("load.log");
    let obs = Arc::new(FileObserver::new(&log));
    let opts = opts_with(obs, LoadSeverity::Critical);

    load_from_path("tests/fixtures/launches.csv", &opts).unwrap();
    let _ = load_from_path("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    let text = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(" ok ") && lines[0].contains("rows=19"));
    assert!(lines[1].contains(" fail severity=Critical"));
    assert!(lines[2].contains(" ALERT severity=Critical"));
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn tracing_observer_emits_structured_events() {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log.clone())
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .finish();
    let opts = opts_with(Arc::new(TracingObserver), LoadSeverity::Critical);

    tracing::subscriber::with_default(subscriber, || {
        load_from_path("tests/fixtures/launches.csv", &opts).unwrap();
        let _ = load_from_path("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();
    });

    let text = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3, "{text}");
    assert!(lines[0].contains("INFO") && lines[0].contains("launch record loaded"));
    assert!(lines[0].contains("rows=19") && lines[0].contains("undated_rows=2"));
    assert!(lines[1].contains("WARN") && lines[1].contains("severity=Critical"));
    assert!(lines[2].contains("ERROR") && lines[2].contains("launch record unavailable"));
}
