mod common;

use std::sync::{Arc, Mutex};

use common::write_zip;
use tempfile::TempDir;
use zip_ingest::ingestion::{
    ingest_from_path, ArchiveConfig, CompositeObserver, FileObserver, IngestionContext, IngestionObserver,
    IngestionOptions, IngestionSeverity, IngestionStats, IngestorKind, LogObserver,
};

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<(IngestorKind, IngestionStats)>>,
    failures: Mutex<Vec<IngestionSeverity>>,
    alerts: Mutex<Vec<IngestionSeverity>>,
}

impl IngestionObserver for RecordingObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.successes.lock().unwrap().push((ctx.kind, stats));
    }

    fn on_failure(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &zip_ingest::IngestionError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &zip_ingest::IngestionError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn options_with(tmp: &TempDir, observer: Arc<dyn IngestionObserver>) -> IngestionOptions {
    IngestionOptions {
        archive: ArchiveConfig {
            work_dir: tmp.path().join("work"),
            clean_work_dir: true,
        },
        observer: Some(observer),
        alert_at_or_above: IngestionSeverity::Critical,
    }
}

#[test]
fn observer_receives_success_with_shape() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(tmp.path(), "data.zip", &[("sales.csv", "id,amount\n1,10\n2,20\n")]);
    let obs = Arc::new(RecordingObserver::default());

    ingest_from_path(&archive, &options_with(&tmp, obs.clone())).unwrap();

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(
        successes,
        vec![(IngestorKind::Zip, IngestionStats { rows: 2, columns: 2 })]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let tmp = TempDir::new().unwrap();
    let obs = Arc::new(RecordingObserver::default());

    // Missing archive -> Io error -> Critical
    let _ = ingest_from_path(tmp.path().join("does_not_exist.zip"), &options_with(&tmp, obs.clone())).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![IngestionSeverity::Critical]);
    assert_eq!(alerts, vec![IngestionSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_ambiguous_archive() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(tmp.path(), "bad.zip", &[("a.csv", "x\n1\n"), ("b.csv", "x\n2\n")]);
    let obs = Arc::new(RecordingObserver::default());

    let _ = ingest_from_path(&archive, &options_with(&tmp, obs.clone())).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![IngestionSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn selection_failure_is_not_observed() {
    let tmp = TempDir::new().unwrap();
    let obs = Arc::new(RecordingObserver::default());

    let _ = ingest_from_path(tmp.path().join("data.txt"), &options_with(&tmp, obs.clone())).unwrap_err();

    assert!(obs.failures.lock().unwrap().is_empty());
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn composite_fans_out_to_file_observer() {
    let tmp = TempDir::new().unwrap();
    let archive = write_zip(tmp.path(), "data.zip", &[("sales.csv", "id\n1\n")]);
    let log_path = tmp.path().join("ingest.log");
    let recorder = Arc::new(RecordingObserver::default());
    let composite = CompositeObserver::new(vec![
        recorder.clone() as Arc<dyn IngestionObserver>,
        Arc::new(FileObserver::new(&log_path)),
        Arc::new(LogObserver),
    ]);

    ingest_from_path(&archive, &options_with(&tmp, Arc::new(composite))).unwrap();
    let _ = ingest_from_path(tmp.path().join("missing.zip"), &options_with(&tmp, Arc::new(FileObserver::new(&log_path))))
        .unwrap_err();

    assert_eq!(recorder.successes.lock().unwrap().len(), 1);
    let log = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(" ok kind=Zip"));
    assert!(lines[0].contains("rows=1 cols=1"));
    assert!(lines[1].contains(" fail severity=Critical"));
    assert!(lines[1].contains("error_kind=Io"));
    assert!(lines[2].contains(" ALERT fail severity=Critical"));
}
