mod common;

use std::sync::{Arc, Mutex, Once};

use common::write_zip;
use log::{Level, LevelFilter, Log, Metadata, Record};
use tempfile::TempDir;
use zip_ingest::ingestion::observability::LOG_TARGET;
use zip_ingest::ingestion::{ingest_from_path, ArchiveConfig, IngestionOptions, IngestionSeverity, LogObserver};

struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target() == LOG_TARGET {
            self.records.lock().unwrap().push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn records_mentioning(needle: &str) -> Vec<(Level, String)> {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, msg)| msg.contains(needle))
        .cloned()
        .collect()
}

fn options_in(tmp: &TempDir) -> IngestionOptions {
    IngestionOptions {
        archive: ArchiveConfig {
            work_dir: tmp.path().join("work"),
            clean_work_dir: true,
        },
        observer: Some(Arc::new(LogObserver)),
        alert_at_or_above: IngestionSeverity::Critical,
    }
}

#[test]
fn log_observer_reports_success_and_ambiguity() {
    records_mentioning("");
    let tmp = TempDir::new().unwrap();
    let good = write_zip(tmp.path(), "good.zip", &[("sales.csv", "id,amount\n1,10\n")]);
    let bad = write_zip(tmp.path(), "bad.zip", &[("a.csv", "x\n1\n"), ("b.csv", "x\n2\n")]);
    let missing = tmp.path().join("missing.zip");

    ingest_from_path(&good, &options_in(&tmp)).unwrap();
    ingest_from_path(&bad, &options_in(&tmp)).unwrap_err();
    ingest_from_path(&missing, &options_in(&tmp)).unwrap_err();

    let ok = records_mentioning(&good.display().to_string());
    assert_eq!(ok.len(), 1);
    assert_eq!(ok[0].0, Level::Info);
    assert!(ok[0].1.contains("rows=1 cols=2"));

    let ambiguous = records_mentioning(&bad.display().to_string());
    assert_eq!(ambiguous.len(), 1);
    assert_eq!(ambiguous[0].0, Level::Error);
    assert!(ambiguous[0].1.contains("error_kind=AmbiguousInput"));
    assert!(ambiguous[0].1.contains("candidates=a.csv,b.csv"));

    let io = records_mentioning(&missing.display().to_string());
    assert_eq!(io.len(), 2);
    assert!(io[0].1.starts_with("fail severity=Critical"));
    assert!(io[1].1.starts_with("ALERT fail severity=Critical"));
}
