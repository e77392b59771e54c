//! Outcome reporting for [`super::ingest_from_path`].
//!
//! Every failure is classified into an [`IngestionSeverity`] from its [`ErrorKind`]: I/O problems
//! (unreadable archive, extraction failure) are `Critical`, problems with the input itself are
//! `Error`. Observers receive the error and render it with its kind and, for ambiguous archives,
//! the candidate file names.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{ErrorKind, IngestionError};

use super::selector::IngestorKind;

/// Target used by [`LogObserver`].
pub const LOG_TARGET: &str = "zip_ingest::observer";

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// The input could not be ingested as given.
    Error,
    /// Filesystem or extraction failure.
    Critical,
}

impl IngestionSeverity {
    /// Severity assigned to a failed ingestion.
    pub fn of(error: &IngestionError) -> Self {
        match error.kind() {
            ErrorKind::Io => Self::Critical,
            ErrorKind::InvalidInput
            | ErrorKind::Unsupported
            | ErrorKind::NotFound
            | ErrorKind::AmbiguousInput
            | ErrorKind::Parse => Self::Error,
        }
    }

    fn log_level(self) -> log::Level {
        match self {
            Self::Info => log::Level::Info,
            Self::Warning => log::Level::Warn,
            Self::Error | Self::Critical => log::Level::Error,
        }
    }
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// Archive path passed by the caller.
    pub path: PathBuf,
    /// Ingestor selected for the path.
    pub kind: IngestorKind,
}

/// Shape of a successfully loaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    pub rows: usize,
    pub columns: usize,
}

/// Observer interface for ingestion outcomes.
pub trait IngestionObserver: Send + Sync {
    /// Called when ingestion succeeds.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called when ingestion fails.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &IngestionError) {}

    /// Called when a failure meets the configured alert threshold. Forwards to
    /// [`Self::on_failure`] unless overridden.
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
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

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.observers.iter().for_each(|o| o.on_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.observers.iter().for_each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.observers.iter().for_each(|o| o.on_alert(ctx, severity, error));
    }
}

/// Emits ingestion events through the [`log`] facade under [`LOG_TARGET`].
///
/// Success is logged at `info`; failures at the level matching their severity; alerts at `error`.
#[derive(Debug, Default)]
pub struct LogObserver;

impl IngestionObserver for LogObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        log::info!(target: LOG_TARGET, "{}", Outcome::Loaded(ctx, stats));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        log::log!(
            target: LOG_TARGET,
            severity.log_level(),
            "{}",
            Outcome::Failed(ctx, severity, error)
        );
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        log::error!(target: LOG_TARGET, "ALERT {}", Outcome::Failed(ctx, severity, error));
    }
}

/// Appends one line per event, prefixed with a unix timestamp, to a local file.
///
/// Writes are best-effort; failures to open/write the file are ignored.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append(&self, event: fmt::Arguments<'_>) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{} {event}", unix_ts());
        }
    }
}

impl IngestionObserver for FileObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.append(format_args!("{}", Outcome::Loaded(ctx, stats)));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.append(format_args!("{}", Outcome::Failed(ctx, severity, error)));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.append(format_args!("ALERT {}", Outcome::Failed(ctx, severity, error)));
    }
}

/// Single-line `key=value` rendering shared by the observers.
enum Outcome<'a> {
    Loaded(&'a IngestionContext, IngestionStats),
    Failed(&'a IngestionContext, IngestionSeverity, &'a IngestionError),
}

impl fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Loaded(ctx, stats) => write!(
                f,
                "ok kind={:?} path={} rows={} cols={}",
                ctx.kind,
                ctx.path.display(),
                stats.rows,
                stats.columns
            ),
            Outcome::Failed(ctx, severity, error) => {
                write!(
                    f,
                    "fail severity={severity:?} kind={:?} path={} error_kind={:?}",
                    ctx.kind,
                    ctx.path.display(),
                    error.kind()
                )?;
                if let IngestionError::AmbiguousInput { candidates } = error {
                    write!(f, " candidates={}", candidates.join(","))?;
                }
                write!(f, " err={error}")
            }
        }
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
