//! Unified ingestion entrypoint.
//!
//! Most callers should use [`ingest_from_path`], which picks an ingestor from the file extension
//! (see [`super::selector`]) and ingests the file into an in-memory [`crate::types::DataSet`].
//!
//! If an [`super::observability::IngestionObserver`] is provided, success/failure/alerts are
//! reported to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::IngestionResult;
use crate::types::DataSet;

use super::archive::ArchiveConfig;
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::selector::{ingestor_for_extension_with, IngestorKind};

/// Options controlling unified ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Extraction settings for archive ingestors.
    pub archive: ArchiveConfig,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("archive", &self.archive)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            archive: ArchiveConfig::default(),
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Unified ingestion entry point for path-based sources.
///
/// The ingestor is selected from the path's extension. A path without an extension fails with
/// [`crate::IngestionError::Unsupported`].
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// Selection failures happen before any ingestor exists and are not reported to the observer.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
///
/// use zip_ingest::ingestion::{ingest_from_path, ArchiveConfig, IngestionOptions};
///
/// # fn main() -> Result<(), zip_ingest::IngestionError> {
/// let opts = IngestionOptions {
///     archive: ArchiveConfig {
///         work_dir: PathBuf::from("/tmp/ingest-work"),
///         clean_work_dir: true,
///     },
///     ..Default::default()
/// };
///
/// let ds = ingest_from_path("data.zip", &opts)?;
/// println!("columns={:?}", ds.column_names());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> IngestionResult<DataSet> {
    let path = path.as_ref();
    let ext = path.extension().map(|s| s.to_string_lossy()).unwrap_or_default();
    let ingestor = ingestor_for_extension_with(&ext, &options.archive)?;

    let ctx = IngestionContext {
        path: path.to_path_buf(),
        kind: ingestor.kind(),
    };

    let result = ingestor.ingest(path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(
                &ctx,
                IngestionStats {
                    rows: ds.row_count(),
                    columns: ds.column_count(),
                },
            ),
            Err(e) => {
                let sev = IngestionSeverity::of(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Convenience helper for callers that want an owned request object.
///
/// This can be useful if you want to enqueue ingestion work in a job system.
#[derive(Debug, Clone)]
pub struct IngestionRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Options controlling ingestion.
    pub options: IngestionOptions,
}

impl IngestionRequest {
    /// Ingestor variant this request would be routed to, if any.
    pub fn kind(&self) -> Option<IngestorKind> {
        self.path
            .extension()
            .and_then(|s| s.to_str())
            .and_then(IngestorKind::from_extension)
    }

    /// Execute the request by calling [`ingest_from_path`].
    pub fn run(&self) -> IngestionResult<DataSet> {
        ingest_from_path(&self.path, &self.options)
    }
}
