//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_from_path`] (from [`unified`]) which:
//!
//! - selects an [`Ingestor`] by file extension
//! - performs ingestion into an in-memory [`crate::types::DataSet`]
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Lower-level pieces are also available under:
//! - [`selector`]: the [`Ingestor`] trait and [`ingestor_for_extension`]
//! - [`archive`]: zip archive ingestion
//! - [`csv`]: CSV parsing (schema-driven or inferred)

pub mod archive;
pub mod csv;
pub mod observability;
pub mod selector;
pub mod unified;

pub use archive::{ArchiveConfig, ZipIngestor, DEFAULT_WORK_DIR};
pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    LogObserver,
};
pub use selector::{ingestor_for_extension, ingestor_for_extension_with, Ingestor, IngestorKind};
pub use unified::{ingest_from_path, IngestionOptions, IngestionRequest};
