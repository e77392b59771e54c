//! `zip-ingest` extracts a zip archive, locates the single CSV file inside it, and loads that file
//! into an in-memory [`types::DataSet`] with column types inferred from the values.
//!
//! The primary entrypoint is [`ingestion::ingest_from_path`], which selects an ingestor from the
//! file extension. The selection step is also available on its own as
//! [`ingestion::ingestor_for_extension`], returning a boxed [`ingestion::Ingestor`].
//!
//! ## Supported inputs
//!
//! - **Zip archives**: `.zip` (case-insensitive), containing exactly one `.csv` file at the top
//!   level. Zero CSV files is [`ErrorKind::NotFound`]; several is [`ErrorKind::AmbiguousInput`]
//!   and the error lists every candidate.
//!
//! Any other extension fails selection with [`ErrorKind::Unsupported`].
//!
//! ## Value types
//!
//! Each column is typed as the narrowest of [`types::DataType::Int64`],
//! [`types::DataType::Float64`], [`types::DataType::Bool`], [`types::DataType::Utf8`] that all of
//! its non-blank cells parse as. Text cells keep their exact contents; empty cells (and blank
//! cells in number/bool columns) map to [`types::Value::Null`]. A CSV without a header row is
//! rejected with [`ErrorKind::Parse`].
//!
//! ## Working directory
//!
//! Archives are extracted into [`ingestion::ArchiveConfig::work_dir`] (default
//! `extracted_data`, relative to the process working directory). The directory is left behind
//! after ingestion. Its earlier contents are kept unless
//! [`ingestion::ArchiveConfig::clean_work_dir`] is set, so a CSV from a previous archive can make
//! the next ingestion ambiguous.
//!
//! ## Quick example
//!
//! ```no_run
//! use zip_ingest::ingestion::{ingest_from_path, IngestionOptions};
//!
//! # fn main() -> Result<(), zip_ingest::IngestionError> {
//! let ds = ingest_from_path("data.zip", &IngestionOptions::default())?;
//! println!("shape={:?} columns={:?}", ds.shape(), ds.column_names());
//! print!("{}", ds.head(5));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: unified entrypoint, ingestor selection, archive and CSV ingestion, observers
//! - [`types`]: schema + in-memory dataset types
//! - [`error`]: error type and its [`ErrorKind`] classification

pub mod error;
pub mod ingestion;
pub mod types;

pub use error::{ErrorKind, IngestionError, IngestionResult};
