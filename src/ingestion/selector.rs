//! Ingestor abstraction and extension-based selection.

use std::fmt;
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::DataSet;

use super::archive::{ArchiveConfig, ZipIngestor};

/// Supported ingestor variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngestorKind {
    /// Zip archive holding a single CSV file.
    Zip,
}

impl IngestorKind {
    /// Parse an ingestor kind from a file extension.
    ///
    /// Case-insensitive; a leading `.` is ignored.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match normalize_extension(ext).as_str() {
            "zip" => Some(Self::Zip),
            _ => None,
        }
    }

    /// Canonical extension (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            Self::Zip => "zip",
        }
    }
}

/// Converts a file into an in-memory [`DataSet`].
pub trait Ingestor: fmt::Debug {
    /// Variant implemented by this ingestor.
    fn kind(&self) -> IngestorKind;

    /// Ingest the file at `path`.
    fn ingest(&self, path: &Path) -> IngestionResult<DataSet>;
}

/// Return a fresh ingestor for `ext` with default settings.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use zip_ingest::ingestion::ingestor_for_extension;
///
/// # fn main() -> Result<(), zip_ingest::IngestionError> {
/// let ingestor = ingestor_for_extension(".ZIP")?;
/// let ds = ingestor.ingest(Path::new("archive.zip"))?;
/// println!("rows={}", ds.row_count());
/// # Ok(())
/// # }
/// ```
pub fn ingestor_for_extension(ext: &str) -> IngestionResult<Box<dyn Ingestor>> {
    ingestor_for_extension_with(ext, &ArchiveConfig::default())
}

/// Like [`ingestor_for_extension`], extracting archives according to `config`.
pub fn ingestor_for_extension_with(
    ext: &str,
    config: &ArchiveConfig,
) -> IngestionResult<Box<dyn Ingestor>> {
    match IngestorKind::from_extension(ext) {
        Some(IngestorKind::Zip) => Ok(Box::new(ZipIngestor::new(config.clone()))),
        None => Err(IngestionError::Unsupported {
            extension: ext.to_string(),
        }),
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}
