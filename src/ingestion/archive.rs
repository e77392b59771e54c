//! Zip archive ingestion.
//!
//! [`ZipIngestor`] extracts an archive into a working directory, locates the single CSV file at
//! the top level of that directory, and loads it with [`super::csv::infer_csv_from_path`].
//!
//! The working directory is not removed after ingestion. Unless
//! [`ArchiveConfig::clean_work_dir`] is set, files left by earlier runs stay in place and take part
//! in the CSV scan, so a stale CSV from a previous archive makes the next ingestion ambiguous.
//! Concurrent ingestions sharing one working directory are not coordinated.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{IngestionError, IngestionResult};
use crate::types::DataSet;

use super::csv;
use super::selector::{Ingestor, IngestorKind};

/// Working directory used when the caller does not choose one, relative to the process cwd.
pub const DEFAULT_WORK_DIR: &str = "extracted_data";

const TABULAR_EXTENSION: &str = "csv";

/// Where and how archives are extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    /// Extraction target. Created if absent.
    pub work_dir: PathBuf,
    /// Remove `work_dir` (and everything in it) before extracting.
    pub clean_work_dir: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from(DEFAULT_WORK_DIR),
            clean_work_dir: false,
        }
    }
}

/// Ingests `.zip` archives containing exactly one CSV file.
#[derive(Debug, Clone, Default)]
pub struct ZipIngestor {
    config: ArchiveConfig,
}

impl ZipIngestor {
    /// Create an ingestor extracting into `config.work_dir`.
    pub fn new(config: ArchiveConfig) -> Self {
        Self { config }
    }

    /// Extraction settings in use.
    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    fn extract(&self, path: &Path) -> IngestionResult<()> {
        let work_dir = &self.config.work_dir;
        if self.config.clean_work_dir && work_dir.exists() {
            debug!("clearing work dir {}", work_dir.display());
            fs::remove_dir_all(work_dir)?;
        }
        fs::create_dir_all(work_dir)?;

        let mut archive = zip::ZipArchive::new(File::open(path)?)?;
        debug!(
            "extracting {} entries from {} into {}",
            archive.len(),
            path.display(),
            work_dir.display()
        );
        archive.extract(work_dir)?;
        Ok(())
    }

    fn locate_tabular_file(&self) -> IngestionResult<PathBuf> {
        let mut candidates = Vec::new();
        for entry in fs::read_dir(&self.config.work_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if has_extension(Path::new(&name), TABULAR_EXTENSION) {
                candidates.push(name);
            }
        }
        candidates.sort();
        debug!("csv candidates in {}: {:?}", self.config.work_dir.display(), candidates);

        match candidates.len() {
            0 => Err(IngestionError::NotFound {
                message: format!(
                    "no CSV file found in the extracted data ({})",
                    self.config.work_dir.display()
                ),
            }),
            1 => Ok(self.config.work_dir.join(&candidates[0])),
            _ => Err(IngestionError::AmbiguousInput { candidates }),
        }
    }
}

impl Ingestor for ZipIngestor {
    fn kind(&self) -> IngestorKind {
        IngestorKind::Zip
    }

    fn ingest(&self, path: &Path) -> IngestionResult<DataSet> {
        if !has_extension(path, IngestorKind::Zip.extension()) {
            return Err(IngestionError::InvalidInput {
                path: path.to_path_buf(),
                message: "provided file is not a .zip file".to_string(),
            });
        }

        self.extract(path)?;
        let csv_path = self.locate_tabular_file()?;
        let ds = csv::infer_csv_from_path(&csv_path)?;

        let (rows, cols) = ds.shape();
        info!(
            "loaded '{}' successfully ({rows} rows, {cols} cols)",
            csv_path.file_name().unwrap_or_default().to_string_lossy()
        );
        Ok(ds)
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
