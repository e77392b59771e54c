use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Coarse classification of an [`IngestionError`].
///
/// Callers that only care about *why* an ingestion failed (wrong input, missing content, I/O,
/// malformed content) can match on this instead of on the individual error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not of the type the ingestor accepts (e.g. not a `.zip` file).
    InvalidInput,
    /// No ingestor exists for the requested file type.
    Unsupported,
    /// Required content is absent (no tabular file inside the archive).
    NotFound,
    /// Required content is not unique (several tabular files inside the archive).
    AmbiguousInput,
    /// Filesystem or archive extraction failure.
    Io,
    /// Content is malformed for its declared format.
    Parse,
}

/// Error type returned by ingestion functions.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// The path does not denote a supported archive type.
    #[error("invalid input: {message} ({})", .path.display())]
    InvalidInput { path: PathBuf, message: String },

    /// No ingestor is registered for the requested extension.
    #[error("unsupported: no ingestor available for file extension '{extension}'")]
    Unsupported { extension: String },

    /// The extracted archive does not contain a tabular file.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The extracted archive contains more than one tabular file.
    #[error(
        "ambiguous input: multiple CSV files found ({}); specify which one to use",
        .candidates.join(", ")
    )]
    AmbiguousInput { candidates: Vec<String> },

    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive could not be opened or extracted.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The tabular file has no header row.
    #[error("empty data: {message}")]
    EmptyData { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

impl IngestionError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AmbiguousInput { .. } => ErrorKind::AmbiguousInput,
            Self::Io(_) | Self::Archive(_) => ErrorKind::Io,
            Self::Csv(err) => match err.kind() {
                csv::ErrorKind::Io(_) => ErrorKind::Io,
                _ => ErrorKind::Parse,
            },
            Self::EmptyData { .. } | Self::ParseError { .. } => ErrorKind::Parse,
        }
    }
}
