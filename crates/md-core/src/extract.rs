//! Per-format metadata extraction.
//!
//! Each file kind has a [`MetadataReader`] that turns a path into an
//! [`ImageRecord`]. Extraction never panics on bad input: every failure is
//! classified as an [`ExtractionError`] so callers can decide to skip the file.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::dicom::DicomReader;
use crate::raw::RawReader;
use crate::types::{FileKind, MalformedTimestamp, Timestamp};

/// Why a single file could not produce a timestamp.
///
/// A DICOM file that simply has no acquisition attributes is not an error;
/// readers report that as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The timestamp field is present but cannot be parsed.
    #[error(transparent)]
    MalformedTimestamp(#[from] MalformedTimestamp),

    /// A tag the format requires is not present.
    #[error("missing {tag} tag")]
    MissingTag { tag: &'static str },

    /// The file is not of the kind the reader expects.
    #[error("not a {kind} file: {reason}")]
    NotThisFormat { kind: FileKind, reason: String },

    /// A directory entry was handed to a file reader.
    #[error("path is a directory")]
    PathIsDirectory,

    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Metadata read from one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    pub path: PathBuf,
    pub kind: FileKind,
    /// Acquisition time, `None` when the file carries none.
    pub timestamp: Option<Timestamp>,
    /// Free-text image comment. Only DICOM files carry one.
    pub comment: Option<String>,
}

/// Reads timestamps and comments from files of one kind.
///
/// Implementations must be shareable across threads; candidate pools are
/// scanned in parallel.
pub trait MetadataReader: Sync {
    /// The kind of file this reader understands.
    fn kind(&self) -> FileKind;

    /// Reads every field this crate cares about from `path`.
    fn read_record(&self, path: &Path) -> Result<ImageRecord, ExtractionError>;

    /// Reads the acquisition timestamp, `Ok(None)` meaning the file has none.
    fn read_timestamp(&self, path: &Path) -> Result<Option<Timestamp>, ExtractionError> {
        self.read_record(path).map(|record| record.timestamp)
    }

    /// Reads the free-text comment, if the format has one.
    fn read_comment(&self, path: &Path) -> Result<Option<String>, ExtractionError> {
        self.read_record(path).map(|record| record.comment)
    }
}

/// Returns the reader for a file kind.
#[must_use]
pub fn reader_for(kind: FileKind) -> &'static dyn MetadataReader {
    match kind {
        FileKind::Dicom => &DicomReader,
        FileKind::Raw => &RawReader,
    }
}

/// Extracts the acquisition timestamp of `path` as a file of `kind`.
pub fn extract(path: &Path, kind: FileKind) -> Result<Option<Timestamp>, ExtractionError> {
    reader_for(kind).read_timestamp(path)
}

/// Rejects directories before a format parser sees them.
pub(crate) fn ensure_file(path: &Path) -> Result<(), ExtractionError> {
    if std::fs::metadata(path)?.is_dir() {
        return Err(ExtractionError::PathIsDirectory);
    }
    Ok(())
}
