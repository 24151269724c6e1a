//! RAW (TIFF) header reading.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use tiff::TiffError;
use tiff::decoder::Decoder;
use tiff::tags::Tag;

use crate::extract::{ExtractionError, ImageRecord, MetadataReader, ensure_file};
use crate::types::{FileKind, MalformedTimestamp, Timestamp};

/// Reader for raw acquisition TIFF files.
///
/// RAW files have no "no timestamp" case: a missing or unparsable `DateTime`
/// tag is always an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawReader;

impl RawReader {
    /// Reads the `DateTime` tag of the first image page.
    fn datetime(path: &Path) -> Result<Timestamp, ExtractionError> {
        ensure_file(path)?;
        let file = File::open(path)?;
        let mut decoder = Decoder::new(BufReader::new(file)).map_err(classify)?;

        let value = decoder
            .find_tag(Tag::DateTime)
            .map_err(undecodable)?
            .ok_or(ExtractionError::MissingTag { tag: "DateTime" })?;
        let text = value.into_string().map_err(undecodable)?;
        tracing::trace!(path = %path.display(), value = %text, "TIFF DateTime");

        Ok(Timestamp::from_tiff(&text)?)
    }
}

impl MetadataReader for RawReader {
    fn kind(&self) -> FileKind {
        FileKind::Raw
    }

    fn read_record(&self, path: &Path) -> Result<ImageRecord, ExtractionError> {
        let timestamp = Self::datetime(path)?;
        tracing::debug!(path = %path.display(), %timestamp, "read TIFF header");

        Ok(ImageRecord {
            path: path.to_path_buf(),
            kind: FileKind::Raw,
            timestamp: Some(timestamp),
            comment: None,
        })
    }

    fn read_comment(&self, _path: &Path) -> Result<Option<String>, ExtractionError> {
        Ok(None)
    }
}

/// Maps decoder failures onto the extraction taxonomy.
///
/// A file too short to hold a TIFF header surfaces as an unexpected EOF from
/// the decoder; that is a format mismatch, not an I/O failure.
fn classify(err: TiffError) -> ExtractionError {
    match err {
        TiffError::IoError(e) if e.kind() != ErrorKind::UnexpectedEof => ExtractionError::Io(e),
        other => ExtractionError::NotThisFormat {
            kind: FileKind::Raw,
            reason: other.to_string(),
        },
    }
}

/// Maps failures reading the `DateTime` tag of a file already known to be a TIFF.
fn undecodable(err: TiffError) -> ExtractionError {
    match err {
        TiffError::IoError(e) if e.kind() != ErrorKind::UnexpectedEof => ExtractionError::Io(e),
        other => {
            MalformedTimestamp::new("TIFF DateTime", "<undecodable>", other.to_string()).into()
        }
    }
}
