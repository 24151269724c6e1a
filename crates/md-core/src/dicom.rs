//! DICOM header reading.
//!
//! Only the acquisition date/time and the image comment are used. Parsing
//! stops at the pixel data element, so large images are never loaded.

use std::path::Path;

use dicom_dictionary_std::tags;
use dicom_core::Tag;
use dicom_object::{DefaultDicomObject, OpenFileOptions};

use crate::extract::{ExtractionError, ImageRecord, MetadataReader, ensure_file};
use crate::types::{FileKind, MalformedTimestamp, Timestamp};

/// Reader for DICOM files.
#[derive(Debug, Clone, Copy, Default)]
pub struct DicomReader;

impl DicomReader {
    fn open(path: &Path) -> Result<DefaultDicomObject, ExtractionError> {
        ensure_file(path)?;
        OpenFileOptions::new()
            .read_until(tags::PIXEL_DATA)
            .open_file(path)
            .map_err(|e| ExtractionError::NotThisFormat {
                kind: FileKind::Dicom,
                reason: e.to_string(),
            })
    }
}

impl MetadataReader for DicomReader {
    fn kind(&self) -> FileKind {
        FileKind::Dicom
    }

    fn read_record(&self, path: &Path) -> Result<ImageRecord, ExtractionError> {
        let obj = Self::open(path)?;
        let timestamp = acquisition_timestamp(&obj)?;
        tracing::debug!(path = %path.display(), ?timestamp, "read DICOM header");

        Ok(ImageRecord {
            path: path.to_path_buf(),
            kind: FileKind::Dicom,
            timestamp,
            comment: string_element(&obj, tags::IMAGE_COMMENTS),
        })
    }
}

/// Combines `AcquisitionDate` and `AcquisitionTime`.
///
/// Returns `Ok(None)` when either attribute is missing or blank.
fn acquisition_timestamp(obj: &DefaultDicomObject) -> Result<Option<Timestamp>, MalformedTimestamp> {
    let date = string_element(obj, tags::ACQUISITION_DATE);
    let time = string_element(obj, tags::ACQUISITION_TIME);
    tracing::trace!(?date, ?time, "acquisition attributes");

    let (Some(date), Some(time)) = (date, time) else {
        return Ok(None);
    };
    Timestamp::from_dicom(&date, &time).map(Some)
}

/// Get trimmed, non-empty string value for a DICOM tag
fn string_element(obj: &DefaultDicomObject, tag: Tag) -> Option<String> {
    obj.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
