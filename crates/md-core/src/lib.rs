//! Core domain logic for match-dicom.
//!
//! This crate contains:
//! - Timestamps: parsing the DICOM and TIFF encodings into one comparable value
//! - Readers: per-format metadata extraction behind the [`MetadataReader`] trait
//! - Matching: tolerance-based association of reference files with candidates

mod dicom;
pub mod extract;
pub mod listing;
pub mod matcher;
mod raw;
pub mod types;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use dicom::DicomReader;
pub use extract::{ExtractionError, ImageRecord, MetadataReader, extract, reader_for};
pub use listing::{ListError, display_name, expand, list_directory};
pub use matcher::{
    DirectoryMatch, MatchSet, PairComparison, PairError, PoolMatch, Side, SkipReason,
    SkippedItem, compare_pair, match_directory_to_directory, match_one_to_pool,
};
pub use raw::RawReader;
pub use types::{FileKind, MalformedTimestamp, Timestamp, Tolerance, ValidationError};
