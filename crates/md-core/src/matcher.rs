//! Timestamp matching between reference files and a candidate pool.
//!
//! A reference matches every candidate whose timestamp lies strictly inside
//! the tolerance window. All matches are kept, in candidate listing order;
//! no "best" candidate is picked. Files that cannot produce a timestamp are
//! skipped with a classified reason and never abort a scan.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::TimeDelta;
use rayon::prelude::*;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::extract::{ExtractionError, MetadataReader};
use crate::listing::display_name;
use crate::types::{Timestamp, Tolerance};

/// Why a file was left out of the results.
#[derive(Debug)]
pub enum SkipReason {
    /// The file is readable but carries no acquisition timestamp.
    Absent,
    /// Extraction failed.
    Failed(ExtractionError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("no acquisition timestamp"),
            Self::Failed(err) => write!(f, "{err}"),
        }
    }
}

impl Serialize for SkipReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<ExtractionError> for SkipReason {
    fn from(err: ExtractionError) -> Self {
        Self::Failed(err)
    }
}

/// A file that was skipped during a scan.
#[derive(Debug, Serialize)]
pub struct SkippedItem {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of matching one reference timestamp against a pool.
#[derive(Debug, Default, Serialize)]
pub struct PoolMatch {
    /// Compatible candidates, in pool order.
    pub accepted: Vec<PathBuf>,
    pub skipped: Vec<SkippedItem>,
}

/// Reference file name to compatible candidate file names.
///
/// Keys keep reference listing order and values keep candidate listing order.
/// A reference without a timestamp has no key at all, while a reference that
/// matched nothing has a key with an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    entries: Vec<(String, Vec<String>)>,
}

impl MatchSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stores the candidates for `reference`, replacing any earlier entry.
    pub fn insert(&mut self, reference: String, candidates: Vec<String>) {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == reference) {
            entry.1 = candidates;
        } else {
            self.push(reference, candidates);
        }
    }

    /// Appends an entry without looking for an existing key.
    ///
    /// The caller guarantees `reference` is not already present.
    fn push(&mut self, reference: String, candidates: Vec<String>) {
        self.entries.push((reference, candidates));
    }

    #[must_use]
    pub fn get(&self, reference: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == reference)
            .map(|(_, candidates)| candidates.as_slice())
    }

    #[must_use]
    pub fn contains_key(&self, reference: &str) -> bool {
        self.get(reference).is_some()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, candidates)| (key.as_str(), candidates.as_slice()))
    }
}

impl Serialize for MatchSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, candidates) in &self.entries {
            map.serialize_entry(key, candidates)?;
        }
        map.end()
    }
}

/// Result of matching a reference directory against a candidate directory.
#[derive(Debug, Default, Serialize)]
pub struct DirectoryMatch {
    pub matches: MatchSet,
    pub skipped_references: Vec<SkippedItem>,
    pub skipped_candidates: Vec<SkippedItem>,
}

/// Which file of a pair failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Reference,
    Candidate,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reference => "reference",
            Self::Candidate => "candidate",
        })
    }
}

/// A pairwise comparison that could not be made.
#[derive(Debug, Error)]
#[error("{side} {}: {reason}", .path.display())]
pub struct PairError {
    pub side: Side,
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Outcome of comparing two files directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairComparison {
    pub compatible: bool,
    pub reference_ts: Timestamp,
    pub candidate_ts: Timestamp,
    /// Absolute distance between the two timestamps.
    #[serde(rename = "delta_seconds", serialize_with = "serialize_seconds")]
    pub delta: TimeDelta,
}

impl PairComparison {
    #[must_use]
    pub const fn delta_seconds(&self) -> i64 {
        self.delta.num_seconds()
    }
}

fn serialize_seconds<S: Serializer>(delta: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(delta.num_seconds())
}

/// A candidate whose timestamp was read successfully.
#[derive(Debug)]
struct Candidate<'a> {
    path: &'a Path,
    timestamp: Timestamp,
}

fn skip(path: &Path, reason: SkipReason) -> SkippedItem {
    tracing::warn!(path = %path.display(), %reason, "skipping file");
    SkippedItem {
        path: path.to_path_buf(),
        reason,
    }
}

/// Reads every candidate once, keeping pool order.
///
/// Reads run on the rayon pool; the indexed collect puts results back in
/// input order before they are split into usable and skipped candidates.
fn scan_pool<'a>(
    paths: &'a [PathBuf],
    reader: &dyn MetadataReader,
) -> (Vec<Candidate<'a>>, Vec<SkippedItem>) {
    let results: Vec<_> = paths
        .par_iter()
        .map(|path| (path.as_path(), reader.read_timestamp(path)))
        .collect();

    let mut candidates = Vec::with_capacity(results.len());
    let mut skipped = Vec::new();
    for (path, result) in results {
        match result {
            Ok(Some(timestamp)) => candidates.push(Candidate { path, timestamp }),
            Ok(None) => skipped.push(skip(path, SkipReason::Absent)),
            Err(err) => skipped.push(skip(path, err.into())),
        }
    }
    (candidates, skipped)
}

fn accept<'a>(
    reference_ts: Timestamp,
    pool: &[Candidate<'a>],
    tolerance: Tolerance,
) -> Vec<&'a Path> {
    pool.iter()
        .filter(|candidate| {
            let compatible = tolerance.compatible(reference_ts, candidate.timestamp);
            if compatible {
                tracing::info!(
                    candidate = %candidate.path.display(),
                    %reference_ts,
                    candidate_ts = %candidate.timestamp,
                    "match found"
                );
            }
            compatible
        })
        .map(|candidate| candidate.path)
        .collect()
}

/// Finds every candidate compatible with `reference_ts`.
pub fn match_one_to_pool(
    reference_ts: Timestamp,
    candidate_paths: &[PathBuf],
    candidate_reader: &dyn MetadataReader,
    tolerance: Tolerance,
) -> PoolMatch {
    let (pool, skipped) = scan_pool(candidate_paths, candidate_reader);
    let accepted = accept(reference_ts, &pool, tolerance)
        .into_iter()
        .map(Path::to_path_buf)
        .collect();
    PoolMatch { accepted, skipped }
}

/// Matches every reference against the full candidate pool.
///
/// Candidates are read once up front, so a broken candidate is reported once
/// rather than once per reference. Reference file names must be unique, as
/// they are within one directory listing.
pub fn match_directory_to_directory(
    reference_paths: &[PathBuf],
    reference_reader: &dyn MetadataReader,
    candidate_paths: &[PathBuf],
    candidate_reader: &dyn MetadataReader,
    tolerance: Tolerance,
) -> DirectoryMatch {
    let (pool, skipped_candidates) = scan_pool(candidate_paths, candidate_reader);

    let mut matches = MatchSet::new();
    let mut skipped_references = Vec::new();
    for path in reference_paths {
        match reference_reader.read_timestamp(path) {
            Ok(Some(reference_ts)) => {
                let accepted = accept(reference_ts, &pool, tolerance)
                    .into_iter()
                    .map(display_name)
                    .collect();
                matches.push(display_name(path), accepted);
            }
            Ok(None) => skipped_references.push(skip(path, SkipReason::Absent)),
            Err(err) => skipped_references.push(skip(path, err.into())),
        }
    }

    DirectoryMatch {
        matches,
        skipped_references,
        skipped_candidates,
    }
}

fn read_required(
    path: &Path,
    reader: &dyn MetadataReader,
    side: Side,
) -> Result<Timestamp, PairError> {
    let reason = match reader.read_timestamp(path) {
        Ok(Some(timestamp)) => return Ok(timestamp),
        Ok(None) => SkipReason::Absent,
        Err(err) => SkipReason::Failed(err),
    };
    Err(PairError {
        side,
        path: path.to_path_buf(),
        reason,
    })
}

/// Compares two files directly.
pub fn compare_pair(
    reference_path: &Path,
    reference_reader: &dyn MetadataReader,
    candidate_path: &Path,
    candidate_reader: &dyn MetadataReader,
    tolerance: Tolerance,
) -> Result<PairComparison, PairError> {
    let reference_ts = read_required(reference_path, reference_reader, Side::Reference)?;
    let candidate_ts = read_required(candidate_path, candidate_reader, Side::Candidate)?;
    let delta = reference_ts.abs_diff(candidate_ts);

    Ok(PairComparison {
        compatible: tolerance.admits(delta),
        reference_ts,
        candidate_ts,
        delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use crate::extract::ImageRecord;
    use crate::fixtures;
    use crate::listing::list_directory;
    use crate::types::FileKind;
    use crate::{DicomReader, RawReader};

    /// In-memory reader keyed by path.
    #[derive(Clone, Copy)]
    enum Fake {
        At(&'static str),
        Absent,
        Broken,
    }

    struct FakeReader(HashMap<PathBuf, Fake>);

    impl FakeReader {
        fn new(entries: &[(&str, Fake)]) -> (Self, Vec<PathBuf>) {
            let mut map = HashMap::new();
            let mut paths = Vec::new();
            for &(name, fake) in entries {
                let path = PathBuf::from(name);
                map.insert(path.clone(), fake);
                paths.push(path);
            }
            (Self(map), paths)
        }
    }

    impl MetadataReader for FakeReader {
        fn kind(&self) -> FileKind {
            FileKind::Raw
        }

        fn read_record(&self, path: &Path) -> Result<ImageRecord, ExtractionError> {
            let timestamp = match self.0.get(path) {
                Some(Fake::At(s)) => Some(Timestamp::from_tiff(s).unwrap()),
                Some(Fake::Absent) => None,
                Some(Fake::Broken) | None => {
                    return Err(ExtractionError::MissingTag { tag: "DateTime" });
                }
            };
            Ok(ImageRecord {
                path: path.to_path_buf(),
                kind: FileKind::Raw,
                timestamp,
                comment: None,
            })
        }
    }

    fn ts(s: &str) -> Timestamp {
        Timestamp::from_tiff(s).unwrap()
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths.iter().map(|p| display_name(p)).collect()
    }

    #[test]
    fn ties_are_all_accepted_in_pool_order() {
        let (reader, paths) = FakeReader::new(&[
            ("c3", Fake::At("2017:06:15 09:30:06")),
            ("c1", Fake::At("2017:06:15 09:30:04")),
            ("far", Fake::At("2017:06:15 10:00:00")),
            ("c2", Fake::At("2017:06:15 09:30:05")),
        ]);

        let result = match_one_to_pool(
            ts("2017:06:15 09:30:05"),
            &paths,
            &reader,
            Tolerance::default(),
        );

        assert_eq!(names(&result.accepted), vec!["c3", "c1", "c2"]);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn bad_candidates_are_skipped_with_reason() {
        let (reader, paths) = FakeReader::new(&[
            ("broken", Fake::Broken),
            ("absent", Fake::Absent),
            ("ok", Fake::At("2017:06:15 09:30:05")),
        ]);

        let result = match_one_to_pool(
            ts("2017:06:15 09:30:05"),
            &paths,
            &reader,
            Tolerance::default(),
        );

        assert_eq!(names(&result.accepted), vec!["ok"]);
        assert_eq!(result.skipped.len(), 2);
        assert_eq!(result.skipped[0].path, PathBuf::from("broken"));
        assert!(matches!(
            result.skipped[0].reason,
            SkipReason::Failed(ExtractionError::MissingTag { .. })
        ));
        assert_eq!(result.skipped[1].path, PathBuf::from("absent"));
        assert!(matches!(result.skipped[1].reason, SkipReason::Absent));
    }

    #[test]
    fn boundary_distance_is_rejected() {
        let (reader, paths) = FakeReader::new(&[
            ("minus2", Fake::At("2017:06:15 09:30:03")),
            ("minus1", Fake::At("2017:06:15 09:30:04")),
            ("plus1", Fake::At("2017:06:15 09:30:06")),
            ("plus2", Fake::At("2017:06:15 09:30:07")),
        ]);

        let result = match_one_to_pool(
            ts("2017:06:15 09:30:05"),
            &paths,
            &reader,
            Tolerance::default(),
        );

        assert_eq!(names(&result.accepted), vec!["minus1", "plus1"]);
    }

    #[test]
    fn absent_reference_has_no_key_and_unmatched_reference_has_empty_list() {
        let (references, reference_paths) = FakeReader::new(&[
            ("r_absent", Fake::Absent),
            ("r_lonely", Fake::At("2017:06:15 12:00:00")),
            ("r_broken", Fake::Broken),
            ("r_match", Fake::At("2017:06:15 09:30:05")),
        ]);
        let (candidates, candidate_paths) =
            FakeReader::new(&[("c1", Fake::At("2017:06:15 09:30:06"))]);

        let result = match_directory_to_directory(
            &reference_paths,
            &references,
            &candidate_paths,
            &candidates,
            Tolerance::default(),
        );

        assert_eq!(
            result.matches.keys().collect::<Vec<_>>(),
            vec!["r_lonely", "r_match"]
        );
        assert_eq!(result.matches.get("r_lonely"), Some(&[][..]));
        assert_eq!(result.matches.get("r_match"), Some(&["c1".to_string()][..]));
        assert!(!result.matches.contains_key("r_absent"));
        assert!(!result.matches.contains_key("r_broken"));
        assert_eq!(result.skipped_references.len(), 2);
        assert!(result.skipped_candidates.is_empty());
    }

    #[test]
    fn broken_candidate_is_reported_once_for_many_references() {
        let (references, reference_paths) = FakeReader::new(&[
            ("r1", Fake::At("2017:06:15 09:30:05")),
            ("r2", Fake::At("2017:06:15 09:40:05")),
        ]);
        let (candidates, candidate_paths) = FakeReader::new(&[
            ("bad", Fake::Broken),
            ("c2", Fake::At("2017:06:15 09:40:06")),
        ]);

        let result = match_directory_to_directory(
            &reference_paths,
            &references,
            &candidate_paths,
            &candidates,
            Tolerance::default(),
        );

        assert_eq!(result.skipped_candidates.len(), 1);
        assert_eq!(result.matches.get("r1"), Some(&[][..]));
        assert_eq!(result.matches.get("r2"), Some(&["c2".to_string()][..]));
    }

    #[test]
    fn match_set_serializes_in_insertion_order() {
        let mut set = MatchSet::new();
        set.insert("z.dcm".into(), vec!["b.tif".into(), "a.tif".into()]);
        set.insert("a.dcm".into(), vec![]);

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"z.dcm":["b.tif","a.tif"],"a.dcm":[]}"#);
    }

    #[test]
    fn match_set_insert_replaces_existing_key() {
        let mut set = MatchSet::new();
        set.insert("a".into(), vec![]);
        set.insert("a".into(), vec!["x".into()]);

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("a"), Some(&["x".to_string()][..]));
    }

    #[test]
    fn scenario_a_one_second_apart_is_compatible() {
        let temp = tempfile::tempdir().unwrap();
        let dicom = fixtures::write_dicom(temp.path(), "a.dcm", Some(("20170615", "093005")), None);
        let raw = fixtures::write_tiff(temp.path(), "a.tif", Some("2017:06:15 09:30:06"));

        let result =
            compare_pair(&dicom, &DicomReader, &raw, &RawReader, Tolerance::default()).unwrap();

        assert!(result.compatible);
        assert_eq!(result.delta_seconds(), 1);
        assert_eq!(result.reference_ts.to_string(), "2017-06-15 09:30:05");
        assert_eq!(result.candidate_ts.to_string(), "2017-06-15 09:30:06");
    }

    #[test]
    fn scenario_b_three_seconds_apart_is_not_compatible() {
        let temp = tempfile::tempdir().unwrap();
        let dicom = fixtures::write_dicom(temp.path(), "a.dcm", Some(("20170615", "093005")), None);
        let raw = fixtures::write_tiff(temp.path(), "b.tif", Some("2017:06:15 09:30:08"));

        let result =
            compare_pair(&dicom, &DicomReader, &raw, &RawReader, Tolerance::default()).unwrap();

        assert!(!result.compatible);
        assert_eq!(result.delta_seconds(), 3);
    }

    #[test]
    fn compare_pair_is_symmetric() {
        let temp = tempfile::tempdir().unwrap();
        let dicom = fixtures::write_dicom(temp.path(), "a.dcm", Some(("20170615", "093005")), None);
        let raw = fixtures::write_tiff(temp.path(), "a.tif", Some("2017:06:15 09:30:06"));

        let forward =
            compare_pair(&dicom, &DicomReader, &raw, &RawReader, Tolerance::default()).unwrap();
        let backward =
            compare_pair(&raw, &RawReader, &dicom, &DicomReader, Tolerance::default()).unwrap();

        assert_eq!(forward.compatible, backward.compatible);
        assert_eq!(forward.delta, backward.delta);
    }

    #[test]
    fn compare_pair_identifies_failing_side() {
        let temp = tempfile::tempdir().unwrap();
        let bare = fixtures::write_dicom(temp.path(), "bare.dcm", None, None);
        let dicom = fixtures::write_dicom(temp.path(), "a.dcm", Some(("20170615", "093005")), None);
        let text = fixtures::write_text(temp.path(), "x.txt", "plain text");
        let raw = fixtures::write_tiff(temp.path(), "a.tif", Some("2017:06:15 09:30:06"));

        let err = compare_pair(&bare, &DicomReader, &raw, &RawReader, Tolerance::default())
            .unwrap_err();
        assert_eq!(err.side, Side::Reference);
        assert!(matches!(err.reason, SkipReason::Absent));

        let err = compare_pair(&dicom, &DicomReader, &text, &RawReader, Tolerance::default())
            .unwrap_err();
        assert_eq!(err.side, Side::Candidate);
        assert!(matches!(
            err.reason,
            SkipReason::Failed(ExtractionError::NotThisFormat { .. })
        ));
    }

    #[test]
    fn scenario_c_fieldless_references_produce_no_key() {
        let temp = tempfile::tempdir().unwrap();
        let dicom_dir = temp.path().join("dicom");
        let raw_dir = temp.path().join("raw");
        std::fs::create_dir_all(&dicom_dir).unwrap();
        std::fs::create_dir_all(&raw_dir).unwrap();

        fixtures::write_dicom(&dicom_dir, "timed.dcm", Some(("20170615", "093005")), None);
        fixtures::write_dicom(&dicom_dir, "empty1.dcm", None, Some("calibration"));
        fixtures::write_dicom(&dicom_dir, "empty2.dcm", None, None);
        fixtures::write_tiff(&raw_dir, "near.tif", Some("2017:06:15 09:30:06"));
        fixtures::write_tiff(&raw_dir, "far.tif", Some("2017:06:15 09:30:08"));

        let references = list_directory(&dicom_dir).unwrap();
        let candidates = list_directory(&raw_dir).unwrap();
        let result = match_directory_to_directory(
            &references,
            &DicomReader,
            &candidates,
            &RawReader,
            Tolerance::default(),
        );

        assert_eq!(result.matches.keys().collect::<Vec<_>>(), vec!["timed.dcm"]);
        assert_eq!(
            result.matches.get("timed.dcm"),
            Some(&["near.tif".to_string()][..])
        );
        assert_eq!(result.skipped_references.len(), 2);
        assert!(
            result
                .skipped_references
                .iter()
                .all(|item| matches!(item.reason, SkipReason::Absent))
        );

        // A wider window admits both candidates, still in listing order.
        let wide = match_directory_to_directory(
            &references,
            &DicomReader,
            &candidates,
            &RawReader,
            Tolerance::from_secs_f64(5.0).unwrap(),
        );
        assert_eq!(wide.matches.get("timed.dcm"), Some(names(&candidates).as_slice()));
    }

    #[test]
    fn half_filled_references_produce_no_key() {
        let temp = tempfile::tempdir().unwrap();
        let dicom_dir = temp.path().join("dicom");
        let raw_dir = temp.path().join("raw");
        std::fs::create_dir_all(&dicom_dir).unwrap();
        std::fs::create_dir_all(&raw_dir).unwrap();

        fixtures::write_dicom_fields(&dicom_dir, "date_only.dcm", Some("20170615"), None, None);
        fixtures::write_dicom_fields(&dicom_dir, "empty_date.dcm", Some(""), Some("093005"), None);
        fixtures::write_tiff(&raw_dir, "near.tif", Some("2017:06:15 09:30:06"));

        let result = match_directory_to_directory(
            &list_directory(&dicom_dir).unwrap(),
            &DicomReader,
            &list_directory(&raw_dir).unwrap(),
            &RawReader,
            Tolerance::default(),
        );

        assert!(result.matches.is_empty());
        assert_eq!(result.skipped_references.len(), 2);
        assert!(
            result
                .skipped_references
                .iter()
                .all(|item| matches!(item.reason, SkipReason::Absent))
        );
    }

    #[test]
    fn scenario_d_non_tiff_candidate_does_not_abort_scan() {
        let temp = tempfile::tempdir().unwrap();
        let raw_dir = temp.path().join("raw");
        std::fs::create_dir_all(raw_dir.join("subdir")).unwrap();
        fixtures::write_text(&raw_dir, "notes.txt", "lab notes");
        fixtures::write_tiff(&raw_dir, "scan1.tif", Some("2017:06:15 09:30:06"));
        fixtures::write_tiff(&raw_dir, "scan2.tif", Some("2017:06:15 09:30:04"));

        let candidates = list_directory(&raw_dir).unwrap();
        let result = match_one_to_pool(
            ts("2017:06:15 09:30:05"),
            &candidates,
            &RawReader,
            Tolerance::default(),
        );

        let mut accepted = names(&result.accepted);
        accepted.sort();
        assert_eq!(accepted, vec!["scan1.tif", "scan2.tif"]);
        assert_eq!(result.skipped.len(), 2);

        let reason_for = |name: &str| {
            result
                .skipped
                .iter()
                .find(|item| display_name(&item.path) == name)
                .map(|item| &item.reason)
                .unwrap()
        };
        assert!(matches!(
            reason_for("notes.txt"),
            SkipReason::Failed(ExtractionError::NotThisFormat { .. })
        ));
        assert!(matches!(
            reason_for("subdir"),
            SkipReason::Failed(ExtractionError::PathIsDirectory)
        ));
    }

    #[test]
    fn accepted_order_follows_listing_order() {
        let temp = tempfile::tempdir().unwrap();
        for (i, second) in ["05", "06", "04", "05"].iter().enumerate() {
            fixtures::write_tiff(
                temp.path(),
                &format!("scan{i}.tif"),
                Some(&format!("2017:06:15 09:30:{second}")),
            );
        }

        let candidates = list_directory(temp.path()).unwrap();
        let result = match_one_to_pool(
            ts("2017:06:15 09:30:05"),
            &candidates,
            &RawReader,
            Tolerance::default(),
        );

        assert_eq!(result.accepted, candidates);
    }

    #[test]
    fn skip_reason_display() {
        assert_eq!(SkipReason::Absent.to_string(), "no acquisition timestamp");
        assert_eq!(
            SkipReason::from(ExtractionError::PathIsDirectory).to_string(),
            "path is a directory"
        );
    }

    #[test]
    fn pair_comparison_serializes_delta_in_seconds() {
        let comparison = PairComparison {
            compatible: false,
            reference_ts: ts("2017:06:15 09:30:05"),
            candidate_ts: ts("2017:06:15 09:30:08"),
            delta: TimeDelta::seconds(3),
        };
        let json = serde_json::to_value(comparison).unwrap();
        assert_eq!(json["delta_seconds"], 3);
        assert_eq!(json["reference_ts"], "2017-06-15T09:30:05");
    }
}
