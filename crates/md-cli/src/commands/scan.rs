//! Directory-to-directory and one-to-many matching.

use std::io::Write;

use anyhow::{Context, Result};
use md_core::{
    SkipReason, SkippedItem, Timestamp, display_name, list_directory,
    match_directory_to_directory, match_one_to_pool, reader_for,
};
use serde::Serialize;

use super::util::{write_json, write_match_line, write_skipped};
use super::{Input, Options};

/// Matches every file of the reference directory against the candidate directory.
pub fn directories<W: Write>(
    writer: &mut W,
    reference: &Input,
    candidates: &Input,
    options: Options,
) -> Result<()> {
    let reference_paths = list_directory(&reference.path)
        .with_context(|| format!("cannot list {} directory", reference.kind))?;
    let candidate_paths = list_directory(&candidates.path)
        .with_context(|| format!("cannot list {} directory", candidates.kind))?;
    tracing::debug!(
        references = reference_paths.len(),
        candidates = candidate_paths.len(),
        tolerance = %options.tolerance,
        "comparing directories"
    );

    let result = match_directory_to_directory(
        &reference_paths,
        reader_for(reference.kind),
        &candidate_paths,
        reader_for(candidates.kind),
        options.tolerance,
    );

    if options.json {
        return write_json(writer, &result);
    }

    for (name, matched) in result.matches.iter() {
        write_match_line(writer, name, matched, options.name_width)?;
    }
    write_skipped(writer, &result.skipped_references)?;
    write_skipped(writer, &result.skipped_candidates)?;
    Ok(())
}

/// One reference file scanned against a directory.
#[derive(Debug, Serialize)]
struct ScanReport {
    reference: String,
    reference_ts: Option<Timestamp>,
    /// `None` when the reference has no usable timestamp.
    matches: Option<Vec<String>>,
    skipped: Vec<SkippedItem>,
}

/// Uses a single file as the reference and a directory as the candidate pool.
pub fn one_to_many<W: Write>(
    writer: &mut W,
    reference: &Input,
    pool: &Input,
    options: Options,
) -> Result<()> {
    let candidate_paths = list_directory(&pool.path)
        .with_context(|| format!("cannot list {} directory", pool.kind))?;
    let name = display_name(&reference.path);

    let reason = match reader_for(reference.kind).read_timestamp(&reference.path) {
        Ok(Some(reference_ts)) => {
            let result = match_one_to_pool(
                reference_ts,
                &candidate_paths,
                reader_for(pool.kind),
                options.tolerance,
            );
            let matches: Vec<String> = result.accepted.iter().map(|p| display_name(p)).collect();

            if options.json {
                return write_json(
                    writer,
                    &ScanReport {
                        reference: name,
                        reference_ts: Some(reference_ts),
                        matches: Some(matches),
                        skipped: result.skipped,
                    },
                );
            }
            write_match_line(writer, &name, &matches, options.name_width)?;
            write_skipped(writer, &result.skipped)?;
            return Ok(());
        }
        Ok(None) => SkipReason::Absent,
        Err(err) => SkipReason::Failed(err),
    };

    tracing::warn!(path = %reference.path.display(), %reason, "reference has no usable timestamp");
    let skipped = vec![SkippedItem {
        path: reference.path.clone(),
        reason,
    }];
    if options.json {
        return write_json(
            writer,
            &ScanReport {
                reference: name,
                reference_ts: None,
                matches: None,
                skipped,
            },
        );
    }
    write_skipped(writer, &skipped)
}
