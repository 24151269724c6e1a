//! Metadata listing for a single file or directory.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use md_core::{FileKind, ImageRecord, SkippedItem, expand, reader_for};
use serde::Serialize;

use super::util::{write_json, write_skipped};

/// Placeholder for a missing comment or timestamp.
const NONE: &str = "<None>";

#[derive(Debug, Serialize)]
struct MetadataReport {
    records: Vec<ImageRecord>,
    skipped: Vec<SkippedItem>,
}

/// Prints the comment and timestamp of `path`, or of every entry if it is a
/// directory. Unreadable entries are reported and skipped.
pub fn run<W: Write>(writer: &mut W, path: &Path, kind: FileKind, json: bool) -> Result<()> {
    let paths = expand(path).with_context(|| format!("cannot read {kind} metadata"))?;
    let reader = reader_for(kind);

    let mut report = MetadataReport {
        records: Vec::new(),
        skipped: Vec::new(),
    };
    for path in paths {
        match reader.read_record(&path) {
            Ok(record) => {
                if !json {
                    write_row(writer, &record)?;
                }
                report.records.push(record);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "unreadable file");
                let item = SkippedItem {
                    path,
                    reason: err.into(),
                };
                if !json {
                    write_skipped(writer, std::slice::from_ref(&item))?;
                }
                report.skipped.push(item);
            }
        }
    }

    if json {
        write_json(writer, &report)?;
    }
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, record: &ImageRecord) -> Result<()> {
    let comment = record
        .comment
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(NONE);
    let timestamp = record
        .timestamp
        .map_or_else(|| NONE.to_string(), |ts| ts.to_string());

    writeln!(
        writer,
        "{:<60}{}{}",
        record.path.display().to_string(),
        format!("{comment:<60}").magenta().bold(),
        timestamp.yellow()
    )?;
    Ok(())
}
