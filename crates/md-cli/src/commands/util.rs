//! Shared rendering helpers for CLI commands.

use std::io::Write;

use anyhow::Result;
use chrono::TimeDelta;
use colored::Colorize;
use md_core::SkippedItem;
use serde::Serialize;

/// Formats a distance as `H:MM:SS`.
pub fn format_delta(delta: TimeDelta) -> String {
    let total = delta.num_seconds().abs();
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

/// Writes one `reference ↔ [candidates]` line.
///
/// The list is green when something matched and red when nothing did.
pub fn write_match_line<W: Write>(
    writer: &mut W,
    reference: &str,
    candidates: &[String],
    width: usize,
) -> Result<()> {
    let list = format!("[{}]", candidates.join(", "));
    let list = if candidates.is_empty() {
        list.red()
    } else {
        list.green()
    };
    writeln!(writer, "{reference:<width$} ↔ {list}")?;
    Ok(())
}

/// Writes one `skipped: path -> reason` line per item.
pub fn write_skipped<W: Write>(writer: &mut W, items: &[SkippedItem]) -> Result<()> {
    for item in items {
        writeln!(
            writer,
            "{} {} -> {}",
            "skipped:".red(),
            item.path.display(),
            item.reason
        )?;
    }
    Ok(())
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
