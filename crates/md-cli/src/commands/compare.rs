//! Pairwise comparison of two files.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use md_core::{FileKind, PairComparison, compare_pair, display_name, reader_for};
use serde::Serialize;

use super::util::{format_delta, write_json};
use super::{Input, Options};

#[derive(Debug, Serialize)]
struct PairReport {
    reference: String,
    candidate: String,
    comment: Option<String>,
    #[serde(flatten)]
    comparison: Option<PairComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Compares the timestamps of two files and prints the distance between them.
///
/// The comment column shows the DICOM side's image comment, whichever side
/// is the reference.
pub fn run<W: Write>(
    writer: &mut W,
    reference: &Input,
    candidate: &Input,
    options: Options,
) -> Result<()> {
    let mut report = PairReport {
        reference: display_name(&reference.path),
        candidate: display_name(&candidate.path),
        comment: None,
        comparison: None,
        error: None,
    };

    match compare_pair(
        &reference.path,
        reader_for(reference.kind),
        &candidate.path,
        reader_for(candidate.kind),
        options.tolerance,
    ) {
        Ok(comparison) => {
            report.comment = dicom_comment([reference, candidate]);
            report.comparison = Some(comparison);
        }
        Err(err) => {
            tracing::warn!(error = %err, "comparison failed");
            report.error = Some(err.to_string());
        }
    }

    if options.json {
        return write_json(writer, &report);
    }
    write_report(writer, &report)
}

/// Image comment of the DICOM input, if there is one.
///
/// A failed read only loses the comment column, so it is logged and dropped.
fn dicom_comment(inputs: [&Input; 2]) -> Option<String> {
    let input = inputs.into_iter().find(|input| input.kind == FileKind::Dicom)?;
    match reader_for(input.kind).read_comment(&input.path) {
        Ok(comment) => comment,
        Err(err) => {
            tracing::warn!(
                path = %input.path.display(),
                error = %err,
                "cannot read image comment"
            );
            None
        }
    }
}

fn write_report<W: Write>(writer: &mut W, report: &PairReport) -> Result<()> {
    let Some(comparison) = report.comparison else {
        let error = report.error.as_deref().unwrap_or_default();
        writeln!(writer, "{} {error}", "error:".red())?;
        return Ok(());
    };

    let delta = format_delta(comparison.delta);
    let delta = if comparison.compatible {
        delta.green()
    } else {
        delta.red()
    };
    let comment = report.comment.as_deref().unwrap_or("<None>");

    writeln!(
        writer,
        "{:<30}{}{} (Δ={}) {} {}",
        report.reference,
        format!("{comment:<45}").magenta(),
        comparison.reference_ts.to_string().yellow(),
        delta,
        comparison.candidate_ts.to_string().yellow(),
        report.candidate
    )?;
    Ok(())
}
