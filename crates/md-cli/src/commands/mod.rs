//! Command implementations and dispatch.

pub mod compare;
pub mod metadata;
pub mod scan;
pub mod util;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::CommandFactory;
use md_core::{FileKind, ListError, Tolerance};

use crate::Cli;

/// Settings shared by every matching command.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub tolerance: Tolerance,
    pub name_width: usize,
    pub json: bool,
}

/// A user-supplied path together with the format it is read as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub path: PathBuf,
    pub kind: FileKind,
}

impl Input {
    fn new(path: &Path, kind: FileKind) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
        }
    }
}

/// What to do with the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// No paths were given.
    Usage,
    /// One path: print its metadata.
    Metadata { path: PathBuf, kind: FileKind },
    /// Two directories.
    Directories { reference: Input, candidates: Input },
    /// A single reference file scanned against a directory.
    OneToMany { reference: Input, pool: Input },
    /// Two files.
    Pair { reference: Input, candidate: Input },
}

impl Mode {
    /// Picks the mode from the positional paths.
    ///
    /// The first path is DICOM and the second RAW. With `raw` set, a lone
    /// path is read as RAW and two paths are keyed by the RAW side.
    pub fn resolve(paths: &[PathBuf], raw: bool) -> Result<Self> {
        for path in paths {
            if !path.exists() {
                return Err(ListError::NotFound { path: path.clone() }.into());
            }
        }

        let (dicom, raw_path) = match paths {
            [] => return Ok(Self::Usage),
            [path] => {
                let kind = if raw { FileKind::Raw } else { FileKind::Dicom };
                return Ok(Self::Metadata {
                    path: path.clone(),
                    kind,
                });
            }
            [dicom, raw_path] => (
                Input::new(dicom, FileKind::Dicom),
                Input::new(raw_path, FileKind::Raw),
            ),
            _ => anyhow::bail!("expected at most two paths, got {}", paths.len()),
        };

        let (reference, candidate) = if raw {
            (raw_path, dicom)
        } else {
            (dicom, raw_path)
        };

        Ok(match (reference.path.is_dir(), candidate.path.is_dir()) {
            (true, true) => Self::Directories {
                reference,
                candidates: candidate,
            },
            (false, true) => Self::OneToMany {
                reference,
                pool: candidate,
            },
            (true, false) => Self::OneToMany {
                reference: candidate,
                pool: reference,
            },
            (false, false) => Self::Pair {
                reference,
                candidate,
            },
        })
    }
}

/// Runs `mode`, writing its report to `writer`.
pub fn run<W: Write>(writer: &mut W, mode: &Mode, options: Options) -> Result<()> {
    tracing::debug!(?mode, "running");
    match mode {
        Mode::Usage => {
            writeln!(writer, "{}", Cli::command().render_help())?;
            Ok(())
        }
        Mode::Metadata { path, kind } => metadata::run(writer, path, *kind, options.json),
        Mode::Directories {
            reference,
            candidates,
        } => scan::directories(writer, reference, candidates, options),
        Mode::OneToMany { reference, pool } => scan::one_to_many(writer, reference, pool, options),
        Mode::Pair {
            reference,
            candidate,
        } => compare::run(writer, reference, candidate, options),
    }
}
