//! Directory enumeration.
//!
//! Entries come back in whatever order the filesystem yields them. No sort is
//! applied, so match results can be traced back to the listing that produced
//! them; callers that need a stable order must impose it themselves.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Caller-level failures while resolving an input path.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("{} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read directory {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Lists the entries of `dir`, subdirectories included, in listing order.
pub fn list_directory(dir: &Path) -> Result<Vec<PathBuf>, ListError> {
    let read_error = |source| ListError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        paths.push(entry.map_err(read_error)?.path());
    }
    tracing::debug!(dir = %dir.display(), count = paths.len(), "listed directory");
    Ok(paths)
}

/// Resolves a user-supplied path to the files it names.
///
/// A directory expands to its entries, a file to itself.
pub fn expand(path: &Path) -> Result<Vec<PathBuf>, ListError> {
    if path.is_dir() {
        list_directory(path)
    } else if path.exists() {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(ListError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

/// The file name used to key and print results.
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
