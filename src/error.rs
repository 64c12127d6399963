//! Error types for graphlens.
//!
//! Graph and tree construction never fail: malformed lines are skipped and unknown nodes read as
//! empty. Failures come from the file system, when loading input or writing output, and from the
//! command-line driver refusing input it can't do anything with.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

/// Result type for graphlens operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for graphlens operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An input file couldn't be read.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file couldn't be written.
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Parent/child input in which every node is somebody's child, or with no pairs at all.
    #[error("no root found in {}", .path.display())]
    NoRoot { path: PathBuf },

    /// A report couldn't be serialized.
    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),
}

/// Reads a whole text file, attaching the path to any failure.
pub(crate) fn read_to_string(path: &Path) -> Result<String> {
    info!(path = %path.display(), "reading");

    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a whole text file, attaching the path to any failure.
pub fn write(path: &Path, contents: &str) -> Result<()> {
    info!(path = %path.display(), bytes = contents.len(), "writing");

    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
