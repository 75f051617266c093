//! Error type shared by the storage and collection layers. The UI and the
//! binary wrap these in `anyhow` with extra context, but keeping a typed enum
//! here lets callers (and tests) match on the exact failure.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    /// Reading or writing the library file failed at the OS level.
    #[error("failed to access library file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The library file exists but is not a JSON array of books.
    #[error("library file {} contains corrupt data", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize library")]
    Serialize(#[source] serde_json::Error),
    /// Remove and toggle address books by position; anything past the end is
    /// rejected instead of silently ignored.
    #[error("no book at position {index} (library holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{0}")]
    InvalidBook(String),
}
