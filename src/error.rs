//! Errors raised while loading a resume from disk.
//!
//! The editing core itself never fails; only the host's file handling can.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failure to obtain a section collection.
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    /// The file could not be read.
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    #[error("failed to parse sections in {}: {source}", path.display())]
    /// The file is not a JSON array of sections.
    Parse {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}
