//! Custom error types for the exfor-dictionary crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum DictionError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A DICTION block reached end-of-input (or the next DICTION marker)
    /// without its ENDDICTION terminator. The source is truncated and no
    /// partial catalog can be trusted.
    #[error("DICTION {number} has no ENDDICTION terminator; source is truncated")]
    TruncatedBlock { number: u32 },

    /// A DICTION marker line whose dictionary number cannot be read.
    #[error("Malformed DICTION marker: {0:?}")]
    MalformedBlockHeader(String),

    /// The source contains no Diction 950 block, so the remaining
    /// dictionaries cannot be named.
    #[error("No Diction 950 directory block found in the source")]
    MissingDirectory,

    /// An error occurred while reading or writing a JSON artifact.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error originating from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote listing answered, but a trans file download did not.
    #[error("Download failed with HTTP status {0}")]
    DownloadFailed(reqwest::StatusCode),

    /// The local backup holds a newer version than the remote listing
    /// offers, which means one of the two is corrupt.
    #[error("Local trans.{local} is newer than remote trans.{remote}")]
    StaleRemote { local: u32, remote: u32 },

    /// No trans file versions were found in the local backup directory.
    #[error("No trans files found under {}", dir.display())]
    NoVersions { dir: PathBuf },
}

/// A convenience `Result` type alias using the crate's `DictionError` type.
pub type Result<T> = std::result::Result<T, DictionError>;
