//! Error type shared by the library and the binary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run or a single document read.
#[derive(Debug, Error)]
pub enum Error {
    /// No active document identity was supplied, so nothing can be selected or emphasised.
    #[error("no current document; pass --current or open a target file")]
    MissingCurrentDocument,

    /// A document could not be read from the store.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable document.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The markdown grammar could not be loaded or queried.
    #[error("markdown parse error: {0}")]
    Parse(String),

    /// The configuration file exists but is not valid.
    #[error("config error: {0}")]
    Config(String),

    /// Any other I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A rewrite plan could not be (de)serialised.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
