//! Error types for normalization

use std::path::PathBuf;
use thiserror::Error;

/// Error type for normalization operations
#[derive(Debug, Error)]
pub enum Error {
    /// None of the candidate encodings could decode the input
    #[error("could not determine encoding of {}: no candidate encoding decoded it", path.display())]
    DecodingExhausted {
        /// Path of the undecodable file
        path: PathBuf,
    },

    /// Read or write failure on the given path
    #[error("I/O error on {}", path.display())]
    Io {
        /// Path the operation failed on
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for normalization operations
pub type Result<T> = std::result::Result<T, Error>;
