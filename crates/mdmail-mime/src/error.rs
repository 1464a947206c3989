//! Error types for MIME assembly.

use std::path::PathBuf;

/// Result type alias for MIME operations.
pub type Result<T> = std::result::Result<T, Error>;

/// MIME assembly error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Base64 decode error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// The envelope has no recipient address.
    #[error("Missing recipient address")]
    MissingRecipient,

    /// An attachment file could not be read.
    #[error("Cannot read attachment {path}: {source}")]
    Attachment {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
