//! Error types for rendering.

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Render error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested style name is not one of the known profiles.
    #[error("Unknown style \"{0}\" (expected \"client\" or \"labs\")")]
    UnknownStyle(String),
}
