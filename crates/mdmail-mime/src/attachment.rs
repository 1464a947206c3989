//! Attachment and inline-image value types.

use crate::error::{Error, Result};
use crate::media_type;
use std::path::Path;

/// A file attached to an email, held fully in memory.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attachment {
    /// Filename presented to the recipient.
    pub filename: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
    /// Media type, e.g. `application/pdf`.
    pub media_type: String,
}

impl Attachment {
    /// Creates an attachment from in-memory content.
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        bytes: Vec<u8>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            bytes,
            media_type: media_type.into(),
        }
    }

    /// Reads an attachment from a file, inferring the media type from the
    /// file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Attachment`] naming the path if the file cannot
    /// be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Attachment {
            path: path.to_path_buf(),
            source,
        })?;

        let filename = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| {
                name.to_string_lossy().into_owned()
            });

        Ok(Self::new(filename, bytes, media_type::for_path(path)))
    }
}

/// An image embedded in HTML via a `cid:` reference rather than attached
/// as a downloadable file.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InlineImage {
    /// Filename carried in the part's disposition.
    pub filename: String,
    /// Raw image content.
    pub bytes: Vec<u8>,
    /// Media type, e.g. `image/png`.
    pub media_type: String,
    /// Content-ID the HTML references as `cid:{content_id}`. Emitted in
    /// the `Content-ID` header exactly as supplied.
    pub content_id: String,
}

impl InlineImage {
    /// Creates an inline image from in-memory content.
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        bytes: Vec<u8>,
        media_type: impl Into<String>,
        content_id: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            bytes,
            media_type: media_type.into(),
            content_id: content_id.into(),
        }
    }

    /// Reads an inline image from a file, inferring the media type from
    /// the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Attachment`] naming the path if the file cannot
    /// be read.
    pub fn from_file(path: impl AsRef<Path>, content_id: impl Into<String>) -> Result<Self> {
        let attachment = Attachment::from_file(path)?;
        Ok(Self {
            filename: attachment.filename,
            bytes: attachment.bytes,
            media_type: attachment.media_type,
            content_id: content_id.into(),
        })
    }
}
