//! File-extension to MIME-type lookup.
//!
//! The table determines the `Content-Type` header of attachment parts and
//! is part of the crate's public contract. Unknown extensions fall back to
//! `application/octet-stream`.

use std::path::Path;

/// Fallback media type for unknown extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Extension to media type table, lowercase keys.
const TABLE: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("csv", "text/csv"),
    ("json", "application/json"),
    ("xml", "application/xml"),
    ("zip", "application/zip"),
    ("gz", "application/gzip"),
    ("tar", "application/x-tar"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("mp4", "video/mp4"),
    ("mov", "video/quicktime"),
    ("ics", "text/calendar"),
];

/// Returns the media type for a file extension (without the dot),
/// matched case-insensitively.
#[must_use]
pub fn from_extension(extension: &str) -> &'static str {
    let lowered = extension.to_ascii_lowercase();
    TABLE
        .iter()
        .find(|(ext, _)| *ext == lowered)
        .map_or(OCTET_STREAM, |&(_, media)| media)
}

/// Returns the media type for a file path based on its extension.
#[must_use]
pub fn for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(OCTET_STREAM, from_extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(from_extension("png"), "image/png");
        assert_eq!(from_extension("jpg"), "image/jpeg");
        assert_eq!(from_extension("pdf"), "application/pdf");
        assert_eq!(from_extension("csv"), "text/csv");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(from_extension("PNG"), "image/png");
        assert_eq!(from_extension("Pdf"), "application/pdf");
    }

    #[test]
    fn test_unknown_defaults_to_octet_stream() {
        assert_eq!(from_extension("xyz"), OCTET_STREAM);
        assert_eq!(from_extension(""), OCTET_STREAM);
    }

    #[test]
    fn test_for_path() {
        assert_eq!(for_path(Path::new("report.pdf")), "application/pdf");
        assert_eq!(for_path(Path::new("chart.PNG")), "image/png");
        assert_eq!(for_path(Path::new("no_extension")), OCTET_STREAM);
    }
}
