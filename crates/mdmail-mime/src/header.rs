//! MIME header handling.

use crate::encoding::encode_rfc2047;
use std::fmt;

/// Collection of email headers.
///
/// Names are matched case-insensitively but emitted exactly as written,
/// in insertion order, so serialized messages are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    headers: Vec<(String, String)>,
}

impl Headers {
    /// Creates a new empty header collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header value, keeping any existing values for the name.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// Sets a header value, replacing any existing values for the name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
    }

    /// Gets the first value for a header.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns an iterator over all headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Encodes a header value using RFC 2047 if needed.
    #[must_use]
    pub fn encode_value(value: &str) -> String {
        encode_rfc2047(value, "utf-8")
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.headers {
            write!(f, "{name}: {value}\r\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_add_get() {
        let mut headers = Headers::new();
        headers.add("Content-Type", "text/plain");
        assert_eq!(headers.get("Content-Type"), Some("text/plain"));
        assert_eq!(headers.get("content-type"), Some("text/plain")); // Case insensitive
    }

    #[test]
    fn test_headers_set_replaces() {
        let mut headers = Headers::new();
        headers.add("To", "alice@example.com");
        headers.add("To", "bob@example.com");
        headers.set("To", "charlie@example.com");

        assert_eq!(headers.iter().count(), 1);
        assert_eq!(headers.get("to"), Some("charlie@example.com"));
    }

    #[test]
    fn test_headers_display_preserves_order_and_case() {
        let mut headers = Headers::new();
        headers.add("To", "recipient@example.com");
        headers.add("Subject", "Test");
        headers.add("Content-ID", "<logo>");

        assert_eq!(
            headers.to_string(),
            "To: recipient@example.com\r\nSubject: Test\r\nContent-ID: <logo>\r\n"
        );
    }

    #[test]
    fn test_encode_value() {
        assert_eq!(Headers::encode_value("Weekly report"), "Weekly report");
        assert!(Headers::encode_value("Résumé").starts_with("=?utf-8?B?"));
    }
}
