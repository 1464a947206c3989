//! # mdmail-mime
//!
//! MIME envelope assembly for Gmail raw messages.
//!
//! ## Features
//!
//! - **Envelope building**: plain text, HTML alternatives, attachments and
//!   inline (`cid:`) images, nested into the correct multipart shape
//! - **Encoding**: Base64 (plain, 76-column wrapped, URL-safe),
//!   Quoted-Printable, RFC 2047 header encoding
//! - **Content types**: generation with parameters and boundaries
//! - **Media types**: file-extension to MIME-type lookup for attachments
//!
//! ## Quick Start
//!
//! ```ignore
//! use mdmail_mime::{Attachment, EnvelopeBuilder};
//!
//! let raw = EnvelopeBuilder::new()
//!     .to("recipient@example.com")
//!     .subject("Quarterly report")
//!     .text_body("See the attached report.")
//!     .html_body("<p>See the attached report.</p>")
//!     .attach(Attachment::from_file("report.pdf")?)
//!     .build_raw()?;
//!
//! // `raw` goes straight into the Gmail API send/draft call.
//! ```
//!
//! ### Inline images
//!
//! ```ignore
//! use mdmail_mime::{EnvelopeBuilder, InlineImage};
//!
//! let raw = EnvelopeBuilder::new()
//!     .to("recipient@example.com")
//!     .subject("Chart")
//!     .text_body("Chart attached.")
//!     .html_body("<img src=\"cid:chart\">")
//!     .embed(InlineImage::from_file("chart.png", "chart")?)
//!     .build_raw()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod attachment;
mod content_type;
mod envelope;
mod error;
mod header;

pub mod encoding;
pub mod media_type;

pub use attachment::{Attachment, InlineImage};
pub use content_type::ContentType;
pub use envelope::EnvelopeBuilder;
pub use error::{Error, Result};
pub use header::Headers;
