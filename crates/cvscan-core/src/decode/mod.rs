//! Document decoding: raw bytes to plain text.
//!
//! Decoding sits outside the extraction core. [`DocumentDecoder`] wraps the
//! format-specific decoders behind a capability that never fails: when a
//! decoder errors, the bytes are interpreted as lossy UTF-8 instead.

mod docx;
mod pdf;
mod plain;

pub use docx::DocxDecoder;
pub use pdf::PdfDecoder;
pub use plain::PlainTextDecoder;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::DecodeError;

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Format for a file extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "txt" | "text" | "md" => Some(DocumentFormat::PlainText),
            _ => None,
        }
    }

    /// Format for a file path, from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Guess the format from magic bytes: `%PDF` or a zip header.
    pub fn sniff(data: &[u8]) -> Self {
        if data.starts_with(b"%PDF") {
            DocumentFormat::Pdf
        } else if data.starts_with(b"PK\x03\x04") {
            DocumentFormat::Docx
        } else {
            DocumentFormat::PlainText
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::PlainText => "text",
        }
    }
}

/// Trait for format-specific text decoders.
pub trait TextDecoder {
    /// Decode document bytes to plain text.
    fn decode(&self, data: &[u8]) -> Result<String>;
}

/// Text produced by [`DocumentDecoder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedText {
    /// Decoded text.
    pub text: String,
    /// Format the bytes were decoded as.
    pub format: DocumentFormat,
    /// True when the format decoder failed and the raw bytes were used.
    pub fell_back: bool,
}

/// Best-effort decoder over all supported formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentDecoder;

impl DocumentDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode with the decoder for `format`, or the sniffed format when no
    /// hint is given. Never fails.
    ///
    /// On `wasm32-unknown-unknown` a panic inside pdf-extract aborts the
    /// module instead of falling back to the raw bytes.
    pub fn decode(&self, data: &[u8], format: Option<DocumentFormat>) -> DecodedText {
        let format = format.unwrap_or_else(|| DocumentFormat::sniff(data));

        match self.decode_strict(data, format) {
            Ok(text) => {
                debug!("Decoded {} bytes as {} ({} chars)", data.len(), format.as_str(), text.len());
                DecodedText {
                    text,
                    format,
                    fell_back: false,
                }
            }
            Err(e) => {
                warn!(
                    "{} decoding failed, using raw bytes instead: {}",
                    format.as_str(),
                    e
                );
                DecodedText {
                    text: String::from_utf8_lossy(data).into_owned(),
                    format,
                    fell_back: true,
                }
            }
        }
    }

    /// Decode with the decoder for `format`, propagating its error.
    pub fn decode_strict(&self, data: &[u8], format: DocumentFormat) -> Result<String> {
        match format {
            DocumentFormat::Pdf => PdfDecoder.decode(data),
            DocumentFormat::Docx => DocxDecoder.decode(data),
            DocumentFormat::PlainText => PlainTextDecoder.decode(data),
        }
    }
}
