//! Error types for the cvscan-core library.
//!
//! Field extraction itself has no error type: every rule returns `None`
//! instead of failing. Errors only come from the layers around it.

use thiserror::Error;

/// Main error type for the cvscan library.
#[derive(Error, Debug)]
pub enum CvscanError {
    /// Document decoding error.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Review edit error.
    #[error("edit error: {0}")]
    Edit(#[from] EditError),

    /// JSON export error.
    #[error("export error: {0}")]
    Export(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the format-specific text decoders.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The PDF text layer could not be read.
    #[error("failed to extract PDF text: {0}")]
    Pdf(String),

    /// The DOCX body could not be read.
    #[error("failed to extract DOCX text: {0}")]
    Docx(String),

    /// The DOCX container is not a readable zip archive.
    #[error("invalid archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The DOCX body is not well-formed XML.
    #[error("invalid XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A required part is missing from the container.
    #[error("missing document part: {0}")]
    MissingPart(String),
}

/// Errors raised while applying review edits to an extraction result.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditError {
    /// The field name does not name an extracted field.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The assignment is not of the form `field=value`.
    #[error("invalid assignment '{0}', expected field=value")]
    InvalidAssignment(String),
}

/// Result type for the cvscan library.
pub type Result<T> = std::result::Result<T, CvscanError>;
