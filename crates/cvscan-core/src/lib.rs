//! Core library for resume field extraction.
//!
//! This crate provides:
//! - Text normalization of decoded documents
//! - Heuristic extraction of name, email, phone, location, summary and skills
//! - Best-effort PDF, DOCX and plain text decoding
//! - Review edits and JSON export of the extracted fields

pub mod decode;
pub mod error;
pub mod export;
pub mod models;
pub mod resume;
pub mod text;

pub use decode::{DecodedText, DocumentDecoder, DocumentFormat, TextDecoder};
pub use error::{CvscanError, DecodeError, EditError, Result};
pub use models::config::{CvscanConfig, ExportConfig, ExtractionConfig, NameRule};
pub use models::resume::{ExtractionResult, FieldEdit, ResultField};
pub use resume::{extract_resume, HeuristicResumeParser, ParseOutcome, ResumeParser, Vocabulary};
pub use text::{NormalizedText, Normalizer};
