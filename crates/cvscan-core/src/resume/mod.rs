//! Resume field extraction module.

mod parser;
pub mod rules;
mod vocabulary;

pub use parser::{HeuristicResumeParser, ParseOutcome};
pub use vocabulary::{
    Vocabulary, DEFAULT_HEADER_LABELS, DEFAULT_LOCATION_INDICATORS, DEFAULT_LOCATION_KEYWORDS,
    DEFAULT_SKILLS,
};

use crate::models::resume::ExtractionResult;
use crate::text::NormalizedText;

/// Trait for resume parsers.
///
/// Parsing never fails: fields that cannot be found are left absent.
pub trait ResumeParser {
    /// Normalize raw text and extract all fields.
    fn parse(&self, text: &str) -> ParseOutcome;

    /// Extract all fields from already normalized text.
    fn extract(&self, text: &NormalizedText) -> ExtractionResult;
}

/// Extract fields from raw text with the default rules and vocabulary.
pub fn extract_resume(text: &str) -> ExtractionResult {
    HeuristicResumeParser::new().parse(text).result
}
