//! Phone number extraction.

use super::patterns::PHONE;
use super::{ExtractionContext, FieldExtractor};
use crate::text::NormalizedText;

/// Minimum number of digits for a match to count as a phone number.
pub const MIN_PHONE_DIGITS: usize = 7;

/// Phone field extractor.
///
/// Takes the first pattern match with at least [`MIN_PHONE_DIGITS`] digits.
/// Separators are kept as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneExtractor;

impl PhoneExtractor {
    /// All phone-like matches in document order.
    pub fn extract_all(&self, text: &str) -> Vec<String> {
        PHONE
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .filter(|candidate| digit_count(candidate) >= MIN_PHONE_DIGITS)
            .map(str::to_string)
            .collect()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = String;

    fn extract(&self, text: &NormalizedText, _ctx: &ExtractionContext<'_>) -> Option<String> {
        extract_phone(&text.joined)
    }
}

/// Extract the first phone number from text.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .find(|candidate| digit_count(candidate) >= MIN_PHONE_DIGITS)
        .map(str::to_string)
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}
