//! Location extraction: labeled addresses first, known places second.

use regex::Regex;
use tracing::trace;

use super::patterns::{
    keyword_pattern, COMMA_RUN, LOCATION_LABEL, SEPARATOR_RUN, TRAILING_PLACE, WHITESPACE_RUN,
};
use super::{ExtractionContext, FieldExtractor};
use crate::resume::Vocabulary;
use crate::text::NormalizedText;

/// Location field extractor.
#[derive(Debug, Clone)]
pub struct LocationExtractor {
    keywords: Option<Regex>,
}

impl LocationExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            keywords: keyword_pattern(&vocabulary.location_keywords),
        }
    }

    /// Value following an `Address:`/`Based in`/... label, ignoring the
    /// email and phone already found.
    pub fn from_label(&self, joined: &str, ctx: &ExtractionContext<'_>) -> Option<String> {
        let text = strip_contacts(joined, ctx);
        let caps = LOCATION_LABEL.captures(&text)?;
        let value = trim_place(&caps[1]);
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Trailing place name of the first line mentioning a known city or country.
    pub fn from_keywords(&self, lines: &[String], ctx: &ExtractionContext<'_>) -> Option<String> {
        let keywords = self.keywords.as_ref()?;

        lines
            .iter()
            .filter(|line| keywords.is_match(line))
            .find_map(|line| {
                let cleaned = clean_line(line, ctx);
                trace!("Location candidate line cleaned to: {}", cleaned);
                let place = TRAILING_PLACE.find(&cleaned).map(|m| trim_place(m.as_str()))?;
                (!place.is_empty()).then(|| place.to_string())
            })
    }
}

impl Default for LocationExtractor {
    fn default() -> Self {
        Self::new(&Vocabulary::default())
    }
}

impl FieldExtractor for LocationExtractor {
    type Output = String;

    fn extract(&self, text: &NormalizedText, ctx: &ExtractionContext<'_>) -> Option<String> {
        self.from_label(&text.joined, ctx)
            .or_else(|| self.from_keywords(&text.lines, ctx))
    }
}

/// Blank out the email and phone found by earlier passes.
fn strip_contacts(text: &str, ctx: &ExtractionContext<'_>) -> String {
    let mut stripped = text.to_string();
    for contact in [ctx.email, ctx.phone].into_iter().flatten() {
        stripped = stripped.replace(contact, " ");
    }
    stripped
}

/// Remove contact details and collapse separators and whitespace.
fn clean_line(line: &str, ctx: &ExtractionContext<'_>) -> String {
    let cleaned = strip_contacts(line, ctx);
    let cleaned = SEPARATOR_RUN.replace_all(&cleaned, ", ");
    let cleaned = COMMA_RUN.replace_all(&cleaned, ", ");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}

fn trim_place(s: &str) -> &str {
    s.trim()
        .trim_end_matches(|c: char| c == ',' || c == '.' || c == '-' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(raw: &str) -> Option<String> {
        LocationExtractor::default()
            .extract(&NormalizedText::from_raw(raw), &ExtractionContext::default())
    }

    #[test]
    fn test_labeled_address() {
        assert_eq!(
            extract("Jane Doe\nAddress: Dubai, UAE\nDeveloper"),
            Some("Dubai, UAE".to_string())
        );
    }

    #[test]
    fn test_label_variants() {
        assert_eq!(extract("Based in Doha, Qatar."), Some("Doha, Qatar".to_string()));
        assert_eq!(extract("Location - Toronto"), Some("Toronto".to_string()));
        assert_eq!(
            extract("Resident of Lahore, Pakistan"),
            Some("Lahore, Pakistan".to_string())
        );
    }

    #[test]
    fn test_label_value_stops_at_line_end() {
        assert_eq!(extract("Lives in Pune\nIndia"), Some("Pune".to_string()));
    }

    #[test]
    fn test_email_address_label_is_not_a_location() {
        let text = NormalizedText::from_raw("Jane Doe\nEmail Address: jane@mail.com\nDubai, UAE");
        let ctx = ExtractionContext {
            email: Some("jane@mail.com"),
            ..Default::default()
        };
        assert_eq!(
            LocationExtractor::default().extract(&text, &ctx),
            Some("Dubai, UAE".to_string())
        );
    }

    #[test]
    fn test_hyphenated_label_word_is_not_a_label() {
        assert_eq!(
            extract("Jane Doe\nBuilt location-based apps in React\nDubai, UAE"),
            Some("Dubai, UAE".to_string())
        );
        assert_eq!(extract("Location -Toronto"), Some("Toronto".to_string()));
    }

    #[test]
    fn test_keyword_fallback_strips_contacts() {
        let text = NormalizedText::from_raw(
            "Omar Farooq\nomar@mail.com | +971 50 123 4567 | Dubai, UAE",
        );
        let ctx = ExtractionContext {
            email: Some("omar@mail.com"),
            phone: Some("+971 50 123 4567"),
            name: None,
        };
        assert_eq!(
            LocationExtractor::default().extract(&text, &ctx),
            Some("Dubai, UAE".to_string())
        );
    }

    #[test]
    fn test_keyword_fallback_collapses_separators() {
        assert_eq!(
            extract("Flat 12 ,, Marina Tower ;  Dubai"),
            Some("Marina Tower, Dubai".to_string())
        );
    }

    #[test]
    fn test_keyword_line_without_trailing_place_skipped() {
        assert_eq!(
            extract("Singapore 049315\nRemote from Canada"),
            Some("Remote from Canada".to_string())
        );
    }

    #[test]
    fn test_keywords_are_word_bounded() {
        assert_eq!(extract("Ukulele player\nLikes omanis"), None);
    }

    #[test]
    fn test_no_location() {
        assert_eq!(extract("John Smith\nBackend engineer"), None);
        assert_eq!(extract(""), None);
    }
}
