//! Email address extraction.

use super::patterns::EMAIL;
use super::{ExtractionContext, FieldExtractor};
use crate::text::NormalizedText;

/// Email field extractor. First match in document order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailExtractor;

impl FieldExtractor for EmailExtractor {
    type Output = String;

    fn extract(&self, text: &NormalizedText, _ctx: &ExtractionContext<'_>) -> Option<String> {
        extract_email(&text.joined)
    }
}

/// Extract the first email address from text.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email_inline() {
        assert_eq!(
            extract_email("Contact: jane.doe@example.com for info"),
            Some("jane.doe@example.com".to_string())
        );
    }

    #[test]
    fn test_first_email_wins() {
        let text = "work: j.smith+cv@corp.co.uk\npersonal: js@mail.com";
        assert_eq!(extract_email(text), Some("j.smith+cv@corp.co.uk".to_string()));
    }

    #[test]
    fn test_trailing_punctuation_excluded() {
        assert_eq!(
            extract_email("Write to me at ana_p@site.org."),
            Some("ana_p@site.org".to_string())
        );
    }

    #[test]
    fn test_no_email() {
        assert_eq!(extract_email("no at-sign here"), None);
        assert_eq!(extract_email("user@localhost"), None);
        assert_eq!(extract_email(""), None);
    }
}
