//! Candidate name extraction from the top of the document.

use regex::Regex;
use tracing::trace;

use super::patterns::{keyword_pattern, NAME_SHAPE};
use super::{ExtractionContext, FieldExtractor};
use crate::models::config::NameRule;
use crate::resume::Vocabulary;
use crate::text::NormalizedText;

/// Name field extractor.
///
/// Scans the first `scan_lines` lines and returns the first one that is not
/// a heading, contact or address line and has the shape of a name.
#[derive(Debug, Clone)]
pub struct NameExtractor {
    rule: NameRule,
    scan_lines: usize,
    header_labels: Vec<String>,
    location_indicators: Option<Regex>,
}

impl NameExtractor {
    pub fn new(rule: NameRule, scan_lines: usize, vocabulary: &Vocabulary) -> Self {
        Self {
            rule,
            scan_lines,
            header_labels: vocabulary
                .header_labels
                .iter()
                .map(|label| label.trim().to_lowercase())
                .collect(),
            location_indicators: keyword_pattern(&vocabulary.location_indicators),
        }
    }

    fn is_skipped(&self, line: &str, ctx: &ExtractionContext<'_>) -> bool {
        let lower = line.to_lowercase();
        self.header_labels.iter().any(|label| *label == lower)
            || ctx.mentions_contact(line)
            || self
                .location_indicators
                .as_ref()
                .is_some_and(|re| re.is_match(line))
    }

    /// Whether `line` has the shape of a name under the configured rule.
    pub fn looks_like_name(&self, line: &str) -> bool {
        let (min_words, max_words) = self.rule.word_range();
        let words = line.split_whitespace().count();
        if words < min_words || words > max_words {
            return false;
        }

        if !NAME_SHAPE.is_match(line) {
            return false;
        }

        self.rule.allows_all_caps() || !is_all_caps(line)
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new(NameRule::default(), 10, &Vocabulary::default())
    }
}

impl FieldExtractor for NameExtractor {
    type Output = String;

    fn extract(&self, text: &NormalizedText, ctx: &ExtractionContext<'_>) -> Option<String> {
        text.lines
            .iter()
            .take(self.scan_lines)
            .filter(|line| {
                let skipped = self.is_skipped(line, ctx);
                if skipped {
                    trace!("Name scan skipped line: {}", line);
                }
                !skipped
            })
            .find(|line| self.looks_like_name(line))
            .cloned()
    }
}

fn is_all_caps(line: &str) -> bool {
    line.chars()
        .filter(|c| c.is_alphabetic())
        .all(char::is_uppercase)
}
