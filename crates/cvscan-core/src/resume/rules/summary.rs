//! Summary extraction: the lines right after the name.

use super::{ExtractionContext, FieldExtractor};
use crate::text::NormalizedText;

/// Summary field extractor.
#[derive(Debug, Clone, Copy)]
pub struct SummaryExtractor {
    max_lines: usize,
}

impl SummaryExtractor {
    pub fn new(max_lines: usize) -> Self {
        Self {
            max_lines: max_lines.max(1),
        }
    }

    /// Index of the first summary line.
    ///
    /// The line after the name when one was found and it is not the last
    /// line, otherwise the start of the document. A line equal to the name
    /// is preferred over an earlier line that merely contains it.
    fn start_index(&self, lines: &[String], name: Option<&str>) -> usize {
        name.and_then(|name| {
            lines
                .iter()
                .position(|line| line == name)
                .or_else(|| lines.iter().position(|line| line.contains(name)))
        })
        .map(|i| i + 1)
        .filter(|&start| start < lines.len())
        .unwrap_or(0)
    }
}

impl Default for SummaryExtractor {
    fn default() -> Self {
        Self::new(3)
    }
}

impl FieldExtractor for SummaryExtractor {
    type Output = String;

    fn extract(&self, text: &NormalizedText, ctx: &ExtractionContext<'_>) -> Option<String> {
        if text.is_empty() {
            return None;
        }

        let start = self.start_index(&text.lines, ctx.name);
        let summary = text.lines[start..]
            .iter()
            .take(self.max_lines)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

        Some(summary)
    }
}
