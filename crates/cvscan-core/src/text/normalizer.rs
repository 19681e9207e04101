//! Line splitting and trimming of decoded document text.

use serde::{Deserialize, Serialize};

/// Document text split into trimmed, non-empty lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedText {
    /// Trimmed lines in document order. Never contains an empty entry.
    pub lines: Vec<String>,
    /// `lines` joined with a single `\n`.
    pub joined: String,
}

impl NormalizedText {
    /// Normalize raw decoded text.
    pub fn from_raw(raw: &str) -> Self {
        Normalizer.normalize(raw)
    }

    /// Build from lines that are already trimmed and non-empty.
    fn from_lines(lines: Vec<String>) -> Self {
        let joined = lines.join("\n");
        Self { lines, joined }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Splits raw text into normalized lines.
///
/// Accepts `\n`, `\r\n` and bare `\r` line endings. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn normalize(&self, raw: &str) -> NormalizedText {
        let lines = raw
            .split(['\n', '\r'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        NormalizedText::from_lines(lines)
    }
}
