//! Configuration structures for extraction and export.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CvscanError, Result};
use crate::resume::Vocabulary;

/// Main configuration for cvscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvscanConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Keyword tables.
    pub vocabulary: Vocabulary,

    /// JSON export configuration.
    pub export: ExportConfig,
}

/// How the name rule decides whether a line is a person's name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameRule {
    /// 2 to 4 words, mixed case only.
    #[default]
    Strict,
    /// 1 to 4 words, all-uppercase lines allowed.
    Lenient,
}

impl NameRule {
    /// Inclusive word-count range a name line must fall in.
    pub fn word_range(&self) -> (usize, usize) {
        match self {
            NameRule::Strict => (2, 4),
            NameRule::Lenient => (1, 4),
        }
    }

    pub fn allows_all_caps(&self) -> bool {
        matches!(self, NameRule::Lenient)
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Rule used to accept a line as the name.
    pub name_rule: NameRule,

    /// Number of leading lines searched for the name.
    pub name_scan_lines: usize,

    /// Maximum number of lines joined into the summary.
    pub summary_max_lines: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_rule: NameRule::Strict,
            name_scan_lines: 10,
            summary_max_lines: 3,
        }
    }
}

/// JSON export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Appended to the original file stem to name the export.
    pub file_suffix: String,

    /// Write indented JSON.
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_suffix: "_extracted.json".to_string(),
            pretty: true,
        }
    }
}

impl CvscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CvscanError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = CvscanConfig::default();
        assert_eq!(config.extraction.name_rule, NameRule::Strict);
        assert_eq!(config.extraction.name_scan_lines, 10);
        assert_eq!(config.extraction.summary_max_lines, 3);
        assert_eq!(config.export.file_suffix, "_extracted.json");
    }

    #[test]
    fn test_name_rule_ranges() {
        assert_eq!(NameRule::Strict.word_range(), (2, 4));
        assert_eq!(NameRule::Lenient.word_range(), (1, 4));
        assert!(!NameRule::Strict.allows_all_caps());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = CvscanConfig::default();
        config.extraction.name_rule = NameRule::Lenient;
        config.save(&path).unwrap();

        assert_eq!(CvscanConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"extraction": {"name_rule": "lenient"}}"#).unwrap();

        let config = CvscanConfig::from_file(&path).unwrap();
        assert_eq!(config.extraction.name_rule, NameRule::Lenient);
        assert_eq!(config.extraction.name_scan_lines, 10);
        assert_eq!(config.vocabulary, Vocabulary::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            CvscanConfig::from_file(&path),
            Err(CvscanError::Config(_))
        ));
    }
}
