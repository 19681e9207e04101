//! Heuristic resume parser running the field rules in order.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::config::{CvscanConfig, ExtractionConfig, NameRule};
use crate::models::resume::{ExtractionResult, ResultField};
use crate::text::NormalizedText;

use super::rules::{
    EmailExtractor, ExtractionContext, FieldExtractor, LocationExtractor, NameExtractor,
    PhoneExtractor, SkillsExtractor, SummaryExtractor,
};
use super::{ResumeParser, Vocabulary};

/// Result of parsing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Extracted fields.
    pub result: ExtractionResult,
    /// Number of non-empty lines in the document.
    pub line_count: usize,
    /// Fields that could not be extracted.
    pub missing_fields: Vec<ResultField>,
}

/// Compiled field rules.
#[derive(Debug, Clone)]
struct RuleSet {
    email: EmailExtractor,
    phone: PhoneExtractor,
    name: NameExtractor,
    location: LocationExtractor,
    skills: SkillsExtractor,
    summary: SummaryExtractor,
}

impl RuleSet {
    fn compile(config: &ExtractionConfig, vocabulary: &Vocabulary) -> Self {
        Self {
            email: EmailExtractor,
            phone: PhoneExtractor,
            name: NameExtractor::new(config.name_rule, config.name_scan_lines, vocabulary),
            location: LocationExtractor::new(vocabulary),
            skills: SkillsExtractor::new(vocabulary),
            summary: SummaryExtractor::new(config.summary_max_lines),
        }
    }
}

/// Rule-based resume parser.
///
/// Email and phone are found first because the name and location rules
/// skip or strip lines containing them; the summary is anchored on the name.
#[derive(Debug, Clone)]
pub struct HeuristicResumeParser {
    config: ExtractionConfig,
    vocabulary: Vocabulary,
    rules: RuleSet,
}

impl HeuristicResumeParser {
    /// Create a new parser with default settings and vocabulary.
    pub fn new() -> Self {
        Self::with_parts(ExtractionConfig::default(), Vocabulary::default())
    }

    /// Create a parser from a full configuration.
    pub fn from_config(config: &CvscanConfig) -> Self {
        Self::with_parts(config.extraction.clone(), config.vocabulary.clone())
    }

    fn with_parts(config: ExtractionConfig, vocabulary: Vocabulary) -> Self {
        let rules = RuleSet::compile(&config, &vocabulary);
        Self {
            config,
            vocabulary,
            rules,
        }
    }

    /// Set the name rule.
    pub fn with_name_rule(mut self, rule: NameRule) -> Self {
        self.config.name_rule = rule;
        self.recompile()
    }

    /// Set how many leading lines the name rule inspects.
    pub fn with_name_scan_lines(mut self, lines: usize) -> Self {
        self.config.name_scan_lines = lines;
        self.recompile()
    }

    /// Set the maximum summary length in lines.
    pub fn with_summary_max_lines(mut self, lines: usize) -> Self {
        self.config.summary_max_lines = lines;
        self.recompile()
    }

    /// Replace the keyword tables.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self.recompile()
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn recompile(mut self) -> Self {
        self.rules = RuleSet::compile(&self.config, &self.vocabulary);
        self
    }
}

impl Default for HeuristicResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser for HeuristicResumeParser {
    fn parse(&self, text: &str) -> ParseOutcome {
        let normalized = NormalizedText::from_raw(text);

        info!(
            "Parsing resume from {} characters ({} lines)",
            text.len(),
            normalized.line_count()
        );

        let result = self.extract(&normalized);
        let missing_fields = result.missing_fields();

        if !missing_fields.is_empty() {
            debug!(
                "Missing fields: {}",
                missing_fields
                    .iter()
                    .map(ResultField::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        ParseOutcome {
            result,
            line_count: normalized.line_count(),
            missing_fields,
        }
    }

    fn extract(&self, text: &NormalizedText) -> ExtractionResult {
        let rules = &self.rules;
        let empty = ExtractionContext::default();

        let email = rules.email.extract(text, &empty);
        let phone = rules.phone.extract(text, &empty);
        debug!("Email: {:?}, phone: {:?}", email, phone);

        let ctx = ExtractionContext {
            email: email.as_deref(),
            phone: phone.as_deref(),
            name: None,
        };

        let name = rules.name.extract(text, &ctx);
        let location = rules.location.extract(text, &ctx);
        debug!("Name: {:?}, location: {:?}", name, location);

        let ctx = ExtractionContext {
            name: name.as_deref(),
            ..ctx
        };

        let summary = rules.summary.extract(text, &ctx);
        let skills = rules.skills.extract(text, &ctx).unwrap_or_default();
        debug!("Found {} skills", skills.len());

        ExtractionResult {
            name,
            email,
            phone,
            location,
            summary,
            skills,
        }
    }
}
