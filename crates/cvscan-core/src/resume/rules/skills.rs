//! Skill keyword detection.

use std::collections::BTreeSet;

use super::{ExtractionContext, FieldExtractor};
use crate::resume::Vocabulary;
use crate::text::NormalizedText;

/// Skills extractor. A skill is present if it occurs anywhere in the
/// lowercased text, including inside longer words.
#[derive(Debug, Clone)]
pub struct SkillsExtractor {
    skills: Vec<String>,
}

impl SkillsExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            skills: vocabulary
                .skills
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Skills mentioned in `text`.
    pub fn find(&self, text: &str) -> BTreeSet<String> {
        let lower = text.to_lowercase();
        self.skills
            .iter()
            .filter(|skill| lower.contains(skill.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for SkillsExtractor {
    fn default() -> Self {
        Self::new(&Vocabulary::default())
    }
}

impl FieldExtractor for SkillsExtractor {
    type Output = BTreeSet<String>;

    fn extract(&self, text: &NormalizedText, _ctx: &ExtractionContext<'_>) -> Option<Self::Output> {
        let found = self.find(&text.joined);
        (!found.is_empty()).then_some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_found_case_insensitively() {
        let skills = SkillsExtractor::default().find("Built with React and TypeScript, deployed on AWS");
        assert!(skills.contains("react"));
        assert!(skills.contains("typescript"));
        assert!(skills.contains("aws"));
        assert!(!skills.contains("vue"));
    }

    #[test]
    fn test_substring_matches() {
        let skills = SkillsExtractor::default().find("JavaScript, PostgreSQL");
        // "java" and "sql" are substrings of the longer names.
        for expected in ["javascript", "java", "postgresql", "sql"] {
            assert!(skills.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocab = Vocabulary {
            skills: vec!["Elixir".to_string(), " ".to_string()],
            ..Vocabulary::default()
        };
        let skills = SkillsExtractor::new(&vocab).find("elixir and phoenix");
        assert_eq!(skills.into_iter().collect::<Vec<_>>(), vec!["elixir"]);
    }

    #[test]
    fn test_no_skills() {
        let text = NormalizedText::from_raw("Gardening and cooking");
        assert_eq!(
            SkillsExtractor::default().extract(&text, &ExtractionContext::default()),
            None
        );
        assert!(SkillsExtractor::default().find("").is_empty());
    }
}
