//! Keyword tables used by the extraction rules.
//!
//! The defaults are static slices; a [`Vocabulary`] holds owned copies so
//! tables can be replaced or extended from configuration.

use serde::{Deserialize, Serialize};

/// Lines that are document headings rather than a name.
pub const DEFAULT_HEADER_LABELS: &[&str] = &["resume", "curriculum vitae", "cv", "profile"];

/// Words that mark a line as an address line.
pub const DEFAULT_LOCATION_INDICATORS: &[&str] = &[
    "address",
    "location",
    "street",
    "city",
    "country",
    "po box",
    // Gulf region
    "dubai",
    "abu dhabi",
    "sharjah",
    "ajman",
    "uae",
    "doha",
    "qatar",
    "riyadh",
    "jeddah",
    "dammam",
    "saudi arabia",
    "kuwait",
    "muscat",
    "oman",
    "manama",
    "bahrain",
    // South Asia
    "karachi",
    "lahore",
    "islamabad",
    "pakistan",
    "mumbai",
    "delhi",
    "bangalore",
    "bengaluru",
    "hyderabad",
    "chennai",
    "kolkata",
    "pune",
    "india",
    "dhaka",
    "bangladesh",
    "colombo",
    "sri lanka",
    "kathmandu",
    "nepal",
];

/// Cities and countries accepted as a location value.
pub const DEFAULT_LOCATION_KEYWORDS: &[&str] = &[
    "Dubai",
    "Abu Dhabi",
    "Sharjah",
    "Ajman",
    "UAE",
    "Doha",
    "Qatar",
    "Riyadh",
    "Jeddah",
    "Dammam",
    "Saudi Arabia",
    "Kuwait",
    "Muscat",
    "Oman",
    "Manama",
    "Bahrain",
    "Karachi",
    "Lahore",
    "Islamabad",
    "Pakistan",
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Bengaluru",
    "Hyderabad",
    "Chennai",
    "Kolkata",
    "Pune",
    "India",
    "Dhaka",
    "Bangladesh",
    "Colombo",
    "Sri Lanka",
    "Kathmandu",
    "Nepal",
    "USA",
    "United States",
    "UK",
    "United Kingdom",
    "Canada",
    "Singapore",
];

/// Web development technologies, matched as lowercase substrings.
pub const DEFAULT_SKILLS: &[&str] = &[
    "html",
    "css",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "svelte",
    "next.js",
    "node.js",
    "express.js",
    "jquery",
    "tailwind",
    "bootstrap",
    "sass",
    "webpack",
    "redux",
    "graphql",
    "python",
    "django",
    "flask",
    "php",
    "laravel",
    "ruby",
    "ruby on rails",
    "java",
    "spring boot",
    "c#",
    ".net",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "firebase",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "github",
    "gitlab",
    "figma",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Keyword tables consumed by the extraction rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Heading lines skipped by the name rule (case-insensitive equality).
    pub header_labels: Vec<String>,

    /// Keywords that disqualify a line from being the name.
    pub location_indicators: Vec<String>,

    /// Known cities/countries for the location fallback scan.
    pub location_keywords: Vec<String>,

    /// Skill keywords.
    pub skills: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            header_labels: owned(DEFAULT_HEADER_LABELS),
            location_indicators: owned(DEFAULT_LOCATION_INDICATORS),
            location_keywords: owned(DEFAULT_LOCATION_KEYWORDS),
            skills: owned(DEFAULT_SKILLS),
        }
    }
}

impl Vocabulary {
    /// Add skills to the table, skipping duplicates.
    pub fn with_extra_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for skill in skills {
            let skill = skill.into().to_lowercase();
            if !self.skills.contains(&skill) {
                self.skills.push(skill);
            }
        }
        self
    }

    /// Add cities or countries to the location fallback table.
    pub fn with_extra_locations<I, S>(mut self, places: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.location_keywords.extend(places.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_skills_are_lowercase() {
        assert!(DEFAULT_SKILLS.iter().all(|s| s.to_lowercase() == *s));
    }

    #[test]
    fn test_extra_skills_deduplicated() {
        let vocab = Vocabulary::default().with_extra_skills(["React", "Elixir"]);
        assert_eq!(vocab.skills.iter().filter(|s| *s == "react").count(), 1);
        assert!(vocab.skills.contains(&"elixir".to_string()));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let vocab: Vocabulary = serde_json::from_str(r#"{"skills": ["cobol"]}"#).unwrap();
        assert_eq!(vocab.skills, vec!["cobol"]);
        assert_eq!(vocab.header_labels, owned(DEFAULT_HEADER_LABELS));
    }
}
