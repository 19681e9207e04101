//! Extraction result model and review edits.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EditError;

/// Fields extracted from one resume document.
///
/// Every field is best-effort. Absent fields serialize as `null` and skills
/// serialize as a sorted array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Candidate's name.
    pub name: Option<String>,

    /// First email address in the document.
    pub email: Option<String>,

    /// First phone number in the document, separators preserved.
    pub phone: Option<String>,

    /// Place name from an address label or a known city/country.
    pub location: Option<String>,

    /// One to three lines of prose following the name.
    pub summary: Option<String>,

    /// Lowercase skill keywords found anywhere in the text.
    #[serde(default)]
    pub skills: BTreeSet<String>,
}

impl ExtractionResult {
    /// Fields that were not extracted.
    pub fn missing_fields(&self) -> Vec<ResultField> {
        ResultField::ALL
            .into_iter()
            .filter(|field| !self.has(*field))
            .collect()
    }

    /// Whether a field holds a value.
    pub fn has(&self, field: ResultField) -> bool {
        match field {
            ResultField::Name => self.name.is_some(),
            ResultField::Email => self.email.is_some(),
            ResultField::Phone => self.phone.is_some(),
            ResultField::Location => self.location.is_some(),
            ResultField::Summary => self.summary.is_some(),
            ResultField::Skills => !self.skills.is_empty(),
        }
    }

    /// Return an edited copy, leaving `self` untouched.
    ///
    /// Each assignment has the form `field=value`. An empty value clears the
    /// field.
    pub fn with_edits<I, S>(&self, assignments: I) -> Result<Self, EditError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut edited = self.clone();
        for assignment in assignments {
            let edit: FieldEdit = assignment.as_ref().parse()?;
            edit.apply_to(&mut edited);
        }
        Ok(edited)
    }
}

/// Names of the extracted fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultField {
    Name,
    Email,
    Phone,
    Location,
    Summary,
    Skills,
}

impl ResultField {
    pub const ALL: [ResultField; 6] = [
        ResultField::Name,
        ResultField::Email,
        ResultField::Phone,
        ResultField::Location,
        ResultField::Summary,
        ResultField::Skills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultField::Name => "name",
            ResultField::Email => "email",
            ResultField::Phone => "phone",
            ResultField::Location => "location",
            ResultField::Summary => "summary",
            ResultField::Skills => "skills",
        }
    }
}

impl fmt::Display for ResultField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultField {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ResultField::ALL
            .into_iter()
            .find(|field| field.as_str() == key)
            .ok_or_else(|| EditError::UnknownField(s.trim().to_string()))
    }
}

/// A single user edit of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: ResultField,
    pub value: String,
}

impl FieldEdit {
    pub fn new(field: ResultField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Write this edit into `result`.
    pub fn apply_to(&self, result: &mut ExtractionResult) {
        let value = self.value.trim();
        let text = (!value.is_empty()).then(|| value.to_string());

        match self.field {
            ResultField::Name => result.name = text,
            ResultField::Email => result.email = text,
            ResultField::Phone => result.phone = text,
            ResultField::Location => result.location = text,
            ResultField::Summary => result.summary = text,
            ResultField::Skills => {
                result.skills = value
                    .split(',')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
        }
    }
}

impl FromStr for FieldEdit {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| EditError::InvalidAssignment(s.to_string()))?;

        Ok(Self::new(field.parse()?, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ExtractionResult {
        ExtractionResult {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: None,
            location: Some("Dubai, UAE".to_string()),
            summary: None,
            skills: ["react".to_string()].into_iter().collect(),
        }
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            sample().missing_fields(),
            vec![ResultField::Phone, ResultField::Summary]
        );
        assert_eq!(
            ExtractionResult::default().missing_fields(),
            ResultField::ALL.to_vec()
        );
    }

    #[test]
    fn test_with_edits_returns_copy() {
        let original = sample();
        let edited = original
            .with_edits(["name=Jane A. Doe", "phone=+971 50 123 4567", "location="])
            .unwrap();

        assert_eq!(edited.name.as_deref(), Some("Jane A. Doe"));
        assert_eq!(edited.phone.as_deref(), Some("+971 50 123 4567"));
        assert_eq!(edited.location, None);
        assert_eq!(original, sample());
    }

    #[test]
    fn test_skills_edit_splits_and_lowercases() {
        let edited = sample().with_edits(["skills= Rust, Docker ,,AWS"]).unwrap();
        let skills: Vec<&str> = edited.skills.iter().map(String::as_str).collect();
        assert_eq!(skills, vec!["aws", "docker", "rust"]);
    }

    #[test]
    fn test_edit_value_may_contain_equals() {
        let edited = sample().with_edits(["summary=a=b"]).unwrap();
        assert_eq!(edited.summary.as_deref(), Some("a=b"));
    }

    #[test]
    fn test_invalid_edits() {
        assert_eq!(
            sample().with_edits(["salary=100"]),
            Err(EditError::UnknownField("salary".to_string()))
        );
        assert_eq!(
            sample().with_edits(["name"]),
            Err(EditError::InvalidAssignment("name".to_string()))
        );
    }

    #[test]
    fn test_field_names_case_insensitive() {
        assert_eq!("EMAIL".parse::<ResultField>(), Ok(ResultField::Email));
        assert_eq!(" skills ".parse::<ResultField>(), Ok(ResultField::Skills));
    }

    #[test]
    fn test_serializes_absent_fields_as_null() {
        let json = serde_json::to_value(ExtractionResult::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": null,
                "email": null,
                "phone": null,
                "location": null,
                "summary": null,
                "skills": []
            })
        );
    }
}
