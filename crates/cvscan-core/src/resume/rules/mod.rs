//! Rule-based field extractors for resumes.
//!
//! Each rule is total: no match means `None`, never an error.

pub mod email;
pub mod location;
pub mod name;
pub mod patterns;
pub mod phone;
pub mod skills;
pub mod summary;

pub use email::{extract_email, EmailExtractor};
pub use location::LocationExtractor;
pub use name::NameExtractor;
pub use patterns::*;
pub use phone::{extract_phone, PhoneExtractor};
pub use skills::SkillsExtractor;
pub use summary::SummaryExtractor;

use crate::text::NormalizedText;

/// Values found by earlier passes that later rules depend on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractionContext<'a> {
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub name: Option<&'a str>,
}

impl ExtractionContext<'_> {
    /// Whether `line` contains the email or phone already found.
    pub fn mentions_contact(&self, line: &str) -> bool {
        self.email.is_some_and(|email| line.contains(email))
            || self.phone.is_some_and(|phone| line.contains(phone))
    }
}

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from normalized text.
    fn extract(&self, text: &NormalizedText, ctx: &ExtractionContext<'_>) -> Option<Self::Output>;
}
