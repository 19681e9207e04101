//! Common regex patterns for resume field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email address
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Phone: optional +, a digit, 6+ digits/spaces/-/(/), ending in a digit.
    // Plain spaces only so a match never crosses a line break.
    pub static ref PHONE: Regex = Regex::new(
        r"\+?\d[\d \-()]{6,}\d"
    ).unwrap();

    // Name shape: uppercase initial, then letters, spaces, dots, apostrophes, hyphens
    pub static ref NAME_SHAPE: Regex = Regex::new(
        r"^\p{Lu}[\p{L} .'\-]+$"
    ).unwrap();

    // Labeled location ("Address: Dubai, UAE", "Based in Doha").
    // The label is followed by a colon or whitespace, so "location-based" is no label.
    pub static ref LOCATION_LABEL: Regex = Regex::new(
        r"(?i)\b(?:address|location|based[ \t]+in|lives[ \t]+in|resident[ \t]+of)\b(?:[ \t]*:[ \t]*|[ \t]+(?:[:\-][ \t]*)?)(\p{L}[\p{L} \t,.'\-]*)"
    ).unwrap();

    // Runs of field separators, with surrounding whitespace
    pub static ref SEPARATOR_RUN: Regex = Regex::new(
        r"(?:\s*[|•·;/]\s*)+"
    ).unwrap();

    // Runs of commas, with surrounding whitespace
    pub static ref COMMA_RUN: Regex = Regex::new(
        r"(?:\s*,\s*)+"
    ).unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).unwrap();

    // Trailing run of letters, spaces and commas
    pub static ref TRAILING_PLACE: Regex = Regex::new(
        r"\p{L}[\p{L} ,]*$"
    ).unwrap();
}

/// Build a case-insensitive, word-bounded alternation over `words`.
///
/// Returns `None` for an empty list. Internal whitespace in a keyword matches
/// any run of whitespace.
pub fn keyword_pattern<S: AsRef<str>>(words: &[S]) -> Option<Regex> {
    let mut alternatives: Vec<String> = words
        .iter()
        .map(|w| w.as_ref().trim())
        .filter(|w| !w.is_empty())
        .map(|w| {
            w.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect();

    if alternatives.is_empty() {
        return None;
    }

    // Longest first so multi-word places win over their prefixes.
    alternatives.sort_by_key(|a| std::cmp::Reverse(a.len()));

    let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!("Ignoring keyword table that does not compile: {}", e);
            None
        }
    }
}
