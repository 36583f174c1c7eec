//! Contact-field extraction over extracted resume text.
//!
//! Email and phone are the first regex matches in the document. The name is
//! the first plausible line: 3–99 characters, not itself an email or phone
//! line, and not a "Resume"/"CV" heading. When the line scan finds nothing,
//! a second pass tries common name shapes over the first five lines.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::candidate::ContactInfo;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern")
});

/// North-American digit groups with an optional country code.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+\d{1,3}[- ]?)?\d{3}[- ]?\d{3}[- ]?\d{4}").expect("phone pattern"));

/// Fallback name shapes: "John Doe", "DOE, JOHN", "John D."
static NAME_SHAPES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^[A-Z][a-z]+ [A-Z][a-z]+$",
        r"^[A-Z]+, [A-Z]+$",
        r"^[A-Z][a-z]+ [A-Z]\.$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("name pattern"))
    .collect()
});

const NAME_MIN_LEN: usize = 3;
const NAME_MAX_LEN: usize = 99;

/// Extracts email, phone, and name from resume text.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    let email = EMAIL_RE.find(text).map(|m| m.as_str().to_string());
    let phone = PHONE_RE.find(text).map(|m| m.as_str().to_string());
    let name = find_name_line(text).or_else(|| find_name_by_shape(text));

    ContactInfo { name, email, phone }
}

/// First non-empty line that looks like a person rather than a heading or a
/// contact detail.
fn find_name_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find(|line| {
            let lower = line.to_lowercase();
            line.chars().count() >= NAME_MIN_LEN
                && line.chars().count() <= NAME_MAX_LEN
                && !EMAIL_RE.is_match(line)
                && !PHONE_RE.is_match(line)
                && !lower.contains("resume")
                && !lower.contains("cv")
        })
        .map(str::to_string)
}

/// Pattern-shape fallback over the first five lines.
fn find_name_by_shape(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(5)
        .find(|line| NAME_SHAPES.iter().any(|shape| shape.is_match(line)))
        .map(str::to_string)
}
