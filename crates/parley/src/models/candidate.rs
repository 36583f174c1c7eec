use serde::{Deserialize, Serialize};

/// Contact fields pulled out of a resume document. Any field the extractor
/// could not find is `None`; the host decides what to ask the candidate for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// The candidate a session interviews. The name feeds the summary narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Raw resume text, when onboarding went through document extraction.
    pub resume_text: Option<String>,
}

impl CandidateProfile {
    pub fn new(name: impl Into<String>) -> Self {
        CandidateProfile {
            name: name.into(),
            email: None,
            phone: None,
            resume_text: None,
        }
    }

    /// Builds a profile from extracted contact fields, falling back to the
    /// generic placeholder when the document had no usable name line.
    pub fn from_contact(contact: &ContactInfo, resume_text: Option<String>) -> Self {
        CandidateProfile {
            name: contact
                .name
                .clone()
                .unwrap_or_else(|| "Candidate".to_string()),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            resume_text,
        }
    }
}
