//! Resume Extraction — turns an uploaded document into plain text and
//! structured contact fields.
//!
//! Recognized MIME types: PDF and the two Word document types. Anything else
//! fails with an unsupported-file-type error. Extraction failures abort only
//! the attempt — interview state is untouched and the caller may retry with
//! a new file.

use bytes::Bytes;
use tracing::info;

use crate::errors::EngineError;
use crate::models::candidate::ContactInfo;

pub mod contact;
pub mod text;

pub use contact::extract_contact_info;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_DOC: &str = "application/msword";

/// Extracted document content: the full text plus the contact fields pulled
/// out of it.
#[derive(Debug, Clone)]
pub struct ResumeExtract {
    pub text: String,
    pub contact: ContactInfo,
}

/// Extracts text and contact fields from an uploaded document.
pub fn extract(bytes: &Bytes, mime_type: &str) -> Result<ResumeExtract, EngineError> {
    let text = match mime_type {
        MIME_PDF => text::text_from_pdf(bytes)?,
        MIME_DOCX | MIME_DOC => text::text_from_word(bytes)?,
        other => return Err(EngineError::UnsupportedFileType(other.to_string())),
    };

    let contact = extract_contact_info(&text);
    info!(
        mime = mime_type,
        chars = text.chars().count(),
        found_email = contact.email.is_some(),
        found_phone = contact.phone.is_some(),
        "resume extracted"
    );

    Ok(ResumeExtract { text, contact })
}
