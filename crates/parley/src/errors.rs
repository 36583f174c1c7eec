use thiserror::Error;

use crate::models::question::Tier;

/// Engine-level error type returned across the crate boundary.
///
/// Evaluation failures never surface through sequencer operations — they are
/// downgraded to the fallback scoring path so an interview can always move
/// forward. Extraction and storage failures abort only the operation that
/// raised them and leave interview state untouched.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rejected input, e.g. an empty answer submitted interactively.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation requires an active interview.
    #[error("Interview is not active")]
    NotActive,

    /// An answer is already recorded for the current question index.
    #[error("Answer already recorded for question {0}")]
    AlreadyAnswered(usize),

    /// Summary requested before the interview reached the terminal state.
    #[error("Interview is not complete")]
    NotComplete,

    /// The question catalogue has no entries for the requested tier.
    /// This violates a precondition of the whole system and is not recoverable.
    #[error("Question catalogue is empty for tier '{0}'")]
    EmptyCatalogue(Tier),

    /// Uploaded document has a MIME type the extractor does not recognize.
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Document text extraction failed. Retryable with a new file.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// State store read or write failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Answer evaluation failed. Callers inside the sequencer downgrade this
    /// to the fallback path; it is public so custom evaluators can raise it.
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
