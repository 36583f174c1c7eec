use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of scoring a single answer. Produced by an
/// [`crate::evaluation::AnswerEvaluator`]; the fallback path produces the
/// same shape so callers never special-case evaluation failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Final score in [0, 1], rounded to 2 decimal places.
    pub score: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    /// Sub-score breakdown. `None` on the fallback path, which scores on
    /// length alone.
    pub detail: Option<EvaluationDetail>,
}

/// Percent-scaled sub-scores behind a heuristic evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationDetail {
    pub length_score: u32,
    pub keyword_score: u32,
    pub structure_score: u32,
    pub keyword_matches: usize,
    pub total_keywords: usize,
}

/// One answered question. Created once, never mutated, appended to the
/// sequencer's answer list in question order: `answers[i]` always refers to
/// `questions[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: u32,
    pub question_text: String,
    pub answer_text: String,
    pub score: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub detail: Option<EvaluationDetail>,
    /// Set when the countdown expired and the engine submitted on the
    /// candidate's behalf.
    pub auto_submitted: bool,
    pub submitted_at: DateTime<Utc>,
    pub time_spent_seconds: u32,
}

impl AnswerRecord {
    pub fn from_evaluation(
        question_id: u32,
        question_text: &str,
        answer_text: &str,
        evaluation: Evaluation,
        auto_submitted: bool,
        time_spent_seconds: u32,
    ) -> Self {
        AnswerRecord {
            question_id,
            question_text: question_text.to_string(),
            answer_text: answer_text.to_string(),
            score: evaluation.score,
            feedback: evaluation.feedback,
            strengths: evaluation.strengths,
            improvements: evaluation.improvements,
            detail: evaluation.detail,
            auto_submitted,
            submitted_at: Utc::now(),
            time_spent_seconds,
        }
    }
}
