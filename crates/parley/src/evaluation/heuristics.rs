//! Deterministic answer scoring.
//!
//! Three weighted sub-scores sum to the final score, clamped to [0, 1]:
//! 1. Length adequacy (weight 0.2): `min(len / tier_min, 2) × 0.2`
//! 2. Keyword coverage (tier weight 0.6/0.7/0.8): matched / total × weight
//! 3. Structure (weight 0.2): code tokens, connectives in long answers,
//!    example markers — capped at 1.0 before weighting

use crate::evaluation::feedback::build_feedback;
use crate::evaluation::keywords::expected_keywords;
use crate::models::answer::{Evaluation, EvaluationDetail};
use crate::models::question::Tier;

/// Scores an answer against its question and tier. Pure and infallible.
pub fn evaluate_answer(question: &str, answer: &str, tier: Tier) -> Evaluation {
    let keywords = expected_keywords(question);
    let answer_lower = answer.to_lowercase();

    let min_length = tier.min_answer_length();
    let answer_length = answer.chars().count();

    let length_score = (answer_length as f64 / min_length as f64).min(2.0) * 0.2;

    let keyword_matches = keywords
        .iter()
        .filter(|keyword| answer_lower.contains(&keyword.to_lowercase()))
        .count();
    let keyword_score = (keyword_matches as f64 / keywords.len() as f64) * tier.keyword_weight();

    let structure_score = assess_structure(answer) * 0.2;

    let score = (length_score + keyword_score + structure_score).clamp(0.0, 1.0);

    let feedback = build_feedback(
        score,
        keyword_matches,
        keywords.len(),
        answer_length,
        min_length,
    );

    Evaluation {
        score: round2(score),
        feedback: feedback.summary,
        strengths: feedback.strengths,
        improvements: feedback.improvements,
        detail: Some(EvaluationDetail {
            length_score: to_percent(length_score),
            keyword_score: to_percent(keyword_score),
            structure_score: to_percent(structure_score),
            keyword_matches,
            total_keywords: keywords.len(),
        }),
    }
}

/// Degraded scoring path used when the primary evaluator cannot complete:
/// length heuristic only, static feedback. Must never fail.
pub fn fallback_evaluation(answer: &str) -> Evaluation {
    let score = if answer.chars().count() > 50 { 0.7 } else { 0.4 };
    Evaluation {
        score,
        feedback: "Answer received. Evaluation service temporarily unavailable.".to_string(),
        strengths: vec!["Provided a response".to_string()],
        improvements: vec!["Consider providing more detailed explanations".to_string()],
        detail: None,
    }
}

/// Structure and clarity heuristic in [0, 1].
///
/// Token checks run on the raw answer text; keyword coverage is the
/// case-insensitive part of the evaluation.
fn assess_structure(answer: &str) -> f64 {
    let mut structure: f64 = 0.0;

    // Code-like tokens
    if answer.contains("function")
        || answer.contains("=>")
        || answer.contains("const")
        || answer.contains("let")
    {
        structure += 0.3;
    }

    // Connective in a long-form explanation
    if answer.chars().count() > 100
        && (answer.contains('.') || answer.contains("because") || answer.contains("therefore"))
    {
        structure += 0.4;
    }

    // Example or analogy marker
    if answer.contains("example") || answer.contains("like") || answer.contains("such as") {
        structure += 0.3;
    }

    structure.min(1.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn to_percent(value: f64) -> u32 {
    (value * 100.0).round() as u32
}
