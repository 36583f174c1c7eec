//! Score-banded feedback templates.
//!
//! No free-text generation: the summary line, strengths, and improvements
//! are assembled from fixed strings selected by score band (≥0.8 / ≥0.6 /
//! below) and keyword-coverage ratio thresholds.

/// Feedback for a single evaluated answer.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Builds feedback from the raw (unrounded) score and the evaluation inputs.
pub fn build_feedback(
    score: f64,
    keyword_matches: usize,
    total_keywords: usize,
    answer_length: usize,
    min_length: usize,
) -> Feedback {
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    let coverage_hits = |ratio: f64| keyword_matches as f64 >= total_keywords as f64 * ratio;

    if score >= 0.8 {
        strengths.push("Excellent understanding of the topic".to_string());
        strengths.push("Comprehensive and well-structured answer".to_string());
        if coverage_hits(0.7) {
            strengths.push("Covered all key concepts".to_string());
        }
    } else if score >= 0.6 {
        strengths.push("Good grasp of fundamental concepts".to_string());
        if answer_length >= min_length {
            strengths.push("Provided sufficient detail".to_string());
        }
    } else {
        if answer_length < min_length / 2 {
            improvements.push("Provide more detailed explanations".to_string());
        }
        if !coverage_hits(0.3) {
            improvements
                .push("Address more of the key concepts mentioned in the question".to_string());
        }
        improvements.push("Consider including examples to illustrate your points".to_string());
    }

    if !coverage_hits(0.5) {
        improvements.push("Try to cover more of the technical terms and concepts".to_string());
    }

    let summary = format!(
        "Score: {}%. {}.",
        (score * 100.0).round() as i64,
        strengths
            .first()
            .map(String::as_str)
            .unwrap_or("Answer received")
    );

    Feedback {
        summary,
        strengths,
        improvements,
    }
}
