//! Final summary generation — a pure read over the terminal interview state.
//!
//! Per-tier averages use the fixed index windows of the six-question,
//! two-per-tier structure (0–1 easy, 2–3 medium, 4–5 hard). The narrative
//! and recommendations come from score-banded templates; there is no
//! free-text generation.

use serde::{Deserialize, Serialize};

use crate::interview::sequencer::{InterviewState, QUESTIONS_PER_TIER};
use crate::models::candidate::CandidateProfile;

/// Average score per difficulty tier, each rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierAverages {
    pub easy: f64,
    pub medium: f64,
    pub hard: f64,
}

/// Read-only snapshot computed at completion. Recomputable at any time from
/// the questions and answers; never persisted as a source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalSummary {
    pub total_score: f64,
    pub average_score: f64,
    pub per_tier_average: TierAverages,
    pub narrative: String,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
}

/// Builds the summary. Deterministic for a given state: banded templates
/// only, so repeated calls yield identical output.
pub fn build_summary(profile: &CandidateProfile, state: &InterviewState) -> FinalSummary {
    let scores: Vec<f64> = state.answers.iter().map(|a| a.score).collect();

    let total_score = scores.iter().sum::<f64>();
    let average_score = if scores.is_empty() {
        0.0
    } else {
        total_score / scores.len() as f64
    };

    let easy_avg = window_average(&scores, 0);
    let medium_avg = window_average(&scores, 1);
    let hard_avg = window_average(&scores, 2);

    let narrative = build_narrative(&profile.name, average_score, easy_avg, medium_avg, hard_avg);
    let recommendations = build_recommendations(average_score, easy_avg, medium_avg, hard_avg);
    let strengths = identify_strengths(state);
    let areas_for_improvement = identify_improvements(state);

    FinalSummary {
        total_score: round2(total_score),
        average_score: round2(average_score),
        per_tier_average: TierAverages {
            easy: round2(easy_avg),
            medium: round2(medium_avg),
            hard: round2(hard_avg),
        },
        narrative,
        recommendations,
        strengths,
        areas_for_improvement,
    }
}

/// Average over one tier's fixed index window.
fn window_average(scores: &[f64], tier_index: usize) -> f64 {
    let start = tier_index * QUESTIONS_PER_TIER;
    let window: Vec<f64> = scores
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_TIER)
        .copied()
        .collect();
    if window.is_empty() {
        0.0
    } else {
        window.iter().sum::<f64>() / window.len() as f64
    }
}

fn build_narrative(
    name: &str,
    average: f64,
    easy_avg: f64,
    medium_avg: f64,
    hard_avg: f64,
) -> String {
    let mut narrative = if average >= 0.8 {
        format!(
            "{name} demonstrated excellent technical knowledge and problem-solving skills \
             throughout the interview. "
        )
    } else if average >= 0.6 {
        format!(
            "{name} showed solid understanding of the core concepts with room for improvement \
             in advanced topics. "
        )
    } else {
        format!(
            "{name} has foundational knowledge but would benefit from additional study and \
             practice. "
        )
    };

    narrative.push_str(&format!(
        "Performance breakdown: Easy ({}%), Medium ({}%), Hard ({}%). ",
        to_percent(easy_avg),
        to_percent(medium_avg),
        to_percent(hard_avg)
    ));

    if hard_avg < 0.6 {
        narrative.push_str("Recommend focusing on advanced topics and system design concepts. ");
    }
    if easy_avg < 0.7 {
        narrative.push_str(
            "Suggest strengthening fundamental concepts before advancing to complex topics. ",
        );
    }

    narrative.push_str(&format!(
        "Overall, {name} appears to be a {} candidate for a full-stack development role.",
        candidate_level(average)
    ));

    narrative
}

fn candidate_level(average: f64) -> &'static str {
    if average >= 0.8 {
        "strong"
    } else if average >= 0.6 {
        "promising"
    } else {
        "developing"
    }
}

fn build_recommendations(
    average: f64,
    easy_avg: f64,
    medium_avg: f64,
    hard_avg: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if hard_avg < 0.6 {
        recommendations.push("Focus on advanced topics and system design concepts".to_string());
    }
    if medium_avg < 0.6 {
        recommendations.push("Strengthen intermediate-level technical knowledge".to_string());
    }
    if easy_avg < 0.7 {
        recommendations.push("Review fundamental concepts and basics".to_string());
    }
    if average >= 0.8 {
        recommendations.push("Ready for senior-level positions".to_string());
    }

    recommendations
}

fn identify_strengths(state: &InterviewState) -> Vec<String> {
    let mut strengths = Vec::new();
    let answers = &state.answers;

    let good = answers.iter().filter(|a| a.score >= 0.7).count();
    if !answers.is_empty() && good as f64 >= answers.len() as f64 * 0.6 {
        strengths.push("Consistent performance across different topics".to_string());
    }

    let easy_window = &answers[..answers.len().min(QUESTIONS_PER_TIER)];
    if !easy_window.is_empty() && easy_window.iter().all(|a| a.score >= 0.8) {
        strengths.push("Strong foundation in basic concepts".to_string());
    }

    strengths
}

fn identify_improvements(state: &InterviewState) -> Vec<String> {
    let mut improvements = Vec::new();

    // Categories that produced more than one weak answer.
    let weak_categories: Vec<&str> = state
        .answers
        .iter()
        .zip(state.questions.iter())
        .filter(|(answer, _)| answer.score < 0.5)
        .map(|(_, question)| question.category.as_str())
        .collect();

    let repeated = weak_categories
        .iter()
        .find(|category| weak_categories.iter().filter(|c| c == category).count() > 1);

    if let Some(category) = repeated {
        improvements.push(format!("Focus on {category} concepts"));
    }

    improvements
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn to_percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}
