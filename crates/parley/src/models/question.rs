use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty tier of a question. Each tier fixes the countdown limit, the
/// point weight, and the evaluator's length/keyword expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    /// Tier for a progression step, capped at `Hard`.
    pub fn from_index(index: usize) -> Tier {
        match index {
            0 => Tier::Easy,
            1 => Tier::Medium,
            _ => Tier::Hard,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tier::Easy => 0,
            Tier::Medium => 1,
            Tier::Hard => 2,
        }
    }

    /// Per-question countdown limit in seconds.
    pub fn time_limit_seconds(self) -> u32 {
        match self {
            Tier::Easy => 20,
            Tier::Medium => 60,
            Tier::Hard => 120,
        }
    }

    pub fn max_points(self) -> u32 {
        match self {
            Tier::Easy => 1,
            Tier::Medium => 2,
            Tier::Hard => 3,
        }
    }

    /// Minimum answer length the evaluator considers adequate.
    pub fn min_answer_length(self) -> usize {
        match self {
            Tier::Easy => 30,
            Tier::Medium => 80,
            Tier::Hard => 150,
        }
    }

    /// Weight of keyword coverage in the final score.
    pub fn keyword_weight(self) -> f64 {
        match self {
            Tier::Easy => 0.6,
            Tier::Medium => 0.7,
            Tier::Hard => 0.8,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
        };
        f.write_str(label)
    }
}

/// A question issued during an interview. Immutable once created; owned
/// exclusively by the sequencer's question list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// 1-based issue order within the session.
    pub id: u32,
    pub text: String,
    pub category: String,
    pub tier: Tier,
    pub time_limit_seconds: u32,
    pub max_points: u32,
    pub asked_at: DateTime<Utc>,
}
