//! Candidate Roster — the interviewer-side view over candidate records.
//!
//! Pure query logic: substring search over name and email, status filtering,
//! and sorting by score, name, or interview date. Rendering is the host's
//! concern.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Completed,
    InProgress,
    Pending,
}

/// One row in the interviewer dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub position: String,
    pub status: CandidateStatus,
    /// Absent until the interview completes.
    pub score: Option<f64>,
    pub interview_date: NaiveDate,
    pub resume_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Score,
    Name,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Search, filter, and sort parameters for one roster view.
#[derive(Debug, Clone)]
pub struct RosterQuery {
    /// Case-insensitive substring matched against name and email.
    pub search: String,
    /// `None` shows every status.
    pub status: Option<CandidateStatus>,
    pub sort_by: SortKey,
    pub order: SortOrder,
}

impl Default for RosterQuery {
    fn default() -> Self {
        RosterQuery {
            search: String::new(),
            status: None,
            sort_by: SortKey::Score,
            order: SortOrder::Desc,
        }
    }
}

/// Aggregate numbers for the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterStats {
    pub total_candidates: usize,
    pub completed_interviews: usize,
    pub pending_reviews: usize,
    /// Average over scored rows only; 0.0 when none are scored.
    pub average_score: f64,
}

/// Applies search, status filter, and sort; returns borrowed rows in view
/// order.
pub fn query_roster<'a>(
    records: &'a [CandidateRecord],
    query: &RosterQuery,
) -> Vec<&'a CandidateRecord> {
    let needle = query.search.to_lowercase();

    let mut rows: Vec<&CandidateRecord> = records
        .iter()
        .filter(|record| query.status.map_or(true, |status| record.status == status))
        .filter(|record| {
            needle.is_empty()
                || record.name.to_lowercase().contains(&needle)
                || record.email.to_lowercase().contains(&needle)
        })
        .collect();

    rows.sort_by(|a, b| {
        let ordering = match query.sort_by {
            // Unscored rows sort below every scored row.
            SortKey::Score => a
                .score
                .unwrap_or(f64::NEG_INFINITY)
                .partial_cmp(&b.score.unwrap_or(f64::NEG_INFINITY))
                .unwrap_or(std::cmp::Ordering::Equal),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Date => a.interview_date.cmp(&b.interview_date),
        };
        match query.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    rows
}

/// Dashboard header stats over the full record set.
pub fn roster_stats(records: &[CandidateRecord]) -> RosterStats {
    let completed = records
        .iter()
        .filter(|r| r.status == CandidateStatus::Completed)
        .count();
    let pending = records
        .iter()
        .filter(|r| r.status == CandidateStatus::Pending)
        .count();

    let scores: Vec<f64> = records.iter().filter_map(|r| r.score).collect();
    let average_score = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    RosterStats {
        total_candidates: records.len(),
        completed_interviews: completed,
        pending_reviews: pending,
        average_score,
    }
}
