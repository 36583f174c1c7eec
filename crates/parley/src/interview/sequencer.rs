//! Interview Sequencer — owns progression state and transition logic.
//!
//! Lifecycle: `NotStarted → Active → Complete`. Exactly six questions, two
//! per difficulty tier, tiers in order easy → medium → hard. Each sequencer
//! instance is caller-owned; there is no process-wide engine. The sequencer
//! is the single writer of its [`InterviewState`].
//!
//! Evaluation failures are downgraded at this boundary to the fallback
//! scoring path — an answer submission is never lost because the evaluator
//! could not run.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::EngineError;
use crate::evaluation::{fallback_evaluation, AnswerEvaluator};
use crate::interview::bank;
use crate::models::answer::AnswerRecord;
use crate::models::candidate::CandidateProfile;
use crate::models::question::{Question, Tier};

/// Fixed interview length.
pub const TOTAL_QUESTIONS: usize = 6;
/// Tier bump boundary: the tier index increments every two answered questions.
pub const QUESTIONS_PER_TIER: usize = 2;

/// Externally observable lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Active,
    Complete,
}

/// Progression state. One writer (the owning sequencer); mutated only by
/// `initialize`, `submit_answer`, `auto_submit_on_timeout`, and `advance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewState {
    pub current_question_index: usize,
    /// 0 = easy, 1 = medium, 2 = hard.
    pub tier_index: usize,
    pub questions: Vec<Question>,
    pub answers: Vec<AnswerRecord>,
    pub is_active: bool,
    pub is_complete: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl InterviewState {
    fn new() -> Self {
        InterviewState {
            current_question_index: 0,
            tier_index: 0,
            questions: Vec::new(),
            answers: Vec::new(),
            is_active: false,
            is_complete: false,
            completed_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_complete {
            Phase::Complete
        } else if self.is_active {
            Phase::Active
        } else {
            Phase::NotStarted
        }
    }

    fn current_tier(&self) -> Tier {
        Tier::from_index(self.tier_index)
    }

    fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_question_index)
    }

    /// True once the current question has an answer recorded.
    fn current_answered(&self) -> bool {
        self.answers.len() > self.current_question_index
    }
}

/// Live progress for the host to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    pub current_question: usize,
    pub total_questions: usize,
    pub tier: Tier,
    pub completed_questions: usize,
    pub average_score: f64,
}

pub struct InterviewSequencer {
    state: InterviewState,
    profile: CandidateProfile,
    evaluator: Arc<dyn AnswerEvaluator>,
}

impl InterviewSequencer {
    pub fn new(profile: CandidateProfile, evaluator: Arc<dyn AnswerEvaluator>) -> Self {
        InterviewSequencer {
            state: InterviewState::new(),
            profile,
            evaluator,
        }
    }

    /// Rebuilds a sequencer from previously persisted state.
    pub fn restore(
        profile: CandidateProfile,
        evaluator: Arc<dyn AnswerEvaluator>,
        state: InterviewState,
    ) -> Self {
        InterviewSequencer {
            state,
            profile,
            evaluator,
        }
    }

    pub fn state(&self) -> &InterviewState {
        &self.state
    }

    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    /// Starts (or restarts) the interview: resets all counters and issues the
    /// first question at the easy tier.
    ///
    /// Fails only if the question catalogue is empty for the tier, which is a
    /// fatal configuration error rather than a runtime condition.
    pub fn initialize(&mut self) -> Result<&Question, EngineError> {
        self.state = InterviewState::new();
        self.state.is_active = true;

        info!(candidate = %self.profile.name, "interview started");
        self.issue_question()
    }

    /// Scores and records the candidate's answer to the current question.
    /// Does not advance — advancing is a separate, explicit transition.
    ///
    /// Valid only while active and before any record exists for the current
    /// index; an auto-submit that won the race makes this a no-op error.
    pub async fn submit_answer(&mut self, answer: &str) -> Result<&AnswerRecord, EngineError> {
        if !self.state.is_active {
            return Err(EngineError::NotActive);
        }
        if self.state.current_answered() {
            return Err(EngineError::AlreadyAnswered(
                self.state.current_question_index,
            ));
        }

        let question = self
            .state
            .current_question()
            .ok_or(EngineError::NotActive)?
            .clone();

        let evaluation = match self
            .evaluator
            .evaluate(&question.text, answer, question.tier)
            .await
        {
            Ok(evaluation) => evaluation,
            Err(error) => {
                // Submission must never be lost to an evaluation failure.
                warn!(%error, "evaluation failed; using fallback scoring");
                fallback_evaluation(answer)
            }
        };

        let time_spent = (Utc::now() - question.asked_at).num_seconds().max(0) as u32;
        let record = AnswerRecord::from_evaluation(
            question.id,
            &question.text,
            answer,
            evaluation,
            false,
            time_spent,
        );

        debug!(
            question = question.id,
            score = record.score,
            "answer recorded"
        );
        self.state.answers.push(record);
        Ok(self.state.answers.last().expect("record just pushed"))
    }

    /// Records an empty answer because the countdown reached zero.
    ///
    /// Returns `Ok(None)` when there is nothing to do — the question was
    /// already answered (an explicit submit won the race) or the interview is
    /// not active. Time spent is charged as `limit − remaining` rather than
    /// wall clock.
    pub async fn auto_submit_on_timeout(
        &mut self,
        remaining_seconds: u32,
    ) -> Result<Option<&AnswerRecord>, EngineError> {
        if !self.state.is_active || self.state.current_answered() {
            return Ok(None);
        }

        let question = self
            .state
            .current_question()
            .ok_or(EngineError::NotActive)?
            .clone();

        let evaluation = match self
            .evaluator
            .evaluate(&question.text, "", question.tier)
            .await
        {
            Ok(evaluation) => evaluation,
            Err(error) => {
                warn!(%error, "evaluation failed; using fallback scoring");
                fallback_evaluation("")
            }
        };

        let time_spent = question.time_limit_seconds.saturating_sub(remaining_seconds);
        let record = AnswerRecord::from_evaluation(
            question.id,
            &question.text,
            "",
            evaluation,
            true,
            time_spent,
        );

        info!(question = question.id, "countdown expired; answer auto-submitted");
        self.state.answers.push(record);
        Ok(Some(self.state.answers.last().expect("record just pushed")))
    }

    /// Moves to the next question, bumping the difficulty tier every
    /// [`QUESTIONS_PER_TIER`] questions (capped at hard). Returns the newly
    /// issued question, or `None` once all six questions are done — at which
    /// point the interview is complete and no further mutation is permitted.
    pub fn advance(&mut self) -> Result<Option<&Question>, EngineError> {
        if !self.state.is_active {
            return Err(EngineError::NotActive);
        }

        self.state.current_question_index += 1;

        let index = self.state.current_question_index;
        if index > 0 && index % QUESTIONS_PER_TIER == 0 {
            self.state.tier_index = (self.state.tier_index + 1).min(Tier::ALL.len() - 1);
        }

        if index >= TOTAL_QUESTIONS {
            self.state.is_active = false;
            self.state.is_complete = true;
            self.state.completed_at = Some(Utc::now());
            info!(candidate = %self.profile.name, "interview complete");
            return Ok(None);
        }

        self.issue_question().map(Some)
    }

    pub fn progress(&self) -> Progress {
        let scores: Vec<f64> = self.state.answers.iter().map(|a| a.score).collect();
        let average_score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };

        Progress {
            current_question: (self.state.current_question_index + 1).min(TOTAL_QUESTIONS),
            total_questions: TOTAL_QUESTIONS,
            tier: self.state.current_tier(),
            completed_questions: self.state.answers.len(),
            average_score,
        }
    }

    /// Final summary over the terminal state. Pure read: calling it twice
    /// yields identical output. Valid only once the interview is complete.
    pub fn final_summary(&self) -> Result<crate::interview::summary::FinalSummary, EngineError> {
        if !self.state.is_complete {
            return Err(EngineError::NotComplete);
        }
        Ok(crate::interview::summary::build_summary(
            &self.profile,
            &self.state,
        ))
    }

    /// Pulls the next question from the bank at the current tier, excluding
    /// every text asked so far this session.
    fn issue_question(&mut self) -> Result<&Question, EngineError> {
        let tier = self.state.current_tier();
        let asked: Vec<String> = self
            .state
            .questions
            .iter()
            .map(|q| q.text.clone())
            .collect();

        let picked = bank::pick_question(tier, &asked)?;

        let question = Question {
            id: self.state.questions.len() as u32 + 1,
            text: picked.text.to_string(),
            category: picked.category.to_string(),
            tier,
            time_limit_seconds: tier.time_limit_seconds(),
            max_points: tier.max_points(),
            asked_at: Utc::now(),
        };

        debug!(
            question = question.id,
            %tier,
            category = %question.category,
            "question issued"
        );
        self.state.questions.push(question);
        Ok(self.state.questions.last().expect("question just pushed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::evaluation::HeuristicEvaluator;
    use crate::models::answer::Evaluation;

    /// Evaluator that always fails, to exercise the fallback path.
    struct BrokenEvaluator;

    #[async_trait]
    impl AnswerEvaluator for BrokenEvaluator {
        async fn evaluate(
            &self,
            _question: &str,
            _answer: &str,
            _tier: Tier,
        ) -> Result<Evaluation, EngineError> {
            Err(EngineError::Evaluation("backend unreachable".to_string()))
        }
    }

    fn sequencer() -> InterviewSequencer {
        InterviewSequencer::new(
            CandidateProfile::new("Ada Lovelace"),
            Arc::new(HeuristicEvaluator),
        )
    }

    async fn run_to_completion(seq: &mut InterviewSequencer) {
        seq.initialize().unwrap();
        for _ in 0..TOTAL_QUESTIONS {
            seq.submit_answer("A reasonable answer about scoping and components.")
                .await
                .unwrap();
            seq.advance().unwrap();
        }
    }

    #[test]
    fn test_initialize_issues_first_easy_question() {
        let mut seq = sequencer();
        let question = seq.initialize().unwrap();
        assert_eq!(question.id, 1);
        assert_eq!(question.tier, Tier::Easy);
        assert_eq!(seq.state().phase(), Phase::Active);
    }

    #[test]
    fn test_initialize_resets_previous_progress() {
        let mut seq = sequencer();
        seq.initialize().unwrap();
        seq.advance().unwrap();
        seq.initialize().unwrap();
        assert_eq!(seq.state().current_question_index, 0);
        assert_eq!(seq.state().questions.len(), 1);
        assert!(seq.state().answers.is_empty());
    }

    #[tokio::test]
    async fn test_tier_sequence_is_fixed_regardless_of_scores() {
        let mut seq = sequencer();
        run_to_completion(&mut seq).await;

        let tiers: Vec<Tier> = seq.state().questions.iter().map(|q| q.tier).collect();
        assert_eq!(
            tiers,
            vec![
                Tier::Easy,
                Tier::Easy,
                Tier::Medium,
                Tier::Medium,
                Tier::Hard,
                Tier::Hard
            ]
        );
    }

    #[tokio::test]
    async fn test_completed_interview_has_six_aligned_records() {
        let mut seq = sequencer();
        run_to_completion(&mut seq).await;

        let state = seq.state();
        assert_eq!(state.questions.len(), TOTAL_QUESTIONS);
        assert_eq!(state.answers.len(), TOTAL_QUESTIONS);
        for (question, answer) in state.questions.iter().zip(state.answers.iter()) {
            assert_eq!(question.id, answer.question_id);
        }
        assert_eq!(state.phase(), Phase::Complete);
        assert!(!state.is_active);
        assert!(state.completed_at.is_some());
    }

    #[tokio::test]
    async fn test_no_repeated_question_texts_within_session() {
        let mut seq = sequencer();
        run_to_completion(&mut seq).await;

        let mut texts: Vec<&str> = seq
            .state()
            .questions
            .iter()
            .map(|q| q.text.as_str())
            .collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), TOTAL_QUESTIONS, "questions must not repeat");
    }

    #[tokio::test]
    async fn test_submit_without_initialize_is_rejected() {
        let mut seq = sequencer();
        let result = seq.submit_answer("hello").await;
        assert!(matches!(result, Err(EngineError::NotActive)));
    }

    #[tokio::test]
    async fn test_double_submit_is_rejected_without_second_record() {
        let mut seq = sequencer();
        seq.initialize().unwrap();
        seq.submit_answer("first").await.unwrap();
        let second = seq.submit_answer("second").await;
        assert!(matches!(second, Err(EngineError::AlreadyAnswered(0))));
        assert_eq!(seq.state().answers.len(), 1);
    }

    #[tokio::test]
    async fn test_auto_submit_records_empty_flagged_answer() {
        let mut seq = sequencer();
        seq.initialize().unwrap();
        let record = seq.auto_submit_on_timeout(0).await.unwrap().unwrap();
        assert!(record.auto_submitted);
        assert_eq!(record.answer_text, "");
        assert_eq!(record.time_spent_seconds, Tier::Easy.time_limit_seconds());
    }

    #[tokio::test]
    async fn test_auto_submit_after_submit_is_noop() {
        let mut seq = sequencer();
        seq.initialize().unwrap();
        seq.submit_answer("typed in time").await.unwrap();
        let outcome = seq.auto_submit_on_timeout(0).await.unwrap();
        assert!(outcome.is_none());
        assert_eq!(seq.state().answers.len(), 1);
        assert!(!seq.state().answers[0].auto_submitted);
    }

    #[tokio::test]
    async fn test_submit_after_auto_submit_is_noop() {
        let mut seq = sequencer();
        seq.initialize().unwrap();
        seq.auto_submit_on_timeout(0).await.unwrap();
        let result = seq.submit_answer("too late").await;
        assert!(matches!(result, Err(EngineError::AlreadyAnswered(0))));
        assert_eq!(seq.state().answers.len(), 1);
        assert!(seq.state().answers[0].auto_submitted);
    }

    #[tokio::test]
    async fn test_evaluator_failure_falls_back_and_keeps_record() {
        let mut seq = InterviewSequencer::new(
            CandidateProfile::new("Ada Lovelace"),
            Arc::new(BrokenEvaluator),
        );
        seq.initialize().unwrap();
        let record = seq
            .submit_answer("a detailed answer text that runs past fifty characters easily")
            .await
            .unwrap();
        assert_eq!(record.score, 0.7);
        assert!(record.detail.is_none());
        assert_eq!(record.strengths, vec!["Provided a response".to_string()]);
    }

    #[tokio::test]
    async fn test_advance_after_completion_is_rejected() {
        let mut seq = sequencer();
        run_to_completion(&mut seq).await;
        assert!(matches!(seq.advance(), Err(EngineError::NotActive)));
    }

    #[tokio::test]
    async fn test_progress_tracks_completion() {
        let mut seq = sequencer();
        seq.initialize().unwrap();
        assert_eq!(seq.progress().current_question, 1);
        assert_eq!(seq.progress().completed_questions, 0);

        seq.submit_answer("an answer").await.unwrap();
        seq.advance().unwrap();
        let progress = seq.progress();
        assert_eq!(progress.current_question, 2);
        assert_eq!(progress.completed_questions, 1);
        assert_eq!(progress.total_questions, TOTAL_QUESTIONS);
    }

    #[tokio::test]
    async fn test_final_summary_requires_completion() {
        let mut seq = sequencer();
        seq.initialize().unwrap();
        assert!(matches!(
            seq.final_summary(),
            Err(EngineError::NotComplete)
        ));
    }

    #[tokio::test]
    async fn test_final_summary_is_idempotent() {
        let mut seq = sequencer();
        run_to_completion(&mut seq).await;

        let first = seq.final_summary().unwrap();
        let second = seq.final_summary().unwrap();
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_restore_resumes_mid_interview() {
        let mut seq = sequencer();
        seq.initialize().unwrap();
        seq.submit_answer("answer one").await.unwrap();
        seq.advance().unwrap();
        let saved = seq.state().clone();

        let mut restored = InterviewSequencer::restore(
            CandidateProfile::new("Ada Lovelace"),
            Arc::new(HeuristicEvaluator),
            saved,
        );
        assert_eq!(restored.state().current_question_index, 1);
        restored.submit_answer("answer two").await.unwrap();
        assert_eq!(restored.state().answers.len(), 2);
    }
}
