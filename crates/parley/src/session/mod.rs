//! Interview Session — the facade a host drives.
//!
//! Owns one sequencer, its countdown, and a handle to the state store. Every
//! mutation is mirrored into the store so a restarted host can offer to
//! resume an interrupted interview (or start fresh and discard the saved
//! one). User submissions and timer ticks are mutually exclusive per
//! question: whichever reaches the sequencer first wins, the other is a
//! no-op.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::EngineError;
use crate::evaluation::AnswerEvaluator;
use crate::interview::sequencer::{InterviewSequencer, InterviewState, Progress};
use crate::interview::summary::FinalSummary;
use crate::interview::timer::{Countdown, Tick};
use crate::models::answer::AnswerRecord;
use crate::models::candidate::CandidateProfile;
use crate::models::question::Question;

pub mod store;

pub use store::{JsonFileStore, MemoryStore, StateStore};

/// Store key under which the session mirrors its state.
pub const SESSION_KEY: &str = "interview";

/// The persisted shadow of a session. Not a source of truth for business
/// rules — just enough to rebuild the sequencer after a restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub profile: CandidateProfile,
    pub state: InterviewState,
}

/// What a completed submit or auto-submit hands back to the host.
#[derive(Debug, Clone)]
pub struct SessionTurn {
    pub record: AnswerRecord,
    pub next_question: Option<Question>,
    /// Present exactly when the turn completed the interview.
    pub summary: Option<FinalSummary>,
}

/// Outcome of a timer tick.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    Running { remaining: u32 },
    AutoSubmitted(SessionTurn),
    Idle,
}

pub struct InterviewSession {
    id: Uuid,
    sequencer: InterviewSequencer,
    countdown: Countdown,
    store: Arc<dyn StateStore>,
}

impl InterviewSession {
    /// Starts a fresh interview and mirrors its initial state.
    pub async fn begin(
        profile: CandidateProfile,
        evaluator: Arc<dyn AnswerEvaluator>,
        store: Arc<dyn StateStore>,
    ) -> Result<Self, EngineError> {
        let mut sequencer = InterviewSequencer::new(profile, evaluator);
        let first = sequencer.initialize()?;
        let countdown = Countdown::new(first.time_limit_seconds);

        let session = InterviewSession {
            id: Uuid::new_v4(),
            sequencer,
            countdown,
            store,
        };
        session.persist().await;
        Ok(session)
    }

    /// Loads the saved snapshot, if it describes an interview worth
    /// resuming (started but not complete). The host turns this into a
    /// resume-or-start-fresh choice.
    pub async fn saved_session(
        store: &dyn StateStore,
    ) -> Result<Option<SessionSnapshot>, EngineError> {
        let Some(value) = store.load(SESSION_KEY).await? else {
            return Ok(None);
        };
        let snapshot: SessionSnapshot =
            serde_json::from_value(value).map_err(|e| EngineError::Storage(e.to_string()))?;

        let resumable = !snapshot.state.is_complete && !snapshot.state.questions.is_empty();
        Ok(resumable.then_some(snapshot))
    }

    /// Continues a previously saved interview. The countdown restarts at the
    /// outstanding question's full limit.
    pub fn resume(
        snapshot: SessionSnapshot,
        evaluator: Arc<dyn AnswerEvaluator>,
        store: Arc<dyn StateStore>,
    ) -> Self {
        let limit = snapshot
            .state
            .questions
            .get(snapshot.state.current_question_index)
            .map(|q| q.time_limit_seconds)
            .unwrap_or(0);

        info!(session = %snapshot.session_id, "resuming saved interview");
        InterviewSession {
            id: snapshot.session_id,
            sequencer: InterviewSequencer::restore(snapshot.profile, evaluator, snapshot.state),
            countdown: Countdown::new(limit),
            store,
        }
    }

    /// Drops any saved session (the start-fresh branch of the offer).
    pub async fn discard_saved(store: &dyn StateStore) -> Result<(), EngineError> {
        store.remove(SESSION_KEY).await
    }

    /// Submits the candidate's typed answer and advances to the next
    /// question (or to completion). Empty submissions are rejected before
    /// they reach the sequencer.
    pub async fn submit_answer(&mut self, answer: &str) -> Result<SessionTurn, EngineError> {
        if answer.trim().is_empty() {
            return Err(EngineError::Validation(
                "Please provide an answer before submitting".to_string(),
            ));
        }

        let record = self.sequencer.submit_answer(answer).await?.clone();
        let turn = self.advance_turn(record)?;
        self.persist().await;
        Ok(turn)
    }

    /// Advances the countdown by one second, auto-submitting when it expires.
    pub async fn tick(&mut self) -> Result<SessionEvent, EngineError> {
        match self.countdown.tick() {
            Tick::Running { remaining } => Ok(SessionEvent::Running { remaining }),
            Tick::Idle => Ok(SessionEvent::Idle),
            Tick::Expired => {
                let Some(record) = self
                    .sequencer
                    .auto_submit_on_timeout(self.countdown.remaining())
                    .await?
                    .cloned()
                else {
                    return Ok(SessionEvent::Idle);
                };
                let turn = self.advance_turn(record)?;
                self.persist().await;
                Ok(SessionEvent::AutoSubmitted(turn))
            }
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.sequencer
            .state()
            .questions
            .get(self.sequencer.state().current_question_index)
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn progress(&self) -> Progress {
        self.sequencer.progress()
    }

    pub fn state(&self) -> &InterviewState {
        self.sequencer.state()
    }

    pub fn final_summary(&self) -> Result<FinalSummary, EngineError> {
        self.sequencer.final_summary()
    }

    /// Shared tail of submit and auto-submit: advance, re-arm the countdown,
    /// and surface the summary when the interview just completed.
    fn advance_turn(&mut self, record: AnswerRecord) -> Result<SessionTurn, EngineError> {
        let next_question = self.sequencer.advance()?.cloned();

        match &next_question {
            Some(question) => self.countdown.reset(question.time_limit_seconds),
            None => self.countdown.reset(0),
        }

        let summary = if self.sequencer.state().is_complete {
            Some(self.sequencer.final_summary()?)
        } else {
            None
        };

        Ok(SessionTurn {
            record,
            next_question,
            summary,
        })
    }

    /// Mirrors state into the store. The mirror is not a source of truth, so
    /// a write failure is logged and swallowed rather than failing the
    /// mutation that triggered it.
    async fn persist(&self) {
        let snapshot = SessionSnapshot {
            session_id: self.id,
            profile: self.sequencer.profile().clone(),
            state: self.sequencer.state().clone(),
        };
        let value = match serde_json::to_value(&snapshot) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "failed to serialize session snapshot");
                return;
            }
        };
        if let Err(error) = self.store.save(SESSION_KEY, value).await {
            warn!(%error, "failed to mirror session state");
        }
    }
}
