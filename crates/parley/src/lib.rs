//! Parley — an interview progression engine.
//!
//! The crate owns the interview state machine (six questions, two per
//! difficulty tier), the tiered question bank, the heuristic answer
//! evaluator, and the session layer that mirrors state into a key-value
//! store so an interrupted interview can be resumed. Resume-document text
//! and contact extraction live here too, so a host only has to render.
//!
//! Everything is consumed in-process: there is no server, no CLI, and no
//! wire protocol. A host (desktop shell, web front-end, test harness)
//! constructs an [`session::InterviewSession`] and forwards user actions
//! and timer ticks to it.

pub mod config;
pub mod errors;
pub mod evaluation;
pub mod extraction;
pub mod interview;
pub mod models;
pub mod roster;
pub mod session;
pub mod telemetry;

pub use errors::EngineError;
pub use evaluation::{AnswerEvaluator, HeuristicEvaluator};
pub use interview::sequencer::InterviewSequencer;
pub use models::question::Tier;
pub use session::InterviewSession;
