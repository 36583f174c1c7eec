//! Answer Evaluation — pluggable, trait-based scoring of free-text answers.
//!
//! Default: [`HeuristicEvaluator`] (pure-Rust, deterministic, fully testable).
//! The trait is the seam where a model-backed evaluator would plug in without
//! touching the sequencer; the sequencer holds an `Arc<dyn AnswerEvaluator>`.
//!
//! Evaluation failure is never fatal to an interview: the sequencer
//! downgrades any error from this trait to [`heuristics::fallback_evaluation`].

use async_trait::async_trait;

use crate::errors::EngineError;
use crate::models::answer::Evaluation;
use crate::models::question::Tier;

pub mod feedback;
pub mod heuristics;
pub mod keywords;

pub use heuristics::{evaluate_answer, fallback_evaluation};

/// The answer scorer trait. Implement this to swap backends without touching
/// the sequencer or session code.
///
/// Calls may be slow (a real backend would be remote); at most one evaluation
/// is outstanding at a time in the single-question interview model.
#[async_trait]
pub trait AnswerEvaluator: Send + Sync {
    async fn evaluate(
        &self,
        question: &str,
        answer: &str,
        tier: Tier,
    ) -> Result<Evaluation, EngineError>;
}

/// Default keyword/length/structure evaluator. No external dependencies.
pub struct HeuristicEvaluator;

#[async_trait]
impl AnswerEvaluator for HeuristicEvaluator {
    async fn evaluate(
        &self,
        question: &str,
        answer: &str,
        tier: Tier,
    ) -> Result<Evaluation, EngineError> {
        Ok(evaluate_answer(question, answer, tier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_heuristic_evaluator_never_errors() {
        let evaluator = HeuristicEvaluator;
        let result = evaluator
            .evaluate("What are props in React?", "", Tier::Easy)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_trait_object_usable_through_arc() {
        let evaluator: std::sync::Arc<dyn AnswerEvaluator> = std::sync::Arc::new(HeuristicEvaluator);
        let eval = evaluator
            .evaluate(
                "Explain what closures are in JavaScript.",
                "A closure captures its lexical scope.",
                Tier::Easy,
            )
            .await
            .unwrap();
        assert!(eval.score > 0.0);
    }
}
