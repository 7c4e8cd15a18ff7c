//! The quiz evaluator facade.
//!
//! Wraps an [`EvaluationContext`] with the default exact-match strategy and
//! provides the JSON answer-list parsers used at the command-line boundary.

use crate::context::EvaluationContext;
use crate::error::EvaluationError;
use crate::report::ScoreReport;
use crate::strategy::{EvaluationStrategy, EvaluatorFactory};
use crate::{AnswerSequence, Score};

/// Convenience entry point for scoring quizzes.
#[derive(Debug)]
pub struct QuizEvaluator {
    context: EvaluationContext,
}

impl QuizEvaluator {
    /// Create an evaluator using the exact-match strategy.
    pub fn new() -> Self {
        Self::with_strategy(EvaluatorFactory::create_exact_match())
    }

    /// Create an evaluator using a custom strategy.
    pub fn with_strategy(strategy: Box<dyn EvaluationStrategy>) -> Self {
        Self {
            context: EvaluationContext::new(strategy),
        }
    }

    /// Replace the active strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn EvaluationStrategy>) {
        self.context.set_strategy(strategy);
    }

    /// Name of the active strategy.
    pub fn strategy_name(&self) -> Option<&str> {
        self.context.strategy_name()
    }

    /// Score `user_answers` against `correct_answers`.
    pub fn calculate_score(
        &self,
        user_answers: &[String],
        correct_answers: &[String],
    ) -> Result<Score, EvaluationError> {
        self.context.calculate_score(user_answers, correct_answers)
    }

    /// Score and produce per-question verdicts.
    pub fn report(
        &self,
        user_answers: &[String],
        correct_answers: &[String],
    ) -> Result<ScoreReport, EvaluationError> {
        let strategy = self.context.strategy()?;
        Ok(ScoreReport::build(strategy, user_answers, correct_answers))
    }

    /// Parse a JSON array of strings, reporting malformed input as an error.
    pub fn try_parse_answer_list(serialized: &str) -> Result<AnswerSequence, EvaluationError> {
        Ok(serde_json::from_str::<AnswerSequence>(serialized)?)
    }

    /// Parse a JSON array of strings, degrading malformed input to no answers.
    ///
    /// Anything that is not a JSON array of strings is logged at `warn` and
    /// yields an empty sequence. Callers cannot tell this apart from a
    /// legitimately empty submission; use [`Self::try_parse_answer_list`]
    /// when the difference matters.
    pub fn parse_answer_list(serialized: &str) -> AnswerSequence {
        match Self::try_parse_answer_list(serialized) {
            Ok(answers) => answers,
            Err(e) => {
                tracing::warn!("treating answer list as empty: {e}");
                Vec::new()
            }
        }
    }
}

impl Default for QuizEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
