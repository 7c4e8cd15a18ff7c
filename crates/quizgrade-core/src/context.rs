//! The evaluation context: single owner of the active strategy.

use crate::error::EvaluationError;
use crate::strategy::{EvaluationStrategy, ExactMatchEvaluator};
use crate::Score;

/// Holds one active [`EvaluationStrategy`] and delegates scoring to it.
///
/// Replacing the strategy requires `&mut self`, so a context shared across
/// threads behind `&` can score concurrently but never swap strategies
/// mid-evaluation. Wrap it in a lock if replacement must happen while shared.
#[derive(Debug)]
pub struct EvaluationContext {
    strategy: Option<Box<dyn EvaluationStrategy>>,
}

impl EvaluationContext {
    /// Create a context using the given strategy.
    pub fn new(strategy: Box<dyn EvaluationStrategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// Create a context with no strategy. Scoring fails until one is set.
    pub fn unconfigured() -> Self {
        Self { strategy: None }
    }

    /// Replace the active strategy, dropping the previous one.
    pub fn set_strategy(&mut self, strategy: Box<dyn EvaluationStrategy>) {
        tracing::debug!(
            from = self.strategy_name().unwrap_or("<none>"),
            to = strategy.name(),
            "replacing evaluation strategy"
        );
        self.strategy = Some(strategy);
    }

    /// Name of the active strategy, if any.
    pub fn strategy_name(&self) -> Option<&str> {
        self.strategy.as_deref().map(|s| s.name())
    }

    /// Borrow the active strategy.
    pub fn strategy(&self) -> Result<&dyn EvaluationStrategy, EvaluationError> {
        self.strategy
            .as_deref()
            .ok_or(EvaluationError::StrategyNotSet)
    }

    /// Score `user_answers` against `correct_answers` with the active strategy.
    pub fn calculate_score(
        &self,
        user_answers: &[String],
        correct_answers: &[String],
    ) -> Result<Score, EvaluationError> {
        let strategy = self.strategy()?;
        let score = strategy.evaluate(user_answers, correct_answers);
        tracing::debug!(
            strategy = strategy.name(),
            user = user_answers.len(),
            correct = correct_answers.len(),
            score,
            "scored answers"
        );
        Ok(score)
    }
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::new(Box::new(ExactMatchEvaluator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// Credits every overlapping position regardless of content.
    struct Lenient;

    impl EvaluationStrategy for Lenient {
        fn name(&self) -> &str {
            "lenient"
        }

        fn evaluate(&self, user_answers: &[String], correct_answers: &[String]) -> Score {
            user_answers.len().min(correct_answers.len())
        }
    }

    #[test]
    fn default_uses_exact_match() {
        let ctx = EvaluationContext::default();
        assert_eq!(ctx.strategy_name(), Some("exact"));
        let score = ctx
            .calculate_score(&answers(&["A", "B", "C"]), &answers(&["A", "B", "D"]))
            .unwrap();
        assert_eq!(score, 2);
    }

    #[test]
    fn set_strategy_applies_to_later_calls() {
        let mut ctx = EvaluationContext::default();
        let user = answers(&["x", "y"]);
        let correct = answers(&["A", "B"]);
        assert_eq!(ctx.calculate_score(&user, &correct).unwrap(), 0);

        ctx.set_strategy(Box::new(Lenient));
        assert_eq!(ctx.strategy_name(), Some("lenient"));
        assert_eq!(ctx.calculate_score(&user, &correct).unwrap(), 2);
    }

    #[test]
    fn unconfigured_context_fails() {
        let ctx = EvaluationContext::unconfigured();
        let err = ctx.calculate_score(&[], &[]).unwrap_err();
        assert!(matches!(err, EvaluationError::StrategyNotSet));
        assert!(err.is_configuration());
    }

    #[test]
    fn unconfigured_context_recovers_after_set_strategy() {
        let mut ctx = EvaluationContext::unconfigured();
        assert!(ctx.strategy_name().is_none());
        assert!(ctx.calculate_score(&answers(&["A"]), &answers(&["A"])).is_err());

        ctx.set_strategy(Box::new(ExactMatchEvaluator));
        assert_eq!(ctx.strategy_name(), Some("exact"));
        assert_eq!(
            ctx.calculate_score(&answers(&["A"]), &answers(&["a"])).unwrap(),
            1
        );
    }

    #[test]
    fn shared_context_scores_across_threads() {
        let ctx = EvaluationContext::default();
        let user = answers(&["A", "B", "C"]);
        let correct = answers(&["a", "b", "x"]);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| ctx.calculate_score(&user, &correct).unwrap()))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), 2);
            }
        });
    }
}
