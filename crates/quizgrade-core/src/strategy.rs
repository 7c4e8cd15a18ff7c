//! Scoring strategies.
//!
//! A strategy turns two positional answer sequences into a [`Score`]. New
//! strategies implement [`EvaluationStrategy`] and can be handed to an
//! [`EvaluationContext`](crate::EvaluationContext) without touching callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::normalize::answers_equivalent;
use crate::Score;

// ---------------------------------------------------------------------------
// Strategy trait
// ---------------------------------------------------------------------------

/// Trait for swappable scoring policies.
pub trait EvaluationStrategy: Send + Sync {
    /// Short strategy name (e.g. "exact").
    fn name(&self) -> &str;

    /// Score `user_answers` against `correct_answers`.
    ///
    /// The result must lie in `[0, min(user_answers.len(), correct_answers.len())]`.
    fn evaluate(&self, user_answers: &[String], correct_answers: &[String]) -> Score;

    /// Whether a single given answer earns credit against the expected one.
    ///
    /// Used for per-question verdicts. The default scores the pair as a
    /// one-question quiz.
    fn answers_match(&self, given: &str, expected: &str) -> bool {
        self.evaluate(&[given.to_owned()], &[expected.to_owned()]) > 0
    }
}

impl fmt::Debug for dyn EvaluationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationStrategy")
            .field("name", &self.name())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Exact match
// ---------------------------------------------------------------------------

/// Credits a position when both answers normalize to the same string.
///
/// Only the overlapping prefix is scored; trailing answers on the longer
/// side are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchEvaluator;

impl EvaluationStrategy for ExactMatchEvaluator {
    fn name(&self) -> &str {
        "exact"
    }

    fn evaluate(&self, user_answers: &[String], correct_answers: &[String]) -> Score {
        user_answers
            .iter()
            .zip(correct_answers)
            .filter(|(given, expected)| self.answers_match(given, expected))
            .count()
    }

    fn answers_match(&self, given: &str, expected: &str) -> bool {
        answers_equivalent(given, expected)
    }
}

// ---------------------------------------------------------------------------
// Strategy selection
// ---------------------------------------------------------------------------

/// Built-in strategies selectable by name from config or the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    #[serde(alias = "exact-match", alias = "exact_match")]
    Exact,
}

impl StrategyKind {
    /// Instantiate the strategy this kind names.
    pub fn create(self) -> Box<dyn EvaluationStrategy> {
        match self {
            StrategyKind::Exact => Box::new(ExactMatchEvaluator),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Exact => write!(f, "exact"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" | "exact-match" | "exact_match" => Ok(StrategyKind::Exact),
            other => Err(EvaluationError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Factory for boxed strategies.
pub struct EvaluatorFactory;

impl EvaluatorFactory {
    /// The default exact-match strategy.
    pub fn create_exact_match() -> Box<dyn EvaluationStrategy> {
        Box::new(ExactMatchEvaluator)
    }

    /// Create a strategy by kind.
    pub fn create(kind: StrategyKind) -> Box<dyn EvaluationStrategy> {
        kind.create()
    }
}
