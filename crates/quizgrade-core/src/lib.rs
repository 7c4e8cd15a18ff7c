//! quizgrade-core: answer normalization, scoring strategies, and reports.
//!
//! This crate defines the scoring contract that the quizgrade CLI builds on:
//! a normalizer, a pluggable [`strategy::EvaluationStrategy`], the
//! [`context::EvaluationContext`] that owns the active strategy, and the
//! [`evaluator::QuizEvaluator`] facade.

pub mod config;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod normalize;
pub mod report;
pub mod strategy;

pub use config::{load_config, load_config_from, QuizgradeConfig};
pub use context::EvaluationContext;
pub use error::EvaluationError;
pub use evaluator::QuizEvaluator;
pub use normalize::normalize;
pub use report::{AnswerVerdict, ScoreReport};
pub use strategy::{EvaluationStrategy, EvaluatorFactory, ExactMatchEvaluator, StrategyKind};

/// A single free-text answer.
pub type Answer = String;

/// Ordered answers; position `i` is only ever compared with position `i`.
pub type AnswerSequence = Vec<Answer>;

/// Number of positions whose normalized answers agree.
pub type Score = usize;
