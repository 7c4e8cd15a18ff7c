//! Evaluation error types.
//!
//! Parse failures are usually swallowed by
//! [`QuizEvaluator::parse_answer_list`](crate::QuizEvaluator::parse_answer_list);
//! the strict parser and the context surface them through this type.

use thiserror::Error;

/// Errors that can occur while preparing or scoring answers.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// Scoring was requested on a context with no active strategy.
    #[error("evaluation strategy not set")]
    StrategyNotSet,

    /// An answer list was not a JSON array of strings.
    #[error("failed to parse answer list: {message}")]
    Parse { message: String },

    /// A strategy name did not match any known strategy.
    #[error("unknown evaluation strategy: {0}")]
    UnknownStrategy(String),
}

impl EvaluationError {
    /// Returns `true` for errors that come from misusing the context API
    /// rather than from bad input.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EvaluationError::StrategyNotSet | EvaluationError::UnknownStrategy(_)
        )
    }
}

impl From<serde_json::Error> for EvaluationError {
    fn from(err: serde_json::Error) -> Self {
        EvaluationError::Parse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_classified() {
        assert!(EvaluationError::StrategyNotSet.is_configuration());
        assert!(EvaluationError::UnknownStrategy("fuzzy".into()).is_configuration());
        assert!(!EvaluationError::Parse {
            message: "eof".into()
        }
        .is_configuration());
    }

    #[test]
    fn parse_error_keeps_serde_message() {
        let err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err = EvaluationError::from(err);
        assert!(err.to_string().starts_with("failed to parse answer list:"));
    }
}
