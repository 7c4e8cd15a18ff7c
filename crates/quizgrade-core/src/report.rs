//! Per-question score reports.

use serde::{Deserialize, Serialize};

use crate::strategy::EvaluationStrategy;
use crate::Score;

/// Outcome for one reference position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerVerdict {
    /// Zero-based question position.
    pub index: usize,
    /// The user's answer, or `None` if the user submitted fewer answers.
    pub given: Option<String>,
    /// The reference answer.
    pub expected: String,
    /// Whether the strategy credited this position.
    pub correct: bool,
}

/// A scored quiz with per-question verdicts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Name of the strategy that produced the score.
    pub strategy: String,
    /// The strategy's score over the whole sequences.
    pub score: Score,
    /// Number of reference answers.
    pub total: usize,
    /// `score / total` as a percentage; 0 when there are no reference answers.
    pub percentage: f64,
    /// One verdict per reference answer.
    pub verdicts: Vec<AnswerVerdict>,
}

impl ScoreReport {
    /// Score `user_answers` against `correct_answers` with `strategy`.
    ///
    /// `score` always comes from [`EvaluationStrategy::evaluate`]; the
    /// verdicts use [`EvaluationStrategy::answers_match`] per position.
    pub fn build(
        strategy: &dyn EvaluationStrategy,
        user_answers: &[String],
        correct_answers: &[String],
    ) -> Self {
        let score = strategy.evaluate(user_answers, correct_answers);
        let total = correct_answers.len();

        let verdicts = correct_answers
            .iter()
            .enumerate()
            .map(|(index, expected)| {
                let given = user_answers.get(index).cloned();
                let correct = given
                    .as_deref()
                    .is_some_and(|g| strategy.answers_match(g, expected));
                AnswerVerdict {
                    index,
                    given,
                    expected: expected.clone(),
                    correct,
                }
            })
            .collect();

        let percentage = if total == 0 {
            0.0
        } else {
            score as f64 / total as f64 * 100.0
        };

        Self {
            strategy: strategy.name().to_string(),
            score,
            total,
            percentage,
            verdicts,
        }
    }

    /// Number of reference positions the user left unanswered.
    pub fn unanswered(&self) -> usize {
        self.verdicts.iter().filter(|v| v.given.is_none()).count()
    }

    /// One-line summary such as `2/3 (66.7%)`.
    pub fn summary_line(&self) -> String {
        format!("{}/{} ({:.1}%)", self.score, self.total, self.percentage)
    }
}
